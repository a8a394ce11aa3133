use serde::{Deserialize, Serialize};

use super::errors::WishlistError;
use crate::domain::shared::value_objects::UserId;

/// Catalog identifier of a product saved in a wishlist.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductId(String);

impl ProductId {
    /// Parses a raw identifier, rejecting empty or whitespace-only input.
    pub fn parse(raw: impl Into<String>) -> Result<Self, WishlistError> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(WishlistError::InvalidProductId);
        }
        Ok(Self(raw))
    }

    /// Constructor for identifiers already persisted (no validation).
    pub fn from_repository(raw: String) -> Self {
        Self(raw)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Validates a raw user identifier coming from a request.
pub fn parse_user_id(raw: impl Into<String>) -> Result<UserId, WishlistError> {
    let user_id = UserId::new(raw);
    if user_id.is_blank() {
        return Err(WishlistError::InvalidUserId);
    }
    Ok(user_id)
}

/// Tag sent to the cart service describing where an item came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CartSource {
    Wishlist,
}

impl std::fmt::Display for CartSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CartSource::Wishlist => write!(f, "wishlist"),
        }
    }
}

impl std::str::FromStr for CartSource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "wishlist" => Ok(CartSource::Wishlist),
            _ => Err(format!("Invalid cart source: {}", s)),
        }
    }
}
