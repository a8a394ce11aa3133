use chrono::{DateTime, Utc};
use poem::http::StatusCode;
use poem_openapi::Object;

use business::domain::shared::value_objects::UserId;
use business::domain::wishlist::errors::WishlistError;
use business::domain::wishlist::model::{Wishlist, WishlistItem};
use business::domain::wishlist::use_cases::move_to_cart::MoveToCartOutcome;
use business::domain::wishlist::value_objects::{ProductId, parse_user_id};

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct WishlistItemRequest {
    /// Owner of the wishlist
    pub user_id: String,
    /// Catalog product identifier
    pub product_id: String,
}

impl WishlistItemRequest {
    /// Validates both identifiers before anything reaches the use cases.
    pub fn into_ids(self) -> Result<(UserId, ProductId), WishlistError> {
        let user_id = parse_user_id(self.user_id)?;
        let product_id = ProductId::parse(self.product_id)?;
        Ok((user_id, product_id))
    }
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct ClearWishlistRequest {
    /// Owner of the wishlist
    pub user_id: String,
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct WishlistItemResponse {
    pub product_id: String,
    pub name: String,
    pub description: String,
    /// Price when the item was saved
    pub price: f64,
    pub image: String,
    /// Stock when the item was saved
    pub stock: u32,
    pub added_at: DateTime<Utc>,
}

impl From<WishlistItem> for WishlistItemResponse {
    fn from(item: WishlistItem) -> Self {
        Self {
            product_id: item.product_id.to_string(),
            name: item.name,
            description: item.description,
            price: item.price,
            image: item.image,
            stock: item.stock,
            added_at: item.added_at,
        }
    }
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct WishlistResponse {
    pub user_id: String,
    /// Items in the order they were added
    pub items: Vec<WishlistItemResponse>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Wishlist> for WishlistResponse {
    fn from(wishlist: Wishlist) -> Self {
        Self {
            user_id: wishlist.user_id.to_string(),
            items: wishlist.items.into_iter().map(|i| i.into()).collect(),
            created_at: wishlist.created_at,
            updated_at: wishlist.updated_at,
        }
    }
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct MoveToCartResponse {
    pub moved: bool,
    pub cart_added: bool,
}

impl From<MoveToCartOutcome> for MoveToCartResponse {
    fn from(outcome: MoveToCartOutcome) -> Self {
        Self {
            moved: outcome.moved,
            cart_added: outcome.cart_added,
        }
    }
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct WishlistEnvelope {
    pub success: bool,
    pub message: String,
    pub data: WishlistResponse,
    pub status_code: u16,
}

impl WishlistEnvelope {
    pub fn ok(message: &str, wishlist: Wishlist) -> Self {
        Self {
            success: true,
            message: message.to_string(),
            data: wishlist.into(),
            status_code: StatusCode::OK.as_u16(),
        }
    }
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct MoveToCartEnvelope {
    pub success: bool,
    pub message: String,
    pub data: MoveToCartResponse,
    pub status_code: u16,
}

impl MoveToCartEnvelope {
    pub fn ok(message: &str, outcome: MoveToCartOutcome) -> Self {
        Self {
            success: true,
            message: message.to_string(),
            data: outcome.into(),
            status_code: StatusCode::OK.as_u16(),
        }
    }
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct ClearWishlistEnvelope {
    pub success: bool,
    pub message: String,
    /// True when a wishlist was deleted
    pub data: bool,
    pub status_code: u16,
}

impl ClearWishlistEnvelope {
    pub fn ok(message: &str, deleted: bool) -> Self {
        Self {
            success: true,
            message: message.to_string(),
            data: deleted,
            status_code: StatusCode::OK.as_u16(),
        }
    }
}
