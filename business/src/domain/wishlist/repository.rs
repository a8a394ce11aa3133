use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::UserId;

use super::model::{Wishlist, WishlistItem};
use super::value_objects::ProductId;

/// Result of a conditional insert.
#[derive(Debug, Clone)]
pub enum AddItemOutcome {
    Added(Wishlist),
    /// An item with the same product id was already present; nothing was written.
    Duplicate,
}

/// Storage port for per-user wishlists.
///
/// Implementations must make `add_item` atomic with respect to the duplicate
/// check: two concurrent inserts of the same product id yield exactly one `Added`.
#[async_trait]
pub trait WishlistRepository: Send + Sync {
    async fn get_or_create(&self, user_id: &UserId) -> Result<Wishlist, RepositoryError>;
    async fn add_item(
        &self,
        user_id: &UserId,
        item: &WishlistItem,
    ) -> Result<AddItemOutcome, RepositoryError>;
    async fn get_item(
        &self,
        user_id: &UserId,
        product_id: &ProductId,
    ) -> Result<Option<WishlistItem>, RepositoryError>;
    /// Returns `None` when the user has no wishlist.
    async fn remove_item(
        &self,
        user_id: &UserId,
        product_id: &ProductId,
    ) -> Result<Option<Wishlist>, RepositoryError>;
    /// Returns `true` if a wishlist existed and was removed.
    async fn delete(&self, user_id: &UserId) -> Result<bool, RepositoryError>;
}
