use async_trait::async_trait;

use crate::domain::shared::value_objects::UserId;
use crate::domain::wishlist::errors::WishlistError;
use crate::domain::wishlist::model::Wishlist;
use crate::domain::wishlist::value_objects::ProductId;

pub struct RemoveWishlistItemParams {
    pub user_id: UserId,
    pub product_id: ProductId,
}

#[async_trait]
pub trait RemoveWishlistItemUseCase: Send + Sync {
    async fn execute(&self, params: RemoveWishlistItemParams) -> Result<Wishlist, WishlistError>;
}
