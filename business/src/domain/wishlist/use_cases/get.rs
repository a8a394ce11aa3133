use async_trait::async_trait;

use crate::domain::shared::value_objects::UserId;
use crate::domain::wishlist::errors::WishlistError;
use crate::domain::wishlist::model::Wishlist;

pub struct GetWishlistParams {
    pub user_id: UserId,
}

#[async_trait]
pub trait GetWishlistUseCase: Send + Sync {
    async fn execute(&self, params: GetWishlistParams) -> Result<Wishlist, WishlistError>;
}
