use async_trait::async_trait;

use crate::domain::shared::value_objects::UserId;
use crate::domain::wishlist::errors::WishlistError;

pub struct ClearWishlistParams {
    pub user_id: UserId,
}

#[async_trait]
pub trait ClearWishlistUseCase: Send + Sync {
    async fn execute(&self, params: ClearWishlistParams) -> Result<bool, WishlistError>;
}
