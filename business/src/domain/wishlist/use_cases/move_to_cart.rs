use async_trait::async_trait;

use crate::domain::shared::value_objects::UserId;
use crate::domain::wishlist::errors::WishlistError;
use crate::domain::wishlist::value_objects::ProductId;

pub struct MoveWishlistItemToCartParams {
    pub user_id: UserId,
    pub product_id: ProductId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveToCartOutcome {
    pub moved: bool,
    pub cart_added: bool,
}

#[async_trait]
pub trait MoveWishlistItemToCartUseCase: Send + Sync {
    async fn execute(
        &self,
        params: MoveWishlistItemToCartParams,
    ) -> Result<MoveToCartOutcome, WishlistError>;
}
