use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::wishlist::errors::WishlistError;
use crate::domain::wishlist::model::Wishlist;
use crate::domain::wishlist::repository::WishlistRepository;
use crate::domain::wishlist::use_cases::remove_item::{
    RemoveWishlistItemParams, RemoveWishlistItemUseCase,
};

pub struct RemoveWishlistItemUseCaseImpl {
    pub repository: Arc<dyn WishlistRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RemoveWishlistItemUseCase for RemoveWishlistItemUseCaseImpl {
    async fn execute(&self, params: RemoveWishlistItemParams) -> Result<Wishlist, WishlistError> {
        let logger = self.logger.as_ref();
        logger.info(&format!(
            "Removing product {} from wishlist of user: {}",
            params.product_id, params.user_id
        ));

        // Verify it exists
        self.repository
            .get_item(&params.user_id, &params.product_id)
            .await
            .map_err(|e| WishlistError::internal(logger, "Remove from wishlist error", e))?
            .ok_or(WishlistError::ItemNotFound)?;

        let wishlist = self
            .repository
            .remove_item(&params.user_id, &params.product_id)
            .await
            .map_err(|e| WishlistError::internal(logger, "Remove from wishlist error", e))?
            .ok_or(WishlistError::NotFound)?;

        logger.info(&format!(
            "Product {} removed from wishlist of user: {}",
            params.product_id, params.user_id
        ));
        Ok(wishlist)
    }
}
