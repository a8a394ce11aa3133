use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::logger::Logger;
use crate::domain::wishlist::errors::WishlistError;
use crate::domain::wishlist::model::{Wishlist, WishlistItem};
use crate::domain::wishlist::repository::{AddItemOutcome, WishlistRepository};
use crate::domain::wishlist::services::ProductCatalogService;
use crate::domain::wishlist::use_cases::add_item::{
    AddWishlistItemParams, AddWishlistItemUseCase,
};

pub struct AddWishlistItemUseCaseImpl {
    pub repository: Arc<dyn WishlistRepository>,
    pub catalog: Arc<dyn ProductCatalogService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AddWishlistItemUseCase for AddWishlistItemUseCaseImpl {
    async fn execute(&self, params: AddWishlistItemParams) -> Result<Wishlist, WishlistError> {
        let logger = self.logger.as_ref();
        logger.info(&format!(
            "Adding product {} to wishlist of user: {}",
            params.product_id, params.user_id
        ));

        self.repository
            .get_or_create(&params.user_id)
            .await
            .map_err(|e| WishlistError::internal(logger, "Add to wishlist error", e))?;

        let product = self
            .catalog
            .get_product(&params.product_id)
            .await
            .map_err(|e| WishlistError::internal(logger, "Add to wishlist error", e))?
            .ok_or_else(|| {
                logger.warn(&format!("Product not found: {}", params.product_id));
                WishlistError::ProductNotFound
            })?;

        let item = WishlistItem::snapshot(params.product_id.clone(), &product, Utc::now())
            .inspect_err(|_| {
                logger.warn(&format!("Product out of stock: {}", params.product_id));
            })?;

        match self
            .repository
            .add_item(&params.user_id, &item)
            .await
            .map_err(|e| WishlistError::internal(logger, "Add to wishlist error", e))?
        {
            AddItemOutcome::Added(wishlist) => {
                logger.info(&format!(
                    "Product {} added to wishlist of user: {}",
                    params.product_id, params.user_id
                ));
                Ok(wishlist)
            }
            AddItemOutcome::Duplicate => {
                logger.warn(&format!(
                    "Product {} already in wishlist of user: {}",
                    params.product_id, params.user_id
                ));
                Err(WishlistError::DuplicateItem)
            }
        }
    }
}
