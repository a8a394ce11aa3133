use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::wishlist::errors::WishlistError;
use crate::domain::wishlist::model::Wishlist;
use crate::domain::wishlist::repository::WishlistRepository;
use crate::domain::wishlist::use_cases::get::{GetWishlistParams, GetWishlistUseCase};

pub struct GetWishlistUseCaseImpl {
    pub repository: Arc<dyn WishlistRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetWishlistUseCase for GetWishlistUseCaseImpl {
    async fn execute(&self, params: GetWishlistParams) -> Result<Wishlist, WishlistError> {
        self.logger
            .info(&format!("Getting wishlist for user: {}", params.user_id));

        // Unknown users get an empty wishlist created on the spot
        let wishlist = self
            .repository
            .get_or_create(&params.user_id)
            .await
            .map_err(|e| {
                WishlistError::internal(self.logger.as_ref(), "Error fetching wishlist", e)
            })?;

        self.logger.info(&format!(
            "Retrieved wishlist with {} items for user: {}",
            wishlist.len(),
            params.user_id
        ));
        Ok(wishlist)
    }
}
