use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::wishlist::errors::WishlistError;
use crate::domain::wishlist::repository::WishlistRepository;
use crate::domain::wishlist::use_cases::clear::{ClearWishlistParams, ClearWishlistUseCase};

pub struct ClearWishlistUseCaseImpl {
    pub repository: Arc<dyn WishlistRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ClearWishlistUseCase for ClearWishlistUseCaseImpl {
    async fn execute(&self, params: ClearWishlistParams) -> Result<bool, WishlistError> {
        self.logger
            .info(&format!("Clearing wishlist of user: {}", params.user_id));

        let deleted = self
            .repository
            .delete(&params.user_id)
            .await
            .map_err(|e| {
                WishlistError::internal(self.logger.as_ref(), "Clear wishlist error", e)
            })?;

        if !deleted {
            return Err(WishlistError::NotFound);
        }

        self.logger
            .info(&format!("Wishlist cleared for user: {}", params.user_id));
        Ok(true)
    }
}
