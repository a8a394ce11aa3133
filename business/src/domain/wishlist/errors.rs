use std::fmt::Display;

use crate::domain::logger::Logger;

#[derive(Debug, thiserror::Error)]
pub enum WishlistError {
    #[error("wishlist.invalid_user_id")]
    InvalidUserId,
    #[error("wishlist.invalid_product_id")]
    InvalidProductId,
    /// The request could not be decoded at all (missing fields, malformed JSON).
    #[error("wishlist.invalid_request")]
    InvalidRequest,
    #[error("wishlist.not_found")]
    NotFound,
    #[error("wishlist.item_not_found")]
    ItemNotFound,
    #[error("wishlist.product_not_found")]
    ProductNotFound,
    #[error("wishlist.duplicate_item")]
    DuplicateItem,
    #[error("wishlist.product_out_of_stock")]
    ProductOutOfStock,
    #[error("wishlist.upstream_unavailable")]
    UpstreamUnavailable,
    #[error("wishlist.internal")]
    Internal,
}

impl WishlistError {
    /// Logs an unexpected failure with its context and collapses it into `Internal`.
    ///
    /// The cause never leaves the use case; callers only see `wishlist.internal`.
    pub fn internal(logger: &dyn Logger, context: &str, cause: impl Display) -> Self {
        logger.error(&format!("{}: {}", context, cause));
        WishlistError::Internal
    }
}
