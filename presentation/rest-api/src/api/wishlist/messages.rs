//! Messages returned in the `message` field of wishlist responses.

pub const WISHLIST_RETRIEVED: &str = "Wishlist retrieved successfully";
pub const ITEM_ADDED_TO_WISHLIST: &str = "Item added to wishlist successfully";
pub const ITEM_REMOVED_FROM_WISHLIST: &str = "Item removed from wishlist successfully";
pub const ITEM_MOVED_TO_CART: &str = "Item moved to cart successfully";
pub const WISHLIST_CLEARED: &str = "Wishlist cleared successfully";

pub const VALIDATION_ERROR: &str = "Validation failed";
pub const INTERNAL_SERVER_ERROR: &str = "Internal server error occurred";
pub const WISHLIST_NOT_FOUND: &str = "Wishlist not found";
pub const PRODUCT_NOT_FOUND: &str = "Product not found";
pub const ITEM_NOT_IN_WISHLIST: &str = "Item not found in wishlist";
pub const PRODUCT_OUT_OF_STOCK: &str = "Product is out of stock";
pub const UPSTREAM_SERVICE_ERROR: &str = "Upstream service error";
pub const DUPLICATE_ITEM: &str = "Item already exists in wishlist";
