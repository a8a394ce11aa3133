use async_trait::async_trait;

use super::value_objects::{CartSource, ProductId};
use crate::domain::errors::UpstreamError;
use crate::domain::shared::value_objects::UserId;

/// Product details as returned by the catalog service.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogProduct {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub image: String,
    /// Units on hand; the catalog may report negative values for oversold products.
    pub stock: i64,
}

/// Answer of a catalog stock check.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StockCheck {
    pub in_stock: bool,
}

/// Service port for the product catalog.
#[async_trait]
pub trait ProductCatalogService: Send + Sync {
    /// Returns `None` when the catalog does not know the product.
    async fn get_product(
        &self,
        product_id: &ProductId,
    ) -> Result<Option<CatalogProduct>, UpstreamError>;

    async fn check_stock(
        &self,
        product_id: &ProductId,
        quantity: u32,
    ) -> Result<StockCheck, UpstreamError>;
}

/// Line the cart service is asked to add.
#[derive(Debug, Clone, PartialEq)]
pub struct CartAdditionRequest {
    pub user_id: UserId,
    pub product_id: ProductId,
    pub price: f64,
    pub source: CartSource,
}

/// Answer of the cart service.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CartAddition {
    pub success: bool,
}

/// Service port for the cart.
#[async_trait]
pub trait CartService: Send + Sync {
    async fn add_to_cart(&self, request: CartAdditionRequest)
    -> Result<CartAddition, UpstreamError>;
}
