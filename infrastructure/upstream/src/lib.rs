pub mod cart;
pub mod client;
pub mod product_catalog;
