//! Mocks and fixtures shared by the use-case tests.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use mockall::mock;

use crate::domain::errors::{RepositoryError, UpstreamError};
use crate::domain::logger::Logger;
use crate::domain::shared::value_objects::UserId;
use crate::domain::wishlist::model::{Wishlist, WishlistItem};
use crate::domain::wishlist::repository::{AddItemOutcome, WishlistRepository};
use crate::domain::wishlist::services::{
    CartAddition, CartAdditionRequest, CartService, CatalogProduct, ProductCatalogService,
    StockCheck,
};
use crate::domain::wishlist::value_objects::ProductId;

mock! {
    pub WishlistRepo {}

    #[async_trait]
    impl WishlistRepository for WishlistRepo {
        async fn get_or_create(&self, user_id: &UserId) -> Result<Wishlist, RepositoryError>;
        async fn add_item(&self, user_id: &UserId, item: &WishlistItem) -> Result<AddItemOutcome, RepositoryError>;
        async fn get_item(&self, user_id: &UserId, product_id: &ProductId) -> Result<Option<WishlistItem>, RepositoryError>;
        async fn remove_item(&self, user_id: &UserId, product_id: &ProductId) -> Result<Option<Wishlist>, RepositoryError>;
        async fn delete(&self, user_id: &UserId) -> Result<bool, RepositoryError>;
    }
}

mock! {
    pub Catalog {}

    #[async_trait]
    impl ProductCatalogService for Catalog {
        async fn get_product(&self, product_id: &ProductId) -> Result<Option<CatalogProduct>, UpstreamError>;
        async fn check_stock(&self, product_id: &ProductId, quantity: u32) -> Result<StockCheck, UpstreamError>;
    }
}

mock! {
    pub Cart {}

    #[async_trait]
    impl CartService for Cart {
        async fn add_to_cart(&self, request: CartAdditionRequest) -> Result<CartAddition, UpstreamError>;
    }
}

mock! {
    pub Log {}

    impl Logger for Log {
        fn info(&self, message: &str);
        fn warn(&self, message: &str);
        fn error(&self, message: &str);
        fn debug(&self, message: &str);
    }
}

pub fn mock_logger() -> Arc<dyn Logger> {
    let mut logger = MockLog::new();
    logger.expect_info().returning(|_| ());
    logger.expect_warn().returning(|_| ());
    logger.expect_error().returning(|_| ());
    logger.expect_debug().returning(|_| ());
    Arc::new(logger)
}

pub fn test_user_id() -> UserId {
    UserId::new("u1")
}

pub fn product_id(raw: &str) -> ProductId {
    ProductId::parse(raw).unwrap()
}

pub fn shoe(stock: i64) -> CatalogProduct {
    CatalogProduct {
        id: "p1".to_string(),
        name: "Shoe".to_string(),
        description: "Comfortable running shoes".to_string(),
        price: 100.0,
        image: "https://example.com/shoe.jpg".to_string(),
        stock,
    }
}

pub fn saved_shoe() -> WishlistItem {
    WishlistItem::snapshot(product_id("p1"), &shoe(5), Utc::now()).unwrap()
}

/// Repository backed by a map, for scenario tests that chain several use cases.
#[derive(Default)]
pub struct InMemoryWishlistRepository {
    wishlists: Mutex<HashMap<UserId, Wishlist>>,
}

#[async_trait]
impl WishlistRepository for InMemoryWishlistRepository {
    async fn get_or_create(&self, user_id: &UserId) -> Result<Wishlist, RepositoryError> {
        let mut wishlists = self.wishlists.lock().unwrap();
        Ok(wishlists
            .entry(user_id.clone())
            .or_insert_with(|| Wishlist::empty(user_id.clone()))
            .clone())
    }

    async fn add_item(
        &self,
        user_id: &UserId,
        item: &WishlistItem,
    ) -> Result<AddItemOutcome, RepositoryError> {
        let mut wishlists = self.wishlists.lock().unwrap();
        let Some(wishlist) = wishlists.get_mut(user_id) else {
            return Err(RepositoryError::NotFound);
        };
        if wishlist.contains(&item.product_id) {
            return Ok(AddItemOutcome::Duplicate);
        }
        wishlist.items.push(item.clone());
        wishlist.updated_at = Utc::now();
        Ok(AddItemOutcome::Added(wishlist.clone()))
    }

    async fn get_item(
        &self,
        user_id: &UserId,
        product_id: &ProductId,
    ) -> Result<Option<WishlistItem>, RepositoryError> {
        let wishlists = self.wishlists.lock().unwrap();
        Ok(wishlists
            .get(user_id)
            .and_then(|w| w.find_item(product_id).cloned()))
    }

    async fn remove_item(
        &self,
        user_id: &UserId,
        product_id: &ProductId,
    ) -> Result<Option<Wishlist>, RepositoryError> {
        let mut wishlists = self.wishlists.lock().unwrap();
        Ok(wishlists.get_mut(user_id).map(|wishlist| {
            wishlist.items.retain(|item| &item.product_id != product_id);
            wishlist.updated_at = Utc::now();
            wishlist.clone()
        }))
    }

    async fn delete(&self, user_id: &UserId) -> Result<bool, RepositoryError> {
        let mut wishlists = self.wishlists.lock().unwrap();
        Ok(wishlists.remove(user_id).is_some())
    }
}
