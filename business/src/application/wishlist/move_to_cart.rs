use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::wishlist::errors::WishlistError;
use crate::domain::wishlist::repository::WishlistRepository;
use crate::domain::wishlist::services::{CartAdditionRequest, CartService, ProductCatalogService};
use crate::domain::wishlist::use_cases::move_to_cart::{
    MoveToCartOutcome, MoveWishlistItemToCartParams, MoveWishlistItemToCartUseCase,
};
use crate::domain::wishlist::value_objects::CartSource;

/// Quantity requested from the catalog and the cart for a moved item.
const MOVE_QUANTITY: u32 = 1;

/// Moves a saved item into the user's cart, then drops it from the wishlist.
///
/// The cart add and the wishlist removal are two separate writes with no
/// compensation: if the removal fails after the cart accepted the item, the
/// product sits in both places. That case is logged at error level and the
/// request fails with `Internal`; calling again is safe for the wishlist side
/// since removal is idempotent, but may add a second cart line.
pub struct MoveWishlistItemToCartUseCaseImpl {
    pub repository: Arc<dyn WishlistRepository>,
    pub catalog: Arc<dyn ProductCatalogService>,
    pub cart: Arc<dyn CartService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl MoveWishlistItemToCartUseCase for MoveWishlistItemToCartUseCaseImpl {
    async fn execute(
        &self,
        params: MoveWishlistItemToCartParams,
    ) -> Result<MoveToCartOutcome, WishlistError> {
        let logger = self.logger.as_ref();
        logger.info(&format!(
            "Moving product {} to cart for user: {}",
            params.product_id, params.user_id
        ));

        let item = self
            .repository
            .get_item(&params.user_id, &params.product_id)
            .await
            .map_err(|e| WishlistError::internal(logger, "Move to cart error", e))?
            .ok_or(WishlistError::ItemNotFound)?;

        let stock = self
            .catalog
            .check_stock(&params.product_id, MOVE_QUANTITY)
            .await
            .map_err(|e| WishlistError::internal(logger, "Move to cart error", e))?;
        if !stock.in_stock {
            logger.warn(&format!("Product out of stock: {}", params.product_id));
            return Err(WishlistError::ProductOutOfStock);
        }

        let addition = self
            .cart
            .add_to_cart(CartAdditionRequest {
                user_id: params.user_id.clone(),
                product_id: params.product_id.clone(),
                price: item.price,
                source: CartSource::Wishlist,
            })
            .await
            .map_err(|e| WishlistError::internal(logger, "Move to cart error", e))?;
        if !addition.success {
            logger.error(&format!(
                "Cart service rejected product {} for user: {}",
                params.product_id, params.user_id
            ));
            return Err(WishlistError::UpstreamUnavailable);
        }

        if let Err(e) = self
            .repository
            .remove_item(&params.user_id, &params.product_id)
            .await
        {
            return Err(WishlistError::internal(
                logger,
                &format!(
                    "Product {} added to cart but still in wishlist of user {}",
                    params.product_id, params.user_id
                ),
                e,
            ));
        }

        logger.info(&format!(
            "Product {} moved to cart for user: {}",
            params.product_id, params.user_id
        ));
        Ok(MoveToCartOutcome {
            moved: true,
            cart_added: true,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::{RepositoryError, UpstreamError};
    use crate::domain::wishlist::services::{CartAddition, StockCheck};
    use crate::test_support::{
        InMemoryWishlistRepository, MockCart, MockCatalog, MockWishlistRepo, mock_logger,
        product_id, saved_shoe, test_user_id,
    };

    fn params() -> MoveWishlistItemToCartParams {
        MoveWishlistItemToCartParams {
            user_id: test_user_id(),
            product_id: product_id("p1"),
        }
    }

    async fn repository_with_shoe() -> Arc<InMemoryWishlistRepository> {
        let repository = Arc::new(InMemoryWishlistRepository::default());
        repository.get_or_create(&test_user_id()).await.unwrap();
        repository
            .add_item(&test_user_id(), &saved_shoe())
            .await
            .unwrap();
        repository
    }

    fn catalog_in_stock(in_stock: bool) -> MockCatalog {
        let mut catalog = MockCatalog::new();
        catalog
            .expect_check_stock()
            .withf(|_, quantity| *quantity == 1)
            .returning(move |_, _| Ok(StockCheck { in_stock }));
        catalog
    }

    fn cart_answering(success: bool) -> MockCart {
        let mut cart = MockCart::new();
        cart.expect_add_to_cart()
            .returning(move |_| Ok(CartAddition { success }));
        cart
    }

    #[tokio::test]
    async fn should_move_item_and_remove_it_from_wishlist() {
        let repository = repository_with_shoe().await;
        let use_case = MoveWishlistItemToCartUseCaseImpl {
            repository: repository.clone(),
            catalog: Arc::new(catalog_in_stock(true)),
            cart: Arc::new(cart_answering(true)),
            logger: mock_logger(),
        };

        let outcome = use_case.execute(params()).await.unwrap();

        assert_eq!(
            outcome,
            MoveToCartOutcome {
                moved: true,
                cart_added: true
            }
        );
        let item = repository
            .get_item(&test_user_id(), &product_id("p1"))
            .await
            .unwrap();
        assert!(item.is_none());
    }

    #[tokio::test]
    async fn should_send_saved_price_and_wishlist_source_to_cart() {
        let repository = repository_with_shoe().await;
        let mut cart = MockCart::new();
        cart.expect_add_to_cart()
            .withf(|request| {
                request.user_id.as_str() == "u1"
                    && request.product_id.as_str() == "p1"
                    && request.price == 100.0
                    && request.source == CartSource::Wishlist
            })
            .times(1)
            .returning(|_| Ok(CartAddition { success: true }));

        let use_case = MoveWishlistItemToCartUseCaseImpl {
            repository,
            catalog: Arc::new(catalog_in_stock(true)),
            cart: Arc::new(cart),
            logger: mock_logger(),
        };

        assert!(use_case.execute(params()).await.is_ok());
    }

    #[tokio::test]
    async fn should_keep_item_when_cart_rejects_it() {
        let repository = repository_with_shoe().await;
        let use_case = MoveWishlistItemToCartUseCaseImpl {
            repository: repository.clone(),
            catalog: Arc::new(catalog_in_stock(true)),
            cart: Arc::new(cart_answering(false)),
            logger: mock_logger(),
        };

        let result = use_case.execute(params()).await;

        assert!(matches!(
            result.unwrap_err(),
            WishlistError::UpstreamUnavailable
        ));
        let item = repository
            .get_item(&test_user_id(), &product_id("p1"))
            .await
            .unwrap();
        assert!(item.is_some());
    }

    #[tokio::test]
    async fn should_return_item_not_found_when_not_saved() {
        let mut catalog = MockCatalog::new();
        catalog.expect_check_stock().never();

        let use_case = MoveWishlistItemToCartUseCaseImpl {
            repository: Arc::new(InMemoryWishlistRepository::default()),
            catalog: Arc::new(catalog),
            cart: Arc::new(MockCart::new()),
            logger: mock_logger(),
        };

        let result = use_case.execute(params()).await;

        assert!(matches!(result.unwrap_err(), WishlistError::ItemNotFound));
    }

    #[tokio::test]
    async fn should_not_call_cart_when_out_of_stock() {
        let mut cart = MockCart::new();
        cart.expect_add_to_cart().never();

        let use_case = MoveWishlistItemToCartUseCaseImpl {
            repository: repository_with_shoe().await,
            catalog: Arc::new(catalog_in_stock(false)),
            cart: Arc::new(cart),
            logger: mock_logger(),
        };

        let result = use_case.execute(params()).await;

        assert!(matches!(
            result.unwrap_err(),
            WishlistError::ProductOutOfStock
        ));
    }

    #[tokio::test]
    async fn should_map_cart_transport_failure_to_internal() {
        let mut cart = MockCart::new();
        cart.expect_add_to_cart()
            .returning(|_| Err(UpstreamError::Transport));

        let use_case = MoveWishlistItemToCartUseCaseImpl {
            repository: repository_with_shoe().await,
            catalog: Arc::new(catalog_in_stock(true)),
            cart: Arc::new(cart),
            logger: mock_logger(),
        };

        let result = use_case.execute(params()).await;

        assert!(matches!(result.unwrap_err(), WishlistError::Internal));
    }

    #[tokio::test]
    async fn should_report_internal_when_removal_fails_after_cart_add() {
        let mut mock_repo = MockWishlistRepo::new();
        mock_repo
            .expect_get_item()
            .returning(|_, _| Ok(Some(saved_shoe())));
        mock_repo
            .expect_remove_item()
            .returning(|_, _| Err(RepositoryError::DatabaseError));

        let use_case = MoveWishlistItemToCartUseCaseImpl {
            repository: Arc::new(mock_repo),
            catalog: Arc::new(catalog_in_stock(true)),
            cart: Arc::new(cart_answering(true)),
            logger: mock_logger(),
        };

        let result = use_case.execute(params()).await;

        assert!(matches!(result.unwrap_err(), WishlistError::Internal));
    }
}
