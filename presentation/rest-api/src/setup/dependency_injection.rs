use std::sync::Arc;

use logger::TracingLogger;
use persistence::wishlist::repository::WishlistRepositoryPostgres;
use upstream::cart::CartHttp;
use upstream::client::UpstreamClient;
use upstream::product_catalog::ProductCatalogHttp;

use business::application::wishlist::add_item::AddWishlistItemUseCaseImpl;
use business::application::wishlist::clear::ClearWishlistUseCaseImpl;
use business::application::wishlist::get::GetWishlistUseCaseImpl;
use business::application::wishlist::move_to_cart::MoveWishlistItemToCartUseCaseImpl;
use business::application::wishlist::remove_item::RemoveWishlistItemUseCaseImpl;

use crate::api::health::routes::HealthApi;
use crate::api::wishlist::routes::WishlistApi;
use crate::config::upstream_config::UpstreamConfig;

pub struct DependencyContainer {
    pub health_api: HealthApi,
    pub wishlist_api: WishlistApi,
}

impl DependencyContainer {
    pub fn new(pool: sqlx::PgPool, upstream: &UpstreamConfig) -> Self {
        let logger = Arc::new(TracingLogger::new("WishlistService"));
        let health_api = HealthApi::new();

        // Infrastructure adapters
        let repository = Arc::new(WishlistRepositoryPostgres::new(pool));
        let catalog = Arc::new(ProductCatalogHttp::new(UpstreamClient::new(
            upstream.product_service_url.clone(),
            upstream.timeout,
        )));
        let cart = Arc::new(CartHttp::new(UpstreamClient::new(
            upstream.cart_service_url.clone(),
            upstream.timeout,
        )));

        // Wishlist use cases
        let get_use_case = Arc::new(GetWishlistUseCaseImpl {
            repository: repository.clone(),
            logger: logger.clone(),
        });
        let add_item_use_case = Arc::new(AddWishlistItemUseCaseImpl {
            repository: repository.clone(),
            catalog: catalog.clone(),
            logger: logger.clone(),
        });
        let remove_item_use_case = Arc::new(RemoveWishlistItemUseCaseImpl {
            repository: repository.clone(),
            logger: logger.clone(),
        });
        let move_to_cart_use_case = Arc::new(MoveWishlistItemToCartUseCaseImpl {
            repository: repository.clone(),
            catalog,
            cart,
            logger: logger.clone(),
        });
        let clear_use_case = Arc::new(ClearWishlistUseCaseImpl {
            repository,
            logger,
        });

        let wishlist_api = WishlistApi::new(
            get_use_case,
            add_item_use_case,
            remove_item_use_case,
            move_to_cart_use_case,
            clear_use_case,
        );

        Self {
            health_api,
            wishlist_api,
        }
    }
}
