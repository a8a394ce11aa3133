//! End-to-end flows across several wishlist use cases sharing one store.

use std::sync::Arc;

use crate::application::wishlist::add_item::AddWishlistItemUseCaseImpl;
use crate::application::wishlist::clear::ClearWishlistUseCaseImpl;
use crate::application::wishlist::get::GetWishlistUseCaseImpl;
use crate::application::wishlist::remove_item::RemoveWishlistItemUseCaseImpl;
use crate::domain::wishlist::errors::WishlistError;
use crate::domain::wishlist::use_cases::add_item::{
    AddWishlistItemParams, AddWishlistItemUseCase,
};
use crate::domain::wishlist::use_cases::clear::{ClearWishlistParams, ClearWishlistUseCase};
use crate::domain::wishlist::use_cases::get::{GetWishlistParams, GetWishlistUseCase};
use crate::domain::wishlist::use_cases::remove_item::{
    RemoveWishlistItemParams, RemoveWishlistItemUseCase,
};
use crate::test_support::{
    InMemoryWishlistRepository, MockCatalog, mock_logger, product_id, shoe, test_user_id,
};

struct Service {
    get: GetWishlistUseCaseImpl,
    add: AddWishlistItemUseCaseImpl,
    remove: RemoveWishlistItemUseCaseImpl,
    clear: ClearWishlistUseCaseImpl,
}

fn service() -> Service {
    let repository = Arc::new(InMemoryWishlistRepository::default());
    let mut catalog = MockCatalog::new();
    catalog
        .expect_get_product()
        .returning(|_| Ok(Some(shoe(5))));
    let logger = mock_logger();

    Service {
        get: GetWishlistUseCaseImpl {
            repository: repository.clone(),
            logger: logger.clone(),
        },
        add: AddWishlistItemUseCaseImpl {
            repository: repository.clone(),
            catalog: Arc::new(catalog),
            logger: logger.clone(),
        },
        remove: RemoveWishlistItemUseCaseImpl {
            repository: repository.clone(),
            logger: logger.clone(),
        },
        clear: ClearWishlistUseCaseImpl { repository, logger },
    }
}

#[tokio::test]
async fn should_add_reject_duplicate_then_remove() {
    let service = service();
    let add = || AddWishlistItemParams {
        user_id: test_user_id(),
        product_id: product_id("p1"),
    };

    let wishlist = service.add.execute(add()).await.unwrap();
    assert_eq!(wishlist.len(), 1);
    assert_eq!(wishlist.items[0].product_id.as_str(), "p1");
    assert_eq!(wishlist.items[0].stock, 5);

    let duplicate = service.add.execute(add()).await;
    assert!(matches!(duplicate.unwrap_err(), WishlistError::DuplicateItem));

    let wishlist = service
        .remove
        .execute(RemoveWishlistItemParams {
            user_id: test_user_id(),
            product_id: product_id("p1"),
        })
        .await
        .unwrap();
    assert!(wishlist.is_empty());
}

#[tokio::test]
async fn should_recreate_empty_wishlist_after_clear() {
    let service = service();
    service
        .add
        .execute(AddWishlistItemParams {
            user_id: test_user_id(),
            product_id: product_id("p1"),
        })
        .await
        .unwrap();

    let cleared = service
        .clear
        .execute(ClearWishlistParams {
            user_id: test_user_id(),
        })
        .await
        .unwrap();
    assert!(cleared);

    let wishlist = service
        .get
        .execute(GetWishlistParams {
            user_id: test_user_id(),
        })
        .await
        .unwrap();
    assert!(wishlist.is_empty());

    let again = service
        .clear
        .execute(ClearWishlistParams {
            user_id: test_user_id(),
        })
        .await;
    assert!(again.is_ok());
}
