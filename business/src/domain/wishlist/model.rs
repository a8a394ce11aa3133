use chrono::{DateTime, Utc};

use super::errors::WishlistError;
use super::services::CatalogProduct;
use super::value_objects::ProductId;
use crate::domain::shared::value_objects::UserId;

/// A product saved in a wishlist, frozen as the catalog described it when it was added.
#[derive(Debug, Clone, PartialEq)]
pub struct WishlistItem {
    pub product_id: ProductId,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub image: String,
    /// Stock reported by the catalog at add time. Never refreshed.
    pub stock: u32,
    pub added_at: DateTime<Utc>,
}

impl WishlistItem {
    /// Captures a catalog product as a wishlist item.
    ///
    /// Products with no units on hand cannot be saved.
    pub fn snapshot(
        product_id: ProductId,
        product: &CatalogProduct,
        added_at: DateTime<Utc>,
    ) -> Result<Self, WishlistError> {
        if product.stock <= 0 {
            return Err(WishlistError::ProductOutOfStock);
        }
        let stock = u32::try_from(product.stock).unwrap_or(u32::MAX);

        Ok(Self {
            product_id,
            name: product.name.clone(),
            description: product.description.clone(),
            price: product.price,
            image: product.image.clone(),
            stock,
            added_at,
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        product_id: ProductId,
        name: String,
        description: String,
        price: f64,
        image: String,
        stock: u32,
        added_at: DateTime<Utc>,
    ) -> Self {
        Self {
            product_id,
            name,
            description,
            price,
            image,
            stock,
            added_at,
        }
    }
}

/// The per-user wishlist. Items keep the order they were added in.
#[derive(Debug, Clone, PartialEq)]
pub struct Wishlist {
    pub user_id: UserId,
    pub items: Vec<WishlistItem>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Wishlist {
    pub fn empty(user_id: UserId) -> Self {
        let now = Utc::now();
        Self {
            user_id,
            items: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        user_id: UserId,
        items: Vec<WishlistItem>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            user_id,
            items,
            created_at,
            updated_at,
        }
    }

    pub fn find_item(&self, product_id: &ProductId) -> Option<&WishlistItem> {
        self.items.iter().find(|item| &item.product_id == product_id)
    }

    pub fn contains(&self, product_id: &ProductId) -> bool {
        self.find_item(product_id).is_some()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn shoe(stock: i64) -> CatalogProduct {
        CatalogProduct {
            id: "p1".to_string(),
            name: "Shoe".to_string(),
            description: "Comfortable running shoes".to_string(),
            price: 100.0,
            image: "https://example.com/shoe.jpg".to_string(),
            stock,
        }
    }

    #[test]
    fn should_snapshot_product_fields() {
        let added_at = Utc::now();
        let item =
            WishlistItem::snapshot(ProductId::parse("p1").unwrap(), &shoe(5), added_at).unwrap();

        assert_eq!(item.product_id.as_str(), "p1");
        assert_eq!(item.name, "Shoe");
        assert_eq!(item.description, "Comfortable running shoes");
        assert_eq!(item.price, 100.0);
        assert_eq!(item.stock, 5);
        assert_eq!(item.added_at, added_at);
    }

    #[test]
    fn should_reject_snapshot_when_out_of_stock() {
        let result = WishlistItem::snapshot(ProductId::parse("p1").unwrap(), &shoe(0), Utc::now());

        assert!(matches!(
            result.unwrap_err(),
            WishlistError::ProductOutOfStock
        ));
    }

    #[test]
    fn should_start_empty() {
        let wishlist = Wishlist::empty(UserId::new("u1"));

        assert!(wishlist.is_empty());
        assert_eq!(wishlist.len(), 0);
        assert_eq!(wishlist.user_id.as_str(), "u1");
    }

    #[test]
    fn should_find_items_by_product_id() {
        let item =
            WishlistItem::snapshot(ProductId::parse("p1").unwrap(), &shoe(5), Utc::now()).unwrap();
        let mut wishlist = Wishlist::empty(UserId::new("u1"));
        wishlist.items.push(item);

        assert!(wishlist.contains(&ProductId::parse("p1").unwrap()));
        assert!(!wishlist.contains(&ProductId::parse("p2").unwrap()));
        assert_eq!(
            wishlist
                .find_item(&ProductId::parse("p1").unwrap())
                .map(|i| i.name.as_str()),
            Some("Shoe")
        );
    }

    proptest! {
        #[test]
        fn prop_snapshot_keeps_positive_stock(stock in 1i64..=i64::from(u32::MAX)) {
            let item = WishlistItem::snapshot(ProductId::parse("p1").unwrap(), &shoe(stock), Utc::now()).unwrap();
            prop_assert_eq!(i64::from(item.stock), stock);
        }

        #[test]
        fn prop_snapshot_rejects_non_positive_stock(stock in i64::MIN..=0i64) {
            let result = WishlistItem::snapshot(ProductId::parse("p1").unwrap(), &shoe(stock), Utc::now());
            prop_assert!(matches!(result, Err(WishlistError::ProductOutOfStock)));
        }
    }
}
