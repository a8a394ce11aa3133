use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use num_traits::{FromPrimitive, ToPrimitive};
use sqlx::FromRow;

use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::UserId;
use business::domain::wishlist::model::{Wishlist, WishlistItem};
use business::domain::wishlist::value_objects::ProductId;

#[derive(Debug, FromRow)]
pub struct WishlistEntity {
    pub user_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl WishlistEntity {
    pub fn into_domain(self, items: Vec<WishlistItemEntity>) -> Wishlist {
        Wishlist::from_repository(
            UserId::new(self.user_id),
            items.into_iter().map(|i| i.into_domain()).collect(),
            self.created_at,
            self.updated_at,
        )
    }
}

#[derive(Debug, FromRow)]
pub struct WishlistItemEntity {
    pub product_id: String,
    pub name: String,
    pub description: String,
    pub price: BigDecimal,
    pub image: String,
    pub stock: i64,
    pub added_at: DateTime<Utc>,
}

impl WishlistItemEntity {
    pub fn into_domain(self) -> WishlistItem {
        WishlistItem::from_repository(
            ProductId::from_repository(self.product_id),
            self.name,
            self.description,
            self.price.to_f64().unwrap_or_default(),
            self.image,
            u32::try_from(self.stock).unwrap_or(u32::MAX),
            self.added_at,
        )
    }
}

/// Column values bound when inserting an item.
pub struct WishlistItemRow {
    pub price: BigDecimal,
    pub stock: i64,
}

impl WishlistItemRow {
    pub fn from_domain(item: &WishlistItem) -> Result<Self, RepositoryError> {
        // Only NaN and infinities have no decimal form
        let price = BigDecimal::from_f64(item.price).ok_or(RepositoryError::Persistence)?;
        Ok(Self {
            price,
            stock: i64::from(item.stock),
        })
    }
}
