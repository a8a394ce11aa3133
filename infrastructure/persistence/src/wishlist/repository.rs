use async_trait::async_trait;
use sqlx::{PgConnection, PgPool};

use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::UserId;
use business::domain::wishlist::model::{Wishlist, WishlistItem};
use business::domain::wishlist::repository::{AddItemOutcome, WishlistRepository};
use business::domain::wishlist::value_objects::ProductId;

use super::entity::{WishlistEntity, WishlistItemEntity, WishlistItemRow};

pub struct WishlistRepositoryPostgres {
    pool: PgPool,
}

impl WishlistRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn database_error(e: sqlx::Error) -> RepositoryError {
    tracing::error!(error = %e, "Wishlist query failed");
    RepositoryError::DatabaseError
}

async fn ensure_wishlist(conn: &mut PgConnection, user_id: &UserId) -> Result<(), RepositoryError> {
    sqlx::query("INSERT INTO wishlists (user_id) VALUES ($1) ON CONFLICT (user_id) DO NOTHING")
        .bind(user_id.as_str())
        .execute(&mut *conn)
        .await
        .map_err(database_error)?;

    Ok(())
}

async fn touch_wishlist(conn: &mut PgConnection, user_id: &UserId) -> Result<(), RepositoryError> {
    sqlx::query("UPDATE wishlists SET updated_at = NOW() WHERE user_id = $1")
        .bind(user_id.as_str())
        .execute(&mut *conn)
        .await
        .map_err(database_error)?;

    Ok(())
}

/// Loads the wishlist with its items in insertion order.
async fn load_wishlist(
    conn: &mut PgConnection,
    user_id: &UserId,
) -> Result<Option<Wishlist>, RepositoryError> {
    let Some(wishlist) = sqlx::query_as::<_, WishlistEntity>(
        "SELECT user_id, created_at, updated_at FROM wishlists WHERE user_id = $1",
    )
    .bind(user_id.as_str())
    .fetch_optional(&mut *conn)
    .await
    .map_err(database_error)?
    else {
        return Ok(None);
    };

    let items = sqlx::query_as::<_, WishlistItemEntity>(
        "SELECT product_id, name, description, price, image, stock, added_at FROM wishlist_items WHERE user_id = $1 ORDER BY position",
    )
    .bind(user_id.as_str())
    .fetch_all(&mut *conn)
    .await
    .map_err(database_error)?;

    Ok(Some(wishlist.into_domain(items)))
}

#[async_trait]
impl WishlistRepository for WishlistRepositoryPostgres {
    async fn get_or_create(&self, user_id: &UserId) -> Result<Wishlist, RepositoryError> {
        let mut tx = self.pool.begin().await.map_err(database_error)?;

        ensure_wishlist(&mut tx, user_id).await?;
        let wishlist = load_wishlist(&mut tx, user_id)
            .await?
            .ok_or(RepositoryError::NotFound)?;

        tx.commit().await.map_err(database_error)?;
        Ok(wishlist)
    }

    async fn add_item(
        &self,
        user_id: &UserId,
        item: &WishlistItem,
    ) -> Result<AddItemOutcome, RepositoryError> {
        let row = WishlistItemRow::from_domain(item)?;
        let mut tx = self.pool.begin().await.map_err(database_error)?;

        ensure_wishlist(&mut tx, user_id).await?;

        // The (user_id, product_id) key makes this insert the duplicate check
        let inserted = sqlx::query(
            r#"INSERT INTO wishlist_items (user_id, product_id, name, description, price, image, stock, added_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ON CONFLICT (user_id, product_id) DO NOTHING"#,
        )
        .bind(user_id.as_str())
        .bind(item.product_id.as_str())
        .bind(&item.name)
        .bind(&item.description)
        .bind(&row.price)
        .bind(&item.image)
        .bind(row.stock)
        .bind(item.added_at)
        .execute(&mut *tx)
        .await
        .map_err(database_error)?;

        if inserted.rows_affected() == 0 {
            tx.rollback().await.map_err(database_error)?;
            return Ok(AddItemOutcome::Duplicate);
        }

        touch_wishlist(&mut tx, user_id).await?;
        let wishlist = load_wishlist(&mut tx, user_id)
            .await?
            .ok_or(RepositoryError::NotFound)?;

        tx.commit().await.map_err(database_error)?;
        Ok(AddItemOutcome::Added(wishlist))
    }

    async fn get_item(
        &self,
        user_id: &UserId,
        product_id: &ProductId,
    ) -> Result<Option<WishlistItem>, RepositoryError> {
        let entity = sqlx::query_as::<_, WishlistItemEntity>(
            "SELECT product_id, name, description, price, image, stock, added_at FROM wishlist_items WHERE user_id = $1 AND product_id = $2",
        )
        .bind(user_id.as_str())
        .bind(product_id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(entity.map(|e| e.into_domain()))
    }

    async fn remove_item(
        &self,
        user_id: &UserId,
        product_id: &ProductId,
    ) -> Result<Option<Wishlist>, RepositoryError> {
        let mut tx = self.pool.begin().await.map_err(database_error)?;

        sqlx::query("DELETE FROM wishlist_items WHERE user_id = $1 AND product_id = $2")
            .bind(user_id.as_str())
            .bind(product_id.as_str())
            .execute(&mut *tx)
            .await
            .map_err(database_error)?;

        touch_wishlist(&mut tx, user_id).await?;
        let wishlist = load_wishlist(&mut tx, user_id).await?;

        tx.commit().await.map_err(database_error)?;
        Ok(wishlist)
    }

    async fn delete(&self, user_id: &UserId) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM wishlists WHERE user_id = $1")
            .bind(user_id.as_str())
            .execute(&self.pool)
            .await
            .map_err(database_error)?;

        Ok(result.rows_affected() > 0)
    }
}
