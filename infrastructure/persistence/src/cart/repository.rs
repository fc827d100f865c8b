use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use business::domain::cart::model::Cart;
use business::domain::cart::repository::CartRepository;
use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::UserId;

use super::entity::CartEntity;
use crate::sql_errors::into_repository_error;

const CART_COLUMNS: &str = "id, user_id, items, version, created_at, updated_at";

/// Zero affected rows means another writer got there first.
fn written_version(rows_affected: u64, next_version: i64) -> Result<i64, RepositoryError> {
    if rows_affected == 0 {
        return Err(RepositoryError::Conflict);
    }
    Ok(next_version)
}

pub struct CartRepositoryPostgres {
    pool: PgPool,
}

impl CartRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn insert(&self, cart: &Cart) -> Result<i64, RepositoryError> {
        let result = sqlx::query(
            r#"INSERT INTO carts (id, user_id, items, version, created_at, updated_at)
            VALUES ($1, $2, $3, 1, $4, $5)
            ON CONFLICT (user_id) DO NOTHING"#,
        )
        .bind(cart.id)
        .bind(cart.user_id.as_str())
        .bind(CartEntity::items_document(cart))
        .bind(cart.created_at)
        .bind(cart.updated_at)
        .execute(&self.pool)
        .await
        .map_err(into_repository_error)?;

        written_version(result.rows_affected(), 1).inspect_err(|_| {
            tracing::debug!(user_id = %cart.user_id, "cart already created by a concurrent request");
        })
    }

    async fn update(&self, cart: &Cart) -> Result<i64, RepositoryError> {
        let result = sqlx::query(
            r#"UPDATE carts
            SET items = $2, version = version + 1, updated_at = $3
            WHERE id = $1 AND version = $4"#,
        )
        .bind(cart.id)
        .bind(CartEntity::items_document(cart))
        .bind(cart.updated_at)
        .bind(cart.version)
        .execute(&self.pool)
        .await
        .map_err(into_repository_error)?;

        written_version(result.rows_affected(), cart.version + 1).inspect_err(|_| {
            tracing::debug!(cart_id = %cart.id, version = cart.version, "stale cart version");
        })
    }
}

#[async_trait]
impl CartRepository for CartRepositoryPostgres {
    async fn find_by_user_id(&self, user_id: &UserId) -> Result<Option<Cart>, RepositoryError> {
        let entity = sqlx::query_as::<_, CartEntity>(&format!(
            "SELECT {CART_COLUMNS} FROM carts WHERE user_id = $1"
        ))
        .bind(user_id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(into_repository_error)?;

        Ok(entity.map(|e| e.into_domain()))
    }

    async fn find_by_line_id(&self, line_id: Uuid) -> Result<Option<Cart>, RepositoryError> {
        let entity = sqlx::query_as::<_, CartEntity>(&format!(
            "SELECT {CART_COLUMNS} FROM carts WHERE items @> jsonb_build_array(jsonb_build_object('id', $1::text))"
        ))
        .bind(line_id.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(into_repository_error)?;

        Ok(entity.map(|e| e.into_domain()))
    }

    async fn save(&self, cart: &Cart) -> Result<i64, RepositoryError> {
        if cart.is_persisted() {
            self.update(cart).await
        } else {
            self.insert(cart).await
        }
    }

    async fn delete_by_user_id(&self, user_id: &UserId) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM carts WHERE user_id = $1")
            .bind(user_id.as_str())
            .execute(&self.pool)
            .await
            .map_err(into_repository_error)?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_return_next_version_when_row_written() {
        assert_eq!(written_version(1, 4).unwrap(), 4);
    }

    #[test]
    fn should_report_conflict_when_no_row_written() {
        assert!(matches!(
            written_version(0, 4),
            Err(RepositoryError::Conflict)
        ));
    }

    fn cart_for(user: &str) -> Cart {
        let mut cart = Cart::new(UserId::new(user));
        cart.add_item(Uuid::new_v4(), 2).unwrap();
        cart
    }

    #[ignore = "requires DATABASE_URL"]
    #[sqlx::test(migrations = "../../migrations")]
    async fn should_reject_second_insert_for_same_user(pool: PgPool) {
        let repository = CartRepositoryPostgres::new(pool);

        assert_eq!(repository.save(&cart_for("user-1")).await.unwrap(), 1);
        let result = repository.save(&cart_for("user-1")).await;

        assert!(matches!(result, Err(RepositoryError::Conflict)));
    }

    #[ignore = "requires DATABASE_URL"]
    #[sqlx::test(migrations = "../../migrations")]
    async fn should_reject_update_with_stale_version(pool: PgPool) {
        let repository = CartRepositoryPostgres::new(pool);
        let mut cart = cart_for("user-1");
        cart.version = repository.save(&cart).await.unwrap();

        let stale = cart.clone();
        cart.version = repository.save(&cart).await.unwrap();
        let result = repository.save(&stale).await;

        assert_eq!(cart.version, 2);
        assert!(matches!(result, Err(RepositoryError::Conflict)));
    }

    #[ignore = "requires DATABASE_URL"]
    #[sqlx::test(migrations = "../../migrations")]
    async fn should_find_cart_holding_line(pool: PgPool) {
        let repository = CartRepositoryPostgres::new(pool);
        let mine = cart_for("user-1");
        let other = cart_for("user-2");
        repository.save(&mine).await.unwrap();
        repository.save(&other).await.unwrap();

        let found = repository
            .find_by_line_id(mine.items[0].id)
            .await
            .unwrap()
            .unwrap();
        let missing = repository.find_by_line_id(Uuid::new_v4()).await.unwrap();

        assert_eq!(found.id, mine.id);
        assert_eq!(found.items[0].quantity, 2);
        assert!(missing.is_none());
    }
}
