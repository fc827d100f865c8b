use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::errors::RepositoryError;
use business::domain::user::model::User;
use business::domain::user::repository::UserRepository;

use super::entity::UserEntity;
use crate::sql_errors::into_repository_error;

pub struct UserRepositoryPostgres {
    pool: PgPool,
}

impl UserRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for UserRepositoryPostgres {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError> {
        let entity = sqlx::query_as::<_, UserEntity>(
            "SELECT id, name, email, phone_number, password_hash, otp, otp_expires_at, otp_verified, is_logged_in, created_at, updated_at FROM users WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(into_repository_error)?;

        Ok(entity.map(|e| e.into_domain()))
    }

    async fn create(&self, user: &User) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"INSERT INTO users (id, name, email, phone_number, password_hash, otp, otp_expires_at,
                otp_verified, is_logged_in, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)"#,
        )
        .bind(user.id.as_str())
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.phone_number)
        .bind(&user.password_hash)
        .bind(&user.otp)
        .bind(user.otp_expires_at)
        .bind(user.otp_verified)
        .bind(user.is_logged_in)
        .bind(user.created_at)
        .bind(user.updated_at)
        .execute(&self.pool)
        .await
        .map_err(into_repository_error)?;

        Ok(())
    }

    async fn save(&self, user: &User) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            r#"UPDATE users SET
                name = $2,
                phone_number = $3,
                password_hash = $4,
                otp = $5,
                otp_expires_at = $6,
                otp_verified = $7,
                is_logged_in = $8,
                updated_at = $9
            WHERE id = $1"#,
        )
        .bind(user.id.as_str())
        .bind(&user.name)
        .bind(&user.phone_number)
        .bind(&user.password_hash)
        .bind(&user.otp)
        .bind(user.otp_expires_at)
        .bind(user.otp_verified)
        .bind(user.is_logged_in)
        .bind(user.updated_at)
        .execute(&self.pool)
        .await
        .map_err(into_repository_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
