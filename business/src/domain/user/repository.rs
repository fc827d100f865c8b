use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::User;

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError>;
    /// Fails with `RepositoryError::Duplicated` when the email is taken.
    async fn create(&self, user: &User) -> Result<(), RepositoryError>;
    async fn save(&self, user: &User) -> Result<(), RepositoryError>;
}
