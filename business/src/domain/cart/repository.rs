use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::UserId;

use super::model::Cart;

#[async_trait]
pub trait CartRepository: Send + Sync {
    async fn find_by_user_id(&self, user_id: &UserId) -> Result<Option<Cart>, RepositoryError>;
    /// Finds the cart, whoever owns it, that holds a line with `line_id`.
    async fn find_by_line_id(&self, line_id: Uuid) -> Result<Option<Cart>, RepositoryError>;
    /// Writes the whole cart if its stored version still equals `cart.version`
    /// and returns the new version. Fails with `RepositoryError::Conflict`
    /// when another writer got there first.
    async fn save(&self, cart: &Cart) -> Result<i64, RepositoryError>;
    /// Returns `false` when the user had no cart.
    async fn delete_by_user_id(&self, user_id: &UserId) -> Result<bool, RepositoryError>;
}
