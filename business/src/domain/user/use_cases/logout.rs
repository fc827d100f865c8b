use async_trait::async_trait;

use crate::domain::user::errors::AuthError;

pub struct LogoutParams {
    pub email: String,
}

#[async_trait]
pub trait LogoutUseCase: Send + Sync {
    async fn execute(&self, params: LogoutParams) -> Result<(), AuthError>;
}
