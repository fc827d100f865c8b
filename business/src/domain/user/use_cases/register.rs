use async_trait::async_trait;

use crate::domain::user::errors::AuthError;
use crate::domain::user::model::User;

pub struct RegisterUserParams {
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub password: String,
}

#[async_trait]
pub trait RegisterUserUseCase: Send + Sync {
    async fn execute(&self, params: RegisterUserParams) -> Result<User, AuthError>;
}
