use async_trait::async_trait;

use crate::domain::user::errors::AuthError;

pub struct VerifyOtpParams {
    pub email: String,
    pub otp: String,
    /// Replaces the registration password when present.
    pub password: Option<String>,
}

#[async_trait]
pub trait VerifyOtpUseCase: Send + Sync {
    async fn execute(&self, params: VerifyOtpParams) -> Result<(), AuthError>;
}
