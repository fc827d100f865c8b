use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::logger::Logger;
use crate::domain::user::errors::AuthError;
use crate::domain::user::model::normalize_email;
use crate::domain::user::repository::UserRepository;
use crate::domain::user::services::PasswordHasher;
use crate::domain::user::use_cases::verify_otp::{VerifyOtpParams, VerifyOtpUseCase};

pub struct VerifyOtpUseCaseImpl {
    pub repository: Arc<dyn UserRepository>,
    pub hasher: Arc<dyn PasswordHasher>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl VerifyOtpUseCase for VerifyOtpUseCaseImpl {
    async fn execute(&self, params: VerifyOtpParams) -> Result<(), AuthError> {
        let email = normalize_email(&params.email);
        self.logger.info(&format!("Verifying OTP for: {}", email));

        let mut user = self
            .repository
            .find_by_email(&email)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        user.verify_otp(&params.otp, Utc::now())?;

        if let Some(password) = params.password.filter(|p| !p.is_empty()) {
            user.replace_password_hash(self.hasher.hash(&password)?);
        }

        self.repository.save(&user).await?;

        self.logger.info(&format!("OTP verified for user: {}", user.id));
        Ok(())
    }
}
