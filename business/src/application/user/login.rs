use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::user::errors::AuthError;
use crate::domain::user::model::normalize_email;
use crate::domain::user::repository::UserRepository;
use crate::domain::user::services::{PasswordHasher, TokenIssuer};
use crate::domain::user::use_cases::login::{LoginParams, LoginResult, LoginUseCase};

pub struct LoginUseCaseImpl {
    pub repository: Arc<dyn UserRepository>,
    pub hasher: Arc<dyn PasswordHasher>,
    pub token_issuer: Arc<dyn TokenIssuer>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl LoginUseCase for LoginUseCaseImpl {
    async fn execute(&self, params: LoginParams) -> Result<LoginResult, AuthError> {
        let email = normalize_email(&params.email);
        self.logger.info(&format!("Login attempt: {}", email));

        let mut user = self
            .repository
            .find_by_email(&email)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        if !user.otp_verified {
            return Err(AuthError::OtpNotVerified);
        }
        if params.password.is_empty() || !self.hasher.verify(&params.password, &user.password_hash)? {
            self.logger
                .warn(&format!("Invalid credentials for user: {}", user.id));
            return Err(AuthError::InvalidCredentials);
        }

        user.set_logged_in(true);
        self.repository.save(&user).await?;

        let token = self.token_issuer.issue(&user.id)?;

        self.logger.info(&format!("User logged in: {}", user.id));
        Ok(LoginResult { user, token })
    }
}
