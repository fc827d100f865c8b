use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::user::errors::AuthError;
use crate::domain::user::model::normalize_email;
use crate::domain::user::repository::UserRepository;
use crate::domain::user::use_cases::logout::{LogoutParams, LogoutUseCase};

pub struct LogoutUseCaseImpl {
    pub repository: Arc<dyn UserRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl LogoutUseCase for LogoutUseCaseImpl {
    async fn execute(&self, params: LogoutParams) -> Result<(), AuthError> {
        let email = normalize_email(&params.email);
        self.logger.info(&format!("Logging out: {}", email));

        let mut user = self
            .repository
            .find_by_email(&email)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        user.set_logged_in(false);
        self.repository.save(&user).await?;

        self.logger.info(&format!("User logged out: {}", user.id));
        Ok(())
    }
}
