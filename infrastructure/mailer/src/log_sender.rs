use async_trait::async_trait;

use business::domain::user::errors::AuthError;
use business::domain::user::services::EmailSender;

/// Writes outgoing email to the log instead of delivering it.
/// Used when no email API is configured.
pub struct LogEmailSender;

#[async_trait]
impl EmailSender for LogEmailSender {
    async fn send(&self, to: &str, subject: &str, text: &str) -> Result<(), AuthError> {
        tracing::info!(%to, %subject, "email (not delivered): {}", text);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn should_always_succeed() {
        let result = LogEmailSender
            .send("ada@example.com", "Your OTP", "Your OTP is: 123456.")
            .await;

        assert!(result.is_ok());
    }
}
