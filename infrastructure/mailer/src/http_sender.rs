use async_trait::async_trait;
use serde::Serialize;

use business::domain::user::errors::AuthError;
use business::domain::user::services::EmailSender;

use crate::client::MailApiClient;

#[derive(Debug, Serialize)]
struct OutgoingEmail<'a> {
    from: &'a str,
    to: &'a str,
    subject: &'a str,
    text: &'a str,
}

/// Delivers plain-text email through an HTTP email API.
pub struct HttpEmailSender {
    client: MailApiClient,
    from: String,
}

impl HttpEmailSender {
    pub fn new(client: MailApiClient, from: String) -> Self {
        Self { client, from }
    }
}

#[async_trait]
impl EmailSender for HttpEmailSender {
    async fn send(&self, to: &str, subject: &str, text: &str) -> Result<(), AuthError> {
        let body = OutgoingEmail {
            from: &self.from,
            to,
            subject,
            text,
        };

        let mut request = self.client.client.post(self.client.send_url()).json(&body);
        if let Some(auth) = self.client.auth_header() {
            request = request.header("Authorization", auth);
        }

        let response = request.send().await.map_err(|e| {
            tracing::error!(error = %e, "email API unreachable");
            AuthError::EmailDelivery(e.to_string())
        })?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            tracing::error!(%status, %detail, "email API rejected message");
            return Err(AuthError::EmailDelivery(format!("status {status}")));
        }

        tracing::debug!(%to, %subject, "email accepted by API");
        Ok(())
    }
}
