use reqwest::Client;

/// Shared HTTP configuration for the transactional email API.
pub struct MailApiClient {
    pub client: Client,
    pub api_key: Option<String>,
    pub base_url: String,
}

impl MailApiClient {
    pub fn new(base_url: String, api_key: Option<String>) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(15))
            .build()
            .unwrap_or_default();

        Self {
            client,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Builds the authorization header value, if a key is configured.
    pub fn auth_header(&self) -> Option<String> {
        self.api_key.as_ref().map(|key| format!("Bearer {}", key))
    }

    /// Returns the send endpoint URL.
    pub fn send_url(&self) -> String {
        format!("{}/send", self.base_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_build_send_url_without_double_slash() {
        let client = MailApiClient::new("https://mail.example.com/v1/".to_string(), None);

        assert_eq!(client.send_url(), "https://mail.example.com/v1/send");
        assert_eq!(client.auth_header(), None);
    }

    #[test]
    fn should_build_bearer_header() {
        let client = MailApiClient::new(
            "https://mail.example.com".to_string(),
            Some("key-1".to_string()),
        );

        assert_eq!(client.auth_header().as_deref(), Some("Bearer key-1"));
    }
}
