use super::env::{optional_var, var_or};

/// Outbound email settings.
///
/// Environment variables:
/// - MAIL_API_URL: base URL of the HTTP email API (unset: emails are only logged)
/// - MAIL_API_KEY: bearer key for the email API (optional)
/// - MAIL_FROM: sender address (default: "no-reply@localhost")
pub struct MailConfig {
    pub api_url: Option<String>,
    pub api_key: Option<String>,
    pub from: String,
}

impl MailConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            api_url: optional_var("MAIL_API_URL"),
            api_key: optional_var("MAIL_API_KEY"),
            from: var_or("MAIL_FROM", "no-reply@localhost".to_string())?,
        })
    }
}
