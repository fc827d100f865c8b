use chrono::Duration;

use super::env::{required_var, var_or};

/// Session token and one-time code settings.
///
/// Environment variables:
/// - JWT_SECRET: HS256 signing secret (required)
/// - JWT_TTL_MINUTES: session token lifetime (default: 60)
/// - OTP_TTL_MINUTES: verification code lifetime (default: 10)
pub struct AuthConfig {
    pub jwt_secret: String,
    pub jwt_ttl: Duration,
    pub otp_ttl: Duration,
}

impl AuthConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            jwt_secret: required_var("JWT_SECRET")?,
            jwt_ttl: Duration::minutes(var_or("JWT_TTL_MINUTES", 60)?),
            otp_ttl: Duration::minutes(var_or("OTP_TTL_MINUTES", 10)?),
        })
    }
}
