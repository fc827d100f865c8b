use async_trait::async_trait;
use rand::Rng;

use super::errors::AuthError;
use crate::domain::shared::value_objects::UserId;

/// Service port for one-way password hashing.
pub trait PasswordHasher: Send + Sync {
    fn hash(&self, password: &str) -> Result<String, AuthError>;
    fn verify(&self, password: &str, hash: &str) -> Result<bool, AuthError>;
}

/// Service port issuing the bearer token returned on login.
pub trait TokenIssuer: Send + Sync {
    fn issue(&self, user_id: &UserId) -> Result<String, AuthError>;
}

/// Service port for outbound plain-text email.
#[async_trait]
pub trait EmailSender: Send + Sync {
    async fn send(&self, to: &str, subject: &str, text: &str) -> Result<(), AuthError>;
}

pub trait OtpGenerator: Send + Sync {
    fn generate(&self) -> String;
}

/// Six-digit codes drawn uniformly from 100000..999999 (upper bound excluded).
const OTP_RANGE: std::ops::Range<u32> = 100_000..999_999;

pub struct RandomOtpGenerator;

impl OtpGenerator for RandomOtpGenerator {
    fn generate(&self) -> String {
        rand::rng().random_range(OTP_RANGE).to_string()
    }
}
