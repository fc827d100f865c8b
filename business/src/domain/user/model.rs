use chrono::{DateTime, Utc};
use regex::Regex;
use std::sync::LazyLock;

use super::errors::AuthError;
use crate::domain::shared::value_objects::UserId;

static EMAIL_RE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").ok());

#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub password_hash: String,
    pub otp: Option<String>,
    pub otp_expires_at: Option<DateTime<Utc>>,
    pub otp_verified: bool,
    pub is_logged_in: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub struct NewUserProps {
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub password_hash: String,
    pub otp: String,
    pub otp_expires_at: DateTime<Utc>,
}

/// Lowercases and trims so lookups are case-insensitive.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

impl User {
    pub fn new(props: NewUserProps) -> Result<Self, AuthError> {
        if props.name.trim().is_empty() {
            return Err(AuthError::NameEmpty);
        }
        let email = normalize_email(&props.email);
        if !EMAIL_RE.as_ref().is_some_and(|re| re.is_match(&email)) {
            return Err(AuthError::EmailInvalid);
        }
        if props.phone_number.trim().is_empty() {
            return Err(AuthError::PhoneNumberEmpty);
        }

        let now = Utc::now();
        Ok(Self {
            id: UserId::generate(),
            name: props.name,
            email,
            phone_number: props.phone_number,
            password_hash: props.password_hash,
            otp: Some(props.otp),
            otp_expires_at: Some(props.otp_expires_at),
            otp_verified: false,
            is_logged_in: false,
            created_at: now,
            updated_at: now,
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn from_repository(
        id: UserId,
        name: String,
        email: String,
        phone_number: String,
        password_hash: String,
        otp: Option<String>,
        otp_expires_at: Option<DateTime<Utc>>,
        otp_verified: bool,
        is_logged_in: bool,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            email,
            phone_number,
            password_hash,
            otp,
            otp_expires_at,
            otp_verified,
            is_logged_in,
            created_at,
            updated_at,
        }
    }

    /// Checks, in order: expiry, code match, not already verified.
    pub fn verify_otp(&mut self, otp: &str, now: DateTime<Utc>) -> Result<(), AuthError> {
        match self.otp_expires_at {
            Some(expires_at) if now <= expires_at => {}
            _ => return Err(AuthError::OtpExpired),
        }
        if self.otp.as_deref() != Some(otp) {
            return Err(AuthError::OtpInvalid);
        }
        if self.otp_verified {
            return Err(AuthError::OtpAlreadyVerified);
        }

        self.otp_verified = true;
        self.updated_at = now;
        Ok(())
    }

    pub fn set_logged_in(&mut self, logged_in: bool) {
        self.is_logged_in = logged_in;
        self.updated_at = Utc::now();
    }

    pub fn replace_password_hash(&mut self, password_hash: String) {
        self.password_hash = password_hash;
        self.updated_at = Utc::now();
    }
}


#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::test_support::pending_user;
    use super::*;

    fn props(email: &str) -> NewUserProps {
        NewUserProps {
            name: "Ada".to_string(),
            email: email.to_string(),
            phone_number: "+34600000000".to_string(),
            password_hash: "hash".to_string(),
            otp: "123456".to_string(),
            otp_expires_at: Utc::now() + Duration::minutes(10),
        }
    }

    #[test]
    fn should_create_unverified_logged_out_user() {
        let user = User::new(props("Ada@Example.com ")).unwrap();

        assert_eq!(user.email, "ada@example.com");
        assert!(!user.otp_verified);
        assert!(!user.is_logged_in);
    }

    #[test]
    fn should_reject_malformed_email() {
        let result = User::new(props("not-an-email"));

        assert!(matches!(result.unwrap_err(), AuthError::EmailInvalid));
    }

    #[test]
    fn should_reject_empty_name() {
        let result = User::new(NewUserProps {
            name: " ".to_string(),
            ..props("ada@example.com")
        });

        assert!(matches!(result.unwrap_err(), AuthError::NameEmpty));
    }

    #[test]
    fn should_verify_matching_otp_before_expiry() {
        let now = Utc::now();
        let mut user = pending_user("654321", now + Duration::minutes(1));

        user.verify_otp("654321", now).unwrap();

        assert!(user.otp_verified);
    }

    #[test]
    fn should_report_expiry_before_mismatch() {
        let now = Utc::now();
        let mut user = pending_user("654321", now - Duration::seconds(1));

        let result = user.verify_otp("000000", now);

        assert!(matches!(result.unwrap_err(), AuthError::OtpExpired));
    }

    #[test]
    fn should_reject_wrong_otp() {
        let now = Utc::now();
        let mut user = pending_user("654321", now + Duration::minutes(1));

        let result = user.verify_otp("111111", now);

        assert!(matches!(result.unwrap_err(), AuthError::OtpInvalid));
        assert!(!user.otp_verified);
    }

    #[test]
    fn should_reject_second_verification() {
        let now = Utc::now();
        let mut user = pending_user("654321", now + Duration::minutes(1));
        user.verify_otp("654321", now).unwrap();

        let result = user.verify_otp("654321", now);

        assert!(matches!(result.unwrap_err(), AuthError::OtpAlreadyVerified));
    }
}
