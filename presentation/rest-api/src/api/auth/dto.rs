use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::user::model::User;

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub password: String,
}

#[derive(Debug, Clone, Object)]
pub struct VerifyOtpRequest {
    pub email: String,
    /// Six-digit code received by email
    pub otp: String,
    /// Replaces the password given at sign-up when present
    #[oai(skip_serializing_if_is_none)]
    pub password: Option<String>,
}

#[derive(Debug, Clone, Object)]
pub struct SigninRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Object)]
pub struct LogoutRequest {
    pub email: String,
}

/// Public view of a user; never exposes the password hash or OTP.
#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub otp_verified: bool,
    pub is_logged_in: bool,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.to_string(),
            name: user.name,
            email: user.email,
            phone_number: user.phone_number,
            otp_verified: user.otp_verified,
            is_logged_in: user.is_logged_in,
            created_at: user.created_at,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct UserData {
    pub user: UserResponse,
}

#[derive(Debug, Clone, Object)]
pub struct UserEnvelope {
    pub status: bool,
    pub message: String,
    pub data: UserData,
}

#[derive(Debug, Clone, Object)]
pub struct TokenData {
    pub token: String,
}

#[derive(Debug, Clone, Object)]
pub struct TokenEnvelope {
    pub status: bool,
    pub message: String,
    pub data: TokenData,
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use business::domain::user::model::NewUserProps;

    use super::*;

    #[test]
    fn should_expose_public_fields_only() {
        // Arrange
        let user = User::new(NewUserProps {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            phone_number: "+34600000000".to_string(),
            password_hash: "$argon2id$secret".to_string(),
            otp: "123456".to_string(),
            otp_expires_at: Utc::now() + Duration::minutes(10),
        })
        .unwrap();

        // Act
        let response = UserResponse::from(user);
        let json = serde_json::to_string(&poem_openapi::types::ToJSON::to_json(&response)).unwrap();

        // Assert
        assert!(json.contains("\"phoneNumber\""));
        assert!(!json.contains("argon2"));
        assert!(!json.contains("123456"));
        assert!(!response.otp_verified);
    }
}
