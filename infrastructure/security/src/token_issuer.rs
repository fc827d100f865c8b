use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use business::domain::shared::value_objects::UserId;
use business::domain::user::errors::AuthError;
use business::domain::user::services::TokenIssuer;

#[derive(Debug, Serialize, Deserialize)]
pub struct SessionClaims {
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
}

/// HS256 session tokens carrying the user id as `sub`.
pub struct JwtTokenIssuer {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl: Duration,
}

impl JwtTokenIssuer {
    pub fn new(secret: &str, ttl: Duration) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            ttl,
        }
    }

    /// Validates signature and expiry.
    pub fn decode(&self, token: &str) -> Result<SessionClaims, AuthError> {
        decode::<SessionClaims>(token, &self.decoding_key, &Validation::new(Algorithm::HS256))
            .map(|data| data.claims)
            .map_err(|e| AuthError::Token(e.to_string()))
    }
}

impl TokenIssuer for JwtTokenIssuer {
    fn issue(&self, user_id: &UserId) -> Result<String, AuthError> {
        let now = Utc::now();
        let claims = SessionClaims {
            sub: user_id.to_string(),
            iat: now.timestamp(),
            exp: (now + self.ttl).timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AuthError::Token(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_carry_user_id_and_expiry() {
        let issuer = JwtTokenIssuer::new("test-secret", Duration::minutes(60));

        let token = issuer.issue(&UserId::new("user-42")).unwrap();
        let claims = issuer.decode(&token).unwrap();

        assert_eq!(claims.sub, "user-42");
        assert_eq!(claims.exp - claims.iat, 3600);
    }

    #[test]
    fn should_reject_token_signed_with_other_secret() {
        let issuer = JwtTokenIssuer::new("test-secret", Duration::minutes(60));
        let other = JwtTokenIssuer::new("other-secret", Duration::minutes(60));

        let token = other.issue(&UserId::new("user-42")).unwrap();

        assert!(matches!(issuer.decode(&token), Err(AuthError::Token(_))));
    }

    #[test]
    fn should_reject_expired_token() {
        let issuer = JwtTokenIssuer::new("test-secret", Duration::minutes(-10));

        let token = issuer.issue(&UserId::new("user-42")).unwrap();

        assert!(issuer.decode(&token).is_err());
    }
}
