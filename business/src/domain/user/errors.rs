#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("auth.name_empty")]
    NameEmpty,
    #[error("auth.email_invalid")]
    EmailInvalid,
    #[error("auth.phone_number_empty")]
    PhoneNumberEmpty,
    #[error("auth.password_empty")]
    PasswordEmpty,
    #[error("auth.user_already_exists")]
    UserAlreadyExists,
    #[error("auth.user_not_found")]
    UserNotFound,
    #[error("auth.otp_expired")]
    OtpExpired,
    #[error("auth.otp_invalid")]
    OtpInvalid,
    #[error("auth.otp_already_verified")]
    OtpAlreadyVerified,
    #[error("auth.otp_not_verified")]
    OtpNotVerified,
    #[error("auth.invalid_credentials")]
    InvalidCredentials,
    #[error("auth.hashing_failed: {0}")]
    Hashing(String),
    #[error("auth.token_failed: {0}")]
    Token(String),
    #[error("auth.email_delivery_failed: {0}")]
    EmailDelivery(String),
    #[error(transparent)]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
