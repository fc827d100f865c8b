use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::user::errors::AuthError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for AuthError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let message = match &self {
            AuthError::NameEmpty => "Name is required",
            AuthError::EmailInvalid => "A valid email is required",
            AuthError::PhoneNumberEmpty => "Phone number is required",
            AuthError::PasswordEmpty => "Password is required",
            AuthError::UserAlreadyExists => "User already exists",
            AuthError::UserNotFound => "User not found",
            AuthError::OtpExpired => "OTP has expired",
            AuthError::OtpInvalid => "Invalid OTP",
            AuthError::OtpAlreadyVerified => "OTP already verified",
            AuthError::OtpNotVerified => "Please verify your OTP first",
            AuthError::InvalidCredentials => "Invalid credentials",
            AuthError::Hashing(_)
            | AuthError::Token(_)
            | AuthError::EmailDelivery(_)
            | AuthError::Repository(_) => {
                return (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse::unexpected(&self)),
                );
            }
        };

        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new(message, self.to_string())),
        )
    }
}
