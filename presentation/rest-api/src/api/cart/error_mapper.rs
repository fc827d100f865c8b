use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::cart::errors::CartError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for CartError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, message) = match &self {
            CartError::NotFound => (StatusCode::NOT_FOUND, "Cart not found"),
            CartError::LineNotFound => (StatusCode::NOT_FOUND, "Cart item not found"),
            CartError::ProductNotInCart => (StatusCode::NOT_FOUND, "Product not found in cart"),
            CartError::ProductNotFound => (StatusCode::NOT_FOUND, "Product not found"),
            CartError::InvalidAction => (
                StatusCode::BAD_REQUEST,
                "Invalid action. Use 'increment' or 'decrement'.",
            ),
            CartError::InvalidQuantity => (
                StatusCode::BAD_REQUEST,
                "Quantity must be a positive integer",
            ),
            CartError::QuantityBelowMinimum => (
                StatusCode::BAD_REQUEST,
                "Cannot decrease quantity below 1",
            ),
            CartError::ConcurrentModification => (
                StatusCode::CONFLICT,
                "Cart was modified concurrently, please retry",
            ),
            CartError::Repository(err) => {
                return (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse::unexpected(err)),
                );
            }
        };

        (status, Json(ErrorResponse::new(message, self.to_string())))
    }
}
