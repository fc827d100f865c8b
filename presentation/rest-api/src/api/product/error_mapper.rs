use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::product::errors::ProductError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for ProductError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, message) = match &self {
            ProductError::NameEmpty => (StatusCode::BAD_REQUEST, "Product name is required"),
            ProductError::DescriptionEmpty => {
                (StatusCode::BAD_REQUEST, "Product description is required")
            }
            ProductError::InvalidPrice => (
                StatusCode::BAD_REQUEST,
                "Product price must be a non-negative number",
            ),
            ProductError::InfoIncomplete => (
                StatusCode::BAD_REQUEST,
                "Product info requires material, weight, countryOfOrigin, dimensions and type",
            ),
            ProductError::NotFound => (StatusCode::NOT_FOUND, "Product not found"),
            ProductError::Repository(err) => {
                return (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse::unexpected(err)),
                );
            }
        };

        (status, Json(ErrorResponse::new(message, self.to_string())))
    }
}
