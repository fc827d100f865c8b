use std::fmt::Display;

use poem::http::StatusCode;
use poem::{IntoResponse, Response};
use poem_openapi::{Object, payload::Json};

pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

#[derive(Object, Debug)]
pub struct ErrorDetails {
    /// Machine-readable error code, e.g. `cart.not_found`
    pub code: String,
    /// Underlying failure, present on unexpected errors only
    #[oai(skip_serializing_if_is_none)]
    pub error: Option<String>,
}

/// Envelope returned by every failing endpoint.
#[derive(Object, Debug)]
pub struct ErrorResponse {
    pub status: bool,
    pub message: String,
    pub data: ErrorDetails,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            status: false,
            message: message.into(),
            data: ErrorDetails {
                code: code.into(),
                error: None,
            },
        }
    }

    /// 500 body carrying the underlying failure message.
    pub fn unexpected(err: &impl Display) -> Self {
        Self {
            status: false,
            message: INTERNAL_ERROR_MESSAGE.to_string(),
            data: ErrorDetails {
                code: "internal_error".to_string(),
                error: Some(err.to_string()),
            },
        }
    }
}

pub trait IntoErrorResponse: Sized {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);

    /// Like `into_error_response`, with `failure` as the message of 5xx bodies.
    fn into_error_response_or(self, failure: &str) -> (StatusCode, Json<ErrorResponse>) {
        let (status, mut json) = self.into_error_response();
        if status.is_server_error() {
            json.0.message = failure.to_string();
        }
        (status, json)
    }
}

/// 400 body for request fields that fail to parse before reaching a use case.
pub fn invalid_field(field: &str) -> Json<ErrorResponse> {
    Json(ErrorResponse::new(
        format!("Invalid {}", field),
        format!("request.invalid_{}", field.replace(' ', "_")),
    ))
}

/// Rewrites errors raised by the framework itself (unparseable bodies,
/// missing parameters, unknown routes) into the common envelope.
pub async fn error_envelope(err: poem::Error) -> Response {
    let status = err.status();
    let (message, code) = match status {
        StatusCode::BAD_REQUEST => ("Invalid request", "request.malformed"),
        StatusCode::NOT_FOUND => ("Resource not found", "request.not_found"),
        StatusCode::METHOD_NOT_ALLOWED => ("Method not allowed", "request.method_not_allowed"),
        status if status.is_server_error() => (INTERNAL_ERROR_MESSAGE, "internal_error"),
        _ => ("Request rejected", "request.rejected"),
    };
    tracing::debug!(status = status.as_u16(), error = %err, "request rejected before handler");

    let mut body = ErrorResponse::new(message, code);
    body.data.error = Some(err.to_string());
    Json(body).with_status(status).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Boom;

    impl IntoErrorResponse for Boom {
        fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::unexpected(&"connection reset")),
            )
        }
    }

    #[test]
    fn should_replace_message_of_server_errors_only() {
        // Act
        let (status, json) = Boom.into_error_response_or("Error fetching cart");

        // Assert
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!json.0.status);
        assert_eq!(json.0.message, "Error fetching cart");
        assert_eq!(json.0.data.error.as_deref(), Some("connection reset"));
    }

    #[test]
    fn should_build_field_validation_errors() {
        let json = invalid_field("product id");

        assert_eq!(json.0.message, "Invalid product id");
        assert_eq!(json.0.data.code, "request.invalid_product_id");
        assert!(json.0.data.error.is_none());
    }

    #[tokio::test]
    async fn should_wrap_framework_errors_in_envelope() {
        // Arrange
        let err = poem::Error::from_string("invalid integer", StatusCode::BAD_REQUEST);

        // Act
        let response = error_envelope(err).await;

        // Assert
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: serde_json::Value =
            serde_json::from_str(&response.into_body().into_string().await.unwrap()).unwrap();
        assert_eq!(body["status"], false);
        assert_eq!(body["message"], "Invalid request");
        assert_eq!(body["data"]["code"], "request.malformed");
        assert_eq!(body["data"]["error"], "invalid integer");
    }
}
