//! HTTP error response mapping.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use assethub_domain::error::AssetHubError;

/// Message returned for any failure the caller cannot act on.
pub const INTERNAL_ERROR_MESSAGE: &str = "Something went wrong";

/// Message returned when the request body cannot be read as an asset.
pub const MALFORMED_BODY_MESSAGE: &str = "Malformed request body.";

/// Message returned when a path segment is not an asset id.
pub const INVALID_ID_MESSAGE: &str = "Invalid asset id.";

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
pub struct ErrorBody {
    pub status: &'static str,
    pub message: String,
}

impl ErrorBody {
    fn new(message: impl Into<String>) -> Self {
        Self {
            status: "error",
            message: message.into(),
        }
    }
}

/// Every failure an API handler can return.
#[derive(Debug)]
pub enum ApiError {
    /// Failure from the application layer.
    Domain(AssetHubError),
    /// The body was not valid JSON of the expected shape.
    MalformedBody(JsonRejection),
    /// A path segment was not a valid asset id.
    InvalidId(String),
}

impl From<AssetHubError> for ApiError {
    fn from(err: AssetHubError) -> Self {
        Self::Domain(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::MalformedBody(rejection)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::Domain(AssetHubError::Validation(errors)) => {
                (StatusCode::BAD_REQUEST, errors.to_string())
            }
            Self::Domain(AssetHubError::NotFound(err)) => (StatusCode::NOT_FOUND, err.to_string()),
            Self::Domain(err @ AssetHubError::Storage(_)) => {
                tracing::error!(error = %err, cause = ?err, "internal error while handling request");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    INTERNAL_ERROR_MESSAGE.to_string(),
                )
            }
            Self::MalformedBody(rejection) => {
                tracing::debug!(reason = %rejection.body_text(), "rejected request body");
                (rejection.status(), MALFORMED_BODY_MESSAGE.to_string())
            }
            Self::InvalidId(raw) => {
                tracing::debug!(%raw, "rejected asset id");
                (StatusCode::BAD_REQUEST, INVALID_ID_MESSAGE.to_string())
            }
        };

        (status, Json(ErrorBody::new(message))).into_response()
    }
}
