use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use streakboard_core::errors::{Error as CoreError, StorageError};

/// Error type returned by every handler.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Bad request: {0}")]
    BadRequest(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl ApiError {
    fn classify(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::Core(CoreError::Storage(StorageError::NotFound(_))) => {
                (StatusCode::NOT_FOUND, "NOT_FOUND")
            }
            ApiError::Core(CoreError::Validation(_)) | ApiError::BadRequest(_) => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR")
            }
            ApiError::Core(CoreError::ConstraintViolation(_)) => {
                (StatusCode::CONFLICT, "CONSTRAINT_VIOLATION")
            }
            ApiError::Core(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = self.classify();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }
        let body = json!({
            "code": code,
            "message": self.to_string(),
        });
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use streakboard_core::errors::ValidationError;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (CoreError::not_found("Goal", 1), StatusCode::NOT_FOUND),
            (
                CoreError::Validation(ValidationError::MissingField("title".to_string())),
                StatusCode::BAD_REQUEST,
            ),
            (
                CoreError::ConstraintViolation("archived".to_string()),
                StatusCode::CONFLICT,
            ),
            (
                CoreError::Storage(StorageError::Unavailable("down".to_string())),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (err, expected) in cases {
            assert_eq!(ApiError::from(err).into_response().status(), expected);
        }
    }
}
