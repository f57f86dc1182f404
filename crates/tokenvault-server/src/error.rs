use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use tokenvault_core::VaultError;

/// Error returned by HTTP handlers.
///
/// Storage failures carry only a fixed message; the underlying cause is
/// logged and never sent to the client.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("Token not found")]
    NotFound,

    #[error("{0}")]
    Internal(&'static str),
}

impl ApiError {
    pub fn from_vault(err: VaultError, failure: &'static str) -> Self {
        match err {
            VaultError::Validation(msg) => ApiError::BadRequest(msg),
            VaultError::NotFound(_) => ApiError::NotFound,
            other => {
                tracing::error!("{}: {}", failure, other);
                ApiError::Internal(failure)
            }
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = json!({ "error": self.to_string() });
        (self.status(), axum::Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_detail_is_hidden() {
        let err = ApiError::from_vault(
            VaultError::Storage("disk I/O error at /home/me/.tokenvault".to_string()),
            "Failed to save token",
        );
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "Failed to save token");
    }

    #[test]
    fn test_status_mapping() {
        let bad = ApiError::from_vault(VaultError::Validation("missing".into()), "x");
        assert_eq!(bad.status(), StatusCode::BAD_REQUEST);
        assert_eq!(bad.to_string(), "missing");

        let missing = ApiError::from_vault(VaultError::NotFound("acme".into()), "x");
        assert_eq!(missing.status(), StatusCode::NOT_FOUND);
    }
}
