//! Request-level error taxonomy.
//!
//! Every lookup request either fully succeeds or fails with exactly one of
//! these kinds. Upstream diagnostic detail (status, body) is logged where the
//! error is classified; the response body carries only the kind and a short
//! message.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

#[derive(Debug, Error)]
pub enum LookupError {
    /// 400: malformed client input, no upstream call is made
    #[error("{0}")]
    InvalidInput(&'static str),

    /// 404: address unknown to the upstream indexer
    #[error("address not found")]
    NotFound,

    /// 502: upstream kept failing after all retry attempts
    #[error("upstream service unavailable")]
    UpstreamUnavailable,

    /// 500: persistence failed after a successful upstream fetch
    #[error("storage failure")]
    Storage(#[source] sqlx::Error),

    /// 500: anything that fits no other kind
    #[error("internal error")]
    Internal(String),
}

impl LookupError {
    /// Get error name string.
    pub fn name(&self) -> &'static str {
        match self {
            Self::InvalidInput(_) => "INVALID_INPUT",
            Self::NotFound => "NOT_FOUND",
            Self::UpstreamUnavailable => "UPSTREAM_UNAVAILABLE",
            Self::Storage(_) => "STORAGE_FAILURE",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Get HTTP status code.
    pub fn http_status(&self) -> StatusCode {
        match self {
            Self::InvalidInput(_) => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::UpstreamUnavailable => StatusCode::BAD_GATEWAY,
            Self::Storage(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// JSON response body for failed requests.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    /// HTTP status code
    #[schema(example = 400)]
    pub code: u16,
    /// Error name
    #[schema(example = "INVALID_INPUT")]
    pub error: &'static str,
    /// Short human-readable message
    pub message: String,
}

impl IntoResponse for LookupError {
    fn into_response(self) -> Response {
        let status = self.http_status();
        let body = ErrorBody {
            code: status.as_u16(),
            error: self.name(),
            message: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_status_mapping() {
        assert_eq!(
            LookupError::InvalidInput("bad").http_status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(LookupError::NotFound.http_status(), StatusCode::NOT_FOUND);
        assert_eq!(
            LookupError::UpstreamUnavailable.http_status(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            LookupError::Internal("boom".to_string()).http_status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_error_names() {
        assert_eq!(LookupError::NotFound.name(), "NOT_FOUND");
        assert_eq!(
            LookupError::UpstreamUnavailable.name(),
            "UPSTREAM_UNAVAILABLE"
        );
    }

    #[test]
    fn test_message_never_leaks_source_detail() {
        // The Display string for storage failures is fixed; the sqlx detail
        // stays in logs only.
        let err = LookupError::Storage(sqlx::Error::PoolClosed);
        assert_eq!(err.to_string(), "storage failure");
    }
}
