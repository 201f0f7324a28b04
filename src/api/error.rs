//! Unified API error handling
//!
//! Every endpoint returns `Result<T, ApiError>`; errors render as the
//! FastAPI-compatible body `{"detail": "<message>"}` expected by the
//! frontend.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde::Serialize;

use crate::service::assessment::ScoringError;
use crate::service::chat::ChatStoreError;
use crate::service::exploration::PaperLibraryError;
use crate::service::symptom::SymptomServiceError;

/// Standard error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable error message
    pub detail: String,
}

/// Unified API error type
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ApiError {
    /// Resource not found (404)
    #[error("{0}")]
    NotFound(String),

    /// Malformed request payload (400)
    #[error("{0}")]
    BadRequest(String),

    /// Rejected credentials (401)
    #[error("{0}")]
    Unauthorized(String),

    /// Field-level validation failure (422)
    #[error("{0}")]
    Validation(String),

    /// Internal server error (500)
    #[error("{0}")]
    Internal(String),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let error_type = match self {
            ApiError::NotFound(_) => "not_found",
            ApiError::BadRequest(_) => "bad_request",
            ApiError::Unauthorized(_) => "unauthorized",
            ApiError::Validation(_) => "validation_error",
            ApiError::Internal(_) => "internal_error",
        };

        tracing::error!(
            error_type = error_type,
            status = status.as_u16(),
            message = %self,
            "API error"
        );

        HttpResponse::build(status).json(ErrorResponse {
            detail: self.to_string(),
        })
    }
}

// ============================================================================
// From conversions for service errors
// ============================================================================

impl From<ScoringError> for ApiError {
    fn from(err: ScoringError) -> Self {
        // The scorer's failure boundary: everything it raises surfaces as a
        // single internal error with the triggering message attached
        ApiError::Internal(format!("Error processing risk assessment: {}", err))
    }
}

impl From<SymptomServiceError> for ApiError {
    fn from(err: SymptomServiceError) -> Self {
        ApiError::Internal(err.to_string())
    }
}

impl From<ChatStoreError> for ApiError {
    fn from(err: ChatStoreError) -> Self {
        match err {
            ChatStoreError::EmailAlreadyRegistered | ChatStoreError::RoomAlreadyExists => {
                ApiError::BadRequest(err.to_string())
            }
            ChatStoreError::InvalidCredentials => ApiError::Unauthorized(err.to_string()),
            ChatStoreError::UserNotFound
            | ChatStoreError::SessionNotFound
            | ChatStoreError::RoomNotFound => ApiError::NotFound(err.to_string()),
        }
    }
}

impl From<PaperLibraryError> for ApiError {
    fn from(err: PaperLibraryError) -> Self {
        match err {
            PaperLibraryError::NotFound(_) => ApiError::NotFound(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scoring_errors_surface_as_500_with_prefixed_detail() {
        let err: ApiError = ScoringError::Computation("boom".to_string()).into();
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            err.to_string(),
            "Error processing risk assessment: computation failed: boom"
        );
    }

    #[test]
    fn chat_errors_map_to_matching_statuses() {
        let err: ApiError = ChatStoreError::RoomNotFound.into();
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);

        let err: ApiError = ChatStoreError::InvalidCredentials.into();
        assert_eq!(err.status_code(), StatusCode::UNAUTHORIZED);

        let err: ApiError = ChatStoreError::EmailAlreadyRegistered.into();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }
}
