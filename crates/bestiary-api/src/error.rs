//! Error types for the catalog API.
//!
//! [`ApiError`] unifies all failure modes into a single enum that
//! converts into an Axum HTTP response via its
//! [`IntoResponse`](axum::response::IntoResponse) implementation. Every
//! error body has the shape `{"error": "<message>"}`.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use bestiary_db::DbError;
use bestiary_types::{ErrorBody, InvalidCreatureId, ValidationError};

/// Errors that can occur in the catalog API layer.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Missing or malformed client input.
    #[error("{0}")]
    Validation(String),

    /// The requested resource does not exist.
    #[error("{0}")]
    NotFound(String),

    /// The datastore rejected a write on an integrity rule. The message
    /// is the datastore's own.
    #[error("{0}")]
    Constraint(String),

    /// A write failed for any other reason.
    #[error("{0}")]
    WriteFailed(String),

    /// A read failed unexpectedly.
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    /// Map a datastore failure on a write endpoint.
    ///
    /// Every write failure is the client's to see: 400 with the
    /// datastore message.
    pub fn from_write(err: DbError) -> Self {
        match err {
            DbError::Constraint { message, .. } => Self::Constraint(message),
            other => Self::WriteFailed(other.to_string()),
        }
    }

    /// Map a datastore failure on a read endpoint.
    pub fn from_read(err: &DbError) -> Self {
        Self::Internal(err.to_string())
    }

    /// The HTTP status this error maps to.
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::Constraint(_) | Self::WriteFailed(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self::Validation(err.message)
    }
}

impl From<InvalidCreatureId> for ApiError {
    fn from(err: InvalidCreatureId) -> Self {
        Self::Validation(err.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Validation(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), error = %self, "Request failed");
        } else {
            tracing::debug!(status = status.as_u16(), error = %self, "Request rejected");
        }

        let body = ErrorBody {
            error: self.to_string(),
        };

        (status, axum::Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use bestiary_db::ConstraintKind;

    use super::*;

    #[test]
    fn write_constraint_keeps_raw_message() {
        let err = ApiError::from_write(DbError::Constraint {
            kind: ConstraintKind::Unique,
            message: String::from("duplicate key value violates unique constraint \"species_pkey\""),
        });
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            err.to_string(),
            "duplicate key value violates unique constraint \"species_pkey\""
        );
    }

    #[test]
    fn write_record_not_found_is_bad_request() {
        let err = ApiError::from_write(DbError::species_not_found("Gleeble"));
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn read_failure_is_internal() {
        let err = ApiError::from_read(&DbError::Config(String::from("boom")));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn invalid_id_message() {
        let err = ApiError::from(InvalidCreatureId);
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "Invalid ID");
    }
}
