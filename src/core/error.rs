use crate::dtos::ApiResponse;
use crate::entities::UnknownStatus;
use crate::repositories::StoreError;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::{http::StatusCode, response::IntoResponse};
use tracing::error;

/// Failure categories, each rendered with its own HTTP status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    NotFound,
    Unauthorized,
    Store,
    Internal,
}

impl ErrorKind {
    pub fn status(&self) -> StatusCode {
        match self {
            ErrorKind::Validation => StatusCode::BAD_REQUEST,
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::Unauthorized => StatusCode::UNAUTHORIZED,
            ErrorKind::Store => StatusCode::SERVICE_UNAVAILABLE,
            ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Error returned by the handlers, rendered as an error envelope
#[derive(Debug)]
pub struct AppError {
    kind: ErrorKind,
    message: String,
}

impl AppError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    // Common error constructors
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Validation, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound, message)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unauthorized, message)
    }

    pub fn internal_server_error(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal, message)
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound => Self::not_found(err.to_string()),
            StoreError::Driver(_) => {
                error!("Store call failed: {}", err);
                Self::new(ErrorKind::Store, err.to_string())
            }
            StoreError::MissingId
            | StoreError::ReadBack(_)
            | StoreError::Encode(_)
            | StoreError::Decode(_) => {
                error!("Store returned unusable data: {}", err);
                Self::new(ErrorKind::Store, err.to_string())
            }
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        Self::validation(format!("Validation error: {}", err))
    }
}

impl From<bson::oid::Error> for AppError {
    fn from(err: bson::oid::Error) -> Self {
        Self::validation(format!("Invalid id: {}", err))
    }
}

impl From<UnknownStatus> for AppError {
    fn from(err: UnknownStatus) -> Self {
        Self::validation(err.to_string())
    }
}

impl From<JsonRejection> for AppError {
    fn from(err: JsonRejection) -> Self {
        Self::validation(err.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(err: QueryRejection) -> Self {
        Self::validation(err.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        (self.kind.status(), ApiResponse::error(self.message)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_errors_map_to_kinds() {
        assert_eq!(AppError::from(StoreError::NotFound).kind(), ErrorKind::NotFound);
        assert_eq!(
            AppError::from(StoreError::NotFound).message(),
            "Insurance company not found"
        );
        assert_eq!(AppError::from(StoreError::MissingId).kind(), ErrorKind::Store);
    }

    #[test]
    fn malformed_ids_are_validation_errors() {
        let err = bson::oid::ObjectId::parse_str("not-an-id").unwrap_err();
        let app_error = AppError::from(err);
        assert_eq!(app_error.kind(), ErrorKind::Validation);
        assert!(app_error.message().starts_with("Invalid id"));
    }

    #[test]
    fn kinds_have_distinct_statuses() {
        assert_eq!(ErrorKind::Validation.status(), StatusCode::BAD_REQUEST);
        assert_eq!(ErrorKind::NotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(ErrorKind::Unauthorized.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(ErrorKind::Store.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(ErrorKind::Internal.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
