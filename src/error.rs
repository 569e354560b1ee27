//! Error types for the book inventory server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::path::PathBuf;
use thiserror::Error;

use crate::models::instance::UnknownStatus;

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0} not found")]
    NotFound(String),

    #[error("{0}")]
    InvalidState(String),

    #[error("permission denied: {0}")]
    PermissionDenied(String),

    #[error("{0}")]
    EmptyResult(String),

    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("failed to load dumps: {0}")]
    Load(#[from] LoadErrors),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("internal server error: {0}")]
    Internal(String),
}

/// Failure to read one dump file
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{}: malformed dump: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{}: missing \"{collection}\" collection", .path.display())]
    MissingCollection {
        path: PathBuf,
        collection: &'static str,
    },

    #[error("{}: duplicate {collection} id {id}", .path.display())]
    DuplicateId {
        path: PathBuf,
        collection: &'static str,
        id: i32,
    },
}

/// Every dump failure collected during one startup load
#[derive(Debug)]
pub struct LoadErrors(pub Vec<LoadError>);

impl std::error::Error for LoadErrors {}

impl std::fmt::Display for LoadErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let joined = self
            .0
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "{}", joined)
    }
}

impl From<UnknownStatus> for AppError {
    fn from(e: UnknownStatus) -> Self {
        AppError::BadRequest(e.to_string())
    }
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) | AppError::EmptyResult(_) => StatusCode::NOT_FOUND,
            AppError::InvalidState(_) => StatusCode::CONFLICT,
            AppError::PermissionDenied(_) => StatusCode::FORBIDDEN,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Load(_) | AppError::Config(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
        } else {
            tracing::debug!("Request rejected ({}): {}", status, self);
        }

        (status, self.to_string()).into_response()
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(AppError::NotFound("instance".into()).status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            AppError::InvalidState("instance already in library".into()).status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            AppError::PermissionDenied("invalid admin id".into()).status_code(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(AppError::Internal("lock".into()).status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_load_errors_are_joined() {
        let errors = LoadErrors(vec![
            LoadError::MissingCollection {
                path: PathBuf::from("books.json"),
                collection: "books",
            },
            LoadError::DuplicateId {
                path: PathBuf::from("users.json"),
                collection: "users",
                id: 3,
            },
        ]);
        assert_eq!(
            errors.to_string(),
            "books.json: missing \"books\" collection; users.json: duplicate users id 3"
        );
    }

    #[test]
    fn test_not_found_message() {
        assert_eq!(AppError::NotFound("instance".into()).to_string(), "instance not found");
    }
}
