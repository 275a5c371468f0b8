use thiserror::Error;

use crate::models::ApiError;

#[derive(Debug, Error, PartialEq)]
pub enum RepositoryError {
    #[error("Entity not found: {0}")]
    NotFound(String),

    #[error("Failed to connect to the database: {0}")]
    ConnectionError(String),

    #[error("Constraint violated: {0}")]
    ConstraintViolation(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("Storage operation failed: {0}")]
    Other(String),
}

impl From<RepositoryError> for ApiError {
    fn from(error: RepositoryError) -> Self {
        match error {
            RepositoryError::NotFound(msg) => ApiError::NotFound(msg),
            RepositoryError::ConnectionError(msg) => ApiError::ServiceUnavailable(msg),
            RepositoryError::ConstraintViolation(msg)
            | RepositoryError::InvalidData(msg)
            | RepositoryError::Other(msg) => ApiError::InternalError(msg),
        }
    }
}
