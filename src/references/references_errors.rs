use thiserror::Error;

/// Custom error type for reference-data operations
#[derive(Debug, Error)]
pub enum ReferenceError {
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Invalid data: {0}")]
    InvalidData(String),
    #[error("Backend error: {0}")]
    BackendError(String),
}

impl From<ReferenceError> for String {
    fn from(error: ReferenceError) -> Self {
        error.to_string()
    }
}
