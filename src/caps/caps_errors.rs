use thiserror::Error;

/// Custom error type for cap-related operations
#[derive(Debug, Error)]
pub enum CapError {
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Missing beer link: {0}")]
    MissingBeerLink(String),
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

impl From<CapError> for String {
    fn from(error: CapError) -> Self {
        error.to_string()
    }
}
