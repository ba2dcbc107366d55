use thiserror::Error;

use crate::caps::CapError;
use crate::client::TransportError;
use crate::edits::EditError;
use crate::references::ReferenceError;
use crate::submission::ValidationErrors;

// Create a type alias for Result using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the cap collection core
#[derive(Error, Debug)]
pub enum Error {
    #[error("Submission rejected: {0}")]
    InvalidSubmission(ValidationErrors),

    #[error("Reference data error: {0}")]
    Reference(#[from] ReferenceError),

    #[error("Cap error: {0}")]
    Cap(#[from] CapError),

    #[error("Edit failed: {0}")]
    Edit(#[from] EditError),

    #[error("Transport failure: {0}")]
    Transport(#[from] TransportError),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}
