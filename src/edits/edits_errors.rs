use thiserror::Error;

use super::edits_model::EditStep;
use crate::errors::Error;

/// Failure of one step of the edit sequence. Which variant this is tells
/// the caller what was and was not committed: a rating failure means cap
/// fields were never touched; a cap failure means a changed rating has
/// already been committed and is not rolled back.
#[derive(Debug, Error)]
pub enum EditError {
    #[error("Rating update failed: {0}")]
    Rating(#[source] Box<Error>),
    #[error("Cap update failed: {0}")]
    Cap(#[source] Box<Error>),
}

impl EditError {
    /// The step that failed, for user-visible messages distinguishing
    /// "rating save failed" from "cap details save failed".
    pub fn step(&self) -> EditStep {
        match self {
            EditError::Rating(_) => EditStep::Rating,
            EditError::Cap(_) => EditStep::Cap,
        }
    }
}
