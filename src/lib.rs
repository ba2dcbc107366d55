pub mod caps;
pub mod client;
pub mod constants;
pub mod edits;
pub mod errors;
pub mod invalidation;
pub mod references;
pub mod similarity;
pub mod submission;

pub use errors::{Error, Result};
pub use invalidation::{Collection, MutationOutcome};
