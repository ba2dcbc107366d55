use serde::{Deserialize, Serialize};

/// Outcome of an opaque pipeline job on the backend. The pipeline itself
/// (augmentation, embedding, index build) is not modeled here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobStatus {
    pub success: bool,
    pub message: String,
}
