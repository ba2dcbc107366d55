// Module declarations
pub(crate) mod similarity_model;
pub(crate) mod similarity_service;
pub(crate) mod similarity_traits;

// Re-export the public interface
pub use similarity_model::JobStatus;
pub use similarity_service::SimilarityService;
pub use similarity_traits::SimilarityClientTrait;
