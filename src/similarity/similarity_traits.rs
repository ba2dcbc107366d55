use super::similarity_model::JobStatus;
use crate::caps::BeerCap;
use crate::errors::Result;
use crate::submission::CapImage;

/// Trait defining the contract with the AI similarity pipeline: one visual
/// query plus the opaque corpus maintenance jobs.
#[async_trait::async_trait]
pub trait SimilarityClientTrait: Send + Sync {
    async fn find_similar_caps(&self, image: &CapImage) -> Result<Vec<BeerCap>>;
    async fn generate_augmentations(&self, per_image: u32) -> Result<JobStatus>;
    async fn generate_embeddings(&self) -> Result<JobStatus>;
    async fn build_index(&self) -> Result<JobStatus>;
    async fn clear_augmented(&self) -> Result<JobStatus>;
}
