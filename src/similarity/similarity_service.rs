use log::debug;
use std::sync::Arc;

use super::similarity_model::JobStatus;
use super::similarity_traits::SimilarityClientTrait;
use crate::caps::BeerCap;
use crate::errors::Result;
use crate::submission::CapImage;

/// Service wrapping the AI similarity boundary
pub struct SimilarityService {
    similarity_client: Arc<dyn SimilarityClientTrait>,
}

impl SimilarityService {
    pub fn new(similarity_client: Arc<dyn SimilarityClientTrait>) -> Self {
        Self { similarity_client }
    }

    /// Finds caps visually similar to the given image
    pub async fn find_similar_caps(&self, image: &CapImage) -> Result<Vec<BeerCap>> {
        debug!("Querying similar caps for '{}'", image.file_name);
        self.similarity_client.find_similar_caps(image).await
    }

    pub async fn generate_augmentations(&self, per_image: u32) -> Result<JobStatus> {
        debug!("Starting augmentation job, {} per image", per_image);
        self.similarity_client
            .generate_augmentations(per_image)
            .await
    }

    pub async fn generate_embeddings(&self) -> Result<JobStatus> {
        self.similarity_client.generate_embeddings().await
    }

    pub async fn build_index(&self) -> Result<JobStatus> {
        self.similarity_client.build_index().await
    }

    pub async fn clear_augmented(&self) -> Result<JobStatus> {
        self.similarity_client.clear_augmented().await
    }
}
