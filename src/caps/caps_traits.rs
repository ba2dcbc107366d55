use super::caps_model::{BeerCap, CapUpdate};
use crate::edits::{CapEditSnapshot, EditCapInput};
use crate::errors::Result;
use crate::invalidation::MutationOutcome;
use crate::submission::{CapForm, CapImage, CreateCapRequest};

/// Trait defining the contract for the cap mutation boundary. One method
/// per backend endpoint; no retries and no sequencing here, that is the
/// service and coordinator's job.
#[async_trait::async_trait]
pub trait CapRepositoryTrait: Send + Sync {
    async fn get_caps(&self) -> Result<Vec<BeerCap>>;
    async fn get_cap(&self, cap_id: i64) -> Result<BeerCap>;
    async fn get_caps_by_beer(&self, beer_id: i64) -> Result<Vec<BeerCap>>;
    async fn create_cap(&self, request: CreateCapRequest) -> Result<BeerCap>;
    async fn update_cap(&self, cap_id: i64, update: CapUpdate) -> Result<()>;
    /// `cap_id` is carried for backend auditing of which cap triggered the
    /// change; the mutation itself is scoped to the beer.
    async fn update_beer_rating(&self, beer_id: i64, cap_id: i64, rating: i32) -> Result<()>;
    async fn delete_cap(&self, cap_id: i64) -> Result<()>;
}

/// Trait defining the contract for cap service operations.
#[async_trait::async_trait]
pub trait CapServiceTrait: Send + Sync {
    async fn get_caps(&self) -> Result<Vec<BeerCap>>;
    async fn get_cap(&self, cap_id: i64) -> Result<BeerCap>;
    async fn get_caps_by_beer(&self, beer_id: i64) -> Result<Vec<BeerCap>>;
    async fn submit_cap(
        &self,
        form: CapForm,
        image: Option<CapImage>,
    ) -> Result<MutationOutcome<BeerCap>>;
    async fn edit_cap(
        &self,
        snapshot: CapEditSnapshot,
        input: EditCapInput,
    ) -> Result<MutationOutcome<()>>;
    async fn delete_cap(&self, cap_id: i64) -> Result<MutationOutcome<()>>;
}
