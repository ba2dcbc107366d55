use log::debug;
use std::sync::Arc;

use super::caps_model::BeerCap;
use super::caps_traits::{CapRepositoryTrait, CapServiceTrait};
use crate::edits::{CapEditSnapshot, EditCapInput, EditTransactionCoordinator};
use crate::errors::{Error, Result};
use crate::invalidation::{Collection, MutationOutcome};
use crate::submission::submission_builder::build_from_form;
use crate::submission::{resolve, validate, CapForm, CapImage};

/// Service for managing caps: listings, the create-submission pipeline and
/// the two-step edit flow.
pub struct CapService {
    cap_repository: Arc<dyn CapRepositoryTrait>,
}

impl CapService {
    /// Creates a new CapService instance with an injected repository
    pub fn new(cap_repository: Arc<dyn CapRepositoryTrait>) -> Self {
        Self { cap_repository }
    }
}

#[async_trait::async_trait]
impl CapServiceTrait for CapService {
    async fn get_caps(&self) -> Result<Vec<BeerCap>> {
        self.cap_repository.get_caps().await
    }

    async fn get_cap(&self, cap_id: i64) -> Result<BeerCap> {
        self.cap_repository.get_cap(cap_id).await
    }

    async fn get_caps_by_beer(&self, beer_id: i64) -> Result<Vec<BeerCap>> {
        self.cap_repository.get_caps_by_beer(beer_id).await
    }

    /// Runs the full submission pipeline: validation gate, entity
    /// resolution, payload assembly, then exactly one create call. A
    /// validation failure never reaches the network.
    async fn submit_cap(
        &self,
        form: CapForm,
        image: Option<CapImage>,
    ) -> Result<MutationOutcome<BeerCap>> {
        let errors = validate(&form, image.is_some());
        if !errors.is_empty() {
            return Err(Error::InvalidSubmission(errors));
        }
        let image = image.ok_or_else(|| {
            Error::Unexpected("image missing after validation passed".to_string())
        })?;

        let resolution = resolve(&form)?;
        debug!("Submitting cap, resolution: {:?}", resolution);

        let request = build_from_form(image, &form, resolution);
        let cap = self.cap_repository.create_cap(request).await?;
        Ok(MutationOutcome::new(cap, vec![Collection::Caps]))
    }

    async fn edit_cap(
        &self,
        snapshot: CapEditSnapshot,
        input: EditCapInput,
    ) -> Result<MutationOutcome<()>> {
        let coordinator = EditTransactionCoordinator::new(self.cap_repository.clone());
        coordinator.run(&snapshot, input).await
    }

    async fn delete_cap(&self, cap_id: i64) -> Result<MutationOutcome<()>> {
        debug!("Deleting cap {}", cap_id);
        self.cap_repository.delete_cap(cap_id).await?;
        Ok(MutationOutcome::new((), vec![Collection::Caps]))
    }
}
