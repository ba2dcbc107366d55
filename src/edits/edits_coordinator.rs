use log::{debug, warn};
use std::sync::Arc;

use super::edits_errors::EditError;
use super::edits_model::{CapEditSnapshot, EditCapInput};
use crate::caps::{CapError, CapRepositoryTrait, CapUpdate};
use crate::errors::{Error, Result};
use crate::invalidation::{Collection, MutationOutcome};
use crate::submission::canonical_date;

/// Sequences the two non-atomic updates behind a cap edit: the shared beer
/// rating first, the cap's own fields second. The backend exposes them as
/// independent endpoints with no cross-entity transaction, so the fixed
/// order is what lets a rating failure stop cap fields from being saved on
/// top of it.
pub struct EditTransactionCoordinator {
    cap_repository: Arc<dyn CapRepositoryTrait>,
}

impl EditTransactionCoordinator {
    pub fn new(cap_repository: Arc<dyn CapRepositoryTrait>) -> Self {
        Self { cap_repository }
    }

    /// Runs the edit sequence to a terminal state. Never retries; re-entry
    /// only happens on explicit resubmission by the user.
    ///
    /// An unchanged rating skips the beer update entirely; the rating is
    /// shared across every cap of the beer, so an idle write would still
    /// be a shared-state mutation. If the rating changed but the cap has no
    /// beer link, the sequence stops with `Failed(Rating)` before any call.
    /// A failure in the cap step leaves the already-committed rating in
    /// place; that window is surfaced, not rolled back.
    pub async fn run(
        &self,
        snapshot: &CapEditSnapshot,
        input: EditCapInput,
    ) -> Result<MutationOutcome<()>> {
        debug!(
            "Editing cap {} (beer {:?})",
            snapshot.cap_id, snapshot.beer_id
        );

        if input.rating != snapshot.current_rating.unwrap_or(0) {
            self.update_rating(snapshot, input.rating)
                .await
                .map_err(|e| {
                    warn!("Rating update failed for cap {}: {}", snapshot.cap_id, e);
                    Error::Edit(EditError::Rating(Box::new(e)))
                })?;
        }

        let update = CapUpdate {
            variant_name: input.variant_name,
            collected_date: input.collected_date.map(canonical_date),
        };
        self.cap_repository
            .update_cap(snapshot.cap_id, update)
            .await
            .map_err(|e| {
                warn!("Cap update failed for cap {}: {}", snapshot.cap_id, e);
                Error::Edit(EditError::Cap(Box::new(e)))
            })?;

        // The beer mutation can change sibling caps' displayed rating, so
        // the whole listing goes stale, not just this cap's view.
        Ok(MutationOutcome::new(
            (),
            vec![Collection::Cap(snapshot.cap_id), Collection::Caps],
        ))
    }

    async fn update_rating(&self, snapshot: &CapEditSnapshot, rating: i32) -> Result<()> {
        let beer_id = snapshot.beer_id.ok_or_else(|| {
            Error::Cap(CapError::MissingBeerLink(format!(
                "cap {} has no beer, cannot update rating",
                snapshot.cap_id
            )))
        })?;
        debug!(
            "Updating beer {} rating to {} (triggered by cap {})",
            beer_id, rating, snapshot.cap_id
        );
        self.cap_repository
            .update_beer_rating(beer_id, snapshot.cap_id, rating)
            .await
    }
}
