// Test cases for the edit transaction coordinator.
#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use std::sync::{Arc, Mutex};

    use crate::caps::{BeerCap, CapError, CapRepositoryTrait, CapUpdate};
    use crate::client::TransportError;
    use crate::edits::{CapEditSnapshot, EditCapInput, EditError, EditStep, EditTransactionCoordinator};
    use crate::errors::{Error, Result};
    use crate::invalidation::Collection;
    use crate::submission::CreateCapRequest;

    // --- Mock cap repository recording every call in order ---
    #[derive(Default)]
    struct MockCapRepository {
        calls: Mutex<Vec<String>>,
        rating_updates: Mutex<Vec<(i64, i64, i32)>>,
        cap_updates: Mutex<Vec<(i64, CapUpdate)>>,
        fail_rating_update: bool,
        fail_cap_update: bool,
    }

    impl MockCapRepository {
        fn new() -> Self {
            Self::default()
        }

        fn call_names(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait::async_trait]
    impl CapRepositoryTrait for MockCapRepository {
        async fn get_caps(&self) -> Result<Vec<BeerCap>> {
            Err(Error::Unexpected(
                "MockCapRepository::get_caps not implemented".to_string(),
            ))
        }

        async fn get_cap(&self, _cap_id: i64) -> Result<BeerCap> {
            Err(Error::Unexpected(
                "MockCapRepository::get_cap not implemented".to_string(),
            ))
        }

        async fn get_caps_by_beer(&self, _beer_id: i64) -> Result<Vec<BeerCap>> {
            Err(Error::Unexpected(
                "MockCapRepository::get_caps_by_beer not implemented".to_string(),
            ))
        }

        async fn create_cap(&self, _request: CreateCapRequest) -> Result<BeerCap> {
            Err(Error::Unexpected(
                "MockCapRepository::create_cap not implemented".to_string(),
            ))
        }

        async fn update_cap(&self, cap_id: i64, update: CapUpdate) -> Result<()> {
            self.calls.lock().unwrap().push("update_cap".to_string());
            if self.fail_cap_update {
                return Err(TransportError::Status {
                    status: 500,
                    body: "cap update rejected".to_string(),
                }
                .into());
            }
            self.cap_updates.lock().unwrap().push((cap_id, update));
            Ok(())
        }

        async fn update_beer_rating(&self, beer_id: i64, cap_id: i64, rating: i32) -> Result<()> {
            self.calls
                .lock()
                .unwrap()
                .push("update_beer_rating".to_string());
            if self.fail_rating_update {
                return Err(TransportError::Status {
                    status: 500,
                    body: "rating update rejected".to_string(),
                }
                .into());
            }
            self.rating_updates
                .lock()
                .unwrap()
                .push((beer_id, cap_id, rating));
            Ok(())
        }

        async fn delete_cap(&self, _cap_id: i64) -> Result<()> {
            Err(Error::Unexpected(
                "MockCapRepository::delete_cap not implemented".to_string(),
            ))
        }
    }

    fn snapshot() -> CapEditSnapshot {
        CapEditSnapshot {
            cap_id: 9,
            beer_id: Some(5),
            current_rating: Some(7),
        }
    }

    fn input(rating: i32) -> EditCapInput {
        EditCapInput {
            variant_name: Some("Winter Edition".to_string()),
            rating,
            collected_date: None,
        }
    }

    fn failed_step(result: Result<crate::invalidation::MutationOutcome<()>>) -> EditStep {
        match result {
            Err(Error::Edit(edit_error)) => edit_error.step(),
            other => panic!("expected an edit error, got {:?}", other.map(|_| ())),
        }
    }

    #[tokio::test]
    async fn test_unchanged_rating_skips_the_beer_update() {
        // Cap 9, beer 5, rating 7 -> 7, variant changed.
        let repo = Arc::new(MockCapRepository::new());
        let coordinator = EditTransactionCoordinator::new(repo.clone());

        coordinator.run(&snapshot(), input(7)).await.unwrap();

        assert_eq!(repo.call_names(), vec!["update_cap"]);
        assert!(repo.rating_updates.lock().unwrap().is_empty());
        let cap_updates = repo.cap_updates.lock().unwrap();
        assert_eq!(cap_updates.len(), 1);
        assert_eq!(cap_updates[0].0, 9);
        assert_eq!(
            cap_updates[0].1.variant_name,
            Some("Winter Edition".to_string())
        );
    }

    #[tokio::test]
    async fn test_changed_rating_updates_beer_before_cap() {
        let repo = Arc::new(MockCapRepository::new());
        let coordinator = EditTransactionCoordinator::new(repo.clone());

        coordinator.run(&snapshot(), input(9)).await.unwrap();

        assert_eq!(repo.call_names(), vec!["update_beer_rating", "update_cap"]);
        assert_eq!(*repo.rating_updates.lock().unwrap(), vec![(5, 9, 9)]);
    }

    #[tokio::test]
    async fn test_never_rated_beer_compares_as_zero() {
        let repo = Arc::new(MockCapRepository::new());
        let coordinator = EditTransactionCoordinator::new(repo.clone());
        let snapshot = CapEditSnapshot {
            current_rating: None,
            ..snapshot()
        };

        // Submitting 0 for a never-rated beer is not a change.
        coordinator.run(&snapshot, input(0)).await.unwrap();

        assert_eq!(repo.call_names(), vec!["update_cap"]);
    }

    #[tokio::test]
    async fn test_rating_failure_stops_the_sequence() {
        let repo = Arc::new(MockCapRepository {
            fail_rating_update: true,
            ..MockCapRepository::new()
        });
        let coordinator = EditTransactionCoordinator::new(repo.clone());

        let result = coordinator.run(&snapshot(), input(9)).await;

        assert_eq!(failed_step(result), EditStep::Rating);
        assert_eq!(repo.call_names(), vec!["update_beer_rating"]);
        assert!(repo.cap_updates.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_cap_failure_reports_cap_step_after_committed_rating() {
        let repo = Arc::new(MockCapRepository {
            fail_cap_update: true,
            ..MockCapRepository::new()
        });
        let coordinator = EditTransactionCoordinator::new(repo.clone());

        let result = coordinator.run(&snapshot(), input(9)).await;

        // The rating is already committed by the time the cap step fails.
        assert_eq!(failed_step(result), EditStep::Cap);
        assert_eq!(*repo.rating_updates.lock().unwrap(), vec![(5, 9, 9)]);
    }

    #[tokio::test]
    async fn test_missing_beer_link_fails_the_rating_step_without_calls() {
        let repo = Arc::new(MockCapRepository::new());
        let coordinator = EditTransactionCoordinator::new(repo.clone());
        let snapshot = CapEditSnapshot {
            beer_id: None,
            current_rating: None,
            ..snapshot()
        };

        let result = coordinator.run(&snapshot, input(9)).await;

        match result {
            Err(Error::Edit(EditError::Rating(source))) => match *source {
                Error::Cap(CapError::MissingBeerLink(_)) => {}
                other => panic!("expected MissingBeerLink, got {}", other),
            },
            other => panic!("expected a rating edit error, got {:?}", other.map(|_| ())),
        }
        assert!(repo.call_names().is_empty());
    }

    #[tokio::test]
    async fn test_missing_beer_link_is_harmless_when_rating_is_unchanged() {
        let repo = Arc::new(MockCapRepository::new());
        let coordinator = EditTransactionCoordinator::new(repo.clone());
        let snapshot = CapEditSnapshot {
            beer_id: None,
            current_rating: None,
            ..snapshot()
        };

        coordinator.run(&snapshot, input(0)).await.unwrap();

        assert_eq!(repo.call_names(), vec!["update_cap"]);
    }

    #[tokio::test]
    async fn test_done_invalidates_the_cap_view_and_the_listing() {
        let repo = Arc::new(MockCapRepository::new());
        let coordinator = EditTransactionCoordinator::new(repo.clone());

        let outcome = coordinator.run(&snapshot(), input(9)).await.unwrap();

        assert_eq!(outcome.stale, vec![Collection::Cap(9), Collection::Caps]);
    }

    #[tokio::test]
    async fn test_collected_date_is_canonicalized() {
        let repo = Arc::new(MockCapRepository::new());
        let coordinator = EditTransactionCoordinator::new(repo.clone());
        let input = EditCapInput {
            variant_name: None,
            rating: 7,
            collected_date: NaiveDate::from_ymd_opt(2023, 6, 15),
        };

        coordinator.run(&snapshot(), input).await.unwrap();

        let cap_updates = repo.cap_updates.lock().unwrap();
        assert_eq!(
            cap_updates[0].1.collected_date,
            Some("2023-06-15".to_string())
        );
    }
}
