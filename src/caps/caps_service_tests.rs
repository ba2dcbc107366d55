// Test cases for the cap submission pipeline.
#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use crate::caps::{BeerCap, CapRepositoryTrait, CapService, CapServiceTrait, CapUpdate};
    use crate::errors::{Error, Result};
    use crate::invalidation::Collection;
    use crate::references::Beer;
    use crate::submission::{
        BeerChoice, BrandChoice, CapForm, CapImage, CountryChoice, CreateCapRequest,
    };

    // --- Mock cap repository capturing creation payloads ---
    #[derive(Default)]
    struct MockCapRepository {
        created: Mutex<Vec<CreateCapRequest>>,
    }

    impl MockCapRepository {
        fn new() -> Self {
            Self::default()
        }
    }

    #[async_trait::async_trait]
    impl CapRepositoryTrait for MockCapRepository {
        async fn get_caps(&self) -> Result<Vec<BeerCap>> {
            Ok(vec![])
        }

        async fn get_cap(&self, _cap_id: i64) -> Result<BeerCap> {
            Err(Error::Unexpected(
                "MockCapRepository::get_cap not implemented".to_string(),
            ))
        }

        async fn get_caps_by_beer(&self, _beer_id: i64) -> Result<Vec<BeerCap>> {
            Ok(vec![])
        }

        async fn create_cap(&self, request: CreateCapRequest) -> Result<BeerCap> {
            let cap = BeerCap {
                id: 1,
                variant_name: request.variant_name.clone(),
                collected_date: None,
                presigned_url: "https://storage.example/caps/1.jpg".to_string(),
                beer: Some(Beer {
                    id: request.beer_id.unwrap_or(99),
                    name: request.beer_name.clone().unwrap_or_default(),
                    rating: request.rating,
                    country: None,
                    brand: None,
                }),
            };
            self.created.lock().unwrap().push(request);
            Ok(cap)
        }

        async fn update_cap(&self, _cap_id: i64, _update: CapUpdate) -> Result<()> {
            Err(Error::Unexpected(
                "MockCapRepository::update_cap not implemented".to_string(),
            ))
        }

        async fn update_beer_rating(
            &self,
            _beer_id: i64,
            _cap_id: i64,
            _rating: i32,
        ) -> Result<()> {
            Err(Error::Unexpected(
                "MockCapRepository::update_beer_rating not implemented".to_string(),
            ))
        }

        async fn delete_cap(&self, _cap_id: i64) -> Result<()> {
            Ok(())
        }
    }

    fn image() -> CapImage {
        CapImage {
            file_name: "cap.jpg".to_string(),
            content_type: "image/jpeg".to_string(),
            bytes: vec![0xff, 0xd8, 0xff],
        }
    }

    #[tokio::test]
    async fn test_existing_beer_submission_sends_only_the_link() {
        // Existing beer 42, image present: the body carries the link and nothing else.
        let repo = Arc::new(MockCapRepository::new());
        let service = CapService::new(repo.clone());
        let form = CapForm {
            beer: BeerChoice::Existing { beer_id: Some(42) },
            ..CapForm::empty()
        };

        let outcome = service.submit_cap(form, Some(image())).await.unwrap();

        let created = repo.created.lock().unwrap();
        assert_eq!(created.len(), 1);
        assert_eq!(
            created[0].form_fields(),
            vec![("beer_id", "42".to_string())]
        );
        assert_eq!(outcome.stale, vec![Collection::Caps]);
    }

    #[tokio::test]
    async fn test_new_beer_submission_sends_the_resolved_field_group() {
        // New beer with rating 8, existing brand 3 and a new
        // country "Scotland".
        let repo = Arc::new(MockCapRepository::new());
        let service = CapService::new(repo.clone());
        let form = CapForm {
            variant_name: None,
            collected_date: None,
            beer: BeerChoice::New {
                name: "Punk IPA".to_string(),
                rating: Some(8),
                brand: BrandChoice::Existing { brand_id: Some(3) },
                country: CountryChoice::New {
                    name: "Scotland".to_string(),
                },
            },
        };

        service.submit_cap(form, Some(image())).await.unwrap();

        let created = repo.created.lock().unwrap();
        assert_eq!(created.len(), 1);
        assert_eq!(
            created[0].form_fields(),
            vec![
                ("beer_name", "Punk IPA".to_string()),
                ("rating", "8".to_string()),
                ("beer_brand_id", "3".to_string()),
                ("country_name", "Scotland".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_invalid_form_never_reaches_the_network() {
        let repo = Arc::new(MockCapRepository::new());
        let service = CapService::new(repo.clone());

        // Missing image and unpicked beer at once.
        let result = service.submit_cap(CapForm::empty(), None).await;

        match result {
            Err(Error::InvalidSubmission(errors)) => {
                assert_eq!(errors.get("file"), Some("Image is required"));
                assert_eq!(errors.get("beer_id"), Some("Select a Beer"));
            }
            other => panic!("expected InvalidSubmission, got {:?}", other.map(|_| ())),
        }
        assert!(repo.created.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_invalidates_the_listing() {
        let repo = Arc::new(MockCapRepository::new());
        let service = CapService::new(repo);

        let outcome = service.delete_cap(7).await.unwrap();

        assert_eq!(outcome.stale, vec![Collection::Caps]);
    }
}
