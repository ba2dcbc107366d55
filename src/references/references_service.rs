use log::debug;
use std::sync::Arc;

use crate::errors::Result;
use crate::invalidation::{Collection, MutationOutcome};
use crate::references::references_model::*;
use crate::references::{ReferenceRepositoryTrait, ReferenceServiceTrait};

/// Service for managing reference data (countries, brands, beers)
pub struct ReferenceService {
    reference_repository: Arc<dyn ReferenceRepositoryTrait>,
}

impl ReferenceService {
    /// Creates a new ReferenceService instance with an injected repository
    pub fn new(reference_repository: Arc<dyn ReferenceRepositoryTrait>) -> Self {
        Self {
            reference_repository,
        }
    }
}

#[async_trait::async_trait]
impl ReferenceServiceTrait for ReferenceService {
    async fn get_countries(&self) -> Result<Vec<Country>> {
        self.reference_repository.get_countries().await
    }

    async fn get_brands(&self) -> Result<Vec<BeerBrand>> {
        self.reference_repository.get_brands().await
    }

    async fn get_beers(&self) -> Result<Vec<Beer>> {
        self.reference_repository.get_beers().await
    }

    async fn create_country(&self, new_country: NewCountry) -> Result<MutationOutcome<Country>> {
        new_country.validate()?;
        debug!("Creating country '{}'", new_country.name);
        let country = self.reference_repository.create_country(new_country).await?;
        Ok(MutationOutcome::new(country, vec![Collection::Countries]))
    }

    async fn create_brand(&self, new_brand: NewBrand) -> Result<MutationOutcome<BeerBrand>> {
        new_brand.validate()?;
        debug!("Creating brand '{}'", new_brand.name);
        let brand = self.reference_repository.create_brand(new_brand).await?;
        Ok(MutationOutcome::new(brand, vec![Collection::Brands]))
    }

    /// Updates a country. Beers embed their country, so the beers listing
    /// goes stale alongside the countries listing.
    async fn update_country(
        &self,
        country_id: i64,
        update: CountryUpdate,
    ) -> Result<MutationOutcome<Country>> {
        let country = self
            .reference_repository
            .update_country(country_id, update)
            .await?;
        Ok(MutationOutcome::new(
            country,
            vec![Collection::Countries, Collection::Beers],
        ))
    }

    async fn delete_country(&self, country_id: i64) -> Result<MutationOutcome<()>> {
        self.reference_repository.delete_country(country_id).await?;
        Ok(MutationOutcome::new((), vec![Collection::Countries]))
    }

    async fn update_brand(
        &self,
        brand_id: i64,
        update: BrandUpdate,
    ) -> Result<MutationOutcome<BeerBrand>> {
        update.validate()?;
        let brand = self
            .reference_repository
            .update_brand(brand_id, update)
            .await?;
        Ok(MutationOutcome::new(
            brand,
            vec![Collection::Brands, Collection::Beers],
        ))
    }

    async fn delete_brand(&self, brand_id: i64) -> Result<MutationOutcome<()>> {
        self.reference_repository.delete_brand(brand_id).await?;
        Ok(MutationOutcome::new((), vec![Collection::Brands]))
    }

    /// Deletes a beer. Caps of that beer are rendered dangling by the
    /// backend cascade, so the caps listing goes stale too.
    async fn delete_beer(&self, beer_id: i64) -> Result<MutationOutcome<()>> {
        debug!("Deleting beer {}", beer_id);
        self.reference_repository.delete_beer(beer_id).await?;
        Ok(MutationOutcome::new(
            (),
            vec![Collection::Beers, Collection::Caps],
        ))
    }
}
