use super::references_model::*;
use crate::errors::Result;
use crate::invalidation::MutationOutcome;

/// Trait defining the contract for the reference-data backend: the read-only
/// directory the resolver draws candidates from, plus the admin CRUD.
#[async_trait::async_trait]
pub trait ReferenceRepositoryTrait: Send + Sync {
    async fn get_countries(&self) -> Result<Vec<Country>>;
    async fn get_brands(&self) -> Result<Vec<BeerBrand>>;
    async fn get_beers(&self) -> Result<Vec<Beer>>;
    async fn create_country(&self, new_country: NewCountry) -> Result<Country>;
    async fn create_brand(&self, new_brand: NewBrand) -> Result<BeerBrand>;
    async fn update_country(&self, country_id: i64, update: CountryUpdate) -> Result<Country>;
    async fn delete_country(&self, country_id: i64) -> Result<()>;
    async fn update_brand(&self, brand_id: i64, update: BrandUpdate) -> Result<BeerBrand>;
    async fn delete_brand(&self, brand_id: i64) -> Result<()>;
    async fn delete_beer(&self, beer_id: i64) -> Result<()>;
}

/// Trait defining the contract for reference-data service operations.
#[async_trait::async_trait]
pub trait ReferenceServiceTrait: Send + Sync {
    async fn get_countries(&self) -> Result<Vec<Country>>;
    async fn get_brands(&self) -> Result<Vec<BeerBrand>>;
    async fn get_beers(&self) -> Result<Vec<Beer>>;
    async fn create_country(&self, new_country: NewCountry) -> Result<MutationOutcome<Country>>;
    async fn create_brand(&self, new_brand: NewBrand) -> Result<MutationOutcome<BeerBrand>>;
    async fn update_country(
        &self,
        country_id: i64,
        update: CountryUpdate,
    ) -> Result<MutationOutcome<Country>>;
    async fn delete_country(&self, country_id: i64) -> Result<MutationOutcome<()>>;
    async fn update_brand(
        &self,
        brand_id: i64,
        update: BrandUpdate,
    ) -> Result<MutationOutcome<BeerBrand>>;
    async fn delete_brand(&self, brand_id: i64) -> Result<MutationOutcome<()>>;
    async fn delete_beer(&self, beer_id: i64) -> Result<MutationOutcome<()>>;
}
