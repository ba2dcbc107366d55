use log::debug;
use reqwest::{multipart, Client, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;

use super::client_errors::TransportError;
use crate::caps::{BeerCap, CapRepositoryTrait, CapUpdate};
use crate::errors::Result;
use crate::references::{
    Beer, BeerBrand, BrandUpdate, Country, CountryUpdate, NewBrand, NewCountry,
    ReferenceRepositoryTrait,
};
use crate::similarity::{JobStatus, SimilarityClientTrait};
use crate::submission::{CapImage, CreateCapRequest};

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Connection settings for the backend API
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

/// HTTP implementation of the repository traits against the backend REST
/// API. Creates go out as multipart (they carry the image file or mimic the
/// backend's form endpoints), updates as JSON PATCH.
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .unwrap_or_else(|_| Client::new());
        let base_url = config.base_url.trim_end_matches('/').to_string();
        ApiClient { client, base_url }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn check(response: Response) -> std::result::Result<Response, TransportError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        Err(TransportError::Status {
            status: status.as_u16(),
            body,
        })
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
        let decoded = response
            .json::<T>()
            .await
            .map_err(|e| TransportError::Decode(e.to_string()))?;
        Ok(decoded)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let response = self
            .client
            .get(self.url(path))
            .send()
            .await
            .map_err(TransportError::from)?;
        Self::decode(Self::check(response).await?).await
    }

    async fn delete(&self, path: &str) -> Result<()> {
        let response = self
            .client
            .delete(self.url(path))
            .send()
            .await
            .map_err(TransportError::from)?;
        Self::check(response).await?;
        Ok(())
    }

    fn image_part(image: &CapImage) -> std::result::Result<multipart::Part, TransportError> {
        let part = multipart::Part::bytes(image.bytes.clone())
            .file_name(image.file_name.clone())
            .mime_str(&image.content_type)?;
        Ok(part)
    }
}

#[async_trait::async_trait]
impl ReferenceRepositoryTrait for ApiClient {
    async fn get_countries(&self) -> Result<Vec<Country>> {
        self.get_json("/countries/").await
    }

    async fn get_brands(&self) -> Result<Vec<BeerBrand>> {
        self.get_json("/beer_brands/").await
    }

    async fn get_beers(&self) -> Result<Vec<Beer>> {
        let response = self
            .client
            .get(self.url("/beers/"))
            .query(&[("include_beer_brand", "true"), ("include_country", "true")])
            .send()
            .await
            .map_err(TransportError::from)?;
        Self::decode(Self::check(response).await?).await
    }

    async fn create_country(&self, new_country: NewCountry) -> Result<Country> {
        debug!("POST /countries/ '{}'", new_country.name);
        let mut form = multipart::Form::new().text("name", new_country.name);
        if let Some(description) = new_country.description {
            form = form.text("description", description);
        }
        let response = self
            .client
            .post(self.url("/countries/"))
            .multipart(form)
            .send()
            .await
            .map_err(TransportError::from)?;
        Self::decode(Self::check(response).await?).await
    }

    async fn create_brand(&self, new_brand: NewBrand) -> Result<BeerBrand> {
        debug!("POST /beer_brands/ '{}'", new_brand.name);
        let form = multipart::Form::new().text("name", new_brand.name);
        let response = self
            .client
            .post(self.url("/beer_brands/"))
            .multipart(form)
            .send()
            .await
            .map_err(TransportError::from)?;
        Self::decode(Self::check(response).await?).await
    }

    async fn update_country(&self, country_id: i64, update: CountryUpdate) -> Result<Country> {
        let response = self
            .client
            .patch(self.url(&format!("/countries/{}/", country_id)))
            .json(&update)
            .send()
            .await
            .map_err(TransportError::from)?;
        Self::decode(Self::check(response).await?).await
    }

    async fn delete_country(&self, country_id: i64) -> Result<()> {
        self.delete(&format!("/countries/{}/", country_id)).await
    }

    async fn update_brand(&self, brand_id: i64, update: BrandUpdate) -> Result<BeerBrand> {
        let response = self
            .client
            .patch(self.url(&format!("/beer_brands/{}/", brand_id)))
            .json(&update)
            .send()
            .await
            .map_err(TransportError::from)?;
        Self::decode(Self::check(response).await?).await
    }

    async fn delete_brand(&self, brand_id: i64) -> Result<()> {
        self.delete(&format!("/beer_brands/{}/", brand_id)).await
    }

    async fn delete_beer(&self, beer_id: i64) -> Result<()> {
        self.delete(&format!("/beers/{}/", beer_id)).await
    }
}

#[async_trait::async_trait]
impl CapRepositoryTrait for ApiClient {
    async fn get_caps(&self) -> Result<Vec<BeerCap>> {
        self.get_json("/beer_caps/").await
    }

    async fn get_cap(&self, cap_id: i64) -> Result<BeerCap> {
        self.get_json(&format!("/beer_caps/{}/", cap_id)).await
    }

    async fn get_caps_by_beer(&self, beer_id: i64) -> Result<Vec<BeerCap>> {
        self.get_json(&format!("/beer_caps/by-beer/{}/", beer_id))
            .await
    }

    async fn create_cap(&self, request: CreateCapRequest) -> Result<BeerCap> {
        debug!("POST /beer_caps/ ({} bytes)", request.image.bytes.len());
        let mut form = multipart::Form::new().part("file", Self::image_part(&request.image)?);
        for (key, value) in request.form_fields() {
            form = form.text(key, value);
        }
        let response = self
            .client
            .post(self.url("/beer_caps/"))
            .multipart(form)
            .send()
            .await
            .map_err(TransportError::from)?;
        Self::decode(Self::check(response).await?).await
    }

    async fn update_cap(&self, cap_id: i64, update: CapUpdate) -> Result<()> {
        let response = self
            .client
            .patch(self.url(&format!("/beer_caps/{}/", cap_id)))
            .json(&update)
            .send()
            .await
            .map_err(TransportError::from)?;
        Self::check(response).await?;
        Ok(())
    }

    async fn update_beer_rating(&self, beer_id: i64, cap_id: i64, rating: i32) -> Result<()> {
        let response = self
            .client
            .patch(self.url(&format!("/beers/{}/", beer_id)))
            .query(&[("cap_id", cap_id)])
            .json(&serde_json::json!({ "rating": rating }))
            .send()
            .await
            .map_err(TransportError::from)?;
        Self::check(response).await?;
        Ok(())
    }

    async fn delete_cap(&self, cap_id: i64) -> Result<()> {
        self.delete(&format!("/beer_caps/{}/", cap_id)).await
    }
}

#[async_trait::async_trait]
impl SimilarityClientTrait for ApiClient {
    async fn find_similar_caps(&self, image: &CapImage) -> Result<Vec<BeerCap>> {
        let form = multipart::Form::new().part("file", Self::image_part(image)?);
        let response = self
            .client
            .post(self.url("/similarity/query"))
            .multipart(form)
            .send()
            .await
            .map_err(TransportError::from)?;
        Self::decode(Self::check(response).await?).await
    }

    async fn generate_augmentations(&self, per_image: u32) -> Result<JobStatus> {
        let response = self
            .client
            .post(self.url("/augmented_caps/generate_all/"))
            .query(&[("augmentations_per_image", per_image)])
            .send()
            .await
            .map_err(TransportError::from)?;
        Self::decode(Self::check(response).await?).await
    }

    async fn generate_embeddings(&self) -> Result<JobStatus> {
        let response = self
            .client
            .post(self.url("/augmented_caps/generate_embeddings/"))
            .send()
            .await
            .map_err(TransportError::from)?;
        Self::decode(Self::check(response).await?).await
    }

    async fn build_index(&self) -> Result<JobStatus> {
        let response = self
            .client
            .post(self.url("/augmented_caps/generate_index/"))
            .send()
            .await
            .map_err(TransportError::from)?;
        Self::decode(Self::check(response).await?).await
    }

    async fn clear_augmented(&self) -> Result<JobStatus> {
        let response = self
            .client
            .delete(self.url("/augmented_caps/all/"))
            .send()
            .await
            .map_err(TransportError::from)?;
        Self::decode(Self::check(response).await?).await
    }
}
