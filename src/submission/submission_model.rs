use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Form-session choice of a brand: link an existing record or define a new
/// one. `Existing { None }` models a dropdown the user has not picked from
/// yet; validation rejects it before resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum BrandChoice {
    Existing { brand_id: Option<i64> },
    New { name: String },
}

/// Form-session choice of a country, same shape as [`BrandChoice`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum CountryChoice {
    Existing { country_id: Option<i64> },
    New { name: String },
}

/// Form-session choice of the beer. Brand and country choices only exist
/// under `New`; an existing beer already fixes both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum BeerChoice {
    Existing {
        beer_id: Option<i64>,
    },
    New {
        name: String,
        rating: Option<i32>,
        brand: BrandChoice,
        country: CountryChoice,
    },
}

/// One form session's state for creating a cap. Consumed exactly once by
/// the submission builder, then discarded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CapForm {
    pub variant_name: Option<String>,
    pub collected_date: Option<NaiveDate>,
    pub beer: BeerChoice,
}

impl CapForm {
    /// Blank form preselecting an existing beer, the way a fresh session
    /// starts.
    pub fn empty() -> Self {
        Self {
            variant_name: None,
            collected_date: None,
            beer: BeerChoice::Existing { beer_id: None },
        }
    }
}

/// The selected image file as handed over by the UI layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapImage {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// Resolved brand reference: what the backend must link versus create.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum BrandResolution {
    Existing { brand_id: i64 },
    Create { name: String },
}

/// Resolved country reference, same shape as [`BrandResolution`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum CountryResolution {
    Existing { country_id: i64 },
    Create { name: String },
}

/// Resolved beer reference. `Existing` carries no brand/country concerns;
/// those are already implied by the stored beer record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum BeerResolution {
    Existing {
        beer_id: i64,
    },
    Create {
        name: String,
        rating: Option<i32>,
        brand: BrandResolution,
        country: CountryResolution,
    },
}

/// Flat creation payload for one cap. Field presence mirrors the resolution
/// shape: either `beer_id` alone, or the new-beer field group with
/// `beer_brand_id` xor `beer_brand_name` and `country_id` xor `country_name`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateCapRequest {
    pub image: CapImage,
    pub variant_name: Option<String>,
    pub collected_date: Option<String>,
    pub beer_id: Option<i64>,
    pub beer_name: Option<String>,
    pub rating: Option<i32>,
    pub beer_brand_id: Option<i64>,
    pub beer_brand_name: Option<String>,
    pub country_id: Option<i64>,
    pub country_name: Option<String>,
}

impl CreateCapRequest {
    /// Text fields of the multipart body, in emission order. The image part
    /// travels separately under the `file` key.
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = Vec::new();
        if let Some(variant_name) = &self.variant_name {
            fields.push(("variant_name", variant_name.clone()));
        }
        if let Some(collected_date) = &self.collected_date {
            fields.push(("collected_date", collected_date.clone()));
        }
        if let Some(beer_id) = self.beer_id {
            fields.push(("beer_id", beer_id.to_string()));
        }
        if let Some(beer_name) = &self.beer_name {
            fields.push(("beer_name", beer_name.clone()));
        }
        if let Some(rating) = self.rating {
            fields.push(("rating", rating.to_string()));
        }
        if let Some(beer_brand_id) = self.beer_brand_id {
            fields.push(("beer_brand_id", beer_brand_id.to_string()));
        }
        if let Some(beer_brand_name) = &self.beer_brand_name {
            fields.push(("beer_brand_name", beer_brand_name.clone()));
        }
        if let Some(country_id) = self.country_id {
            fields.push(("country_id", country_id.to_string()));
        }
        if let Some(country_name) = &self.country_name {
            fields.push(("country_name", country_name.clone()));
        }
        fields
    }
}
