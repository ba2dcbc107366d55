use serde::{Deserialize, Serialize};

use crate::errors::Result;
use crate::references::ReferenceError;

/// Country of origin for a beer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Country {
    pub id: i64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Brewery brand
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeerBrand {
    pub id: i64,
    pub name: String,
}

/// A brewed product. Rating and the country/brand links live here and are
/// shared across every cap of this beer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Beer {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub rating: Option<i32>,
    #[serde(default)]
    pub country: Option<Country>,
    // Older backend revisions serialize the brand under `beer_brand`
    #[serde(default, alias = "beer_brand")]
    pub brand: Option<BeerBrand>,
}

/// Input model for creating a standalone country
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewCountry {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl NewCountry {
    /// Validates the new country data
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(
                ReferenceError::InvalidData("Country name cannot be empty".to_string()).into(),
            );
        }
        Ok(())
    }
}

/// Input model for creating a standalone brand
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewBrand {
    pub name: String,
}

impl NewBrand {
    /// Validates the new brand data
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(
                ReferenceError::InvalidData("Brand name cannot be empty".to_string()).into(),
            );
        }
        Ok(())
    }
}

/// Input model for updating an existing country
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Input model for renaming an existing brand
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrandUpdate {
    pub name: String,
}

impl BrandUpdate {
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(
                ReferenceError::InvalidData("Brand name cannot be empty".to_string()).into(),
            );
        }
        Ok(())
    }
}
