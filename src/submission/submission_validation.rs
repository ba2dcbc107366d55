use std::collections::BTreeMap;
use std::fmt;

use crate::constants::{MAX_RATING, MIN_RATING};
use crate::submission::submission_model::{BeerChoice, BrandChoice, CapForm, CountryChoice};

/// Field-keyed validation messages. Empty means the submission may proceed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(BTreeMap<&'static str, String>);

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }

    pub(crate) fn insert(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub(crate) fn single(field: &'static str, message: impl Into<String>) -> Self {
        let mut errors = Self::default();
        errors.insert(field, message);
        errors
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in self.0.iter() {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{}: {}", field, message)?;
            first = false;
        }
        Ok(())
    }
}

/// Gates a cap submission. Every applicable rule runs, no short-circuit, so
/// the caller can show all field errors at once. Brand and country rules
/// only exist when the beer itself is new; an existing beer already fixes
/// both links.
pub fn validate(form: &CapForm, has_image: bool) -> ValidationErrors {
    let mut errors = ValidationErrors::default();

    if !has_image {
        errors.insert("file", "Image is required");
    }

    match &form.beer {
        BeerChoice::Existing { beer_id } => {
            if beer_id.is_none() {
                errors.insert("beer_id", "Select a Beer");
            }
        }
        BeerChoice::New {
            name,
            rating,
            brand,
            country,
        } => {
            if name.trim().is_empty() {
                errors.insert("beer_name", "Beer Name is required");
            }
            if let Some(rating) = rating {
                if *rating < MIN_RATING || *rating > MAX_RATING {
                    errors.insert("rating", "Rating must be 0-10");
                }
            }
            match brand {
                BrandChoice::New { name } => {
                    if name.trim().is_empty() {
                        errors.insert("brand_name", "Brand Name is required");
                    }
                }
                BrandChoice::Existing { brand_id } => {
                    if brand_id.is_none() {
                        errors.insert("brand_id", "Select a Brand");
                    }
                }
            }
            match country {
                CountryChoice::New { name } => {
                    if name.trim().is_empty() {
                        errors.insert("country_name", "Country Name is required");
                    }
                }
                CountryChoice::Existing { country_id } => {
                    if country_id.is_none() {
                        errors.insert("country_id", "Select a Country");
                    }
                }
            }
        }
    }

    errors
}
