use crate::errors::{Error, Result};
use crate::submission::submission_model::{
    BeerChoice, BeerResolution, BrandChoice, BrandResolution, CapForm, CountryChoice,
    CountryResolution,
};
use crate::submission::submission_validation::ValidationErrors;

/// Turns a validated form into the structural description of what the
/// backend must link versus create. Purely structural: no I/O, no lookup in
/// the reference directory. An existing id that no longer exists fails
/// downstream, not here.
///
/// Precondition: [`validate`](crate::submission::validate) passed. An
/// unpicked `Existing` selection is still surfaced as an error rather than
/// a panic, since it indicates a caller that skipped validation.
pub fn resolve(form: &CapForm) -> Result<BeerResolution> {
    match &form.beer {
        BeerChoice::Existing { beer_id } => {
            let beer_id = beer_id.ok_or_else(|| unresolved("beer_id", "Select a Beer"))?;
            Ok(BeerResolution::Existing { beer_id })
        }
        BeerChoice::New {
            name,
            rating,
            brand,
            country,
        } => {
            let brand = match brand {
                BrandChoice::Existing { brand_id } => BrandResolution::Existing {
                    brand_id: brand_id.ok_or_else(|| unresolved("brand_id", "Select a Brand"))?,
                },
                BrandChoice::New { name } => BrandResolution::Create {
                    name: name.trim().to_string(),
                },
            };
            let country = match country {
                CountryChoice::Existing { country_id } => CountryResolution::Existing {
                    country_id: country_id
                        .ok_or_else(|| unresolved("country_id", "Select a Country"))?,
                },
                CountryChoice::New { name } => CountryResolution::Create {
                    name: name.trim().to_string(),
                },
            };
            Ok(BeerResolution::Create {
                name: name.trim().to_string(),
                rating: *rating,
                brand,
                country,
            })
        }
    }
}

fn unresolved(field: &'static str, message: &str) -> Error {
    Error::InvalidSubmission(ValidationErrors::single(field, message))
}
