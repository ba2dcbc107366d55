use chrono::{DateTime, NaiveDate, TimeZone};

use crate::constants::DATE_FORMAT;
use crate::submission::submission_model::{
    BeerResolution, BrandResolution, CapImage, CapForm, CountryResolution, CreateCapRequest,
};

/// Canonical `YYYY-MM-DD` form of a calendar date.
pub fn canonical_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Canonical calendar date of a timezone-aware instant, taken in the
/// instant's own offset. Going through UTC here would shift dates across
/// midnight and silently change the stored collection date.
pub fn canonical_local_date<Tz: TimeZone>(instant: &DateTime<Tz>) -> String {
    canonical_date(instant.date_naive())
}

/// Assembles the single outbound creation payload from the image, the
/// scalar cap fields, and one resolution. Field presence mirrors the
/// resolution shape; blank variant names are dropped rather than sent.
pub fn build_create_request(
    image: CapImage,
    variant_name: Option<String>,
    collected_date: Option<NaiveDate>,
    resolution: BeerResolution,
) -> CreateCapRequest {
    let mut request = CreateCapRequest {
        image,
        variant_name: variant_name.filter(|name| !name.trim().is_empty()),
        collected_date: collected_date.map(canonical_date),
        beer_id: None,
        beer_name: None,
        rating: None,
        beer_brand_id: None,
        beer_brand_name: None,
        country_id: None,
        country_name: None,
    };

    match resolution {
        BeerResolution::Existing { beer_id } => {
            request.beer_id = Some(beer_id);
        }
        BeerResolution::Create {
            name,
            rating,
            brand,
            country,
        } => {
            request.beer_name = Some(name);
            request.rating = rating;
            match brand {
                BrandResolution::Existing { brand_id } => request.beer_brand_id = Some(brand_id),
                BrandResolution::Create { name } => request.beer_brand_name = Some(name),
            }
            match country {
                CountryResolution::Existing { country_id } => {
                    request.country_id = Some(country_id)
                }
                CountryResolution::Create { name } => request.country_name = Some(name),
            }
        }
    }

    request
}

/// Convenience over [`build_create_request`] taking the scalars straight
/// from the form the resolution came from.
pub(crate) fn build_from_form(
    image: CapImage,
    form: &CapForm,
    resolution: BeerResolution,
) -> CreateCapRequest {
    build_create_request(
        image,
        form.variant_name.clone(),
        form.collected_date,
        resolution,
    )
}
