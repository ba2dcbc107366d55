use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::references::Beer;

/// A photographed physical cap. Owns its variant name, collection date and
/// image; everything else (rating, brand, country) belongs to the beer and
/// is shared with every sibling cap of that beer.
///
/// `beer` is optional only because the backend can surface a cap whose beer
/// link was severed; the edit coordinator turns that into a
/// [`CapError::MissingBeerLink`](crate::caps::CapError) instead of a panic.
/// Caps created through this crate always carry a beer reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeerCap {
    pub id: i64,
    #[serde(default)]
    pub variant_name: Option<String>,
    #[serde(default)]
    pub collected_date: Option<NaiveDate>,
    pub presigned_url: String,
    #[serde(default)]
    pub beer: Option<Beer>,
}

/// Fields a cap edit may change. The date is already in canonical
/// `YYYY-MM-DD` form when this payload is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapUpdate {
    pub variant_name: Option<String>,
    pub collected_date: Option<String>,
}
