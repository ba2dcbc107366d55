use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::caps::BeerCap;

/// Which step of the edit sequence an outcome belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EditStep {
    Rating,
    Cap,
}

impl std::fmt::Display for EditStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EditStep::Rating => write!(f, "rating"),
            EditStep::Cap => write!(f, "cap"),
        }
    }
}

/// Snapshot of the cap under edit, captured when the edit form opens. The
/// rating comparison runs against this snapshot, not against whatever the
/// backend holds by submit time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapEditSnapshot {
    pub cap_id: i64,
    pub beer_id: Option<i64>,
    pub current_rating: Option<i32>,
}

impl CapEditSnapshot {
    pub fn of(cap: &BeerCap) -> Self {
        Self {
            cap_id: cap.id,
            beer_id: cap.beer.as_ref().map(|beer| beer.id),
            current_rating: cap.beer.as_ref().and_then(|beer| beer.rating),
        }
    }
}

/// User-submitted edit values. The rating is always present in the edit
/// form; a never-rated beer shows as 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditCapInput {
    pub variant_name: Option<String>,
    pub rating: i32,
    pub collected_date: Option<NaiveDate>,
}
