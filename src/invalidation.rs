use serde::{Deserialize, Serialize};

/// Cached collections a mutation can make stale. Readers holding one of
/// these must refetch before showing it again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Collection {
    Caps,
    Cap(i64),
    Beers,
    Brands,
    Countries,
}

/// Result of a successful mutation, paired with the collections it made
/// stale so any caller-side cache can invalidate without ambient hooks.
#[derive(Debug, Clone, PartialEq)]
pub struct MutationOutcome<T> {
    pub value: T,
    pub stale: Vec<Collection>,
}

impl<T> MutationOutcome<T> {
    pub fn new(value: T, stale: Vec<Collection>) -> Self {
        Self { value, stale }
    }
}
