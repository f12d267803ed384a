//! Region lookup over an in-memory dataset

use crate::error::BoundaryError;
use serde::{Deserialize, Serialize};

/// A region and its sub-regions, as loaded from the caller's dataset
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegionRecord {
    pub name: String,
    pub subregions: Vec<String>,
}

/// One search hit, with the sub-region count the caller displays
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RegionMatch {
    pub name: String,
    pub subregion_count: usize,
    pub subregions: Vec<String>,
}

/// Read-only index over a fixed set of region records
#[derive(Debug, Clone, Default)]
pub struct RegionIndex {
    records: Vec<RegionRecord>,
}

impl RegionIndex {
    #[must_use]
    pub const fn new(records: Vec<RegionRecord>) -> Self {
        Self { records }
    }

    /// Case-insensitive substring search over region names.
    ///
    /// An empty query is rejected rather than matching everything.
    pub fn search(&self, query: &str) -> std::result::Result<Vec<RegionMatch>, BoundaryError> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return Err(BoundaryError::EmptyQuery);
        }

        Ok(self
            .records
            .iter()
            .filter(|r| r.name.to_lowercase().contains(&query))
            .map(|r| RegionMatch {
                name: r.name.clone(),
                subregion_count: r.subregions.len(),
                subregions: r.subregions.clone(),
            })
            .collect())
    }
}
