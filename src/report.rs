//! Tabular result set for extracted addresses

use crate::error::{ExtractError, Result};
use serde::{Deserialize, Serialize};

/// One distinct address and how many times it occurred
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EmailRecord {
    pub email: String,
    pub count: u64,
}

/// Ordered result set of (email, count) records, in first-occurrence order
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct EmailReport {
    pub records: Vec<EmailRecord>,
}

impl EmailReport {
    /// Total number of matches across all records
    #[must_use]
    pub fn total_matches(&self) -> u64 {
        self.records.iter().map(|r| r.count).sum()
    }

    /// Number of distinct addresses
    #[must_use]
    pub fn distinct_count(&self) -> usize {
        self.records.len()
    }

    /// Serialize to a delimited table: header row `email,count`, one row per
    /// record, newline-terminated. Emails cannot contain commas under the
    /// matching rule, so no quoting is ever needed and splitting a data row
    /// on the first comma recovers `(email, count)` exactly.
    pub fn to_csv(&self) -> Result<String> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        for record in &self.records {
            writer
                .serialize(record)
                .map_err(|e| ExtractError::Report(e.to_string()))?;
        }
        let bytes = writer
            .into_inner()
            .map_err(|e| ExtractError::Report(e.to_string()))?;
        String::from_utf8(bytes).map_err(|e| ExtractError::Report(e.to_string()))
    }

    /// Parse a table produced by [`Self::to_csv`] back into a report
    /// (round-trip law: `from_csv(to_csv(r)) == r`).
    pub fn from_csv(data: &str) -> Result<Self> {
        let mut reader = csv::Reader::from_reader(data.as_bytes());
        let records = reader
            .deserialize()
            .collect::<std::result::Result<Vec<EmailRecord>, _>>()
            .map_err(|e| ExtractError::Report(e.to_string()))?;
        Ok(Self { records })
    }
}
