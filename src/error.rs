//! Error types for the toolkit

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while extracting and reporting email addresses
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ExtractError {
    /// Caller supplied no text at all
    #[error("Input text is empty.")]
    EmptyInput,

    /// Text was supplied but nothing matched the email pattern
    #[error("No emails found.")]
    NoMatches,

    /// Input exceeds the configured scan limit
    #[error("Input of {len} bytes exceeds the {max} byte limit")]
    InputTooLarge { len: usize, max: usize },

    /// Failed to serialize or parse a report
    #[error("Failed to process report: {0}")]
    Report(String),
}

impl ExtractError {
    /// Convert into the structured payload returned to callers
    #[must_use]
    pub fn to_payload(&self) -> FailurePayload {
        FailurePayload {
            message: self.to_string(),
        }
    }
}

/// Errors raised at the collaborator boundaries (delivery, lookup, tracking,
/// avatar)
#[derive(Error, Debug, PartialEq, Eq)]
pub enum BoundaryError {
    /// A required request field is missing or empty
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// The recipient list is empty
    #[error("At least one recipient email is required")]
    NoRecipients,

    /// Mail credentials were not provided with the request
    #[error("Email credentials are missing")]
    MissingCredentials,

    /// A lookup was attempted with an empty query
    #[error("Search query is required")]
    EmptyQuery,

    /// An external collaborator failed
    #[error("Upstream failure: {0}")]
    Upstream(String),
}

/// Structured failure object carried back to the caller instead of a bare
/// string, so "no input" vs "no matches" vs internal faults stay
/// distinguishable by message
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FailurePayload {
    pub message: String,
}

impl FailurePayload {
    /// Serialize to JSON, falling back to a generic indication if the
    /// serializer itself faults
    #[must_use]
    pub fn to_json(&self) -> String {
        serde_json::to_string(self)
            .unwrap_or_else(|_| r#"{"message":"Internal error."}"#.to_string())
    }
}

/// Result type for toolkit operations, defaulting to the extraction error
pub type Result<T, E = ExtractError> = std::result::Result<T, E>;
