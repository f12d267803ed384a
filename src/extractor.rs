//! Email extraction and frequency counting

use crate::error::{ExtractError, Result};
use crate::report::{EmailRecord, EmailReport};
use regex::Regex;
use std::collections::HashMap;
use tracing::debug;

// Heuristic email shape: local part, '@', dotted domain, 2+ letter TLD.
// Deliberately not an RFC 5322 validator.
static EMAIL_REGEX: std::sync::LazyLock<Regex> = std::sync::LazyLock::new(|| {
    Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}").unwrap()
});

/// Scan `raw_text` for email-shaped substrings and tally duplicates.
///
/// Matching is case-sensitive and applies no normalization, so `A@x.com` and
/// `a@x.com` are counted as distinct addresses. Records are ordered by the
/// first occurrence of each distinct address in the scan.
///
/// # Errors
///
/// Returns [`ExtractError::EmptyInput`] for an empty string and
/// [`ExtractError::NoMatches`] when the text contains no recognizable
/// address.
pub fn extract_emails(raw_text: &str) -> Result<EmailReport> {
    if raw_text.is_empty() {
        return Err(ExtractError::EmptyInput);
    }

    let mut order: Vec<String> = Vec::new();
    let mut counts: HashMap<String, u64> = HashMap::new();

    for m in EMAIL_REGEX.find_iter(raw_text) {
        let address = m.as_str();
        if let Some(count) = counts.get_mut(address) {
            *count += 1;
        } else {
            order.push(address.to_string());
            counts.insert(address.to_string(), 1);
        }
    }

    if order.is_empty() {
        return Err(ExtractError::NoMatches);
    }

    let records: Vec<EmailRecord> = order
        .into_iter()
        .map(|email| {
            let count = counts[&email];
            EmailRecord { email, count }
        })
        .collect();

    debug!(
        "Extracted {} distinct addresses ({} matches)",
        records.len(),
        records.iter().map(|r| r.count).sum::<u64>()
    );

    Ok(EmailReport { records })
}

/// Like [`extract_emails`], but rejects inputs larger than `max_bytes`
/// before scanning. Unbounded regex scanning over adversarial input is the
/// only latent latency risk here, so callers exposed to untrusted text
/// should prefer this variant.
pub fn extract_emails_bounded(raw_text: &str, max_bytes: usize) -> Result<EmailReport> {
    if raw_text.len() > max_bytes {
        return Err(ExtractError::InputTooLarge {
            len: raw_text.len(),
            max: max_bytes,
        });
    }
    extract_emails(raw_text)
}
