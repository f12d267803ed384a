// Enforce at crate level
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

//! Utility toolkit
//!
//! A small collection of independent, stateless request/response utilities:
//! email extraction with frequency counting, initials-avatar generation,
//! outbound-mail fan-out, request origin tracking, and region lookup. Each
//! operation is a pure (or seam-isolated) function over its input; nothing
//! is persisted or shared between calls.
//!
//! # Example
//!
//! ```rust
//! use utilbox::extract_emails;
//!
//! let report = extract_emails("write to bob@example.com or bob@example.com").unwrap();
//!
//! assert_eq!(report.records[0].email, "bob@example.com");
//! assert_eq!(report.records[0].count, 2);
//! println!("{}", report.to_csv().unwrap());
//! ```

mod avatar;
mod delivery;
mod error;
mod extractor;
mod lookup;
mod report;
mod tracking;

pub use avatar::{AvatarPayload, AvatarRenderer, AvatarStyle, SvgAvatar, initials};
pub use delivery::{
    DeliveryOutcome, DeliveryReport, MailRequest, MailTransport, OutboundMail, SmtpCredentials,
    deliver_all,
};
pub use error::{BoundaryError, ExtractError, FailurePayload, Result};
pub use extractor::{extract_emails, extract_emails_bounded};
pub use lookup::{RegionIndex, RegionMatch, RegionRecord};
pub use report::{EmailRecord, EmailReport};
pub use tracking::{DeviceInfo, GeoLookup, LocationData, TrackingInfo, is_local_address, track};
