//! Outbound mail fan-out
//!
//! The SMTP wire protocol itself lives behind [`MailTransport`]; this module
//! owns request validation and the per-recipient fan-out, which must attempt
//! every recipient even when some sends fail.

use crate::error::BoundaryError;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Validated request to send one message to many recipients
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MailRequest {
    /// Sender display name
    pub name: String,

    /// Destination addresses, at least one
    pub recipients: Vec<String>,

    pub subject: String,

    /// HTML body sent to every recipient
    pub html_body: String,
}

impl MailRequest {
    /// Check that every required field is present and the recipient list is
    /// non-empty
    pub fn validate(&self) -> std::result::Result<(), BoundaryError> {
        if self.name.is_empty() {
            return Err(BoundaryError::MissingField("name"));
        }
        if self.subject.is_empty() {
            return Err(BoundaryError::MissingField("subject"));
        }
        if self.html_body.is_empty() {
            return Err(BoundaryError::MissingField("message"));
        }
        if self.recipients.is_empty() {
            return Err(BoundaryError::NoRecipients);
        }
        Ok(())
    }
}

/// SMTP credentials, passed explicitly with each call rather than read from
/// ambient state
#[derive(Debug, Clone)]
pub struct SmtpCredentials {
    pub user: String,
    pub pass: String,
}

impl SmtpCredentials {
    pub fn validate(&self) -> std::result::Result<(), BoundaryError> {
        if self.user.is_empty() || self.pass.is_empty() {
            return Err(BoundaryError::MissingCredentials);
        }
        Ok(())
    }
}

/// A single message addressed to one recipient
#[derive(Debug, Clone)]
pub struct OutboundMail<'a> {
    pub from: &'a str,
    pub to: &'a str,
    pub subject: &'a str,
    pub html_body: &'a str,
}

/// Delivery seam: the actual SMTP session lives behind this trait
pub trait MailTransport {
    fn send(
        &self,
        credentials: &SmtpCredentials,
        mail: &OutboundMail<'_>,
    ) -> std::result::Result<(), BoundaryError>;
}

/// Outcome of one send attempt
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeliveryOutcome {
    pub recipient: String,

    /// `None` on success, the failure description otherwise
    pub error: Option<String>,
}

impl DeliveryOutcome {
    #[must_use]
    pub const fn succeeded(&self) -> bool {
        self.error.is_none()
    }
}

/// Per-recipient results of a fan-out
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeliveryReport {
    pub outcomes: Vec<DeliveryOutcome>,
}

impl DeliveryReport {
    #[must_use]
    pub fn sent(&self) -> usize {
        self.outcomes.iter().filter(|o| o.succeeded()).count()
    }

    #[must_use]
    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.sent()
    }
}

/// Send `request` to every recipient through `transport`, one message per
/// address. A failing recipient is recorded and the fan-out moves on; the
/// batch never aborts early.
pub fn deliver_all(
    transport: &dyn MailTransport,
    credentials: &SmtpCredentials,
    request: &MailRequest,
) -> std::result::Result<DeliveryReport, BoundaryError> {
    request.validate()?;
    credentials.validate()?;

    let mut report = DeliveryReport::default();
    for recipient in &request.recipients {
        let mail = OutboundMail {
            from: &credentials.user,
            to: recipient,
            subject: &request.subject,
            html_body: &request.html_body,
        };

        let error = match transport.send(credentials, &mail) {
            Ok(()) => {
                debug!("Email sent to {recipient}");
                None
            }
            Err(e) => {
                warn!("Failed to send email to {recipient}: {e}");
                Some(e.to_string())
            }
        };

        report.outcomes.push(DeliveryOutcome {
            recipient: recipient.clone(),
            error,
        });
    }

    Ok(report)
}
