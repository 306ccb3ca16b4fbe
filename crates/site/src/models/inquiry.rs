//! Contact form inquiries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Subject stored when the visitor leaves the subject blank.
pub const DEFAULT_SUBJECT: &str = "(No subject)";

/// A contact form submission.
///
/// Immutable once created. Inquiries are only ever appended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Inquiry {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub submitted_at: DateTime<Utc>,
}

impl Inquiry {
    /// Build an inquiry from raw form values, trimming each and defaulting
    /// a blank subject.
    #[must_use]
    pub fn new(
        name: &str,
        email: &str,
        subject: &str,
        message: &str,
        submitted_at: DateTime<Utc>,
    ) -> Self {
        let subject = subject.trim();
        Self {
            name: name.trim().to_string(),
            email: email.trim().to_string(),
            subject: if subject.is_empty() {
                DEFAULT_SUBJECT.to_string()
            } else {
                subject.to_string()
            },
            message: message.trim().to_string(),
            submitted_at,
        }
    }
}
