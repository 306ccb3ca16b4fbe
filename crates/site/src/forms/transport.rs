//! Submission transports.
//!
//! A transport carries a validated form somewhere before it is persisted
//! locally. The site has no backend, so the only transport shipped is
//! [`SimulatedTransport`], a fixed delay. A real backend can be added by
//! implementing [`SubmissionTransport`] without touching validation or the
//! repositories.

use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;

use crate::error::TransportError;

/// Which form produced a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FormKind {
    Contact,
    Registration,
}

/// A form payload ready for delivery.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Submission {
    pub form: FormKind,
    pub payload: serde_json::Value,
}

impl Submission {
    /// Encode `payload` for `form`.
    ///
    /// # Errors
    ///
    /// Returns `TransportError::Encoding` if the payload cannot be encoded.
    pub fn new<T: Serialize>(form: FormKind, payload: &T) -> Result<Self, TransportError> {
        Ok(Self {
            form,
            payload: serde_json::to_value(payload)?,
        })
    }
}

/// Delivers submissions.
#[async_trait]
pub trait SubmissionTransport: Send + Sync {
    /// Deliver one submission.
    ///
    /// # Errors
    ///
    /// Returns `TransportError` if delivery fails; the caller then persists
    /// nothing.
    async fn deliver(&self, submission: &Submission) -> Result<(), TransportError>;
}

/// Waits a fixed latency and reports success.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulatedTransport {
    latency: Duration,
}

impl SimulatedTransport {
    /// A transport that waits `latency` per delivery.
    #[must_use]
    pub const fn new(latency: Duration) -> Self {
        Self { latency }
    }

    /// A transport with no delay.
    #[must_use]
    pub const fn instant() -> Self {
        Self::new(Duration::ZERO)
    }

    /// Configured delay.
    #[must_use]
    pub const fn latency(&self) -> Duration {
        self.latency
    }
}

#[async_trait]
impl SubmissionTransport for SimulatedTransport {
    async fn deliver(&self, submission: &Submission) -> Result<(), TransportError> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        tracing::debug!(form = ?submission.form, latency_ms = self.latency.as_millis(), "simulated delivery");
        Ok(())
    }
}
