//! Error types for the site data layer.
//!
//! Storage faults never reach callers of the store adapter: they are logged
//! and degraded there. The errors that do surface are submission outcomes
//! (`SubmitError`) that a presentation layer turns into a banner.

use thiserror::Error;

use crate::forms::Field;
use crate::storage::StoreScope;

/// A storage backend operation failed.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Store is disabled or otherwise unreachable.
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    /// Writing would exceed the store's quota.
    #[error("storage quota of {limit} bytes exceeded")]
    QuotaExceeded {
        /// Quota in bytes.
        limit: usize,
    },

    /// Filesystem operation failed.
    #[error("storage io error: {0}")]
    Io(#[from] std::io::Error),

    /// Stored value could not be encoded or decoded.
    #[error("storage serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Key was used against a store of the other scope.
    #[error("key {key} belongs to the {expected} store, not the {actual} store")]
    WrongScope {
        /// Offending key.
        key: &'static str,
        /// Scope the key is bound to.
        expected: StoreScope,
        /// Scope of the store it was used against.
        actual: StoreScope,
    },

    /// Key contains characters the backend cannot store.
    #[error("invalid storage key: {0}")]
    InvalidKey(String),
}

/// A submission transport failed to deliver a form.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Delivery failed.
    #[error("delivery failed: {0}")]
    Failed(String),

    /// Payload could not be encoded.
    #[error("payload encoding failed: {0}")]
    Encoding(#[from] serde_json::Error),
}

/// Why a form submission did not persist.
#[derive(Debug, Error)]
pub enum SubmitError {
    /// One or more fields failed validation.
    #[error("{} field(s) failed validation", .0.len())]
    Invalid(Vec<Field>),

    /// The submission transport failed; nothing was persisted.
    #[error("submission failed: {0}")]
    Transport(#[from] TransportError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_error_display() {
        let err = SubmitError::Invalid(vec![Field::Name, Field::Email]);
        assert_eq!(err.to_string(), "2 field(s) failed validation");

        let err = SubmitError::Transport(TransportError::Failed("offline".to_string()));
        assert_eq!(err.to_string(), "submission failed: delivery failed: offline");
    }

    #[test]
    fn test_storage_error_display() {
        let err = StorageError::WrongScope {
            key: "currentUser",
            expected: StoreScope::Ephemeral,
            actual: StoreScope::Durable,
        };
        assert_eq!(
            err.to_string(),
            "key currentUser belongs to the ephemeral store, not the durable store"
        );
        assert_eq!(
            StorageError::QuotaExceeded { limit: 10 }.to_string(),
            "storage quota of 10 bytes exceeded"
        );
    }
}
