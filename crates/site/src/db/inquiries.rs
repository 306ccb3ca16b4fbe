//! Inquiry repository.
//!
//! Inquiries are append-only: there is no update or delete.

use crate::models::Inquiry;
use crate::storage::{KeyValueStore, StorageKey, keys};

use super::{Collection, Record};

impl Record for Inquiry {
    const KEY: StorageKey = keys::INQUIRIES;
}

/// Repository for contact inquiries.
pub struct InquiryRepository<'a> {
    records: Collection<'a, Inquiry>,
}

impl<'a> InquiryRepository<'a> {
    /// Create a new inquiry repository over the durable store.
    #[must_use]
    pub const fn new(store: &'a dyn KeyValueStore) -> Self {
        Self {
            records: Collection::new(store),
        }
    }

    /// All inquiries in submission order.
    #[must_use]
    pub fn list(&self) -> Vec<Inquiry> {
        self.records.list()
    }

    /// Number of stored inquiries.
    #[must_use]
    pub fn count(&self) -> usize {
        self.list().len()
    }

    /// Append an inquiry.
    ///
    /// Returns `false` if the store dropped the write. The inquiry is then
    /// lost; there is no retry.
    pub fn submit(&self, inquiry: Inquiry) -> bool {
        let persisted = self.records.append(inquiry);
        if persisted {
            tracing::info!(key = %keys::INQUIRIES, "inquiry stored");
        }
        persisted
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::storage::{MemoryStore, StoreScope};

    fn inquiry(name: &str) -> Inquiry {
        Inquiry::new(name, "a@b.com", "", "Hello there", Utc::now())
    }

    #[test]
    fn test_submit_appends_in_order() {
        let store = MemoryStore::new(StoreScope::Durable);
        let repo = InquiryRepository::new(&store);
        assert!(repo.submit(inquiry("Al")));
        assert!(repo.submit(inquiry("Bo")));
        let names: Vec<String> = repo.list().into_iter().map(|i| i.name).collect();
        assert_eq!(names, vec!["Al", "Bo"]);
    }

    #[test]
    fn test_append_contains_new_record_once_and_keeps_prior_order() {
        let store = MemoryStore::new(StoreScope::Durable);
        let repo = InquiryRepository::new(&store);
        for name in ["Al", "Bo", "Cy"] {
            repo.submit(inquiry(name));
        }
        let before = repo.list();
        let extra = inquiry("Di");
        repo.submit(extra.clone());

        let after = repo.list();
        assert_eq!(after.iter().filter(|i| **i == extra).count(), 1);
        assert_eq!(&after[..before.len()], before.as_slice());
    }

    #[test]
    fn test_full_store_drops_submission() {
        let store = MemoryStore::with_quota(StoreScope::Durable, 8);
        let repo = InquiryRepository::new(&store);
        assert!(!repo.submit(inquiry("Al")));
        assert_eq!(repo.count(), 0);
    }

    #[test]
    fn test_stored_json_shape() {
        let store = MemoryStore::new(StoreScope::Durable);
        InquiryRepository::new(&store).submit(inquiry("Al"));
        let raw = store.get("codeBrewInquiries").unwrap().unwrap();
        let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
        let first = &json.as_array().unwrap()[0];
        assert_eq!(first["subject"], "(No subject)");
        assert!(first.get("submittedAt").is_some());
    }
}
