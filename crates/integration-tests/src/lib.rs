//! Integration tests for Code Brew.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p code-brew-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `contact_form` - Inquiry submission end to end
//! - `registration` - Sign-up, session and redirect
//! - `favorites_dashboard` - Session-guarded favorites CRUD
//! - `blog_listing` - Article filtering, paging and rendering
//! - `storage_faults` - Degraded stores never surface errors
//!
//! Every test gets its own temporary data directory through [`TestSite`].

use std::sync::Arc;
use std::time::Duration;

use tempfile::TempDir;

use code_brew_core::Email;
use code_brew_site::config::SiteConfig;
use code_brew_site::db::SessionStore;
use code_brew_site::forms::SimulatedTransport;
use code_brew_site::models::UserSession;
use code_brew_site::state::SiteState;
use code_brew_site::storage::{FileStore, MemoryStore, StoreScope, Stores};

/// A site backed by a throwaway data directory.
pub struct TestSite {
    pub state: SiteState,
    dir: TempDir,
}

impl TestSite {
    /// A site with no submission latency.
    ///
    /// # Panics
    ///
    /// Panics if the temporary directory cannot be created.
    #[must_use]
    pub fn new() -> Self {
        Self::with_latency(Duration::ZERO)
    }

    /// A site whose transport waits `latency`.
    ///
    /// # Panics
    ///
    /// Panics if the temporary directory cannot be created.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn with_latency(latency: Duration) -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let config = SiteConfig {
            data_dir: dir.path().to_path_buf(),
            submit_latency: latency,
            ..SiteConfig::default()
        };
        let stores = Stores::new(
            Arc::new(FileStore::new(dir.path())),
            Arc::new(MemoryStore::new(StoreScope::Ephemeral)),
        );
        let state = SiteState::with_parts(config, stores, Arc::new(SimulatedTransport::new(latency)));
        Self { state, dir }
    }

    /// The same site with `username` signed in.
    ///
    /// # Panics
    ///
    /// Panics if the session cannot be stored.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn signed_in(self, username: &str) -> Self {
        let session = UserSession {
            username: username.to_string(),
            email: Email::parse("member@example.com").expect("valid email"),
        };
        assert!(SessionStore::new(self.state.stores().ephemeral()).sign_in(&session));
        self
    }

    /// Path of the JSON file backing a durable key.
    #[must_use]
    pub fn data_file(&self, key: &str) -> std::path::PathBuf {
        self.dir.path().join(format!("{key}.json"))
    }
}

impl Default for TestSite {
    fn default() -> Self {
        Self::new()
    }
}
