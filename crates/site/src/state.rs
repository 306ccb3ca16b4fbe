//! Site state shared by every page.

use std::sync::Arc;

use crate::config::SiteConfig;
use crate::content::ArticleCatalog;
use crate::forms::{
    ContactForm, FavoritesDashboard, Redirect, RegistrationForm, SimulatedTransport,
    SubmissionTransport,
};
use crate::listing::ListState;
use crate::storage::{FileStore, MemoryStore, StoreScope, Stores};

/// Configuration, stores, transport and articles.
///
/// This struct is cheaply cloneable via `Arc`.
#[derive(Clone)]
pub struct SiteState {
    inner: Arc<SiteStateInner>,
}

struct SiteStateInner {
    config: SiteConfig,
    stores: Stores,
    transport: Arc<dyn SubmissionTransport>,
    catalog: ArticleCatalog,
}

impl SiteState {
    /// Durable data under `config.data_dir`, an in-memory session, and a
    /// simulated transport with the configured latency.
    #[must_use]
    pub fn new(config: SiteConfig) -> Self {
        let stores = Stores::new(
            Arc::new(FileStore::new(&config.data_dir)),
            Arc::new(MemoryStore::new(StoreScope::Ephemeral)),
        );
        let transport = Arc::new(SimulatedTransport::new(config.form_settings().submit_latency));
        Self::with_parts(config, stores, transport)
    }

    /// State over the given stores and transport.
    #[must_use]
    pub fn with_parts(
        config: SiteConfig,
        stores: Stores,
        transport: Arc<dyn SubmissionTransport>,
    ) -> Self {
        tracing::debug!(data_dir = %config.data_dir.display(), ?stores, "site state created");
        Self {
            inner: Arc::new(SiteStateInner {
                config,
                stores,
                transport,
                catalog: ArticleCatalog::builtin(),
            }),
        }
    }

    #[must_use]
    pub fn config(&self) -> &SiteConfig {
        &self.inner.config
    }

    #[must_use]
    pub fn stores(&self) -> &Stores {
        &self.inner.stores
    }

    #[must_use]
    pub fn catalog(&self) -> &ArticleCatalog {
        &self.inner.catalog
    }

    /// A fresh contact form.
    #[must_use]
    pub fn contact_form(&self) -> ContactForm {
        ContactForm::new(
            self.inner.stores.clone(),
            Arc::clone(&self.inner.transport),
            &self.inner.config.form_settings(),
        )
    }

    /// A fresh registration form.
    #[must_use]
    pub fn registration_form(&self) -> RegistrationForm {
        RegistrationForm::new(
            self.inner.stores.clone(),
            Arc::clone(&self.inner.transport),
            &self.inner.config.form_settings(),
        )
    }

    /// The favorites dashboard for the signed-in visitor.
    ///
    /// # Errors
    ///
    /// Returns the registration page redirect if nobody is signed in.
    pub fn dashboard(&self) -> Result<FavoritesDashboard, Redirect> {
        FavoritesDashboard::open(self.inner.stores.clone(), &self.inner.config.form_settings())
    }

    /// First page of the article grid.
    #[must_use]
    pub fn blog(&self) -> ListState {
        ListState::new(self.inner.config.page_size)
    }
}

impl std::fmt::Debug for SiteState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SiteState")
            .field("config", &self.inner.config)
            .field("stores", &self.inner.stores)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::db::InquiryRepository;
    use crate::forms::Field;

    #[tokio::test]
    async fn test_contact_inquiries_land_in_data_dir() {
        let dir = tempfile::tempdir().unwrap();
        let config = SiteConfig {
            data_dir: dir.path().to_path_buf(),
            submit_latency: std::time::Duration::ZERO,
            ..SiteConfig::default()
        };
        let state = SiteState::new(config);

        let mut form = state.contact_form();
        form.input(Field::Name, "Al");
        form.input(Field::Email, "a@b.com");
        form.input(Field::Message, "Hello there");
        form.submit().await.unwrap();

        assert!(dir.path().join("codeBrewInquiries.json").exists());
        let reopened = SiteState::new(state.config().clone());
        assert_eq!(InquiryRepository::new(reopened.stores().durable()).count(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_transport_waits_configured_latency() {
        let dir = tempfile::tempdir().unwrap();
        let config = SiteConfig {
            data_dir: dir.path().to_path_buf(),
            submit_latency: std::time::Duration::from_millis(800),
            ..SiteConfig::default()
        };
        let state = SiteState::new(config);

        let mut form = state.contact_form();
        form.input(Field::Name, "Al");
        form.input(Field::Email, "a@b.com");
        form.input(Field::Message, "Hello there");
        let started = tokio::time::Instant::now();
        form.submit().await.unwrap();
        assert!(started.elapsed() >= std::time::Duration::from_millis(800));
    }

    #[test]
    fn test_dashboard_requires_session() {
        let state = SiteState::with_parts(
            SiteConfig::default(),
            Stores::in_memory(),
            Arc::new(SimulatedTransport::instant()),
        );
        assert_eq!(state.dashboard().unwrap_err().to, "register.html");
    }

    #[test]
    fn test_blog_uses_configured_page_size() {
        let config = SiteConfig {
            page_size: 2,
            ..SiteConfig::default()
        };
        let state = SiteState::with_parts(
            config,
            Stores::in_memory(),
            Arc::new(SimulatedTransport::instant()),
        );
        assert_eq!(state.blog().view(state.catalog().all()).shown.len(), 2);
    }
}
