//! Tracing subscriber setup.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::SiteConfig;

/// Filter used when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "code_brew_site=info";

/// Install the global subscriber.
///
/// Uses `RUST_LOG` if set, otherwise [`DEFAULT_FILTER`]. Logs are JSON when
/// `config.log_json` is set and text otherwise. Returns `false` if a
/// subscriber was already installed, which leaves that one in place.
pub fn init_tracing(config: &SiteConfig) -> bool {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| DEFAULT_FILTER.into());

    let json_layer = config
        .log_json
        .then(|| tracing_subscriber::fmt::layer().json().flatten_event(true));
    let text_layer = (!config.log_json).then(tracing_subscriber::fmt::layer);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(text_layer)
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_is_refused() {
        let config = SiteConfig::default();
        let _ = init_tracing(&config);
        assert!(!init_tracing(&config));
    }
}
