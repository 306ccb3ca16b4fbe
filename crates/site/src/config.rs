//! Site configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `CODE_BREW_DATA_DIR` - Directory of the durable store (default: .code-brew)
//! - `CODE_BREW_SUBMIT_LATENCY_MS` - Simulated submission delay (default: 1500)
//! - `CODE_BREW_BANNER_MS` - Success banner lifetime (default: 5000)
//! - `CODE_BREW_PAGE_SIZE` - Articles revealed per page, at least 1 (default: 3)
//! - `CODE_BREW_LOG_JSON` - Emit JSON logs (default: false)

use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

use crate::forms::{DEFAULT_BANNER_TTL, DEFAULT_SUBMIT_LATENCY, FormSettings};
use crate::listing::DEFAULT_PAGE_SIZE;

const DEFAULT_DATA_DIR: &str = ".code-brew";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Site configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    /// Directory holding one JSON file per durable key
    pub data_dir: PathBuf,
    /// Delay of the simulated submission transport
    pub submit_latency: Duration,
    /// How long success banners stay up
    pub banner_ttl: Duration,
    /// Articles revealed per page
    pub page_size: usize,
    /// Emit logs as JSON instead of text
    pub log_json: bool,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            submit_latency: DEFAULT_SUBMIT_LATENCY,
            banner_ttl: DEFAULT_BANNER_TTL,
            page_size: DEFAULT_PAGE_SIZE,
            log_json: false,
        }
    }
}

impl SiteConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidEnvVar` if a variable is set but cannot
    /// be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through `lookup` instead of the process
    /// environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidEnvVar` if a value cannot be parsed.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let data_dir = lookup("CODE_BREW_DATA_DIR")
            .map_or_else(|| PathBuf::from(DEFAULT_DATA_DIR), PathBuf::from);
        let submit_latency = Duration::from_millis(parse_or(
            &lookup,
            "CODE_BREW_SUBMIT_LATENCY_MS",
            millis(DEFAULT_SUBMIT_LATENCY),
        )?);
        let banner_ttl = Duration::from_millis(parse_or(
            &lookup,
            "CODE_BREW_BANNER_MS",
            millis(DEFAULT_BANNER_TTL),
        )?);
        let page_size = parse_or(&lookup, "CODE_BREW_PAGE_SIZE", DEFAULT_PAGE_SIZE)?;
        if page_size == 0 {
            return Err(ConfigError::InvalidEnvVar(
                "CODE_BREW_PAGE_SIZE".to_string(),
                "must be at least 1".to_string(),
            ));
        }
        let log_json = parse_or(&lookup, "CODE_BREW_LOG_JSON", false)?;

        Ok(Self {
            data_dir,
            submit_latency,
            banner_ttl,
            page_size,
            log_json,
        })
    }

    /// Timing knobs for the forms.
    #[must_use]
    pub const fn form_settings(&self) -> FormSettings {
        FormSettings {
            submit_latency: self.submit_latency,
            banner_ttl: self.banner_ttl,
        }
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Parse a variable, or use `default` when it is unset.
fn parse_or<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    lookup(key).map_or(Ok(default), |value| {
        value
            .trim()
            .parse::<T>()
            .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
    })
}

fn millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}
