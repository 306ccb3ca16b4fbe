//! Code Brew Core - Shared types library.
//!
//! This crate provides common types used across all Code Brew components:
//! - `site` - Storage adapters, validation rules, repositories and form controllers
//! - `integration-tests` - Scenario tests against the public site API
//!
//! # Architecture
//!
//! The core crate contains only types and traits - no I/O, no storage access,
//! no timers. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, emails, article categories
//!   and password strength tiers

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
