//! Code Brew site data layer.
//!
//! Forms, repositories and list views for the Code Brew coffee shop site,
//! persisted through a best-effort key-value store. Rendering to HTML lives
//! in [`render`] and depends only on view models.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod content;
pub mod db;
pub mod error;
pub mod forms;
pub mod listing;
pub mod models;
pub mod render;
pub mod state;
pub mod storage;
pub mod telemetry;
pub mod validation;
