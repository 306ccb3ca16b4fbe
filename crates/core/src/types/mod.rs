//! Core types for Code Brew.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod category;
pub mod email;
pub mod id;
pub mod strength;

pub use category::{Category, CategoryError};
pub use email::{Email, EmailError};
pub use id::*;
pub use strength::StrengthTier;
