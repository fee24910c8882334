//! Core contracts and helpers for Wordforge.
//!
//! This crate defines the canonical profile record, normalization and
//! validation helpers, and the error type shared across the engine and the
//! CLI.

pub mod error;
pub mod profile;
pub mod validation;

pub use error::{Error, Result};
pub use profile::{normalize_profile, Profile, PROFILE_VERSION};
pub use validation::validate_profile;
