//! Candidate generation engine for Wordforge.
//!
//! This crate turns a validated profile record into a deduplicated,
//! order-stable list of password candidates: a field deriver expands the
//! profile into named fields, a static template catalog produces base
//! candidates, and an ordered mutation pipeline expands each base into
//! variants before the global merge.

pub mod catalog;
pub mod engine;
pub mod errors;
pub mod fields;
pub mod model;
pub mod mutate;
pub mod output;

pub use engine::{aggregate, build_base, mutate_candidate, GenerationEngine};
pub use errors::GenerationError;
pub use fields::{derive, FieldSet, FieldValue};
pub use model::{GenerateOptions, GenerationReport, GenerationResult};
pub use mutate::{Mutation, MutationRegistry};
