use thiserror::Error;

use crate::model::GenerationReport;

/// Errors emitted by the candidate generation engine.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("mutation '{id}' failed: {message}")]
    Mutation { id: &'static str, message: String },
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("generation failed")]
    Failed(Box<GenerationReport>),
}
