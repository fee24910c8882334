use thiserror::Error;

/// Core error type shared across Wordforge crates.
#[derive(Debug, Error)]
pub enum Error {
    /// The profile violates a required-field or range constraint.
    #[error("invalid profile: {0}")]
    InvalidProfile(String),
    /// A requested feature is not yet supported.
    #[error("unsupported: {0}")]
    Unsupported(String),
    /// Catch-all error for unexpected failures.
    #[error("other error: {0}")]
    Other(String),
}

/// Convenience alias for results returned by Wordforge crates.
pub type Result<T> = std::result::Result<T, Error>;
