use thiserror::Error;

/// Errors emitted by the export and simulation helpers.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("empty wordlist: {0}")]
    EmptyWordlist(String),
    #[error("guess rate must be positive")]
    ZeroGuessRate,
    #[error("charset must not be empty")]
    EmptyCharset,
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
