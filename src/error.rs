//! Error types for the emotion engine.
//!
//! Classification and trend queries are total, so errors only arise at the
//! edges: text that fails the API-boundary precondition, catalog authoring
//! mistakes, and configuration files.

/// Errors raised by the emotion engine.
#[derive(Debug, thiserror::Error)]
pub enum EmotionError {
    /// Input rejected at the API boundary (not text, unknown category name).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Pattern catalog authoring error.
    #[error("catalog error: {0}")]
    Catalog(String),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result type.
pub type Result<T> = std::result::Result<T, EmotionError>;
