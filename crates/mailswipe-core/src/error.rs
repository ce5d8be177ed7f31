//! Error types for the core library.

use thiserror::Error;

use crate::config::ConfigError;

/// Errors that can occur at the edges of the core (loading cards, validating
/// configuration). Deck and gesture operations themselves never fail.
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error while reading a card source.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Card source is not valid JSON or has the wrong shape.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Two records in one collection share an id.
    #[error("Duplicate card id: {0}")]
    DuplicateCardId(String),

    /// A record has an empty (or whitespace-only) id.
    #[error("Card at index {index} has an empty id")]
    EmptyCardId {
        /// Position of the offending record in the source.
        index: usize,
    },

    /// Deck configuration failed validation.
    #[error("Invalid configuration: {}", format_config_errors(.0))]
    InvalidConfig(Vec<ConfigError>),
}

fn format_config_errors(errors: &[ConfigError]) -> String {
    errors
        .iter()
        .map(|e| format!("{}: {}", e.field(), e.message()))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;
