//! Error types.

use thiserror::Error;

/// Errors surfaced by registry lookups and configuration loading.
///
/// Tagging itself never fails.
#[derive(Error, Debug)]
pub enum RecognizerError {
    #[error("Recognizer not registered: {type_name}")]
    NotRegistered { type_name: String },

    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),
}
