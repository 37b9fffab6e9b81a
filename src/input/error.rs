//! Key parsing errors.

use thiserror::Error;

/// Errors produced while turning key labels into events
#[derive(Debug, Clone, Error, PartialEq)]
pub enum KeyError {
    #[error("Empty key label")]
    Empty,

    #[error("Unknown key '{token}' at position {position}")]
    UnknownKey { position: usize, token: String },
}
