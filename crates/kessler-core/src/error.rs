//! Error types for the decay subsystem.

use thiserror::Error;

/// Craft id parse failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IdParseError {
    #[error("invalid id length: {0}")]
    InvalidLength(usize),
    #[error("invalid id character: {0}")]
    InvalidCharacter(char),
    #[error("missing separator at offset {0}")]
    MissingSeparator(usize),
}

/// Failure reported by the host world while acting on a craft.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WorldError {
    #[error("craft no longer exists: {0}")]
    CraftGone(String),
}

/// Schedule persistence failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("schedule file not found")]
    NotFound,
    #[error("schedule file unreadable: {0}")]
    Unreadable(String),
    #[error("io error: {0}")]
    Io(String),
}
