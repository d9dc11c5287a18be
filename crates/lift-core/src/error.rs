//! Core error type.
//!
//! Sub-crates define their own error enums; `CoreError` only covers what
//! `lift-core` itself can reject (configuration values).

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `lift-core`.
pub type CoreResult<T> = Result<T, CoreError>;
