//! Error types.
//!
//! Ranking itself never fails: every input, including the empty string,
//! produces a (possibly empty) ranked list. The only fallible operation
//! is accepting a configuration.

use thiserror::Error;

/// A configuration parameter was outside its valid range.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    /// Damping must be strictly between 0 and 1.
    #[error("damping factor must be in (0, 1), got {0}")]
    InvalidDamping(f64),

    /// The similarity threshold must be a positive finite number.
    #[error("similarity threshold must be positive and finite, got {0}")]
    InvalidThreshold(f64),

    /// A zero minimum would let empty sentences link to everything.
    #[error("minimum sentence word count must be at least 1")]
    InvalidMinSentenceWords,

    /// A window of one word can never produce a co-occurring pair.
    #[error("co-occurrence window must be at least 2, got {0}")]
    InvalidWindow(usize),
}
