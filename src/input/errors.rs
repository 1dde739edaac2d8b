//! Validation error types for raw input
//!
//! This module defines [`InputError`], which represents every way raw textual
//! parameters can fail validation. Validation errors are always recoverable:
//! they are reported as a field-level message and leave any previously built
//! structure and trace untouched.

use std::fmt;

/// Errors produced by the input normalizer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// A required value was missing entirely
    Empty { what: &'static str },

    /// A token could not be parsed as the expected kind
    BadToken {
        token: String,
        expected: &'static str,
    },

    /// Node-count ceiling exceeded
    TooLarge {
        what: &'static str,
        count: usize,
        limit: usize,
    },

    /// A structural parameter points outside its structure
    IndexOutOfRange {
        what: &'static str,
        index: i64,
        limit: usize,
    },

    /// A scalar parameter is malformed or out of its allowed range
    BadParameter {
        what: &'static str,
        message: String,
    },

    /// Two parameters contradict each other
    Inconsistent { message: String },
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::Empty { what } => {
                write!(f, "{} must not be empty", what)
            }
            InputError::BadToken { token, expected } => {
                write!(f, "cannot parse '{}' as {}", token, expected)
            }
            InputError::TooLarge { what, count, limit } => {
                write!(f, "{} has {} entries, limit is {}", what, count, limit)
            }
            InputError::IndexOutOfRange { what, index, limit } => {
                write!(
                    f,
                    "{} is {}, must be in range 0..{}",
                    what, index, limit
                )
            }
            InputError::BadParameter { what, message } => {
                write!(f, "invalid {}: {}", what, message)
            }
            InputError::Inconsistent { message } => {
                write!(f, "inconsistent input: {}", message)
            }
        }
    }
}

impl std::error::Error for InputError {}
