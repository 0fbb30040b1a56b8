//! Input errors for the array controls
//!
//! These are reported before any trace is generated; the generator itself
//! accepts every integer sequence.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// A token that is not an integer
    InvalidValue { token: String },

    /// No values given
    EmptyInput,

    /// More values than the view can lay out
    TooManyValues { count: usize, max: usize },
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::InvalidValue { token } => {
                write!(f, "Invalid value '{}': expected an integer", token)
            }
            InputError::EmptyInput => write!(f, "No values provided"),
            InputError::TooManyValues { count, max } => {
                write!(f, "Too many values: got {}, at most {} allowed", count, max)
            }
        }
    }
}

impl std::error::Error for InputError {}
