//! Errors raised while moving through a snapshot history

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaybackError {
    /// Already on the first snapshot
    AtStart,

    /// Already on the last snapshot
    AtEnd { position: usize },

    /// No snapshots loaded
    EmptyHistory,
}

impl fmt::Display for PlaybackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlaybackError::AtStart => write!(f, "Already at the first step"),
            PlaybackError::AtEnd { position } => {
                write!(f, "No more steps after step {}", position + 1)
            }
            PlaybackError::EmptyHistory => write!(f, "No snapshots available"),
        }
    }
}

impl std::error::Error for PlaybackError {}
