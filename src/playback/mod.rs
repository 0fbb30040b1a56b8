//! Playback cursor over a finished snapshot history
//!
//! The cursor never changes the history; it only moves an index through it.
//! Loading a new history replaces the old one outright and rewinds to the
//! first snapshot.

pub mod errors;

pub use errors::PlaybackError;

use crate::snapshot::{Snapshot, SnapshotHistory};

#[derive(Debug, Clone)]
pub struct Playback {
    history: SnapshotHistory,
    position: usize,
}

impl Playback {
    pub fn new(history: SnapshotHistory) -> Self {
        Playback {
            history,
            position: 0,
        }
    }

    /// Swap in a freshly generated history
    pub fn replace(&mut self, history: SnapshotHistory) {
        self.history = history;
        self.position = 0;
    }

    /// Snapshot at the cursor
    pub fn current(&self) -> Option<&Snapshot> {
        self.history.get(self.position)
    }

    pub fn position(&self) -> usize {
        self.position
    }

    /// Get the total number of snapshots
    pub fn total(&self) -> usize {
        self.history.len()
    }

    pub fn is_at_start(&self) -> bool {
        self.position == 0
    }

    pub fn is_at_end(&self) -> bool {
        self.position + 1 >= self.history.len()
    }

    /// Move to the next snapshot
    pub fn step_forward(&mut self) -> Result<(), PlaybackError> {
        if self.history.is_empty() {
            return Err(PlaybackError::EmptyHistory);
        }
        if self.is_at_end() {
            return Err(PlaybackError::AtEnd {
                position: self.position,
            });
        }
        self.position += 1;
        Ok(())
    }

    /// Move to the previous snapshot
    pub fn step_backward(&mut self) -> Result<(), PlaybackError> {
        if self.history.is_empty() {
            return Err(PlaybackError::EmptyHistory);
        }
        if self.position == 0 {
            return Err(PlaybackError::AtStart);
        }
        self.position -= 1;
        Ok(())
    }

    /// Step forward up to `n` times, returning how many steps were taken
    pub fn step_forward_by(&mut self, n: usize) -> usize {
        let mut stepped = 0;
        for _ in 0..n {
            if self.step_forward().is_err() {
                break;
            }
            stepped += 1;
        }
        stepped
    }

    pub fn rewind_to_start(&mut self) -> Result<(), PlaybackError> {
        if self.history.is_empty() {
            return Err(PlaybackError::EmptyHistory);
        }
        self.position = 0;
        Ok(())
    }

    pub fn jump_to_end(&mut self) -> Result<(), PlaybackError> {
        if self.history.is_empty() {
            return Err(PlaybackError::EmptyHistory);
        }
        self.position = self.history.len() - 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::generate;

    #[test]
    fn test_step_bounds() {
        let mut playback = Playback::new(generate(&[3, 1, 2]));
        let total = playback.total();
        assert!(total > 2);

        assert_eq!(playback.step_backward(), Err(PlaybackError::AtStart));
        assert!(playback.step_forward().is_ok());
        assert_eq!(playback.position(), 1);

        playback.jump_to_end().unwrap();
        assert!(playback.is_at_end());
        assert_eq!(
            playback.step_forward(),
            Err(PlaybackError::AtEnd {
                position: total - 1
            })
        );
        assert_eq!(
            playback.current().map(|s| s.description.as_str()),
            Some("Sorting complete!")
        );
    }

    #[test]
    fn test_step_forward_by_stops_at_end() {
        let mut playback = Playback::new(generate(&[5]));
        assert_eq!(playback.total(), 2);

        assert_eq!(playback.step_forward_by(9), 1);
        assert!(playback.is_at_end());

        playback.rewind_to_start().unwrap();
        assert!(playback.is_at_start());
    }

    #[test]
    fn test_replace_rewinds() {
        let mut playback = Playback::new(generate(&[4, 2, 9, 1]));
        playback.step_forward_by(3);

        let fresh = generate(&[8, 7]);
        let fresh_total = fresh.len();
        playback.replace(fresh);

        assert_eq!(playback.position(), 0);
        assert_eq!(playback.total(), fresh_total);
        assert_eq!(playback.current().unwrap().values_by_column(), vec![8, 7]);
    }

    #[test]
    fn test_empty_input_has_single_frame() {
        let mut playback = Playback::new(generate(&[]));

        assert_eq!(playback.total(), 1);
        assert!(playback.is_at_start() && playback.is_at_end());
        assert!(playback.step_forward().is_err());
        assert!(playback.step_backward().is_err());
    }

    #[test]
    fn test_default_history_is_empty() {
        let mut playback = Playback::new(SnapshotHistory::default());

        assert!(playback.current().is_none());
        assert_eq!(playback.step_forward(), Err(PlaybackError::EmptyHistory));
        assert_eq!(playback.jump_to_end(), Err(PlaybackError::EmptyHistory));
    }
}
