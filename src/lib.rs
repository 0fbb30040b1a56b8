//! # Introduction
//!
//! quicktrace runs QuickSort over a small integer array and records a
//! snapshot of every element at each visible step: pivot selection, the move
//! to the next depth, lower/higher coloring, the rearrangement and every
//! element that lands in its final place. The snapshot history is then
//! navigated forward and backward through a terminal UI built with
//! [ratatui](https://docs.rs/ratatui).
//!
//! ## Pipeline
//!
//! ```text
//! Array controls → Generator → Snapshots → Playback → TUI
//! ```
//!
//! 1. [`controls`]: size clamping, random arrays and value parsing.
//! 2. [`generator`]: the recursive partition that emits
//!    [`snapshot::Snapshot`]s.
//! 3. [`snapshot`]: elements, sorted regions and the read-only
//!    [`snapshot::SnapshotHistory`].
//! 4. [`playback`]: a cursor over a finished history.
//! 5. [`ui`]: ratatui-based TUI; not part of the stable library API.
//! 6. [`cli`]: command-line flags.
//!
//! ## Example
//!
//! ```
//! let history = quicktrace::generator::generate(&[3, 1, 2]);
//! let last = history.last().unwrap();
//! assert_eq!(last.values_by_column(), vec![1, 2, 3]);
//! ```

pub mod cli;
pub mod controls;
pub mod generator;
pub mod playback;
pub mod snapshot;
pub mod ui;
