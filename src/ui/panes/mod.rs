//! TUI pane rendering modules
//!
//! # Pane Modules
//!
//! - [`grid`]: the sort itself, one cell per element, one row per depth
//! - [`info`]: step description, input array and color legend
//! - [`status`]: status bar with keybindings and playback state
//!
//! Each pane exports a `render_*` function that draws from borrowed data
//! only; none of them keep state between frames.

pub mod grid;
pub mod info;
pub mod status;

// Re-export render functions for convenience
pub use grid::{grid_geometry, render_grid_pane, GridGeometry};
pub use info::{render_info_pane, InfoRenderData};
pub use status::{render_status_bar, StatusRenderData};
