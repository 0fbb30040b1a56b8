//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into three layers:
//!
//! - **[`app`]**: application state, keyboard event loop, auto-play timing
//! - **[`panes`]**: stateless render functions for each visible pane (grid,
//!   info, status bar)
//! - **[`theme`]**: centralized color palette, including the element state colors
//!
//! The entry point for consumers is [`App`]: construct it with an input array
//! and [`ArrayControls`], then call [`App::run`] to start the event loop.
//!
//! [`ArrayControls`]: crate::controls::ArrayControls
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod theme;

pub use app::App;
