//! **canvas** -- a showcase of reusable TUI widgets for [`ratatui`].
//!
//! This is the umbrella crate that re-exports everything needed to use
//! the widgets from a single dependency:
//!
//! ```toml
//! [dependencies]
//! canvas = "0.1"
//! ```
//!
//! # Re-exports
//!
//! * All public items from [`canvas_core`] are available at the crate
//!   root ([`Model`], [`Component`], [`Command`], [`Subscription`],
//!   [`Program`], [`run`], [`run_with`], etc.).
//! * The [`widgets`] module re-exports everything from `canvas_widgets`
//!   (the data table, the input field, and their engines).
//! * [`ratatui`], [`crossterm`], and [`tokio`] are re-exported so
//!   downstream crates do not need to depend on them directly.
//!
//! # Quick start
//!
//! ```ignore
//! use canvas::widgets::data_table::{self, DataTable};
//! use canvas::widgets::column::Column;
//! use canvas::{Command, Component, Model};
//!
//! // Wrap the widget in a Model, route key events to it via
//! // terminal_events, and observe the messages it emits.
//! ```
//!
//! See `demos/showcase.rs` and `demos/server_table.rs` for complete
//! programs.

pub use canvas_core::*;
pub mod widgets {
    pub use canvas_widgets::*;
}

// Re-export dependencies for use in demos and downstream crates
pub use crossterm;
pub use ratatui;
pub use tokio;
