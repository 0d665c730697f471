//! Core runtime for **canvas** — a small Elm-architecture layer for
//! building [`ratatui`] widget applications.
//!
//! `canvas-core` provides the traits, types, and runtime behind the
//! widgets in `canvas-widgets`: a program is a pure
//! **init -> update -> view** cycle, with side effects pushed to the
//! edges through [`Command`]s and [`Subscription`]s.
//!
//! # Key types
//!
//! | Type | Purpose |
//! |------|---------|
//! | [`Model`] | Top-level application trait (init / update / view) |
//! | [`Component`] | Reusable sub-model that renders into a [`ratatui::layout::Rect`] |
//! | [`Command`] | Describes a side effect for the runtime to execute |
//! | [`Subscription`] | Long-lived event source (terminal events, timers) |
//! | [`Program`] | Wires a [`Model`] to a real terminal and drives the event loop |
//! | [`TestProgram`](testing::TestProgram) | Headless harness for unit-testing without a terminal |
//!
//! # Update cycle
//!
//! 1. [`Model::init`] creates the initial state and may return a
//!    [`Command`] to kick off early work.
//! 2. The runtime calls [`Model::view`] to render to a
//!    [`ratatui::Frame`].
//! 3. Key presses and timers arrive via [`Subscription`]s, mapped into
//!    the model's `Message` type.
//! 4. [`Model::update`] mutates state and optionally returns a command.
//! 5. Steps 2--4 repeat until the program exits.
//!
//! Widget state transitions all happen synchronously inside `update`;
//! the async machinery exists only so the event loop can multiplex the
//! terminal event stream with timers and demo-page side effects.

pub mod command;
pub mod component;
pub mod event;
pub mod model;
pub mod runtime;
pub mod subscription;
pub mod subscriptions;
pub mod testing;

pub use command::Command;
pub use component::Component;
pub use event::TerminalEvent;
pub use model::Model;
pub use runtime::{log_to_file, Program, ProgramError, ProgramOptions};
pub use subscription::{subscribe, Subscription, SubscriptionId, SubscriptionSource};
pub use subscriptions::{terminal_events, Every};

/// Run a canvas application with default options.
pub async fn run<M: Model>(flags: M::Flags) -> Result<M, ProgramError> {
    Program::<M>::new(flags)?.run().await
}

/// Run with custom options.
pub async fn run_with<M: Model>(
    flags: M::Flags,
    options: ProgramOptions,
) -> Result<M, ProgramError> {
    Program::<M>::with_options(flags, options)?.run().await
}
