//! Terminal runtime for **basket**.
//!
//! `basket-core` provides the traits, types, and runtime that drive the
//! application. The design follows the [Elm Architecture]: the program is a
//! pure **init -> update -> view** cycle, with the few side effects pushed to
//! the edges through [`Command`]s.
//!
//! # Key types
//!
//! | Type | Purpose |
//! |------|---------|
//! | [`Model`] | Top-level application trait (init / update / view / on_event) |
//! | [`Component`] | Reusable sub-model that renders into a [`ratatui::layout::Rect`] |
//! | [`Command`] | Follow-up message, title change, or quit |
//! | [`TerminalEvent`] | Key presses, resizes and pastes delivered to the model |
//! | [`Program`] | Wires a [`Model`] to a real terminal and drives the event loop |
//! | [`TestProgram`](testing::TestProgram) | Headless harness for unit-testing a [`Model`] |
//!
//! # Ordering
//!
//! One message is processed at a time and is always followed by a render, so
//! the frame drawn after message N shows the state at the end of N and never
//! a mix of two updates. Messages queued with [`Command::message`] are handled
//! in FIFO order before the next terminal event is read.
//!
//! [Elm Architecture]: https://guide.elm-lang.org/architecture/

pub mod command;
pub mod component;
pub mod event;
pub mod model;
pub mod runtime;
pub mod testing;

pub use command::Command;
pub use component::Component;
pub use event::TerminalEvent;
pub use model::Model;
pub use runtime::{OutputTarget, Program, ProgramError, ProgramOptions};

/// Run a model with custom options until it quits.
pub async fn run_with<M: Model>(
    flags: M::Flags,
    options: ProgramOptions,
) -> Result<M, ProgramError> {
    Program::<M>::with_options(flags, options)?.run().await
}
