//! **basket** -- a terminal shopping list.
//!
//! The application is a [`basket_core::Model`] ([`ShoppingApp`]) over a
//! [`basket_list::ListModel`]. Every key press becomes one message, every
//! message is followed by a full redraw computed from the model, and every
//! row on screen carries the original index of its item so that actions on a
//! filtered view hit the right item.
//!
//! # Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`app`] | [`ShoppingApp`], its modes and messages |
//! | [`config`] | Command-line flags and startup configuration |
//! | [`error`] | [`AppError`] |
//! | [`keys`] | Key bindings for browsing and editing |
//! | [`logging`] | `tracing` subscriber setup |
//! | [`markup`] | HTML fragment rendering of a view |
//! | [`render`] | Terminal rendering of a view |

pub mod app;
pub mod config;
pub mod error;
pub mod keys;
pub mod logging;
pub mod markup;
pub mod render;

pub use app::{Mode, Msg, ShoppingApp, Status};
pub use config::{AppConfig, Cli};
pub use error::AppError;

pub use basket_core::*;
pub mod widgets {
    pub use basket_widgets::*;
}

pub use basket_list;
pub use crossterm;
pub use ratatui;

/// The HTML fragment for the view a session configured by `config` starts
/// with.
pub fn initial_html(config: &AppConfig) -> String {
    let list = config.initial_list();
    markup::render_list(&basket_list::compute_view(&list, &config.search))
}
