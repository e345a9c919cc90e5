//! Widgets for the **basket** terminal UI.
//!
//! Every interactive widget in this crate implements
//! [`basket_core::Component`], so it can be embedded inside any
//! [`basket_core::Model`] and placed freely within [`ratatui`] layouts.
//!
//! # Widgets
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`help`] | One-line key hint and full key-binding overlay |
//! | [`text_input`] | Single-line text input field |
//!
//! # Utilities
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`chrome`] | Focus borders and centered overlay placement |
//! | [`key`] | Key bindings and the [`KeyMap`](key::KeyMap) trait |

pub mod chrome;
pub mod help;
pub mod key;
pub mod text_input;

pub use help::Help;
pub use key::{Binding, KeyCombination, KeyMap};
pub use text_input::TextInput;
