//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is the presentation collaborator for the core: it asks a generator
//! for a step sequence, hands it to a playback controller, and renders each
//! emitted snapshot.
//!
//! - **[`app`]**: application state, keyboard event loop, timer dispatch
//! - **[`panes`]**: stateless render functions for each visualization and
//!   the status bar
//! - **[`theme`]**: centralized color palette used by all panes
//!
//! The entry point for consumers is [`App`]: construct it with a [`RunRequest`]
//! and call [`App::run`] to start the event loop.
//!
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod theme;

pub use app::{App, RunRequest};
