//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into three layers:
//!
//! - **[`app`]** — application state and the keyboard event loop
//! - **[`panes`]** — stateless render functions for the structure pane, the
//!   step pane, and the status bar
//! - **[`theme`]** — centralized color palette used by all panes
//!
//! The entry point for consumers is [`App`]: construct it with a
//! [`Playback`] and a [`Structure`] and call [`App::run`] to start the event
//! loop. The panes never mutate playback state; all navigation goes through
//! key handling in [`app`].
//!
//! [`Playback`]: crate::playback::Playback
//! [`Structure`]: crate::structure::Structure
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod theme;

pub use app::App;
