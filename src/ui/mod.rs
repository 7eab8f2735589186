//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into three layers:
//!
//! - **[`app`]** — application state, keyboard event loop, tab and pane focus
//! - **[`panes`]** — stateless render functions for each visible pane (tabs,
//!   list, detail, status bar)
//! - **[`theme`]** — centralized color palette used by all panes
//!
//! The entry point for consumers is [`App`]: construct it with a started
//! [`Viewer`] and call [`App::run`] to start the event loop.
//!
//! [`Viewer`]: crate::viewer::Viewer
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod theme;

pub use app::App;
