//! TUI pane rendering modules
//!
//! # Pane Modules
//!
//! - [`tabs`]: Tab bar, one tab per content domain
//! - [`list`]: Search box and filtered item list
//! - [`detail`]: Title, meta pills and scrollable body of the open item
//! - [`status`]: Status bar with keybindings and the last message
//!
//! Each pane module exports a primary `render_*` function that takes the
//! frame, its area, the data to draw and any scroll state it clamps.

pub mod detail;
pub mod list;
pub mod status;
pub mod tabs;

// Re-export render functions for convenience
pub use detail::render_detail_pane;
pub use list::render_list_pane;
pub use status::render_status_bar;
pub use tabs::render_tabs;
