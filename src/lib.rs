//! # Introduction
//!
//! satview shows SAT preparation content in the terminal: structured
//! reading & writing lessons and pre-rendered math lectures. Both arrive as
//! JSON documents under a content root (a directory or a base URL), are
//! rendered into detail views and are browsed through a searchable list per
//! tab built with [ratatui](https://docs.rs/ratatui).
//!
//! ## Pipeline
//!
//! ```text
//! Content root → fetch JSON → Catalog (filter/select) → DetailView → TUI
//!                                   ↘ SessionStore (last viewed)
//! ```
//!
//! 1. [`content`] — tolerant document models, the content source and the
//!    lecture markup flattener.
//! 2. [`catalog`] — list, case-insensitive search and selection state.
//! 3. [`render`] — documents to [`render::DetailView`]s with fallback text.
//! 4. [`viewer`] — the two domains, concurrent startup and selection.
//! 5. [`session`] — last-viewed persistence.
//! 6. [`ui`] — ratatui-based TUI; not part of the stable library API.

pub mod catalog;
pub mod config;
pub mod content;
pub mod error;
pub mod logging;
pub mod render;
pub mod session;
pub mod ui;
pub mod viewer;
