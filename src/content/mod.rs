//! Content documents and how to get them
//!
//! - [`model`] — tolerant serde types for the lesson manifest, lesson
//!   documents and the math lecture manifest
//! - [`source`] — fetching documents from a directory or base URL
//! - [`markup`] — flattening pre-rendered lecture HTML into text lines

pub mod markup;
pub mod model;
pub mod source;

pub use model::{Lesson, LessonManifest, LectureManifest, ManifestEntry, Unit};
pub use source::ContentSource;
