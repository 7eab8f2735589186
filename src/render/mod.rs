//! Content documents to detail views
//!
//! A [`DetailView`] is what the right-hand pane shows: a title, a row of meta
//! pills and a body of [`Block`]s. Building one never fails; every missing
//! field is replaced by a fixed placeholder at this layer so the panes only
//! deal with text.
//!
//! - [`reading`] — reading/writing lessons
//! - [`math`] — math lecture units

pub mod math;
pub mod reading;

use crate::error::ERROR_TITLE;

/// One element of a detail body
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// Section heading
    Heading(String),
    /// Short highlighted tag (time estimate, answer, card caption)
    Pill(String),
    /// Bold caption introducing the next block
    Label(String),
    /// Question line of a QA block
    Question(String),
    Text(String),
    Bullets(Vec<String>),
    /// Lecture script step: kind pill followed by its text
    Step { kind: String, text: String },
    /// Bordered group
    Card(Vec<Block>),
    /// Group of question cards
    Grid(Vec<Block>),
    /// Lines already flattened from markup
    Markup(Vec<String>),
}

impl Block {
    fn push_plain(&self, depth: usize, out: &mut Vec<String>) {
        let pad = "  ".repeat(depth);
        match self {
            Block::Heading(s) => out.push(format!("{}## {}", pad, s)),
            Block::Pill(s) => out.push(format!("{}[{}]", pad, s)),
            Block::Label(s) => out.push(format!("{}{}", pad, s)),
            Block::Question(s) | Block::Text(s) => out.push(format!("{}{}", pad, s)),
            Block::Bullets(items) => {
                out.extend(items.iter().map(|item| format!("{}- {}", pad, item)))
            }
            Block::Step { kind, text } => out.push(format!("{}[{}] {}", pad, kind, text)),
            Block::Card(children) | Block::Grid(children) => {
                for child in children {
                    child.push_plain(depth + 1, out);
                }
            }
            Block::Markup(lines) => out.extend(lines.iter().map(|l| format!("{}{}", pad, l))),
        }
    }
}

/// A rendered content document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetailView {
    pub title: String,
    pub meta: Vec<String>,
    pub body: Vec<Block>,
}

impl DetailView {
    /// Shown before anything has been selected
    pub fn empty(title: &str) -> Self {
        DetailView {
            title: title.to_string(),
            ..Default::default()
        }
    }

    /// Shown when the domain failed to load
    pub fn error() -> Self {
        Self::empty(ERROR_TITLE)
    }

    pub fn is_error(&self) -> bool {
        self.title == ERROR_TITLE && self.body.is_empty()
    }

    /// Unstyled text rendition, one entry per line
    pub fn to_plain_lines(&self) -> Vec<String> {
        let mut out = vec![self.title.clone()];
        if !self.meta.is_empty() {
            out.push(
                self.meta
                    .iter()
                    .map(|m| format!("[{}]", m))
                    .collect::<Vec<_>>()
                    .join(" "),
            );
        }
        for block in &self.body {
            block.push_plain(0, &mut out);
        }
        out
    }
}

/// Present field or placeholder
pub(crate) fn or(value: &Option<String>, fallback: &str) -> String {
    value.as_deref().unwrap_or(fallback).to_string()
}
