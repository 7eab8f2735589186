//! Math unit rendering

use super::{or, Block, DetailView};
use crate::content::markup;
use crate::content::model::Unit;

pub const TITLE_FALLBACK: &str = "Unit";

/// Build the detail view for one lecture unit
pub fn render_unit(unit: &Unit) -> DetailView {
    let body = unit
        .lectures
        .iter()
        .flat_map(|lecture| {
            let html = lecture.content_html.as_deref().unwrap_or("");
            [
                Block::Heading(or(&lecture.title, "Lecture")),
                Block::Card(vec![Block::Markup(markup::to_lines(html))]),
            ]
        })
        .collect();

    DetailView {
        title: or(&unit.unit_title, TITLE_FALLBACK),
        meta: Vec::new(),
        body,
    }
}
