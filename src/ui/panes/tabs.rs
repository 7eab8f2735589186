//! Tab bar: one tab per content domain, exactly one active

use crate::ui::theme::DEFAULT_THEME;
use crate::viewer::Domain;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Tabs},
    Frame,
};

pub const DOMAINS: [Domain; 2] = [Domain::ReadingWriting, Domain::Math];

/// Index of `domain` in the tab bar
pub fn tab_index(domain: Domain) -> usize {
    DOMAINS.iter().position(|&d| d == domain).unwrap_or(0)
}

pub fn render_tabs(frame: &mut Frame, area: Rect, active: Domain) {
    let titles: Vec<Line> = DOMAINS
        .iter()
        .enumerate()
        .map(|(i, d)| {
            Line::from(vec![
                Span::styled(
                    format!("{} ", i + 1),
                    Style::default().fg(DEFAULT_THEME.comment),
                ),
                Span::raw(d.name()),
            ])
        })
        .collect();

    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(DEFAULT_THEME.border_normal))
                .title(" satview "),
        )
        .select(tab_index(active))
        .style(Style::default().fg(DEFAULT_THEME.fg))
        .highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(DEFAULT_THEME.primary)
                .add_modifier(Modifier::BOLD),
        );

    frame.render_widget(tabs, area);
}
