//! Detail pane: title, meta pills and the scrollable body of a [`DetailView`]
//!
//! Blocks are laid out top to bottom. Cards and grids indent their children
//! and draw a left rule, which is as close as a terminal gets to the boxed
//! content blocks of the source material.

use crate::render::{Block as ViewBlock, DetailView};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
    Frame,
};

fn pill(text: &str) -> Span<'static> {
    Span::styled(
        format!(" {} ", text),
        Style::default()
            .fg(DEFAULT_THEME.pill_fg)
            .bg(DEFAULT_THEME.pill_bg),
    )
}

fn rule(depth: usize) -> Span<'static> {
    Span::styled(
        "│ ".repeat(depth),
        Style::default().fg(DEFAULT_THEME.border_normal),
    )
}

fn with_rule(depth: usize, mut spans: Vec<Span<'static>>) -> Line<'static> {
    if depth > 0 {
        spans.insert(0, rule(depth));
    }
    Line::from(spans)
}

fn push_block(block: &ViewBlock, depth: usize, out: &mut Vec<Line<'static>>) {
    match block {
        ViewBlock::Heading(text) => {
            if !out.is_empty() {
                out.push(Line::default());
            }
            out.push(with_rule(
                depth,
                vec![Span::styled(
                    text.clone(),
                    Style::default()
                        .fg(DEFAULT_THEME.heading)
                        .add_modifier(Modifier::BOLD),
                )],
            ));
        }
        ViewBlock::Pill(text) => out.push(with_rule(depth, vec![pill(text)])),
        ViewBlock::Label(text) => out.push(with_rule(
            depth,
            vec![Span::styled(
                text.clone(),
                Style::default()
                    .fg(DEFAULT_THEME.primary)
                    .add_modifier(Modifier::BOLD),
            )],
        )),
        ViewBlock::Question(text) => out.push(with_rule(
            depth,
            vec![Span::styled(
                text.clone(),
                Style::default()
                    .fg(DEFAULT_THEME.fg)
                    .add_modifier(Modifier::BOLD),
            )],
        )),
        ViewBlock::Text(text) => out.push(with_rule(
            depth,
            vec![Span::styled(text.clone(), Style::default().fg(DEFAULT_THEME.fg))],
        )),
        ViewBlock::Bullets(items) => {
            for item in items {
                out.push(with_rule(
                    depth,
                    vec![
                        Span::styled("• ", Style::default().fg(DEFAULT_THEME.secondary)),
                        Span::styled(item.clone(), Style::default().fg(DEFAULT_THEME.fg)),
                    ],
                ));
            }
        }
        ViewBlock::Step { kind, text } => out.push(with_rule(
            depth,
            vec![
                pill(kind),
                Span::raw(" "),
                Span::styled(text.clone(), Style::default().fg(DEFAULT_THEME.fg)),
            ],
        )),
        ViewBlock::Card(children) => {
            for child in children {
                push_block(child, depth + 1, out);
            }
        }
        ViewBlock::Grid(children) => {
            for (i, child) in children.iter().enumerate() {
                if i > 0 {
                    out.push(with_rule(depth, Vec::new()));
                }
                push_block(child, depth, out);
            }
        }
        ViewBlock::Markup(lines) => {
            for line in lines {
                out.push(with_rule(
                    depth,
                    vec![Span::styled(line.clone(), Style::default().fg(DEFAULT_THEME.fg))],
                ));
            }
        }
    }
}

/// Styled lines for the body of a view (meta pills first)
pub fn detail_lines(view: &DetailView) -> Vec<Line<'static>> {
    let mut out = Vec::new();
    if !view.meta.is_empty() {
        let mut spans = Vec::new();
        for (i, m) in view.meta.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" "));
            }
            spans.push(pill(m));
        }
        out.push(Line::from(spans));
        out.push(Line::default());
    }
    for block in &view.body {
        push_block(block, 0, &mut out);
    }
    out
}

/// Render the detail pane
pub fn render_detail_pane(
    frame: &mut Frame,
    area: Rect,
    view: &DetailView,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let title_style = if view.is_error() {
        Style::default()
            .fg(DEFAULT_THEME.error)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(DEFAULT_THEME.heading)
            .add_modifier(Modifier::BOLD)
    };

    let block = Block::default()
        .title(Span::styled(format!(" {} ", view.title), title_style))
        .borders(Borders::ALL)
        .border_style(border_style)
        .padding(Padding::new(1, 1, 0, 0));

    let lines = detail_lines(view);
    if lines.is_empty() {
        *scroll_offset = 0;
        let paragraph = Paragraph::new("(nothing to show)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    // Clamp against logical lines; wrapped lines only add room at the end
    let visible_height = area.height.saturating_sub(2).max(1) as usize;
    let max_scroll = lines.len().saturating_sub(visible_height);
    *scroll_offset = (*scroll_offset).min(max_scroll);

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((u16::try_from(*scroll_offset).unwrap_or(u16::MAX), 0));
    frame.render_widget(paragraph, area);
}
