//! Search box and filtered item list
//!
//! The list only ever shows the catalog's visible subsequence. Two markers
//! are independent: the cursor row (background highlight, moved with ↑/↓)
//! and the active item (`▶`, the one open in the detail pane).

use crate::catalog::{Catalog, Listed};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Padding, Paragraph},
    Frame,
};

fn border_style(is_focused: bool) -> Style {
    if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    }
}

/// First row to draw so that `cursor` stays inside a window of `height` rows
pub fn scroll_window(cursor: usize, total: usize, height: usize, offset: usize) -> usize {
    if total <= height || height == 0 {
        return 0;
    }
    let max_offset = total - height;
    let offset = if cursor < offset {
        cursor
    } else if cursor >= offset + height {
        cursor + 1 - height
    } else {
        offset
    };
    offset.min(max_offset)
}

/// Render the search box and list for one domain
#[allow(clippy::too_many_arguments)]
pub fn render_list_pane<T: Listed>(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    catalog: &Catalog<T>,
    search_focused: bool,
    list_focused: bool,
    scroll_offset: &mut usize,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    // Search box
    let cursor = if search_focused { "_" } else { "" };
    let search_text = if catalog.filter().is_empty() && !search_focused {
        Line::from(Span::styled(
            "press / to search",
            Style::default().fg(DEFAULT_THEME.comment),
        ))
    } else {
        Line::from(vec![
            Span::styled(catalog.filter().to_string(), Style::default().fg(DEFAULT_THEME.fg)),
            Span::styled(cursor, Style::default().fg(DEFAULT_THEME.secondary)),
        ])
    };
    let search = Paragraph::new(search_text).block(
        Block::default()
            .title(" Search ")
            .borders(Borders::ALL)
            .border_style(border_style(search_focused)),
    );
    frame.render_widget(search, chunks[0]);

    // Item list
    let block = Block::default()
        .title(format!(" {} ({}/{}) ", title, catalog.visible_len(), catalog.len()))
        .borders(Borders::ALL)
        .border_style(border_style(list_focused));

    if catalog.visible_len() == 0 {
        let message = if catalog.is_empty() {
            "(nothing loaded)"
        } else {
            "(no matches)"
        };
        let paragraph = Paragraph::new(message)
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, chunks[1]);
        return;
    }

    let visible_height = chunks[1].height.saturating_sub(2).max(1) as usize;
    *scroll_offset = scroll_window(
        catalog.cursor(),
        catalog.visible_len(),
        visible_height,
        *scroll_offset,
    );

    let items: Vec<ListItem> = catalog
        .visible()
        .enumerate()
        .skip(*scroll_offset)
        .take(visible_height)
        .map(|(row, item)| {
            let active = catalog.is_active(item);
            let marker = if active { "▶ " } else { "  " };
            let mut style = Style::default().fg(if active {
                DEFAULT_THEME.active_item
            } else {
                DEFAULT_THEME.fg
            });
            if active {
                style = style.add_modifier(Modifier::BOLD);
            }
            if row == catalog.cursor() {
                style = style.bg(DEFAULT_THEME.current_line_bg);
            }
            ListItem::new(Line::from(vec![
                Span::styled(marker, Style::default().fg(DEFAULT_THEME.active_item)),
                Span::styled(item.display().to_string(), style),
            ]))
        })
        .collect();

    let list = List::new(items).block(block.padding(Padding::new(0, 1, 0, 0)));
    frame.render_widget(list, chunks[1]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_window_short_list() {
        assert_eq!(scroll_window(3, 5, 10, 2), 0);
    }

    #[test]
    fn test_scroll_window_follows_cursor_down() {
        assert_eq!(scroll_window(12, 30, 10, 0), 3);
    }

    #[test]
    fn test_scroll_window_follows_cursor_up() {
        assert_eq!(scroll_window(4, 30, 10, 8), 4);
    }

    #[test]
    fn test_scroll_window_keeps_offset_when_visible() {
        assert_eq!(scroll_window(9, 30, 10, 5), 5);
    }

    #[test]
    fn test_scroll_window_clamped_after_filter() {
        assert_eq!(scroll_window(0, 12, 10, 20), 0);
        assert_eq!(scroll_window(11, 12, 10, 20), 2);
    }
}
