use ratatui::style::Color;

pub struct Theme {
    pub fg: Color,
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub comment: Color,   // Grey
    pub error: Color,     // Red
    pub heading: Color,
    pub pill_fg: Color,
    pub pill_bg: Color,
    pub border_focused: Color,
    pub border_normal: Color,
    pub current_line_bg: Color,
    pub active_item: Color, // Item shown in the detail pane
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),   // Blue
    secondary: Color::Rgb(250, 179, 135), // Orange
    comment: Color::Rgb(108, 112, 134),
    error: Color::Rgb(243, 139, 168),
    heading: Color::Rgb(249, 226, 175),        // Yellow for headings
    pill_fg: Color::Rgb(30, 30, 46),           // Dark text on pills
    pill_bg: Color::Rgb(148, 226, 213),        // Teal pills
    border_focused: Color::Rgb(249, 226, 175), // Yellow border for focus
    border_normal: Color::Rgb(108, 112, 134),  // Grey border for normal
    current_line_bg: Color::Rgb(50, 50, 70),   // Slightly lighter BG for cursor row
    active_item: Color::Rgb(245, 194, 231),    // Pink marker for the open item
};
