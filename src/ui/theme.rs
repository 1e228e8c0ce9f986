use ratatui::style::Color;

pub struct Theme {
    pub fg: Color,
    pub bar: Color,       // Blue
    pub comparing: Color, // Yellow
    pub swapping: Color,  // Pink
    pub sorted: Color,    // Green
    pub accent: Color,    // Blue for the step counter
    pub secondary: Color, // Orange
    pub muted: Color,     // Grey
    pub border: Color,
    pub status_bg: Color,
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    bar: Color::Rgb(137, 180, 250),       // Blue for unsorted bars
    comparing: Color::Rgb(249, 226, 175), // Yellow for the active comparison
    swapping: Color::Rgb(243, 139, 168),  // Pink for the active exchange
    sorted: Color::Rgb(166, 227, 161),    // Green for the settled suffix
    accent: Color::Rgb(137, 180, 250),
    secondary: Color::Rgb(250, 179, 135), // Orange for the playing badge
    muted: Color::Rgb(108, 112, 134),
    border: Color::Rgb(108, 112, 134),
    status_bg: Color::Rgb(50, 50, 70), // Slightly lighter BG for the status bar
};
