use crate::snapshot::VisualState;
use ratatui::style::Color;

pub struct Theme {
    pub fg: Color,
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub comment: Color,   // Grey
    pub success: Color,   // Green
    pub error: Color,     // Red
    pub border_normal: Color,
    pub current_line_bg: Color,
    pub normal: Color,
    pub pivot: Color,  // Yellow
    pub lower: Color,  // Blue
    pub higher: Color, // Red
    pub sorted: Color, // Green
}

impl Theme {
    /// Cell color for an element state
    pub fn state_color(&self, state: VisualState) -> Color {
        match state {
            VisualState::Normal => self.normal,
            VisualState::Pivot => self.pivot,
            VisualState::Lower => self.lower,
            VisualState::Higher => self.higher,
            VisualState::Sorted => self.sorted,
        }
    }
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),   // Blue
    secondary: Color::Rgb(250, 179, 135), // Orange
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    border_normal: Color::Rgb(108, 112, 134),  // Grey border for normal
    current_line_bg: Color::Rgb(50, 50, 70),   // Slightly lighter BG for bars
    normal: Color::Rgb(186, 194, 222),
    pivot: Color::Rgb(249, 226, 175),
    lower: Color::Rgb(137, 180, 250),
    higher: Color::Rgb(243, 139, 168),
    sorted: Color::Rgb(166, 227, 161),
};
