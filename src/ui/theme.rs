use ratatui::style::Color;

/// Slate theme colors
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub background: Color,
    pub panel: Color,
    pub heading: Color,
    pub text: Color,
    pub dimmed: Color,
    pub error: Color,
    pub success: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme::slate()
    }
}

impl Theme {
    pub fn slate() -> Self {
        Self {
            background: Color::Rgb(17, 24, 39),  // #111827 Night Slate
            panel: Color::Rgb(31, 41, 55),       // #1F2937 Panel Slate
            heading: Color::Rgb(147, 197, 253),  // #93C5FD Sky Blue
            text: Color::Rgb(191, 219, 254),     // #BFDBFE Pale Blue
            dimmed: Color::Rgb(107, 114, 128),   // #6B7280 Ash
            error: Color::Rgb(239, 68, 68),      // #EF4444 Signal Red
            success: Color::Rgb(34, 197, 94),    // #22C55E Signal Green
        }
    }

    /// Default theme is slate
    pub fn current() -> Self {
        Self::slate()
    }
}

/// Convenience access to current theme colors
pub mod colors {
    use super::Theme;
    use ratatui::style::Color;

    pub fn background() -> Color {
        Theme::current().background
    }
    pub fn panel() -> Color {
        Theme::current().panel
    }
    pub fn heading() -> Color {
        Theme::current().heading
    }
    pub fn text() -> Color {
        Theme::current().text
    }
    pub fn dimmed() -> Color {
        Theme::current().dimmed
    }
    pub fn error() -> Color {
        Theme::current().error
    }
    pub fn success() -> Color {
        Theme::current().success
    }
}
