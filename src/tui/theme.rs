//! Theme system for TUI colors and styles

use iocraft::prelude::Color;

use crate::types::Status;

/// Theme configuration for TUI components
#[derive(Debug, Clone)]
pub struct Theme {
    // Status colors
    pub status_todo: Color,
    pub status_doing: Color,
    pub status_done: Color,

    /// Deadline color for issues past due and not done
    pub overdue: Color,

    // UI colors
    pub border: Color,
    pub border_focused: Color,
    pub background: Color,
    pub text: Color,
    pub text_dimmed: Color,
    pub highlight: Color,
    pub highlight_text: Color,
    pub id_color: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            status_todo: Color::Yellow,
            status_doing: Color::Cyan,
            status_done: Color::Green,

            overdue: Color::Red,

            border: Color::Rgb {
                r: 120,
                g: 120,
                b: 120,
            },
            border_focused: Color::Blue,
            background: Color::Reset,
            text: Color::White,
            text_dimmed: Color::Rgb {
                r: 120,
                g: 120,
                b: 120,
            },
            highlight: Color::Blue,
            highlight_text: Color::White,
            id_color: Color::Cyan,
        }
    }
}

impl Theme {
    /// Get the color for an issue status
    pub fn status_color(&self, status: Status) -> Color {
        match status {
            Status::Todo => self.status_todo,
            Status::Doing => self.status_doing,
            Status::Done => self.status_done,
        }
    }
}

/// Global theme instance
pub static THEME: std::sync::LazyLock<Theme> = std::sync::LazyLock::new(Theme::default);

/// Get a reference to the global theme
pub fn theme() -> &'static Theme {
    &THEME
}
