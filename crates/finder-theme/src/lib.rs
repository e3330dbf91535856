//! Colors and styles for schema-finder.

use ratatui::style::{Color, Modifier, Style};

/// Color palette with named styles for each UI element.
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub border: Color,
    pub border_focused: Color,
    pub title: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,
    pub accent: Color,
    pub selection_background: Color,
    pub selection_foreground: Color,
    pub status_error: Color,
    pub status_warning: Color,
    pub required: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: Color::Reset,
            border: Color::DarkGray,
            border_focused: Color::Cyan,
            title: Color::Cyan,
            text_primary: Color::White,
            text_secondary: Color::Gray,
            text_muted: Color::DarkGray,
            accent: Color::Yellow,
            selection_background: Color::Blue,
            selection_foreground: Color::White,
            status_error: Color::Red,
            status_warning: Color::Yellow,
            required: Color::LightRed,
        }
    }
}

impl Theme {
    pub fn panel_background(&self) -> Style {
        Style::default().bg(self.background)
    }

    pub fn panel_border(&self) -> Style {
        Style::default().fg(self.border)
    }

    pub fn panel_border_focused(&self) -> Style {
        Style::default().fg(self.border_focused)
    }

    pub fn panel_title(&self) -> Style {
        Style::default().fg(self.title).add_modifier(Modifier::BOLD)
    }

    pub fn text(&self) -> Style {
        Style::default().fg(self.text_primary)
    }

    pub fn text_secondary(&self) -> Style {
        Style::default().fg(self.text_secondary)
    }

    pub fn muted(&self) -> Style {
        Style::default().fg(self.text_muted)
    }

    /// Cursor row in the focused column.
    pub fn selected(&self) -> Style {
        Style::default()
            .fg(self.selection_foreground)
            .bg(self.selection_background)
            .add_modifier(Modifier::BOLD)
    }

    /// Selected rows in columns left of the cursor.
    pub fn selected_inactive(&self) -> Style {
        Style::default()
            .fg(self.text_primary)
            .bg(self.border)
    }

    pub fn section_header(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    pub fn info_title(&self) -> Style {
        Style::default()
            .fg(self.text_primary)
            .add_modifier(Modifier::BOLD)
    }

    pub fn info_type(&self) -> Style {
        Style::default()
            .fg(self.text_secondary)
            .add_modifier(Modifier::ITALIC)
    }

    pub fn code(&self) -> Style {
        Style::default().fg(self.accent)
    }

    pub fn required_marker(&self) -> Style {
        Style::default().fg(self.required)
    }

    pub fn key_hint(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    pub fn key_description(&self) -> Style {
        Style::default().fg(self.text_secondary)
    }

    pub fn error(&self) -> Style {
        Style::default().fg(self.status_error)
    }

    pub fn warning(&self) -> Style {
        Style::default().fg(self.status_warning)
    }
}
