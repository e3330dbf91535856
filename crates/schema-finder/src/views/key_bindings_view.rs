use crate::capabilities::PanelCapabilities;
use crate::keymap::key_bindings;
use crate::state::AppState;
use crate::views::{centered_rect, View, ViewId};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Floating help panel listing all key bindings
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyBindingsView;

impl KeyBindingsView {
    pub fn new() -> Self {
        Self
    }
}

impl View for KeyBindingsView {
    fn view_id(&self) -> ViewId {
        ViewId::KeyBindings
    }

    fn render(&self, state: &AppState, area: Rect, f: &mut Frame) {
        let theme = &state.theme;
        let popup = centered_rect(60, 70, area);
        f.render_widget(Clear, popup);

        let bindings = key_bindings(state.config.vim_keys);
        let key_width = bindings.iter().map(|b| b.keys.chars().count()).max().unwrap_or(0);

        let lines: Vec<Line> = bindings
            .iter()
            .map(|binding| {
                Line::from(vec![
                    Span::styled(
                        format!(" {:<width$}", binding.keys, width = key_width),
                        theme.key_hint(),
                    ),
                    Span::raw("  "),
                    Span::styled(binding.description, theme.key_description()),
                ])
            })
            .collect();

        let max_offset = lines.len().saturating_sub(1);
        let offset = state.key_bindings_panel.scroll_offset.min(max_offset);

        let block = Block::default()
            .title(" Key Bindings (q/Esc/? to close) ")
            .borders(Borders::ALL)
            .border_style(theme.panel_border_focused())
            .title_style(theme.panel_title());

        let paragraph = Paragraph::new(lines)
            .block(block)
            .style(theme.panel_background())
            .scroll((offset as u16, 0));
        f.render_widget(paragraph, popup);
    }

    fn capabilities(&self, _state: &AppState) -> PanelCapabilities {
        PanelCapabilities::SCROLL_VERTICAL
    }

    fn is_floating(&self) -> bool {
        true
    }

    fn clone_box(&self) -> Box<dyn View> {
        Box::new(*self)
    }
}
