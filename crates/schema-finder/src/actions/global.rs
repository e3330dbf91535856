//! Global actions
//!
//! Actions that are not tied to a specific view.

use ratatui::crossterm::event::KeyEvent;

use crate::views::View;

#[derive(Debug, Clone)]
pub enum GlobalAction {
    /// Raw key press from the terminal, before translation
    KeyPressed(KeyEvent),
    /// Close the top-most view (quits when it is the last one)
    Close,
    /// Quit the application
    Quit,
    /// Push a view onto the stack, or pop it if it is already on top
    PushView(Box<dyn View>),
}
