//! KeyboardMiddleware - translates keyboard events into context-aware actions
//!
//! This middleware intercepts `Global(KeyPressed)` actions and translates them
//! into actions based on:
//! - The global commands of the keymap
//! - The capabilities of the active view

use crate::actions::{Action, FinderAction, GlobalAction, KeyBindingsAction};
use crate::capabilities::PanelCapabilities;
use crate::dispatcher::Dispatcher;
use crate::keymap::{match_command, nav_input};
use crate::middleware::Middleware;
use crate::state::AppState;
use ratatui::crossterm::event::{KeyCode, KeyEvent};

/// KeyboardMiddleware handles keyboard input and maps it to actions
pub struct KeyboardMiddleware;

impl KeyboardMiddleware {
    pub fn new() -> Self {
        Self
    }

    fn handle_key(
        &mut self,
        key: &KeyEvent,
        capabilities: PanelCapabilities,
        dispatcher: &Dispatcher,
    ) -> bool {
        if let Some(command) = match_command(key) {
            log::debug!("Keymap matched command: {}", command);
            dispatcher.dispatch(command.to_action());
            return false;
        }

        // Every remaining key goes to the columns, which ignore what they
        // have no rule for
        if capabilities.supports_column_navigation() {
            let input = nav_input(key, capabilities.supports_vim_navigation());
            dispatcher.dispatch(Action::Finder(FinderAction::KeyPressed(input)));
            return false;
        }

        if capabilities.supports_vertical_scroll() {
            let action = match key.code {
                KeyCode::Down | KeyCode::Char('j') => Some(KeyBindingsAction::NavigateNext),
                KeyCode::Up | KeyCode::Char('k') => Some(KeyBindingsAction::NavigatePrevious),
                KeyCode::Home | KeyCode::Char('g') => Some(KeyBindingsAction::NavigateToTop),
                _ => None,
            };
            if let Some(action) = action {
                dispatcher.dispatch(Action::KeyBindings(action));
                return false;
            }
        }

        // Unhandled keys are consumed (not passed through)
        log::trace!("Unhandled key {:?}", key);
        false
    }
}

impl Default for KeyboardMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

impl Middleware for KeyboardMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        match action {
            Action::Global(GlobalAction::KeyPressed(key)) => {
                let capabilities = state.active_view().capabilities(state);
                self.handle_key(key, capabilities, dispatcher)
            }
            _ => true,
        }
    }
}
