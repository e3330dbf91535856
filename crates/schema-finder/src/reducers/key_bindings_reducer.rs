//! Key Bindings Panel Reducer
//!
//! Handles state updates for the key bindings help panel.

use crate::actions::{Action, GlobalAction, KeyBindingsAction};
use crate::state::KeyBindingsPanelState;
use crate::views::ViewId;

/// Reducer for key bindings panel state
///
/// `max_offset` is the last line the panel can scroll to.
pub fn reduce(
    mut state: KeyBindingsPanelState,
    action: &Action,
    max_offset: usize,
) -> KeyBindingsPanelState {
    match action {
        Action::KeyBindings(KeyBindingsAction::NavigateNext) => {
            state.scroll_offset = state.scroll_offset.saturating_add(1).min(max_offset);
        }
        Action::KeyBindings(KeyBindingsAction::NavigatePrevious) => {
            state.scroll_offset = state.scroll_offset.saturating_sub(1);
        }
        Action::KeyBindings(KeyBindingsAction::NavigateToTop) => {
            state.scroll_offset = 0;
        }
        Action::Global(GlobalAction::PushView(view)) if view.view_id() == ViewId::KeyBindings => {
            // Start at the top whenever the panel is opened
            state.scroll_offset = 0;
        }
        _ => {}
    }
    state
}
