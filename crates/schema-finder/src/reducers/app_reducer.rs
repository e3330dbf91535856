use crate::actions::{Action, BootstrapAction, GlobalAction};
use crate::keymap::key_bindings;
use crate::reducers::{finder_reducer, key_bindings_reducer, schema_reducer};
use crate::state::AppState;

/// Reducer - pure function that produces new state from current state + action
///
/// This is the root reducer. It handles the view stack and other global
/// actions, then hands every action to the sub-reducers.
pub fn reduce(mut state: AppState, action: &Action) -> AppState {
    match action {
        Action::Global(GlobalAction::Quit) => {
            state.running = false;
            return state;
        }

        Action::Global(GlobalAction::PushView(new_view)) => {
            // Pushing the view that is already on top closes it (toggle behavior)
            let is_duplicate = state
                .view_stack
                .last()
                .is_some_and(|top| top.view_id() == new_view.view_id());

            if is_duplicate {
                log::debug!(
                    "Popping view from the stack, because this view is on top already: {:?}",
                    new_view.view_id()
                );
                state.view_stack.pop();
            } else {
                log::debug!("Pushing view onto stack: {:?}", new_view.view_id());
                state.view_stack.push(new_view.clone());
            }
        }

        Action::Global(GlobalAction::Close) => {
            if state.view_stack.len() > 1 {
                let popped = state.view_stack.pop();
                log::debug!("Closed view: {:?}", popped.map(|v| v.view_id()));
            } else {
                log::debug!("Closing last view - quitting application");
                state.running = false;
            }
        }

        Action::Bootstrap(BootstrapAction::ConfigLoaded(config)) => {
            state.config = config.clone();
        }

        _ => {}
    }

    state.schema = schema_reducer::reduce(state.schema, action);
    state.finder = finder_reducer::reduce(state.finder, action);

    let max_offset = key_bindings(state.config.vim_keys).len().saturating_sub(1);
    state.key_bindings_panel =
        key_bindings_reducer::reduce(state.key_bindings_panel, action, max_offset);

    state
}
