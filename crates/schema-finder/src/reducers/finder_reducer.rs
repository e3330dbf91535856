//! Finder Reducer
//!
//! Stores committed navigation paths.

use finder_nav::PathState;
use finder_schema::Columns;

use crate::actions::{Action, FinderAction, SchemaAction};
use crate::state::FinderState;

pub fn reduce(mut state: FinderState, action: &Action) -> FinderState {
    match action {
        Action::Finder(FinderAction::SetPath(path)) => {
            state.nav = PathState::new(path.clone());
        }
        Action::Schema(SchemaAction::Loaded(document)) => {
            // A reloaded schema may have fewer entries; keep what still exists
            let columns = Columns::build(document, state.nav.path());
            let path = columns.sanitize_path(state.nav.path());
            if path.as_slice() != state.nav.path() {
                log::info!(
                    "Path {:?} no longer exists after reload, keeping {:?}",
                    state.nav.path(),
                    path
                );
                state.nav = PathState::new(path);
            }
        }
        _ => {}
    }
    state
}
