//! Schema Reducer
//!
//! Tracks loading of the schema document.

use crate::actions::{Action, SchemaAction};
use crate::state::SchemaState;

pub fn reduce(mut state: SchemaState, action: &Action) -> SchemaState {
    match action {
        Action::Schema(SchemaAction::Load) => {
            state.loading = true;
        }
        Action::Schema(SchemaAction::Loaded(document)) => {
            state.document = Some(document.clone());
            state.loading = false;
            state.error = None;
        }
        Action::Schema(SchemaAction::LoadFailed(error)) => {
            // Keep browsing the previous document after a failed reload
            state.loading = false;
            state.error = Some(error.clone());
        }
        _ => {}
    }
    state
}
