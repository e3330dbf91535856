//! Schema Middleware
//!
//! Reads the schema file on bootstrap and whenever a reload is requested.

use std::sync::Arc;

use crate::actions::{Action, BootstrapAction, SchemaAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;
use finder_schema::SchemaDocument;

pub struct SchemaMiddleware;

impl SchemaMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SchemaMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

impl Middleware for SchemaMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        match action {
            Action::Bootstrap(BootstrapAction::Start) => {
                dispatcher.dispatch(Action::Schema(SchemaAction::Load));
            }
            Action::Schema(SchemaAction::Load) => {
                let source = &state.schema.source;
                match SchemaDocument::load(source) {
                    Ok(document) => {
                        dispatcher.dispatch(Action::Schema(SchemaAction::Loaded(Arc::new(document))));
                    }
                    Err(e) => {
                        log::error!("Failed to load schema {}: {}", source.display(), e);
                        dispatcher.dispatch(Action::Schema(SchemaAction::LoadFailed(e.to_string())));
                    }
                }
            }
            _ => {}
        }
        true
    }
}
