//! Navigation Middleware
//!
//! Runs translated key presses through the column navigation reducer. The
//! columns are rebuilt from the current document and path for every key, and
//! a committed path is dispatched as `Finder(SetPath)`.

use crate::actions::{Action, FinderAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;
use finder_nav::{KeyboardDispatcher, PathUpdate};
use finder_schema::Columns;

pub struct NavigationMiddleware;

impl NavigationMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Default for NavigationMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

impl Middleware for NavigationMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        let Action::Finder(FinderAction::KeyPressed(input)) = action else {
            return true;
        };

        let Some(document) = state.schema.document.as_deref() else {
            log::debug!("No schema loaded, ignoring {:?}", input);
            return false;
        };

        let nav = &state.finder.nav;
        let columns = Columns::build(document, nav.path());
        let outcome = KeyboardDispatcher::new(&columns, nav, |update: PathUpdate| {
            let path = update.resolve(nav.path());
            dispatcher.dispatch(Action::Finder(FinderAction::SetPath(path)));
        })
        .handle_key(*input);

        // The key has been handled here; the reducers only see `SetPath`
        !outcome.default_prevented
    }
}
