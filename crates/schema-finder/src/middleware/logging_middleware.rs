use crate::actions::{Action, GlobalAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;

/// LoggingMiddleware - logs all actions passing through
pub struct LoggingMiddleware;

impl LoggingMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LoggingMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

impl Middleware for LoggingMiddleware {
    fn handle(&mut self, action: &Action, _state: &AppState, _dispatcher: &Dispatcher) -> bool {
        // Raw key presses are logged once they are translated
        if matches!(action, Action::Global(GlobalAction::KeyPressed(_))) {
            log::trace!("Action: {:?}", action);
        } else {
            log::debug!("Action: {:?}", action);
        }

        true // Always pass action through
    }
}
