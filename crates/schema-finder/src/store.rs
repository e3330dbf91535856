use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::reducers;
use crate::state::AppState;

/// Store - owns the state and runs actions through middleware and reducers
///
/// ```text
/// Action → Middleware chain → reducers::reduce → AppState
/// ```
pub struct Store {
    state: AppState,
    middleware: Vec<Box<dyn Middleware>>,
    dispatcher: Dispatcher,
}

impl Store {
    pub fn new(state: AppState) -> Self {
        Self {
            state,
            middleware: Vec::new(),
            dispatcher: Dispatcher::new(),
        }
    }

    /// Append a middleware; middleware runs in the order it was added
    pub fn add_middleware(&mut self, middleware: Box<dyn Middleware>) {
        self.middleware.push(middleware);
    }

    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Run one action to completion
    ///
    /// A middleware returning `false` consumes the action and the reducer
    /// never sees it.
    pub fn dispatch(&mut self, action: Action) {
        for middleware in &mut self.middleware {
            if !middleware.handle(&action, &self.state, &self.dispatcher) {
                return;
            }
        }

        let state = std::mem::take(&mut self.state);
        self.state = reducers::reduce(state, &action);
    }
}
