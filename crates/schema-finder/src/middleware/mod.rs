//! Middleware sits between action dispatch and the reducers.
//!
//! Each middleware can inspect actions and state, dispatch follow-up actions,
//! perform side effects (file I/O, logging) and consume actions so they never
//! reach the reducers.

use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::state::AppState;

pub mod app_config_middleware;
pub mod keyboard_middleware;
pub mod logging_middleware;
pub mod navigation_middleware;
pub mod schema_middleware;

pub trait Middleware {
    /// Handle an action before it reaches the reducers
    ///
    /// # Returns
    /// - `true`: continue to the next middleware/reducer
    /// - `false`: the action is consumed here
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool;
}
