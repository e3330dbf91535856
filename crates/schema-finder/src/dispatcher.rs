use crate::actions::Action;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

/// Queue of actions waiting to go through the middleware chain.
///
/// Middleware dispatches follow-up actions here instead of calling the store
/// recursively; the main loop drains the queue before reading the next key.
/// Everything runs on the UI thread, so the queue is not shared across threads.
#[derive(Clone)]
pub struct Dispatcher {
    queue: Rc<RefCell<VecDeque<Action>>>,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self {
            queue: Rc::new(RefCell::new(VecDeque::new())),
        }
    }

    /// Queue an action behind the ones already waiting
    pub fn dispatch(&self, action: Action) {
        self.queue.borrow_mut().push_back(action);
    }

    /// Take the oldest queued action
    pub fn pop(&self) -> Option<Action> {
        self.queue.borrow_mut().pop_front()
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}
