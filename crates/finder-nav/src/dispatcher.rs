//! KeyboardDispatcher - binds the reducer to a path setter
//!
//! This is the only effectful part of the crate. It computes the next path
//! with [`next_path`] and hands committed paths to the setter. Every key that
//! reaches the dispatcher is reported as consumed, so the host never applies
//! its own handling (scrolling, caret movement) to navigation keys.

use std::fmt;

use crate::column_model::ColumnModel;
use crate::key::NavInput;
use crate::path_state::{Path, PathState};
use crate::reducer::{next_path, Transition};

/// Argument passed to the path setter.
pub enum PathUpdate {
    /// Replace the current path.
    Replace(Path),
    /// Derive the next path from whatever path is current at commit time.
    Apply(Box<dyn FnOnce(&[usize]) -> Path + Send>),
}

impl PathUpdate {
    /// Produce the path to commit, given the path currently held by the setter.
    pub fn resolve(self, current: &[usize]) -> Path {
        match self {
            PathUpdate::Replace(path) => path,
            PathUpdate::Apply(f) => f(current),
        }
    }
}

impl fmt::Debug for PathUpdate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathUpdate::Replace(path) => f.debug_tuple("Replace").field(path).finish(),
            PathUpdate::Apply(_) => f.write_str("Apply(<fn>)"),
        }
    }
}

/// What happened to a key handed to the dispatcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyOutcome {
    pub transition: Transition,
    /// Always `true`: the host must not apply its default key handling.
    pub default_prevented: bool,
}

impl KeyOutcome {
    pub fn committed(&self) -> bool {
        matches!(self.transition, Transition::Commit(_))
    }
}

/// Event handler over one column snapshot and one navigation state.
///
/// Build a fresh dispatcher for every event: the snapshot it borrows is only
/// valid for the pass it was taken in.
pub struct KeyboardDispatcher<'a, M: ?Sized, S> {
    columns: &'a M,
    state: &'a PathState,
    set_path: S,
}

impl<'a, M, S> KeyboardDispatcher<'a, M, S>
where
    M: ColumnModel + ?Sized,
    S: FnMut(PathUpdate),
{
    pub fn new(columns: &'a M, state: &'a PathState, set_path: S) -> Self {
        Self {
            columns,
            state,
            set_path,
        }
    }

    /// Handle a key: reduce, commit if there is something to commit.
    pub fn handle_key(&mut self, input: NavInput) -> KeyOutcome {
        let transition = next_path(self.state, self.columns, input);

        match &transition {
            Transition::Commit(path) => {
                log::debug!("Navigation {:?} -> {:?}", input, path);
                (self.set_path)(PathUpdate::Replace(path.clone()));
            }
            Transition::Ignore => {
                log::trace!("Navigation ignored key {:?}", input);
            }
            Transition::StaleSnapshot { column } => {
                log::warn!(
                    "Navigation snapshot has no column {} (path {:?}), skipping {:?}",
                    column,
                    self.state.path(),
                    input
                );
            }
        }

        KeyOutcome {
            transition,
            default_prevented: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::NavKey;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_commits_through_setter() {
        let columns = vec![vec!['a', 'b', 'c']];
        let state = PathState::new(vec![0]);
        let mut committed = Vec::new();

        let outcome = KeyboardDispatcher::new(&columns, &state, |update: PathUpdate| {
            committed.push(update.resolve(&[]));
        })
        .handle_key(NavInput::new(NavKey::ArrowDown));

        assert!(outcome.committed());
        assert!(outcome.default_prevented);
        assert_eq!(committed, vec![vec![1]]);
    }

    #[test]
    fn test_ignored_key_is_still_consumed() {
        let columns = vec![vec!['a']];
        let state = PathState::new(vec![0]);
        let mut calls = 0;

        let outcome = KeyboardDispatcher::new(&columns, &state, |_| calls += 1)
            .handle_key(NavInput::other());

        assert_eq!(outcome.transition, Transition::Ignore);
        assert!(outcome.default_prevented);
        assert_eq!(calls, 0);
    }

    #[test]
    fn test_stale_snapshot_is_not_committed() {
        let columns = vec![vec!['a']];
        let state = PathState::with_cursor(vec![0, 0], Some(1), Some(0));
        let mut calls = 0;

        let outcome = KeyboardDispatcher::new(&columns, &state, |_| calls += 1)
            .handle_key(NavInput::new(NavKey::ArrowDown));

        assert_eq!(outcome.transition, Transition::StaleSnapshot { column: 1 });
        assert!(!outcome.committed());
        assert_eq!(calls, 0);
    }

    #[test]
    fn test_apply_update_sees_current_path() {
        let update = PathUpdate::Apply(Box::new(|current: &[usize]| {
            let mut next = current.to_vec();
            next.push(7);
            next
        }));
        assert_eq!(update.resolve(&[1, 2]), vec![1, 2, 7]);
    }
}
