//! Navigation reducer - pure function from (state, columns, key) to the next path

use crate::column_model::ColumnModel;
use crate::key::{NavInput, NavKey};
use crate::path_state::{Path, PathState};

/// Result of reducing one key press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// Commit this path.
    Commit(Path),
    /// Nothing to commit: the key is not a navigation key, or the target
    /// column has no rows.
    Ignore,
    /// The state points at a column the snapshot does not contain.
    StaleSnapshot { column: usize },
}

impl Transition {
    pub fn into_path(self) -> Option<Path> {
        match self {
            Transition::Commit(path) => Some(path),
            Transition::Ignore | Transition::StaleSnapshot { .. } => None,
        }
    }
}

/// Compute the path that follows `state` when `input` is pressed.
///
/// Row movement is clamped to the column, never wrapped. Only column lengths
/// are read from `columns`.
pub fn next_path<M: ColumnModel + ?Sized>(
    state: &PathState,
    columns: &M,
    input: NavInput,
) -> Transition {
    let path = state.path();

    match input.key {
        NavKey::ArrowLeft => Transition::Commit(parent(path).to_vec()),

        NavKey::ArrowRight => {
            if path.len() >= columns.column_count() {
                return Transition::Commit(path.to_vec());
            }
            // The next column exists, but may have nothing to enter.
            match columns.column_len(path.len()) {
                Some(0) => Transition::Ignore,
                Some(_) => {
                    let mut next = path.to_vec();
                    next.push(0);
                    Transition::Commit(next)
                }
                None => Transition::StaleSnapshot { column: path.len() },
            }
        }

        NavKey::ArrowUp => {
            let column = cursor_column(state);
            with_bottom(columns, column, |bottom| {
                let row = if input.ctrl {
                    0
                } else {
                    // `None` is "before the first row", which clamps to 0.
                    state.last_row().map_or(0, |row| row.saturating_sub(1))
                };
                replace_last(path, row.min(bottom))
            })
        }

        NavKey::ArrowDown => {
            let column = cursor_column(state);
            with_bottom(columns, column, |bottom| {
                let row = if input.ctrl || path.is_empty() {
                    bottom
                } else {
                    state
                        .last_row()
                        .map_or(0, |row| row.saturating_add(1))
                        .min(bottom)
                };
                replace_last(path, row)
            })
        }

        NavKey::Home => Transition::Commit(path[..path.len().min(1)].to_vec()),

        NavKey::Other => Transition::Ignore,
    }
}

/// Column whose rows `ArrowUp` / `ArrowDown` move through.
fn cursor_column(state: &PathState) -> usize {
    state.last_col().unwrap_or(0)
}

/// Run `f` with the index of the last row in `column`.
fn with_bottom<M: ColumnModel + ?Sized>(
    columns: &M,
    column: usize,
    f: impl FnOnce(usize) -> Path,
) -> Transition {
    match columns.column_len(column) {
        Some(0) => Transition::Ignore,
        Some(len) => Transition::Commit(f(len - 1)),
        None => Transition::StaleSnapshot { column },
    }
}

fn parent(path: &[usize]) -> &[usize] {
    path.split_last().map_or(path, |(_, rest)| rest)
}

/// Replace the last element of `path`, or seed it when `path` is empty.
fn replace_last(path: &[usize], row: usize) -> Path {
    let mut next = parent(path).to_vec();
    next.push(row);
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn key(key: NavKey) -> NavInput {
        NavInput::new(key)
    }

    fn ctrl(key: NavKey) -> NavInput {
        NavInput::with_ctrl(key)
    }

    fn sample() -> Vec<Vec<char>> {
        vec![vec!['a', 'b', 'c'], vec!['x', 'y']]
    }

    #[test]
    fn test_walkthrough_scenario() {
        let columns = sample();

        let state = PathState::with_cursor(vec![1], Some(0), Some(1));
        let down = next_path(&state, &columns, key(NavKey::ArrowDown));
        assert_eq!(down, Transition::Commit(vec![2]));

        let state = PathState::new(vec![2]);
        let right = next_path(&state, &columns, key(NavKey::ArrowRight));
        assert_eq!(right, Transition::Commit(vec![2, 0]));

        let state = PathState::with_cursor(vec![2, 0], Some(1), Some(0));
        let top = next_path(&state, &columns, ctrl(NavKey::ArrowUp));
        assert_eq!(top, Transition::Commit(vec![2, 0]));

        let left = next_path(&state, &columns, key(NavKey::ArrowLeft));
        assert_eq!(left, Transition::Commit(vec![2]));

        let state = PathState::new(vec![2]);
        let home = next_path(&state, &columns, key(NavKey::Home));
        assert_eq!(home, Transition::Commit(vec![2]));
    }

    #[test]
    fn test_arrow_down_on_empty_path_seeds_bottom_row() {
        let columns = vec![vec!['a', 'b', 'c']];
        let next = next_path(&PathState::default(), &columns, key(NavKey::ArrowDown));
        assert_eq!(next, Transition::Commit(vec![2]));
    }

    #[test]
    fn test_arrow_right_at_deepest_column_keeps_path() {
        let columns = sample();
        let state = PathState::new(vec![0, 1]);
        let next = next_path(&state, &columns, key(NavKey::ArrowRight));
        assert_eq!(next, Transition::Commit(vec![0, 1]));
    }

    #[test]
    fn test_arrow_right_into_empty_column_is_ignored() {
        let columns: Vec<Vec<char>> = vec![vec!['a'], vec![]];
        let state = PathState::new(vec![0]);
        let next = next_path(&state, &columns, key(NavKey::ArrowRight));
        assert_eq!(next, Transition::Ignore);
    }

    #[test]
    fn test_arrow_left_on_empty_path_stays_empty() {
        let columns = sample();
        let next = next_path(&PathState::default(), &columns, key(NavKey::ArrowLeft));
        assert_eq!(next, Transition::Commit(vec![]));
    }

    #[test]
    fn test_left_then_right_restores_depth() {
        let columns = sample();
        for path in [vec![], vec![0], vec![2], vec![1, 1], vec![2, 0]] {
            let state = PathState::new(path.clone());
            let left = next_path(&state, &columns, key(NavKey::ArrowLeft))
                .into_path()
                .unwrap();
            let right = next_path(&PathState::new(left), &columns, key(NavKey::ArrowRight))
                .into_path()
                .unwrap();
            // The empty path has nothing to pop, so ArrowRight goes one deeper.
            let expected = path.len().max(1);
            assert_eq!(right.len(), expected, "path {:?}", path);
        }
    }

    #[test]
    fn test_arrow_up_clamps_at_top() {
        let columns = sample();
        let state = PathState::new(vec![0]);
        let next = next_path(&state, &columns, key(NavKey::ArrowUp));
        assert_eq!(next, Transition::Commit(vec![0]));
    }

    #[test]
    fn test_arrow_down_clamps_at_bottom() {
        let columns = sample();
        let state = PathState::new(vec![1, 1]);
        let next = next_path(&state, &columns, key(NavKey::ArrowDown));
        assert_eq!(next, Transition::Commit(vec![1, 1]));
    }

    #[test]
    fn test_row_moves_stay_inside_column_for_any_cursor() {
        let columns = sample();
        let rows = [None, Some(0), Some(1), Some(2), Some(3), Some(usize::MAX)];
        for last_row in rows {
            let state = PathState::with_cursor(vec![0], Some(0), last_row);
            for input in [
                key(NavKey::ArrowUp),
                key(NavKey::ArrowDown),
                ctrl(NavKey::ArrowUp),
                ctrl(NavKey::ArrowDown),
            ] {
                let next = next_path(&state, &columns, input).into_path().unwrap();
                let row = *next.last().unwrap();
                assert!(row <= 2, "{:?} with row {:?} gave {}", input, last_row, row);
            }
        }
    }

    #[test]
    fn test_ctrl_jumps_to_column_edges() {
        let columns = sample();
        let state = PathState::new(vec![1]);
        assert_eq!(
            next_path(&state, &columns, ctrl(NavKey::ArrowUp)),
            Transition::Commit(vec![0])
        );
        assert_eq!(
            next_path(&state, &columns, ctrl(NavKey::ArrowDown)),
            Transition::Commit(vec![2])
        );
    }

    #[test]
    fn test_home_truncates_to_first_column() {
        let columns = sample();
        assert_eq!(
            next_path(&PathState::new(vec![1, 1]), &columns, key(NavKey::Home)),
            Transition::Commit(vec![1])
        );
        assert_eq!(
            next_path(&PathState::default(), &columns, key(NavKey::Home)),
            Transition::Commit(vec![])
        );
    }

    #[test]
    fn test_other_keys_are_ignored() {
        let columns = sample();
        let state = PathState::new(vec![1]);
        assert_eq!(
            next_path(&state, &columns, NavInput::other()),
            Transition::Ignore
        );
    }

    #[test]
    fn test_row_move_in_empty_column_is_ignored() {
        let columns: Vec<Vec<char>> = vec![vec![]];
        let state = PathState::default();
        assert_eq!(
            next_path(&state, &columns, key(NavKey::ArrowDown)),
            Transition::Ignore
        );
        assert_eq!(
            next_path(&state, &columns, key(NavKey::ArrowUp)),
            Transition::Ignore
        );
    }

    #[test]
    fn test_cursor_outside_snapshot_is_stale() {
        let columns = sample();
        let state = PathState::with_cursor(vec![0, 0, 0], Some(2), Some(0));
        assert_eq!(
            next_path(&state, &columns, key(NavKey::ArrowDown)),
            Transition::StaleSnapshot { column: 2 }
        );
    }
}
