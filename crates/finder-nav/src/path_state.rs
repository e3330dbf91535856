//! Where the user currently is in the tree.

use crate::column_model::ColumnModel;

/// Selected row per visited column, root column first.
pub type Path = Vec<usize>;

/// Immutable navigation state.
///
/// A new `PathState` is created for every committed transition; nothing here
/// is mutated in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathState {
    path: Path,
    /// Column that most recently received a selection (`None` = nothing selected).
    last_col: Option<usize>,
    /// Row last selected within `last_col`.
    last_row: Option<usize>,
}

impl PathState {
    /// Create a state whose cursor is the last element of `path`.
    pub fn new(path: Path) -> Self {
        let last_col = path.len().checked_sub(1);
        let last_row = path.last().copied();
        Self {
            path,
            last_col,
            last_row,
        }
    }

    /// Create a state with an explicitly tracked cursor.
    ///
    /// The cursor is allowed to disagree with `path`; the reducer trusts it
    /// for row movement and only uses `path` to build the result.
    pub fn with_cursor(path: Path, last_col: Option<usize>, last_row: Option<usize>) -> Self {
        Self {
            path,
            last_col,
            last_row,
        }
    }

    pub fn path(&self) -> &[usize] {
        &self.path
    }

    pub fn last_col(&self) -> Option<usize> {
        self.last_col
    }

    pub fn last_row(&self) -> Option<usize> {
        self.last_row
    }

    /// Number of columns with a selection.
    pub fn depth(&self) -> usize {
        self.path.len()
    }

    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    pub fn into_path(self) -> Path {
        self.path
    }

    /// Whether the path fits inside the columns of `columns`.
    ///
    /// Every index must address an existing row, and the path may not be
    /// deeper than the number of columns.
    pub fn fits<M: ColumnModel + ?Sized>(&self, columns: &M) -> bool {
        self.path.len() <= columns.column_count()
            && self
                .path
                .iter()
                .enumerate()
                .all(|(col, &row)| columns.column_len(col).is_some_and(|len| row < len))
    }
}

impl From<Path> for PathState {
    fn from(path: Path) -> Self {
        Self::new(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_derives_cursor() {
        let state = PathState::new(vec![3, 1]);
        assert_eq!(state.last_col(), Some(1));
        assert_eq!(state.last_row(), Some(1));
        assert_eq!(state.depth(), 2);
    }

    #[test]
    fn test_empty_path_has_no_cursor() {
        let state = PathState::default();
        assert!(state.is_empty());
        assert_eq!(state.last_col(), None);
        assert_eq!(state.last_row(), None);
    }

    #[test]
    fn test_fits() {
        let columns = vec![vec!['a', 'b', 'c'], vec!['x', 'y']];
        assert!(PathState::new(vec![]).fits(&columns));
        assert!(PathState::new(vec![2, 1]).fits(&columns));
        assert!(!PathState::new(vec![3]).fits(&columns));
        assert!(!PathState::new(vec![0, 0, 0]).fits(&columns));
    }
}
