use finder_nav::{ColumnModel, Path};

use crate::document::SchemaDocument;
use crate::entry::Entry;

/// Visible columns for one navigation path.
///
/// Column 0 lists the root entries. Column `i + 1` lists the children of the
/// entry selected by `path[i]`; building stops at the first selection that is
/// a leaf or does not exist.
#[derive(Debug, Clone)]
pub struct Columns<'a> {
    columns: Vec<Vec<Entry<'a>>>,
}

impl<'a> Columns<'a> {
    pub fn build(doc: &'a SchemaDocument, path: &[usize]) -> Self {
        let mut columns = vec![doc.root_entries()];

        for &row in path {
            let Some(selected) = columns.last().and_then(|column| column.get(row)) else {
                break;
            };
            let children = selected.children(doc);
            if children.is_empty() {
                break;
            }
            columns.push(children);
        }

        Self { columns }
    }

    pub fn columns(&self) -> &[Vec<Entry<'a>>] {
        &self.columns
    }

    /// Entries selected by `path`, stopping at the first index that does not resolve.
    pub fn selected(&self, path: &[usize]) -> Vec<&Entry<'a>> {
        path.iter()
            .enumerate()
            .map_while(|(col, &row)| self.columns.get(col)?.get(row))
            .collect()
    }

    /// The entry the cursor is on, `None` for the empty path.
    pub fn focused(&self, path: &[usize]) -> Option<&Entry<'a>> {
        let (&row, parents) = path.split_last()?;
        self.columns.get(parents.len())?.get(row)
    }

    /// Keys of the selected entries, root first.
    pub fn breadcrumb(&self, path: &[usize]) -> Vec<&str> {
        self.selected(path)
            .into_iter()
            .map(|entry| entry.key.as_str())
            .collect()
    }

    /// The longest prefix of `path` that still addresses existing entries.
    pub fn sanitize_path(&self, path: &[usize]) -> Path {
        let valid = self.selected(path).len();
        path[..valid].to_vec()
    }
}

impl ColumnModel for Columns<'_> {
    fn column_count(&self) -> usize {
        self.columns.len()
    }

    fn column_len(&self, column: usize) -> Option<usize> {
        self.columns.get(column).map(Vec::len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use finder_nav::{next_path, NavInput, NavKey, PathState, Transition};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn sample() -> SchemaDocument {
        SchemaDocument::from_value(json!({
            "properties": {
                "name": { "type": "string" },
                "server": {
                    "properties": {
                        "host": { "type": "string" },
                        "tls": {
                            "properties": { "cert": {}, "key": {} }
                        }
                    }
                },
                "debug": { "type": "boolean" }
            }
        }))
        .unwrap()
    }

    #[test]
    fn test_build_follows_selection() {
        let doc = sample();

        assert_eq!(Columns::build(&doc, &[]).column_count(), 1);
        // Leaf selected: no column to its right.
        assert_eq!(Columns::build(&doc, &[0]).column_count(), 1);

        let columns = Columns::build(&doc, &[1, 1]);
        assert_eq!(columns.column_count(), 3);
        assert_eq!(columns.column_len(1), Some(2));
        assert_eq!(columns.column_len(2), Some(2));
        assert_eq!(columns.breadcrumb(&[1, 1]), vec!["server", "tls"]);
        assert_eq!(columns.focused(&[1, 1]).map(|e| e.key.as_str()), Some("tls"));
    }

    #[test]
    fn test_focused_on_empty_path() {
        let doc = sample();
        assert!(Columns::build(&doc, &[]).focused(&[]).is_none());
    }

    #[test]
    fn test_sanitize_path_drops_stale_indices() {
        let doc = sample();
        let path = [1, 5, 0];
        let columns = Columns::build(&doc, &path);
        assert_eq!(columns.sanitize_path(&path), vec![1]);
        assert_eq!(columns.sanitize_path(&[9]), Vec::<usize>::new());
    }

    #[test]
    fn test_navigation_over_schema_columns() {
        let doc = sample();
        let mut state = PathState::default();

        // Down on the empty path seeds the bottom row.
        for (input, expected) in [
            (NavInput::new(NavKey::ArrowDown), vec![2]),
            (NavInput::new(NavKey::ArrowUp), vec![1]),
            (NavInput::new(NavKey::ArrowRight), vec![1, 0]),
            (NavInput::with_ctrl(NavKey::ArrowDown), vec![1, 1]),
            (NavInput::new(NavKey::ArrowRight), vec![1, 1, 0]),
            (NavInput::new(NavKey::ArrowRight), vec![1, 1, 0]),
            (NavInput::new(NavKey::Home), vec![1]),
        ] {
            let columns = Columns::build(&doc, state.path());
            match next_path(&state, &columns, input) {
                Transition::Commit(path) => state = PathState::new(path),
                other => panic!("{:?} gave {:?}", input, other),
            }
            assert_eq!(state.path(), expected.as_slice(), "after {:?}", input);
        }
    }
}
