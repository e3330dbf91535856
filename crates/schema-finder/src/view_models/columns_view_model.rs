use std::ops::Range;

use finder_nav::PathState;
use finder_schema::{Columns, SchemaDocument};

/// One row of a column, ready to render
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnItem {
    pub label: String,
    /// Show the required marker next to the label
    pub required: bool,
    /// Selecting the row opens another column
    pub has_children: bool,
}

/// One column, ready to render
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnViewModel {
    pub title: String,
    pub items: Vec<ColumnItem>,
    /// Row selected by the path in this column
    pub selected: Option<usize>,
    /// The cursor is in this column
    pub focused: bool,
}

/// View model for the column browser - handles presentation logic
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnsViewModel {
    pub columns: Vec<ColumnViewModel>,
    /// Index of the column holding the cursor
    pub cursor_column: usize,
}

impl ColumnsViewModel {
    pub fn new<'a>(
        document: &'a SchemaDocument,
        columns: &Columns<'a>,
        nav: &PathState,
        show_required_marker: bool,
    ) -> Self {
        let path = nav.path();
        let selected = columns.selected(path);
        let cursor_column = nav.last_col().unwrap_or(0);

        let column_models = columns
            .columns()
            .iter()
            .enumerate()
            .map(|(index, entries)| {
                let title = match index {
                    0 => document.title().unwrap_or("Schema").to_string(),
                    _ => selected
                        .get(index - 1)
                        .map(|entry| entry.key.clone())
                        .unwrap_or_default(),
                };

                let items = entries
                    .iter()
                    .map(|entry| ColumnItem {
                        label: entry.key.clone(),
                        required: show_required_marker && entry.required,
                        has_children: !entry.children(document).is_empty(),
                    })
                    .collect();

                ColumnViewModel {
                    title,
                    items,
                    selected: path.get(index).copied(),
                    focused: !path.is_empty() && index == cursor_column,
                }
            })
            .collect();

        Self {
            columns: column_models,
            cursor_column,
        }
    }

    /// Columns that fit into `width`, keeping the cursor column on screen
    ///
    /// The rightmost columns win, so the children of the focused entry stay
    /// visible while the leftmost ancestors scroll out.
    pub fn visible_columns(&self, width: u16, column_width: u16) -> Range<usize> {
        let fit = (width / column_width.max(1)).max(1) as usize;
        let end = self.columns.len();
        let start = end.saturating_sub(fit).min(self.cursor_column);
        start..end.min(start + fit)
    }
}

/// Rows of a column that fit into `height`, keeping `selected` on screen
pub fn visible_range(len: usize, selected: Option<usize>, height: usize) -> Range<usize> {
    if height == 0 {
        return 0..0;
    }
    if len <= height {
        return 0..len;
    }

    let start = match selected {
        Some(row) if row >= height => (row + 1 - height).min(len - height),
        _ => 0,
    };
    start..start + height
}
