//! Read-only view of the visible columns.

/// Supplies column lengths for one event-handling pass.
///
/// Implementations must answer in O(1) and stay stable while a key is being
/// handled. `column_len` returns `None` for a column the snapshot does not
/// contain.
pub trait ColumnModel {
    fn column_count(&self) -> usize;

    fn column_len(&self, column: usize) -> Option<usize>;
}

impl<T> ColumnModel for [Vec<T>] {
    fn column_count(&self) -> usize {
        self.len()
    }

    fn column_len(&self, column: usize) -> Option<usize> {
        self.get(column).map(Vec::len)
    }
}

impl<T> ColumnModel for Vec<Vec<T>> {
    fn column_count(&self) -> usize {
        self.as_slice().column_count()
    }

    fn column_len(&self, column: usize) -> Option<usize> {
        self.as_slice().column_len(column)
    }
}

impl<M: ColumnModel + ?Sized> ColumnModel for &M {
    fn column_count(&self) -> usize {
        (**self).column_count()
    }

    fn column_len(&self, column: usize) -> Option<usize> {
        (**self).column_len(column)
    }
}

/// Snapshot holding only the length of each column.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnLengths(Vec<usize>);

impl ColumnLengths {
    pub fn new(lengths: Vec<usize>) -> Self {
        Self(lengths)
    }

    /// Capture the lengths of another model.
    pub fn snapshot<M: ColumnModel + ?Sized>(model: &M) -> Self {
        Self(
            (0..model.column_count())
                .map(|col| model.column_len(col).unwrap_or(0))
                .collect(),
        )
    }
}

impl ColumnModel for ColumnLengths {
    fn column_count(&self) -> usize {
        self.0.len()
    }

    fn column_len(&self, column: usize) -> Option<usize> {
        self.0.get(column).copied()
    }
}
