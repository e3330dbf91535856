//! JSON Schema documents as a tree of browsable entries.
//!
//! - [`SchemaDocument`] loads a schema and resolves local `$ref` pointers.
//! - [`Entry`] is one row of a column: a property, an `items` schema, a
//!   `oneOf` variant, a definition...
//! - [`Columns`] derives the visible columns for a navigation path and
//!   implements [`finder_nav::ColumnModel`].
//! - [`EntryInfo`] is what the info panel shows for the focused entry.

mod columns;
mod document;
mod entry;
mod error;
mod info;

pub use columns::Columns;
pub use document::SchemaDocument;
pub use entry::{Combinator, Entry, EntryKind};
pub use error::SchemaError;
pub use info::EntryInfo;
