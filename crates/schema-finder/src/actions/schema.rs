//! Schema actions
//!
//! Loading and reloading the schema document from disk.

use std::sync::Arc;

use finder_schema::SchemaDocument;

#[derive(Debug, Clone)]
pub enum SchemaAction {
    /// (Re)load the schema from its source file
    Load,
    /// Schema parsed successfully
    Loaded(Arc<SchemaDocument>),
    /// Schema could not be read or parsed
    LoadFailed(String),
}
