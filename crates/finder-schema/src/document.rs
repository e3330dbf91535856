use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde_json::Value;

use crate::entry::{self, Entry, EntryKind};
use crate::error::SchemaError;

/// Upper bound on chained `$ref` hops before giving up.
const MAX_REF_HOPS: usize = 32;

/// Keywords holding named definitions at the document root.
const DEFINITION_KEYWORDS: [&str; 2] = ["$defs", "definitions"];

/// A parsed JSON Schema document.
#[derive(Debug, Clone)]
pub struct SchemaDocument {
    root: Value,
    source: Option<PathBuf>,
}

impl SchemaDocument {
    /// Wrap an already parsed schema. The root must be an object.
    pub fn from_value(root: Value) -> Result<Self, SchemaError> {
        if !root.is_object() {
            return Err(SchemaError::NotAnObject);
        }
        Ok(Self { root, source: None })
    }

    /// Read and parse a schema file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SchemaError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| SchemaError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let mut document: Self = content.parse()?;
        document.source = Some(path.to_path_buf());
        log::info!("Loaded schema from {}", path.display());
        Ok(document)
    }

    pub fn root(&self) -> &Value {
        &self.root
    }

    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// The root `title`, if the schema declares one.
    pub fn title(&self) -> Option<&str> {
        self.root.get("title").and_then(Value::as_str)
    }

    /// Entries of the first column.
    ///
    /// These are the children of the root schema followed by one entry per
    /// definitions keyword present at the root.
    pub fn root_entries(&self) -> Vec<Entry<'_>> {
        let mut entries = entry::schema_children(self, "", &self.root);

        for keyword in DEFINITION_KEYWORDS {
            if let Some(definitions) = self.root.get(keyword).filter(|v| v.is_object()) {
                entries.push(Entry {
                    key: keyword.to_string(),
                    kind: EntryKind::Definitions,
                    pointer: entry::join_pointer("", keyword),
                    node: definitions,
                    required: false,
                });
            }
        }

        entries
    }

    /// Look up a `$ref` value.
    ///
    /// Returns the JSON pointer of the target along with the target node.
    /// The fragment is percent-decoded first, and `#definitions/x` is accepted
    /// as a sloppy spelling of `#/definitions/x`.
    pub fn lookup(&self, reference: &str) -> Result<(String, &Value), SchemaError> {
        let fragment = reference
            .strip_prefix('#')
            .ok_or_else(|| SchemaError::ExternalRef(reference.to_string()))?;
        let fragment = urlencoding::decode(fragment)
            .map_err(|_| SchemaError::UnresolvedRef(reference.to_string()))?;

        let pointer = if fragment.is_empty() || fragment.starts_with('/') {
            fragment.to_string()
        } else {
            format!("/{}", fragment)
        };

        let target = self
            .root
            .pointer(&pointer)
            .ok_or_else(|| SchemaError::UnresolvedRef(reference.to_string()))?;
        Ok((pointer, target))
    }

    /// Follow `$ref` chains starting at `node` (found at `pointer`).
    pub fn resolve<'a>(
        &'a self,
        pointer: &str,
        node: &'a Value,
    ) -> Result<(String, &'a Value), SchemaError> {
        let mut pointer = pointer.to_string();
        let mut node = node;
        let mut seen: Vec<&str> = Vec::new();

        while let Some(reference) = node.get("$ref").and_then(Value::as_str) {
            if seen.contains(&reference) || seen.len() >= MAX_REF_HOPS {
                return Err(SchemaError::RefCycle(reference.to_string()));
            }
            seen.push(reference);

            let (target_pointer, target) = self.lookup(reference)?;
            pointer = target_pointer;
            node = target;
        }

        Ok((pointer, node))
    }
}

impl FromStr for SchemaDocument {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let root: Value = serde_json::from_str(s)?;
        Self::from_value(root)
    }
}
