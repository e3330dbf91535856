//! Schema nodes as column entries.

use serde_json::{Map, Value};

use crate::document::SchemaDocument;

/// Composition keyword a variant entry comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Combinator {
    OneOf,
    AnyOf,
    AllOf,
}

impl Combinator {
    pub const ALL: [Combinator; 3] = [Combinator::OneOf, Combinator::AnyOf, Combinator::AllOf];

    pub fn keyword(self) -> &'static str {
        match self {
            Combinator::OneOf => "oneOf",
            Combinator::AnyOf => "anyOf",
            Combinator::AllOf => "allOf",
        }
    }
}

/// How an entry relates to its parent schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Property,
    PatternProperty,
    AdditionalProperties,
    Items,
    TupleItem(usize),
    Variant(Combinator, usize),
    /// The `$defs` / `definitions` map of the root document.
    Definitions,
    /// One named schema inside [`EntryKind::Definitions`].
    Definition,
}

/// One selectable row in a column.
#[derive(Debug, Clone)]
pub struct Entry<'a> {
    /// Label shown in the column.
    pub key: String,
    pub kind: EntryKind,
    /// JSON pointer of `node` inside the document.
    pub pointer: String,
    /// The node as declared, before any `$ref` is followed.
    pub node: &'a Value,
    /// Listed in the parent's `required` array.
    pub required: bool,
}

impl<'a> Entry<'a> {
    /// Entries of the column opened by selecting this one.
    pub fn children(&self, doc: &'a SchemaDocument) -> Vec<Entry<'a>> {
        match self.kind {
            EntryKind::Definitions => self
                .node
                .as_object()
                .map(|definitions| {
                    definitions
                        .iter()
                        .map(|(name, schema)| Entry {
                            key: name.clone(),
                            kind: EntryKind::Definition,
                            pointer: join_pointer(&self.pointer, name),
                            node: schema,
                            required: false,
                        })
                        .collect()
                })
                .unwrap_or_default(),
            _ => schema_children(doc, &self.pointer, self.node),
        }
    }

    /// The `$ref` this entry declares, if any.
    pub fn reference(&self) -> Option<&'a str> {
        self.node.get("$ref").and_then(Value::as_str)
    }
}

/// Children of the schema at `pointer`, following `$ref` first.
///
/// Unresolvable references are logged and treated as leaves.
pub(crate) fn schema_children<'a>(
    doc: &'a SchemaDocument,
    pointer: &str,
    node: &'a Value,
) -> Vec<Entry<'a>> {
    let (pointer, node) = match doc.resolve(pointer, node) {
        Ok(resolved) => resolved,
        Err(err) => {
            log::warn!("Cannot expand {}: {}", display_pointer(pointer), err);
            return Vec::new();
        }
    };
    let Some(schema) = node.as_object() else {
        return Vec::new();
    };

    let mut entries = Vec::new();
    let required = required_names(schema);

    if let Some(properties) = schema.get("properties").and_then(Value::as_object) {
        let base = join_pointer(&pointer, "properties");
        entries.extend(properties.iter().map(|(name, child)| Entry {
            key: name.clone(),
            kind: EntryKind::Property,
            pointer: join_pointer(&base, name),
            node: child,
            required: required.contains(&name.as_str()),
        }));
    }

    if let Some(patterns) = schema.get("patternProperties").and_then(Value::as_object) {
        let base = join_pointer(&pointer, "patternProperties");
        entries.extend(patterns.iter().map(|(pattern, child)| Entry {
            key: pattern.clone(),
            kind: EntryKind::PatternProperty,
            pointer: join_pointer(&base, pattern),
            node: child,
            required: false,
        }));
    }

    if let Some(additional) = schema.get("additionalProperties").filter(|v| v.is_object()) {
        entries.push(Entry {
            key: "additionalProperties".to_string(),
            kind: EntryKind::AdditionalProperties,
            pointer: join_pointer(&pointer, "additionalProperties"),
            node: additional,
            required: false,
        });
    }

    // Tuples: `prefixItems` (2020-12) or an `items` array (draft 7).
    for keyword in ["prefixItems", "items"] {
        if let Some(tuple) = schema.get(keyword).and_then(Value::as_array) {
            let base = join_pointer(&pointer, keyword);
            entries.extend(tuple.iter().enumerate().map(|(i, child)| Entry {
                key: format!("{}[{}]", keyword, i),
                kind: EntryKind::TupleItem(i),
                pointer: join_pointer(&base, &i.to_string()),
                node: child,
                required: false,
            }));
        }
    }

    if let Some(items) = schema.get("items").filter(|v| v.is_object()) {
        entries.push(Entry {
            key: "items".to_string(),
            kind: EntryKind::Items,
            pointer: join_pointer(&pointer, "items"),
            node: items,
            required: false,
        });
    }

    for combinator in Combinator::ALL {
        let keyword = combinator.keyword();
        if let Some(variants) = schema.get(keyword).and_then(Value::as_array) {
            let base = join_pointer(&pointer, keyword);
            entries.extend(variants.iter().enumerate().map(|(i, child)| {
                let child_pointer = join_pointer(&base, &i.to_string());
                Entry {
                    key: variant_label(doc, &child_pointer, child, keyword, i),
                    kind: EntryKind::Variant(combinator, i),
                    pointer: child_pointer,
                    node: child,
                    required: false,
                }
            }));
        }
    }

    entries
}

fn required_names(schema: &Map<String, Value>) -> Vec<&str> {
    schema
        .get("required")
        .and_then(Value::as_array)
        .map(|names| names.iter().filter_map(Value::as_str).collect())
        .unwrap_or_default()
}

/// Title of the variant, else the name its `$ref` points at, else `oneOf[i]`.
fn variant_label(
    doc: &SchemaDocument,
    pointer: &str,
    node: &Value,
    keyword: &str,
    index: usize,
) -> String {
    let title = doc
        .resolve(pointer, node)
        .ok()
        .and_then(|(_, resolved)| resolved.get("title"))
        .or_else(|| node.get("title"))
        .and_then(Value::as_str);
    if let Some(title) = title {
        return title.to_string();
    }

    node.get("$ref")
        .and_then(Value::as_str)
        .and_then(|reference| reference.rsplit('/').next())
        .filter(|name| !name.is_empty() && *name != "#")
        .map(str::to_string)
        .unwrap_or_else(|| format!("{}[{}]", keyword, index))
}

/// Append one RFC 6901 token to a JSON pointer.
pub(crate) fn join_pointer(base: &str, token: &str) -> String {
    format!("{}/{}", base, token.replace('~', "~0").replace('/', "~1"))
}

/// Pointers are shown with a leading `#`, the way `$ref` spells them.
pub(crate) fn display_pointer(pointer: &str) -> String {
    format!("#{}", pointer)
}
