//! Data behind the info panel.

use serde_json::Value;

use crate::document::SchemaDocument;
use crate::entry::{display_pointer, Entry, EntryKind};

/// Keywords shown as constraints, in display order.
const CONSTRAINT_KEYWORDS: [&str; 10] = [
    "format",
    "pattern",
    "minimum",
    "maximum",
    "exclusiveMinimum",
    "exclusiveMaximum",
    "minLength",
    "maxLength",
    "minItems",
    "maxItems",
];

/// Everything the info panel shows about one entry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntryInfo {
    pub title: String,
    /// `type`, with union types joined by `", "`.
    pub types: Option<String>,
    pub description: Option<String>,
    /// Allowed values: `const` first, then the `enum` members.
    pub values: Vec<String>,
    /// `examples` as compact JSON.
    pub examples: Option<String>,
    pub default: Option<String>,
    pub required: bool,
    /// The schema's own `required` list.
    pub required_properties: Vec<String>,
    pub constraints: Vec<(&'static str, String)>,
    /// Where the entry is declared, as `#/...`.
    pub pointer: String,
    /// `$ref` followed to reach the described schema.
    pub reference: Option<String>,
    /// Why the schema could not be described fully.
    pub problem: Option<String>,
}

impl EntryInfo {
    /// Describe the document root (shown while nothing is selected).
    pub fn for_root(doc: &SchemaDocument) -> Self {
        let fallback = doc
            .source()
            .and_then(|path| path.file_name())
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "Schema".to_string());

        let mut info = describe(doc.root(), None, &fallback);
        info.pointer = display_pointer("");
        info
    }

    /// Describe a column entry.
    ///
    /// Keywords written next to a `$ref` win over those of the target, so a
    /// property can override the description of a shared definition.
    pub fn for_entry(doc: &SchemaDocument, entry: &Entry<'_>) -> Self {
        if entry.kind == EntryKind::Definitions {
            let count = entry.node.as_object().map_or(0, |defs| defs.len());
            return Self {
                title: entry.key.clone(),
                description: Some(format!("{} named definitions", count)),
                pointer: display_pointer(&entry.pointer),
                ..Self::default()
            };
        }

        let (target, problem) = match doc.resolve(&entry.pointer, entry.node) {
            Ok((_, node)) => (Some(node), None),
            Err(err) => (None, Some(err.to_string())),
        };

        let mut info = describe(entry.node, target, &entry.key);
        info.required = entry.required;
        info.pointer = display_pointer(&entry.pointer);
        info.reference = entry.reference().map(str::to_string);
        info.problem = problem;
        info
    }
}

fn describe(node: &Value, target: Option<&Value>, fallback_title: &str) -> EntryInfo {
    let field = |key: &str| node.get(key).or_else(|| target.and_then(|t| t.get(key)));

    let title = field("title")
        .and_then(Value::as_str)
        .unwrap_or(fallback_title)
        .to_string();

    let types = field("type").and_then(|ty| match ty {
        Value::String(name) => Some(name.clone()),
        Value::Array(names) => Some(join_values(names)),
        _ => None,
    });

    let mut values: Vec<String> = field("const").map(plain).into_iter().collect();
    if let Some(members) = field("enum").and_then(Value::as_array) {
        values.extend(members.iter().map(plain));
    }

    let required_properties = field("required")
        .and_then(Value::as_array)
        .map(|names| names.iter().filter_map(Value::as_str).map(str::to_string).collect())
        .unwrap_or_default();

    let constraints = CONSTRAINT_KEYWORDS
        .iter()
        .filter_map(|&keyword| field(keyword).map(|value| (keyword, plain(value))))
        .collect();

    EntryInfo {
        title,
        types,
        description: field("description").and_then(Value::as_str).map(str::to_string),
        values,
        examples: field("examples").map(Value::to_string),
        default: field("default").map(Value::to_string),
        required_properties,
        constraints,
        ..EntryInfo::default()
    }
}

/// Strings without quotes, anything else as JSON.
fn plain(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn join_values(values: &[Value]) -> String {
    values.iter().map(plain).collect::<Vec<_>>().join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_describe_property() {
        let doc = SchemaDocument::from_value(json!({
            "required": ["level"],
            "properties": {
                "level": {
                    "description": "Log verbosity",
                    "type": ["string", "null"],
                    "enum": ["debug", "info", null],
                    "examples": ["info"],
                    "default": "info",
                    "minLength": 1
                }
            }
        }))
        .unwrap();

        let root = doc.root_entries();
        let info = EntryInfo::for_entry(&doc, &root[0]);

        assert_eq!(
            info,
            EntryInfo {
                title: "level".to_string(),
                types: Some("string, null".to_string()),
                description: Some("Log verbosity".to_string()),
                values: vec!["debug".to_string(), "info".to_string(), "null".to_string()],
                examples: Some(r#"["info"]"#.to_string()),
                default: Some(r#""info""#.to_string()),
                required: true,
                required_properties: Vec::new(),
                constraints: vec![("minLength", "1".to_string())],
                pointer: "#/properties/level".to_string(),
                reference: None,
                problem: None,
            }
        );
    }

    #[test]
    fn test_ref_siblings_override_target() {
        let doc = SchemaDocument::from_value(json!({
            "properties": {
                "port": { "$ref": "#/$defs/Port", "description": "Listen port" }
            },
            "$defs": {
                "Port": {
                    "title": "Port",
                    "type": "integer",
                    "description": "A TCP port",
                    "maximum": 65535
                }
            }
        }))
        .unwrap();

        let root = doc.root_entries();
        let info = EntryInfo::for_entry(&doc, &root[0]);

        assert_eq!(info.title, "Port");
        assert_eq!(info.types.as_deref(), Some("integer"));
        assert_eq!(info.description.as_deref(), Some("Listen port"));
        assert_eq!(info.constraints, vec![("maximum", "65535".to_string())]);
        assert_eq!(info.reference.as_deref(), Some("#/$defs/Port"));
    }

    #[test]
    fn test_required_list_and_const_value() {
        let doc = SchemaDocument::from_value(json!({
            "properties": {
                "server": {
                    "required": ["host", "port"],
                    "const": "x",
                    "properties": { "host": {}, "port": {} }
                },
                "mode": { "const": "fast", "enum": ["slow"] }
            }
        }))
        .unwrap();

        let root = doc.root_entries();
        let server = EntryInfo::for_entry(&doc, &root[0]);
        assert_eq!(server.required_properties, vec!["host", "port"]);
        assert_eq!(server.values, vec!["x"]);
        assert!(server.constraints.is_empty());

        let mode = EntryInfo::for_entry(&doc, &root[1]);
        assert_eq!(mode.values, vec!["fast", "slow"]);
    }

    #[test]
    fn test_unresolved_ref_is_reported() {
        let doc = SchemaDocument::from_value(json!({
            "properties": { "bad": { "$ref": "#/nowhere" } }
        }))
        .unwrap();

        let root = doc.root_entries();
        let info = EntryInfo::for_entry(&doc, &root[0]);
        assert_eq!(info.title, "bad");
        assert!(info.problem.unwrap().contains("#/nowhere"));
    }

    #[test]
    fn test_root_info() {
        let doc = SchemaDocument::from_value(json!({
            "title": "Service config",
            "description": "Top level",
            "type": "object"
        }))
        .unwrap();

        let info = EntryInfo::for_root(&doc);
        assert_eq!(info.title, "Service config");
        assert_eq!(info.description.as_deref(), Some("Top level"));
        assert_eq!(info.pointer, "#");
    }

    #[test]
    fn test_root_title_falls_back() {
        let doc = SchemaDocument::from_value(json!({})).unwrap();
        assert_eq!(EntryInfo::for_root(&doc).title, "Schema");
    }

    #[test]
    fn test_definitions_container() {
        let doc = SchemaDocument::from_value(json!({ "$defs": { "a": {}, "b": {} } })).unwrap();
        let root = doc.root_entries();
        let info = EntryInfo::for_entry(&doc, &root[0]);
        assert_eq!(info.title, "$defs");
        assert_eq!(info.description.as_deref(), Some("2 named definitions"));
    }
}
