use finder_nav::PathState;
use finder_schema::{Columns, EntryInfo, SchemaDocument};
use finder_theme::Theme;
use ratatui::text::{Line, Span};

/// View model for the info panel - describes the focused entry
pub struct InfoViewModel {
    info: EntryInfo,
}

impl InfoViewModel {
    /// Describe the entry under the cursor, or the document itself when
    /// nothing is selected
    pub fn new(document: &SchemaDocument, columns: &Columns<'_>, nav: &PathState) -> Self {
        let info = match columns.focused(nav.path()) {
            Some(entry) => EntryInfo::for_entry(document, entry),
            None => EntryInfo::for_root(document),
        };
        Self { info }
    }

    pub fn lines(&self, theme: &Theme) -> Vec<Line<'static>> {
        let info = &self.info;
        let mut lines = vec![Line::from(Span::styled(
            info.title.clone(),
            theme.info_title(),
        ))];

        if let Some(types) = &info.types {
            lines.push(Line::from(Span::styled(types.clone(), theme.info_type())));
        }
        if info.required {
            lines.push(Line::from(Span::styled("required", theme.required_marker())));
        }

        if let Some(description) = &info.description {
            lines.push(Line::default());
            lines.extend(
                description
                    .lines()
                    .map(|line| Line::from(Span::styled(line.to_string(), theme.text()))),
            );
        }

        let mut fields: Vec<(&str, String)> = Vec::new();
        if !info.values.is_empty() {
            let values = info.values.join(", ");
            // More than one allowed value reads as a choice
            match info.values.len() {
                1 => fields.push(("Value:", values)),
                _ => fields.push(("Value:", format!("(oneOf) {}", values))),
            }
        }
        if !info.required_properties.is_empty() {
            fields.push(("Required Properties:", info.required_properties.join(", ")));
        }
        if let Some(examples) = &info.examples {
            fields.push(("Examples:", examples.clone()));
        }
        if let Some(default) = &info.default {
            fields.push(("Default:", default.clone()));
        }
        fields.extend(
            info.constraints
                .iter()
                .map(|(keyword, value)| (*keyword, value.clone())),
        );

        if !fields.is_empty() {
            lines.push(Line::default());
            lines.extend(
                fields
                    .into_iter()
                    .map(|(label, value)| field_line(label, value, theme)),
            );
        }

        lines.push(Line::default());
        if let Some(reference) = &info.reference {
            lines.push(field_line("$ref", reference.clone(), theme));
        }
        lines.push(Line::from(Span::styled(info.pointer.clone(), theme.muted())));

        if let Some(problem) = &info.problem {
            lines.push(Line::default());
            lines.push(Line::from(Span::styled(problem.clone(), theme.error())));
        }

        lines
    }
}

fn field_line(label: &str, value: String, theme: &Theme) -> Line<'static> {
    Line::from(vec![
        Span::styled(label.to_string(), theme.section_header()),
        Span::raw(" "),
        Span::styled(value, theme.code()),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn text(lines: &[Line<'_>]) -> Vec<String> {
        lines.iter().map(|line| line.to_string()).collect()
    }

    #[test]
    fn test_lines_for_enum_property() {
        let doc = SchemaDocument::from_value(json!({
            "required": ["level"],
            "properties": {
                "level": {
                    "title": "Level",
                    "type": "string",
                    "description": "Log verbosity",
                    "enum": ["debug", "info"],
                    "default": "info"
                }
            }
        }))
        .unwrap();
        let nav = PathState::new(vec![0]);
        let columns = Columns::build(&doc, nav.path());

        let vm = InfoViewModel::new(&doc, &columns, &nav);

        assert_eq!(
            text(&vm.lines(&Theme::default())),
            vec![
                "Level",
                "string",
                "required",
                "",
                "Log verbosity",
                "",
                "Value: (oneOf) debug, info",
                "Default: \"info\"",
                "",
                "#/properties/level",
            ]
        );
    }

    #[test]
    fn test_root_is_described_without_selection() {
        let doc = SchemaDocument::from_value(json!({
            "title": "Config",
            "type": "object",
            "required": ["host", "port"],
            "properties": { "host": {}, "port": {} }
        }))
        .unwrap();
        let nav = PathState::default();
        let columns = Columns::build(&doc, nav.path());

        let vm = InfoViewModel::new(&doc, &columns, &nav);

        assert_eq!(
            text(&vm.lines(&Theme::default())),
            vec![
                "Config",
                "object",
                "",
                "Required Properties: host, port",
                "",
                "#",
            ]
        );
    }

    #[test]
    fn test_single_const_value() {
        let doc = SchemaDocument::from_value(json!({
            "properties": { "kind": { "const": "service" } }
        }))
        .unwrap();
        let nav = PathState::new(vec![0]);
        let columns = Columns::build(&doc, nav.path());

        let lines = text(&InfoViewModel::new(&doc, &columns, &nav).lines(&Theme::default()));

        assert!(lines.contains(&"Value: service".to_string()));
    }

    #[test]
    fn test_problem_and_reference_lines() {
        let doc = SchemaDocument::from_value(json!({
            "properties": { "port": { "$ref": "#/$defs/Missing" } }
        }))
        .unwrap();
        let nav = PathState::new(vec![0]);
        let columns = Columns::build(&doc, nav.path());

        let vm = InfoViewModel::new(&doc, &columns, &nav);

        assert_eq!(
            text(&vm.lines(&Theme::default())),
            vec![
                "port",
                "",
                "$ref #/$defs/Missing",
                "#/properties/port",
                "",
                "unresolved $ref #/$defs/Missing",
            ]
        );
    }
}
