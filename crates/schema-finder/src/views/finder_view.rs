use crate::capabilities::PanelCapabilities;
use crate::state::AppState;
use crate::view_models::columns_view_model::visible_range;
use crate::view_models::{ColumnViewModel, ColumnsViewModel, InfoViewModel};
use crate::views::{View, ViewId};
use finder_schema::{Columns, SchemaDocument};
use finder_theme::Theme;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

/// The column browser with the info panel on the right
#[derive(Debug, Clone, Copy, Default)]
pub struct FinderView;

impl FinderView {
    pub fn new() -> Self {
        Self
    }
}

impl View for FinderView {
    fn view_id(&self) -> ViewId {
        ViewId::Finder
    }

    fn render(&self, state: &AppState, area: Rect, f: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(3), Constraint::Length(1)])
            .split(area);

        match state.schema.document.as_deref() {
            Some(document) => {
                let columns = Columns::build(document, state.finder.nav.path());
                render_browser(state, document, &columns, chunks[0], f);
                render_status_bar(state, Some(&columns), chunks[1], f);
            }
            None => {
                render_placeholder(state, chunks[0], f);
                render_status_bar(state, None, chunks[1], f);
            }
        }
    }

    fn capabilities(&self, state: &AppState) -> PanelCapabilities {
        let mut capabilities = PanelCapabilities::COLUMN_NAVIGATION;
        if state.config.vim_keys {
            capabilities |= PanelCapabilities::VIM_NAVIGATION_BINDINGS;
        }
        capabilities
    }

    fn clone_box(&self) -> Box<dyn View> {
        Box::new(*self)
    }
}

fn render_browser(
    state: &AppState,
    document: &SchemaDocument,
    columns: &Columns<'_>,
    area: Rect,
    f: &mut Frame,
) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(area);

    let nav = &state.finder.nav;
    let view_model =
        ColumnsViewModel::new(document, columns, nav, state.config.show_required_marker);

    let visible = view_model.visible_columns(chunks[0].width, state.config.column_width);
    let column_areas = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![Constraint::Length(state.config.column_width); visible.len()])
        .split(chunks[0]);

    for (column, column_area) in view_model.columns[visible].iter().zip(column_areas.iter()) {
        render_column(column, &state.theme, *column_area, f);
    }

    let info = InfoViewModel::new(document, columns, nav);
    let mut lines = info.lines(&state.theme);
    // A failed reload keeps the old document on screen
    if let Some(error) = &state.schema.error {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            format!("Reload failed: {}", error),
            state.theme.warning(),
        )));
    }

    let block = Block::default()
        .title(" Info ")
        .borders(Borders::ALL)
        .border_style(state.theme.panel_border())
        .title_style(state.theme.panel_title());
    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .style(state.theme.panel_background());
    f.render_widget(paragraph, chunks[1]);
}

fn render_column(column: &ColumnViewModel, theme: &Theme, area: Rect, f: &mut Frame) {
    let border_style = if column.focused {
        theme.panel_border_focused()
    } else {
        theme.panel_border()
    };
    let block = Block::default()
        .title(format!(" {} ", column.title))
        .borders(Borders::ALL)
        .border_style(border_style)
        .title_style(theme.panel_title());

    let height = area.height.saturating_sub(2) as usize;
    let range = visible_range(column.items.len(), column.selected, height);
    let offset = range.start;

    let items: Vec<ListItem> = column.items[range]
        .iter()
        .map(|item| {
            let mut spans = vec![Span::styled(item.label.clone(), theme.text())];
            if item.required {
                spans.push(Span::styled("*", theme.required_marker()));
            }
            if item.has_children {
                spans.push(Span::styled(" ›", theme.muted()));
            }
            ListItem::new(Line::from(spans))
        })
        .collect();

    let highlight = if column.focused {
        theme.selected()
    } else {
        theme.selected_inactive()
    };
    let list = List::new(items)
        .block(block)
        .style(theme.panel_background())
        .highlight_style(highlight);

    let mut list_state =
        ListState::default().with_selected(column.selected.map(|row| row - offset));
    f.render_stateful_widget(list, area, &mut list_state);
}

fn render_placeholder(state: &AppState, area: Rect, f: &mut Frame) {
    let theme = &state.theme;
    let line = match &state.schema.error {
        Some(error) => Line::from(Span::styled(error.clone(), theme.error())),
        None => Line::from(Span::styled(
            format!("Loading {} ...", state.schema.source.display()),
            theme.muted(),
        )),
    };

    let block = Block::default()
        .title(" schema-finder ")
        .borders(Borders::ALL)
        .border_style(theme.panel_border())
        .title_style(theme.panel_title());
    let paragraph = Paragraph::new(line)
        .block(block)
        .wrap(Wrap { trim: false })
        .style(theme.panel_background());
    f.render_widget(paragraph, area);
}

fn render_status_bar(state: &AppState, columns: Option<&Columns<'_>>, area: Rect, f: &mut Frame) {
    let theme = &state.theme;
    let path = state.finder.nav.path();
    let mut spans = Vec::new();

    if let Some(columns) = columns {
        let breadcrumb = columns.breadcrumb(path).join(" › ");
        spans.push(Span::styled(format!(" {}", breadcrumb), theme.text()));
        if let Some(entry) = columns.focused(path) {
            spans.push(Span::styled(format!("  #{}", entry.pointer), theme.muted()));
        }
    }

    spans.push(Span::styled("  ?", theme.key_hint()));
    spans.push(Span::styled(" help", theme.key_description()));

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
