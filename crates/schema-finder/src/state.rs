use std::path::PathBuf;
use std::sync::Arc;

use finder_config::AppConfig;
use finder_nav::PathState;
use finder_schema::SchemaDocument;
use finder_theme::Theme;

use crate::views::{FinderView, View};

/// Schema document and its loading status
#[derive(Debug, Clone, Default)]
pub struct SchemaState {
    /// File the schema is (re)loaded from
    pub source: PathBuf,
    pub document: Option<Arc<SchemaDocument>>,
    pub loading: bool,
    /// Last load error; a failed reload keeps the previous document
    pub error: Option<String>,
}

/// Column browser state
#[derive(Debug, Clone, Default)]
pub struct FinderState {
    pub nav: PathState,
}

/// Key bindings help panel state
#[derive(Debug, Clone, Default)]
pub struct KeyBindingsPanelState {
    pub scroll_offset: usize,
}

/// Application state
#[derive(Debug, Clone)]
pub struct AppState {
    pub running: bool,
    /// Never empty; the last view receives keyboard input
    pub view_stack: Vec<Box<dyn View>>,
    pub config: AppConfig,
    pub schema: SchemaState,
    pub finder: FinderState,
    pub key_bindings_panel: KeyBindingsPanelState,
    pub theme: Theme,
}

impl AppState {
    pub fn new(schema_source: PathBuf) -> Self {
        Self {
            schema: SchemaState {
                source: schema_source,
                ..SchemaState::default()
            },
            ..Self::default()
        }
    }

    /// The view on top of the stack
    pub fn active_view(&self) -> &dyn View {
        match self.view_stack.last() {
            Some(view) => view.as_ref(),
            None => &FinderView,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            running: true,
            view_stack: vec![Box::new(FinderView::new())],
            config: AppConfig::default(),
            schema: SchemaState::default(),
            finder: FinderState::default(),
            key_bindings_panel: KeyBindingsPanelState::default(),
            theme: Theme::default(),
        }
    }
}
