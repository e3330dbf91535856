//! Key bindings
//!
//! Commands are matched first and work in every view. Keys that are not a
//! command are translated into a [`NavInput`] for the active view.

use finder_nav::{NavInput, NavKey};
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use strum::{Display, EnumIter};

use crate::actions::{Action, GlobalAction, SchemaAction};
use crate::views::KeyBindingsView;

/// Commands available in every view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum Command {
    ToggleKeyBindings,
    ReloadSchema,
    Close,
    Quit,
}

impl Command {
    pub fn to_action(self) -> Action {
        match self {
            Command::ToggleKeyBindings => {
                Action::Global(GlobalAction::PushView(Box::new(KeyBindingsView::new())))
            }
            Command::ReloadSchema => Action::Schema(SchemaAction::Load),
            Command::Close => Action::Global(GlobalAction::Close),
            Command::Quit => Action::Global(GlobalAction::Quit),
        }
    }

    /// Keys shown in the help panel
    pub fn keys(self) -> &'static str {
        match self {
            Command::ToggleKeyBindings => "?",
            Command::ReloadSchema => "r",
            Command::Close => "q / Esc",
            Command::Quit => "Ctrl+C",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Command::ToggleKeyBindings => "Toggle this help",
            Command::ReloadSchema => "Reload the schema file",
            Command::Close => "Close panel / quit",
            Command::Quit => "Quit",
        }
    }
}

/// Match a key against the global commands
pub fn match_command(key: &KeyEvent) -> Option<Command> {
    let plain = key.modifiers.difference(KeyModifiers::SHIFT).is_empty();
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Command::Quit),
        KeyCode::Char('q') if plain => Some(Command::Close),
        KeyCode::Esc => Some(Command::Close),
        KeyCode::Char('?') if plain => Some(Command::ToggleKeyBindings),
        KeyCode::Char('r') if plain => Some(Command::ReloadSchema),
        _ => None,
    }
}

/// Translate a key into navigation input
///
/// With `vim_keys`: h/j/k/l are arrows, `g` is Home, `G` jumps to the bottom
/// and `K` to the top of the column.
pub fn nav_input(key: &KeyEvent, vim_keys: bool) -> NavInput {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let nav_key = match key.code {
        KeyCode::Left => NavKey::ArrowLeft,
        KeyCode::Right => NavKey::ArrowRight,
        KeyCode::Up => NavKey::ArrowUp,
        KeyCode::Down => NavKey::ArrowDown,
        KeyCode::Home => NavKey::Home,
        KeyCode::Char(c) if vim_keys && !ctrl => match c {
            'h' => NavKey::ArrowLeft,
            'j' => NavKey::ArrowDown,
            'k' => NavKey::ArrowUp,
            'l' => NavKey::ArrowRight,
            'g' => NavKey::Home,
            'G' => return NavInput::with_ctrl(NavKey::ArrowDown),
            'K' => return NavInput::with_ctrl(NavKey::ArrowUp),
            _ => NavKey::Other,
        },
        _ => NavKey::Other,
    };
    NavInput { key: nav_key, ctrl }
}

/// One row of the help panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyBinding {
    pub keys: &'static str,
    pub description: &'static str,
}

/// Navigation bindings followed by the global commands
pub fn key_bindings(vim_keys: bool) -> Vec<KeyBinding> {
    use strum::IntoEnumIterator;

    // (arrow keys, arrow keys with vim alias, description)
    const NAVIGATION: [(&str, &str, &str); 7] = [
        ("←", "← / h", "Parent column"),
        ("→", "→ / l", "Enter child column"),
        ("↑", "↑ / k", "Previous row"),
        ("↓", "↓ / j", "Next row"),
        ("Ctrl+↑", "Ctrl+↑ / K", "First row"),
        ("Ctrl+↓", "Ctrl+↓ / G", "Last row"),
        ("Home", "Home / g", "Back to the first column"),
    ];

    let mut bindings: Vec<KeyBinding> = NAVIGATION
        .into_iter()
        .map(|(arrows, with_vim, description)| KeyBinding {
            keys: if vim_keys { with_vim } else { arrows },
            description,
        })
        .collect();

    bindings.extend(Command::iter().map(|command| KeyBinding {
        keys: command.keys(),
        description: command.description(),
    }));
    bindings
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::CONTROL)
    }

    #[test]
    fn test_commands() {
        assert_eq!(match_command(&ctrl(KeyCode::Char('c'))), Some(Command::Quit));
        assert_eq!(match_command(&key(KeyCode::Char('q'))), Some(Command::Close));
        assert_eq!(match_command(&key(KeyCode::Esc)), Some(Command::Close));
        assert_eq!(
            match_command(&KeyEvent::new(KeyCode::Char('?'), KeyModifiers::SHIFT)),
            Some(Command::ToggleKeyBindings)
        );
        assert_eq!(match_command(&key(KeyCode::Char('r'))), Some(Command::ReloadSchema));
        assert_eq!(match_command(&key(KeyCode::Down)), None);
        assert_eq!(match_command(&ctrl(KeyCode::Char('q'))), None);
    }

    #[test]
    fn test_arrow_keys() {
        assert_eq!(nav_input(&key(KeyCode::Left), false), NavInput::new(NavKey::ArrowLeft));
        assert_eq!(nav_input(&key(KeyCode::Home), false), NavInput::new(NavKey::Home));
        assert_eq!(
            nav_input(&ctrl(KeyCode::Down), false),
            NavInput::with_ctrl(NavKey::ArrowDown)
        );
    }

    #[test]
    fn test_vim_keys() {
        assert_eq!(nav_input(&key(KeyCode::Char('j')), true), NavInput::new(NavKey::ArrowDown));
        assert_eq!(nav_input(&key(KeyCode::Char('g')), true), NavInput::new(NavKey::Home));
        assert_eq!(
            nav_input(&KeyEvent::new(KeyCode::Char('G'), KeyModifiers::SHIFT), true),
            NavInput::with_ctrl(NavKey::ArrowDown)
        );
        assert_eq!(nav_input(&key(KeyCode::Char('j')), false), NavInput::other());
        assert_eq!(nav_input(&ctrl(KeyCode::Char('j')), true).key, NavKey::Other);
    }

    #[test]
    fn test_key_bindings_list_commands() {
        let bindings = key_bindings(true);
        assert_eq!(bindings[0].keys, "← / h");
        assert!(bindings.iter().any(|b| b.keys == "Ctrl+C"));
        assert_eq!(key_bindings(false)[0].keys, "←");
    }

    #[test]
    fn test_command_display() {
        assert_eq!(Command::ReloadSchema.to_string(), "reload_schema");
    }
}
