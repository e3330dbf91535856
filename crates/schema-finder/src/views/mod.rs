use crate::capabilities::PanelCapabilities;
use crate::state::AppState;
use ratatui::{layout::Rect, Frame};

pub mod finder_view;
pub mod key_bindings_view;

pub use finder_view::FinderView;
pub use key_bindings_view::KeyBindingsView;

/// View identifier - allows comparing which view is active
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewId {
    Finder,
    KeyBindings,
}

/// View trait - the interface every entry of the view stack implements
///
/// Views are stored as `Box<dyn View>` in [`AppState::view_stack`] and carried
/// inside actions, so the trait has to stay object-safe.
pub trait View: std::fmt::Debug + Send {
    fn view_id(&self) -> ViewId;

    fn render(&self, state: &AppState, area: Rect, f: &mut Frame);

    /// Get the capabilities of this view (for keyboard handling)
    fn capabilities(&self, state: &AppState) -> PanelCapabilities;

    /// Floating views render on top of the view below them
    fn is_floating(&self) -> bool {
        false
    }

    /// Clone this view into a Box
    fn clone_box(&self) -> Box<dyn View>;
}

impl Clone for Box<dyn View> {
    fn clone(&self) -> Box<dyn View> {
        self.clone_box()
    }
}

/// Render the entire application UI
///
/// A non-floating top view covers everything and is rendered alone. A
/// floating top view is drawn over the view directly below it.
pub fn render(state: &AppState, area: Rect, f: &mut Frame) {
    let Some((top_view, below)) = state.view_stack.split_last() else {
        return;
    };

    if top_view.is_floating() {
        if let Some(base_view) = below.last() {
            base_view.render(state, area, f);
        }
    }
    top_view.render(state, area, f);
}

/// Centered rectangle using a percentage of the available area
pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    use ratatui::layout::{Constraint, Direction, Layout};

    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
