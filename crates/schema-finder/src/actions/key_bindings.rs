//! Key bindings panel actions

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyBindingsAction {
    /// Scroll down one line
    NavigateNext,
    /// Scroll up one line
    NavigatePrevious,
    /// Scroll back to the first line
    NavigateToTop,
}
