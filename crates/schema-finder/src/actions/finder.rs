//! Finder actions
//!
//! Column navigation. Key presses are reduced to a path by the navigation
//! middleware, which then commits the result with `SetPath`.

use finder_nav::{NavInput, Path};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FinderAction {
    /// Translated key press aimed at the columns
    KeyPressed(NavInput),
    /// Commit a new focused path
    SetPath(Path),
}
