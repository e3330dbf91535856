//! Keys understood by the navigation reducer.

/// Navigation key, independent of any terminal or windowing backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavKey {
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    Home,
    /// Any key the reducer does not react to.
    Other,
}

/// A key press together with the modifier the reducer cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NavInput {
    pub key: NavKey,
    pub ctrl: bool,
}

impl NavInput {
    pub fn new(key: NavKey) -> Self {
        Self { key, ctrl: false }
    }

    pub fn with_ctrl(key: NavKey) -> Self {
        Self { key, ctrl: true }
    }

    pub fn other() -> Self {
        Self::new(NavKey::Other)
    }
}
