//! Panel capabilities
//!
//! Views declare what kind of keyboard input they accept. The keyboard
//! middleware uses this to decide how a key press is translated.

use bitflags::bitflags;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct PanelCapabilities: u8 {
        /// Arrow keys and Home move through the columns
        const COLUMN_NAVIGATION = 1 << 0;
        /// h/j/k/l, g, G and K act like arrow keys
        const VIM_NAVIGATION_BINDINGS = 1 << 1;
        /// Up/down scroll the panel content
        const SCROLL_VERTICAL = 1 << 2;
    }
}

impl PanelCapabilities {
    pub fn supports_column_navigation(self) -> bool {
        self.contains(Self::COLUMN_NAVIGATION)
    }

    pub fn supports_vim_navigation(self) -> bool {
        self.contains(Self::VIM_NAVIGATION_BINDINGS)
    }

    pub fn supports_vertical_scroll(self) -> bool {
        self.contains(Self::SCROLL_VERTICAL)
    }
}
