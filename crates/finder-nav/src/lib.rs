//! Keyboard navigation for Miller-column browsers.
//!
//! The browser shows a row of columns where each column lists the children of
//! the entry selected in the column to its left. Focus is described by a
//! [`Path`]: one selected row index per visited column.
//!
//! ```text
//! KeyEvent → NavInput → next_path (pure) → Transition → set_path (effect)
//! ```
//!
//! The crate never looks at what an entry *is*, only at how many rows each
//! column has, so the same core drives a schema browser, a file browser or
//! any other tree with ordered children.
//!
//! ## Example
//!
//! ```rust
//! use finder_nav::{next_path, NavInput, NavKey, PathState, Transition};
//!
//! let columns = vec![vec!["a", "b", "c"], vec!["x", "y"]];
//! let state = PathState::new(vec![1]);
//!
//! let next = next_path(&state, &columns, NavInput::new(NavKey::ArrowDown));
//! assert_eq!(next, Transition::Commit(vec![2]));
//! ```

pub mod column_model;
pub mod dispatcher;
pub mod key;
pub mod path_state;
pub mod reducer;

pub use column_model::{ColumnLengths, ColumnModel};
pub use dispatcher::{KeyOutcome, KeyboardDispatcher, PathUpdate};
pub use key::{NavInput, NavKey};
pub use path_state::{Path, PathState};
pub use reducer::{next_path, Transition};
