//! Actions represent all possible state changes in the application.
//!
//! Actions are grouped by the part of the app they affect; each group lives
//! in its own module.

mod bootstrap;
mod finder;
mod global;
mod key_bindings;
mod schema;

pub use bootstrap::BootstrapAction;
pub use finder::FinderAction;
pub use global::GlobalAction;
pub use key_bindings::KeyBindingsAction;
pub use schema::SchemaAction;

#[derive(Debug, Clone)]
pub enum Action {
    /// Not tied to any specific view
    Global(GlobalAction),
    /// Application startup
    Bootstrap(BootstrapAction),
    /// Loading the schema document
    Schema(SchemaAction),
    /// Column navigation
    Finder(FinderAction),
    /// Key bindings help panel
    KeyBindings(KeyBindingsAction),
}
