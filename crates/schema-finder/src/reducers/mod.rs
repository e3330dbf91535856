pub mod app_reducer;
pub mod finder_reducer;
pub mod key_bindings_reducer;
pub mod schema_reducer;

pub use app_reducer::reduce;
