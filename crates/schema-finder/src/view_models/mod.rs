pub mod columns_view_model;
pub mod info_view_model;

pub use columns_view_model::{ColumnViewModel, ColumnsViewModel};
pub use info_view_model::InfoViewModel;
