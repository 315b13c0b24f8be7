//! Column commands

mod create;
mod delete;
mod reorder;
mod update;

pub use create::CreateColumn;
pub use delete::DeleteColumn;
pub use reorder::ReorderColumns;
pub use update::UpdateColumn;
