//! Label commands

mod create;
mod delete;
mod update;

pub use create::CreateLabel;
pub use delete::DeleteLabel;
pub use update::UpdateLabel;
