//! Board commands

mod create;
mod delete;
mod duplicate;
mod seed;
mod select;
mod update;

pub use create::CreateBoard;
pub use delete::DeleteBoard;
pub use duplicate::DuplicateBoard;
pub use seed::SeedSampleData;
pub use select::SetCurrentBoard;
pub use update::UpdateBoard;
