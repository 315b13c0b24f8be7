//! User commands

mod create;
mod delete;
mod update;

pub use create::CreateUser;
pub use delete::DeleteUser;
pub use update::UpdateUser;
