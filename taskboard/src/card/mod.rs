//! Card commands

mod create;
mod delete;
mod mv;
mod reorder;
mod update;

pub use create::CreateCard;
pub use delete::DeleteCard;
pub use mv::MoveCard;
pub use reorder::ReorderCards;
pub use update::UpdateCard;
