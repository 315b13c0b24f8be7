//! Core types for the board engine

mod board;
mod card;
mod ids;
pub mod position;
mod state;

// Re-export all types
pub use board::{Board, Column, Label, Settings, User, DEFAULT_COLUMN_COLOR, DEFAULT_THEME};
pub use card::{Card, Priority};
pub use ids::{BoardId, CardId, ColumnId, LabelId, UserId};
pub use state::AppState;
