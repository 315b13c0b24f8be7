//! Kanban board state engine
//!
//! This crate holds the complete state of a set of kanban boards (columns,
//! cards, labels, users) and the commands that change it. Every command is a
//! struct whose fields are its parameters; running it through a
//! [`BoardStore`] applies it atomically to a copy-on-write snapshot.
//!
//! ## Overview
//!
//! - **Single ordering authority** - a column's `card_ids` list is the card order
//! - **Cards hold ids** - labels and assignees are resolved against the board on read
//! - **All or nothing** - a failing command leaves the previous snapshot in place
//! - **Observable** - subscribers get each new snapshot through a watch channel
//! - **Auditable** - mutations are recorded as [`LogEntry`] values, newest first
//!
//! ## Basic Usage
//!
//! ```rust
//! use taskboard::{BoardStore, card::MoveCard};
//!
//! # fn example() -> taskboard::Result<()> {
//! let mut store = BoardStore::new();
//! let board = store.create_board("My Project", None)?;
//! let todo = store.create_column(&board, "To Do", None)?;
//! let done = store.create_column(&board, "Done", None)?;
//!
//! let card = store.create_card(&board, &todo, "Implement feature X", None)?;
//! store.apply(&MoveCard::new(&board, &card, &todo, &done, 0))?;
//!
//! let board = store.state().board(&board)?;
//! assert_eq!(board.column_cards(&done)[0].title, "Implement feature X");
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! ## Persistence
//!
//! [`BoardStore::open`] takes any [`Persistence`] implementation. The store
//! saves a [`PersistedState`] after every committed command and rehydrates
//! the last one on open. [`JsonFilePersistence`] keeps it in a JSON file.

pub mod auto_color;
pub mod config;
mod error;
pub mod persistence;
mod store;
pub mod types;
pub mod view;

// Command modules
pub mod app;
pub mod board;
pub mod card;
pub mod column;
pub mod export;
pub mod label;
pub mod user;

// Re-export Execute trait and types from operations crate
pub use taskboard_operations::{
    Execute, ExecutionResult, LogEntry, LogEntryId, Operation, OperationProcessor,
};

pub use config::StoreConfig;
pub use error::{BoardError, Result};
pub use export::{export_data, ExportDocument, ImportData, MergeStrategy, EXPORT_VERSION};
pub use persistence::{
    JsonFilePersistence, MemoryPersistence, PersistedState, Persistence, SCHEMA_VERSION,
    STORAGE_KEY,
};
pub use store::{BoardStore, IMPORT_FAILED};
pub use view::{CardView, ColumnView};

// Re-export commonly used types
pub use types::{
    AppState, Board, BoardId, Card, CardId, Column, ColumnId, Label, LabelId, Priority, Settings,
    User, UserId,
};
