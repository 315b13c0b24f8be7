//! # Taskboard Operations
//!
//! This crate provides the traits every taskboard command implements.
//! Commands are structs where the fields ARE the parameters: the struct is
//! serialized into the audit trail as the command input.
//!
//! ## Example
//!
//! ```
//! use serde::Serialize;
//! use taskboard_operations::{operation, Execute, ExecutionResult, OperationProcessor};
//!
//! #[derive(Debug, Serialize)]
//! pub struct Increment {
//!     pub by: u32,
//! }
//!
//! operation!(Increment, verb = "increment", noun = "counter", description = "Add to the counter");
//!
//! impl Execute<u32, String> for Increment {
//!     type Output = u32;
//!
//!     fn execute(&self, state: &mut u32) -> Result<u32, String> {
//!         *state += self.by;
//!         Ok(*state)
//!     }
//! }
//!
//! let mut counter = 0;
//! let result = OperationProcessor::new().run(&Increment { by: 2 }, &mut counter);
//! assert!(result.should_log());
//! assert_eq!(result.into_result(), Ok(2));
//! ```

mod execution_result;
mod log;
mod operation;
mod processor;

pub use execution_result::ExecutionResult;
pub use log::{LogEntry, LogEntryId};
pub use operation::{Execute, Operation};
pub use processor::OperationProcessor;

// Re-export for use in implementations
pub use serde_json::Value;
