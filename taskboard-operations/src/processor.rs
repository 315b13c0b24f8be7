//! Runs commands and turns their outcome into audit log entries

use crate::{Execute, ExecutionResult, LogEntry};
use serde::Serialize;
use serde_json::Value;
use std::fmt::Display;
use std::time::Instant;

/// Executes operations against a state draft and records what happened.
///
/// The processor owns no state itself; the caller decides what to do with the
/// draft (commit on success, discard on failure) and where log entries go.
#[derive(Debug, Clone, Default)]
pub struct OperationProcessor {
    actor: Option<String>,
}

impl OperationProcessor {
    /// Processor with no actor attribution
    pub fn new() -> Self {
        Self { actor: None }
    }

    /// Processor that stamps every log entry with `actor`
    pub fn with_actor(actor: impl Into<String>) -> Self {
        Self {
            actor: Some(actor.into()),
        }
    }

    /// The actor attached to log entries, if any
    pub fn actor(&self) -> Option<&str> {
        self.actor.as_deref()
    }

    /// Execute `op` against `state`.
    ///
    /// Mutations produce a log entry whether they succeed or fail; read-only
    /// operations never do.
    pub fn run<S, E, O>(&self, op: &O, state: &mut S) -> ExecutionResult<O::Output, E>
    where
        O: Execute<S, E> + Serialize,
        O::Output: Serialize,
        E: Display,
    {
        let start = Instant::now();
        let result = op.execute(state);
        let duration_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);

        if !op.is_mutation() {
            return match result {
                Ok(value) => ExecutionResult::Unlogged { value },
                Err(error) => ExecutionResult::Failed {
                    error,
                    log_entry: None,
                },
            };
        }

        let input = serde_json::to_value(op).unwrap_or(Value::Null);
        match result {
            Ok(value) => {
                let output = serde_json::to_value(&value).unwrap_or(Value::Null);
                tracing::debug!(op = %op.op_string(), duration_ms, "operation applied");
                ExecutionResult::Logged {
                    value,
                    log_entry: LogEntry::new(
                        op.op_string(),
                        input,
                        output,
                        self.actor.clone(),
                        duration_ms,
                    ),
                }
            }
            Err(error) => {
                let message = error.to_string();
                tracing::debug!(op = %op.op_string(), error = %message, "operation rejected");
                let mut log_entry = LogEntry::failure(op.op_string(), input, &message, duration_ms);
                log_entry.actor = self.actor.clone();
                ExecutionResult::Failed {
                    error,
                    log_entry: Some(log_entry),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Operation;
    use thiserror::Error;

    #[derive(Debug, Error, PartialEq)]
    enum CounterError {
        #[error("counter would overflow")]
        Overflow,
    }

    #[derive(Debug, Serialize)]
    struct Add {
        by: u8,
    }

    crate::operation!(Add, verb = "add", noun = "counter", description = "Add to the counter");

    impl Execute<u8, CounterError> for Add {
        type Output = u8;

        fn execute(&self, state: &mut u8) -> Result<u8, CounterError> {
            *state = state.checked_add(self.by).ok_or(CounterError::Overflow)?;
            Ok(*state)
        }
    }

    #[derive(Debug, Serialize)]
    struct Peek;

    crate::operation!(Peek, verb = "get", noun = "counter", description = "Read the counter");

    impl Execute<u8, CounterError> for Peek {
        type Output = u8;

        fn execute(&self, state: &mut u8) -> Result<u8, CounterError> {
            Ok(*state)
        }

        fn is_mutation(&self) -> bool {
            false
        }
    }

    #[test]
    fn test_operation_metadata() {
        let op = Add { by: 1 };
        assert_eq!(op.verb(), "add");
        assert_eq!(op.noun(), "counter");
        assert_eq!(op.description(), "Add to the counter");
        assert_eq!(op.op_string(), "add counter");
    }

    #[test]
    fn test_mutation_is_logged_with_actor() {
        let processor = OperationProcessor::with_actor("alice");
        let mut state = 1u8;

        let (result, entry) = processor.run(&Add { by: 2 }, &mut state).split();

        assert_eq!(result, Ok(3));
        let entry = entry.unwrap();
        assert_eq!(entry.op, "add counter");
        assert_eq!(entry.input["by"], 2);
        assert_eq!(entry.output, 3);
        assert_eq!(entry.actor.as_deref(), Some("alice"));
    }

    #[test]
    fn test_failure_is_logged() {
        let processor = OperationProcessor::new();
        let mut state = 250u8;

        let (result, entry) = processor.run(&Add { by: 10 }, &mut state).split();

        assert_eq!(result, Err(CounterError::Overflow));
        assert!(entry.unwrap().is_failure());
    }

    #[test]
    fn test_read_only_is_unlogged() {
        let processor = OperationProcessor::new();
        let mut state = 4u8;

        let result = processor.run(&Peek, &mut state);

        assert!(!result.should_log());
        assert_eq!(result.into_result(), Ok(4));
    }
}
