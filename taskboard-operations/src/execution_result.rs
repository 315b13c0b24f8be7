//! Outcome of running a command through the processor

use crate::LogEntry;

/// What happened when a command ran, plus the audit record it produced.
///
/// Only mutations carry a [`LogEntry`]; a read-only or UI-only command that
/// succeeds comes back as `Unlogged`. A failed mutation still carries its
/// entry so rejected commands show up in the activity log.
#[derive(Debug)]
pub enum ExecutionResult<T, E> {
    /// A mutation succeeded
    Logged { value: T, log_entry: LogEntry },
    /// A non-mutating command succeeded
    Unlogged { value: T },
    /// The command was rejected; `log_entry` is set for mutations
    Failed {
        error: E,
        log_entry: Option<LogEntry>,
    },
}

impl<T, E> ExecutionResult<T, E> {
    /// The audit record, if the command produced one
    pub fn log_entry(&self) -> Option<&LogEntry> {
        match self {
            Self::Logged { log_entry, .. } => Some(log_entry),
            Self::Failed { log_entry, .. } => log_entry.as_ref(),
            Self::Unlogged { .. } => None,
        }
    }

    /// True when an audit record was produced
    pub fn should_log(&self) -> bool {
        self.log_entry().is_some()
    }

    /// True when the command succeeded
    pub fn is_success(&self) -> bool {
        !matches!(self, Self::Failed { .. })
    }

    /// Drop the audit record and keep the outcome
    pub fn into_result(self) -> Result<T, E> {
        self.split().0
    }

    /// Separate the outcome from the audit record
    pub fn split(self) -> (Result<T, E>, Option<LogEntry>) {
        match self {
            Self::Logged { value, log_entry } => (Ok(value), Some(log_entry)),
            Self::Unlogged { value } => (Ok(value), None),
            Self::Failed { error, log_entry } => (Err(error), log_entry),
        }
    }
}
