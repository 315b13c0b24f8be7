//! App-level flags: search query, loading indicator, error message.
//!
//! These commands only touch UI-facing fields of [`AppState`]. They are not
//! mutations of board data, so they stay out of the activity log.

use crate::error::{BoardError, Result};
use crate::types::AppState;
use serde::{Deserialize, Serialize};
use taskboard_operations::{operation, Execute};

/// Replace the search query
#[derive(Debug, Deserialize, Serialize)]
pub struct SetSearchQuery {
    pub query: String,
}

operation!(
    SetSearchQuery,
    verb = "set",
    noun = "search query",
    description = "Set the card search query"
);

impl SetSearchQuery {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
        }
    }
}

impl Execute<AppState, BoardError> for SetSearchQuery {
    type Output = ();

    fn execute(&self, state: &mut AppState) -> Result<()> {
        state.search_query = self.query.clone();
        Ok(())
    }

    fn is_mutation(&self) -> bool {
        false
    }
}

/// Toggle the loading indicator
#[derive(Debug, Deserialize, Serialize)]
pub struct SetLoading {
    pub loading: bool,
}

operation!(
    SetLoading,
    verb = "set",
    noun = "loading",
    description = "Set the loading flag"
);

impl SetLoading {
    pub fn new(loading: bool) -> Self {
        Self { loading }
    }
}

impl Execute<AppState, BoardError> for SetLoading {
    type Output = ();

    fn execute(&self, state: &mut AppState) -> Result<()> {
        state.is_loading = self.loading;
        Ok(())
    }

    fn is_mutation(&self) -> bool {
        false
    }
}

/// Set or clear the user-visible error message
#[derive(Debug, Deserialize, Serialize)]
pub struct SetError {
    pub error: Option<String>,
}

operation!(
    SetError,
    verb = "set",
    noun = "error",
    description = "Set or clear the error message"
);

impl SetError {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: Some(error.into()),
        }
    }

    pub fn clear() -> Self {
        Self { error: None }
    }
}

impl Execute<AppState, BoardError> for SetError {
    type Output = ();

    fn execute(&self, state: &mut AppState) -> Result<()> {
        state.error = self.error.clone();
        Ok(())
    }

    fn is_mutation(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use taskboard_operations::Operation;

    #[test]
    fn test_app_flags() {
        let mut state = AppState::default();

        SetSearchQuery::new("bug").execute(&mut state).unwrap();
        SetLoading::new(true).execute(&mut state).unwrap();
        SetError::new("boom").execute(&mut state).unwrap();

        assert_eq!(state.search_query, "bug");
        assert!(state.is_loading);
        assert_eq!(state.error.as_deref(), Some("boom"));

        SetError::clear().execute(&mut state).unwrap();
        assert_eq!(state.error, None);
    }

    #[test]
    fn test_app_flags_are_not_mutations() {
        assert!(!SetSearchQuery::new("").is_mutation());
        assert!(!SetLoading::new(false).is_mutation());
        assert!(!SetError::clear().is_mutation());
        assert_eq!(SetSearchQuery::new("").op_string(), "set search query");
    }
}
