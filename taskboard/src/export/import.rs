//! ImportData command

use super::{parse_export, repair_board};
use crate::error::{BoardError, Result};
use crate::types::AppState;
use serde::{Deserialize, Serialize, Serializer};
use taskboard_operations::{operation, Execute};

/// How imported boards combine with existing ones
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MergeStrategy {
    /// Discard every existing board
    Replace,
    /// Overlay by board id; an imported board replaces a same-id board whole
    #[default]
    Merge,
}

/// Import boards from an export document
#[derive(Debug, Deserialize, Serialize)]
pub struct ImportData {
    /// The raw export JSON
    #[serde(serialize_with = "summarize")]
    pub data: String,
    #[serde(default)]
    pub strategy: MergeStrategy,
}

operation!(
    ImportData,
    verb = "import",
    noun = "boards",
    description = "Import boards from an export document"
);

// Keeps whole documents out of the audit trail
fn summarize<S: Serializer>(data: &str, serializer: S) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_str(&format!("<{} bytes>", data.len()))
}

impl ImportData {
    pub fn new(data: impl Into<String>, strategy: MergeStrategy) -> Self {
        Self {
            data: data.into(),
            strategy,
        }
    }
}

impl Execute<AppState, BoardError> for ImportData {
    /// Number of boards imported
    type Output = usize;

    fn execute(&self, state: &mut AppState) -> Result<usize> {
        let mut boards = parse_export(&self.data)?.boards;

        let mut repairs = 0;
        for (key, board) in boards.iter_mut() {
            repairs += repair_board(key, board);
        }
        let count = boards.len();

        match self.strategy {
            MergeStrategy::Replace => {
                state.current_board_id = boards.keys().next().cloned();
                state.boards = boards;
            }
            MergeStrategy::Merge => state.boards.extend(boards),
        }
        state.error = None;

        tracing::info!(
            boards = count,
            repairs,
            strategy = ?self.strategy,
            "imported boards"
        );
        Ok(count)
    }
}
