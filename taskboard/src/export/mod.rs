//! JSON export and import of the board collection.
//!
//! The export document is `{ "version", "exportDate", "boards" }`. The current
//! selection and UI flags are never exported.

mod import;
mod repair;

pub use import::{ImportData, MergeStrategy};
pub use repair::repair_board;

use crate::error::{BoardError, Result};
use crate::types::{AppState, Board, BoardId};
use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Version written into every export
pub const EXPORT_VERSION: &str = "1.0.0";

/// A parsed export document
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportDocument {
    pub version: String,
    #[serde(default = "Utc::now")]
    pub export_date: DateTime<Utc>,
    pub boards: IndexMap<BoardId, Board>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ExportRef<'a> {
    version: &'static str,
    export_date: DateTime<Utc>,
    boards: &'a IndexMap<BoardId, Board>,
}

/// Serialize every board as a pretty-printed export document
pub fn export_data(state: &AppState) -> Result<String> {
    let document = ExportRef {
        version: EXPORT_VERSION,
        export_date: Utc::now(),
        boards: &state.boards,
    };
    let json = serde_json::to_string_pretty(&document)?;
    tracing::info!(boards = state.boards.len(), bytes = json.len(), "exported boards");
    Ok(json)
}

/// Parse an export document, rejecting anything that is not a version 1 export
pub fn parse_export(data: &str) -> Result<ExportDocument> {
    let document: ExportDocument =
        serde_json::from_str(data).map_err(|e| BoardError::malformed_import(e.to_string()))?;

    let major = document.version.split('.').next().unwrap_or_default();
    if major != "1" {
        return Err(BoardError::malformed_import(format!(
            "unsupported export version {}",
            document.version
        )));
    }
    Ok(document)
}
