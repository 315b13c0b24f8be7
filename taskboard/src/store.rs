//! The board store: owns the current snapshot and runs commands against it.
//!
//! Every command runs against a private clone of the current state (the
//! draft). On success the draft becomes the new snapshot, subscribers are
//! notified and the snapshot is saved; on failure the draft is dropped and the
//! previous snapshot stays current.

use crate::app::{SetError, SetLoading, SetSearchQuery};
use crate::board::{
    CreateBoard, DeleteBoard, DuplicateBoard, SeedSampleData, SetCurrentBoard, UpdateBoard,
};
use crate::card::{CreateCard, DeleteCard, MoveCard, ReorderCards, UpdateCard};
use crate::column::{CreateColumn, DeleteColumn, ReorderColumns, UpdateColumn};
use crate::config::StoreConfig;
use crate::error::{BoardError, Result};
use crate::export::{self, ImportData, MergeStrategy};
use crate::label::{CreateLabel, DeleteLabel, UpdateLabel};
use crate::persistence::{PersistedState, Persistence};
use crate::types::{AppState, BoardId, CardId, ColumnId, LabelId, UserId};
use crate::user::{CreateUser, DeleteUser, UpdateUser};
use serde::Serialize;
use std::collections::VecDeque;
use std::sync::Arc;
use taskboard_operations::{Execute, LogEntry, OperationProcessor};
use tokio::sync::watch;

/// Message recorded in `AppState::error` when an import fails
pub const IMPORT_FAILED: &str = "Failed to import data. Please check the file format.";

/// Single-writer store of board state with copy-on-write snapshots
pub struct BoardStore {
    snapshot: Arc<AppState>,
    sender: watch::Sender<Arc<AppState>>,
    processor: OperationProcessor,
    persistence: Option<Arc<dyn Persistence>>,
    activity: VecDeque<LogEntry>,
    config: StoreConfig,
}

impl Default for BoardStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for BoardStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BoardStore")
            .field("boards", &self.snapshot.boards.len())
            .field("activity", &self.activity.len())
            .field("persistent", &self.persistence.is_some())
            .field("config", &self.config)
            .finish()
    }
}

impl BoardStore {
    /// Empty, in-memory store with default configuration
    pub fn new() -> Self {
        Self::with_state(AppState::default())
    }

    /// In-memory store starting from `state`
    pub fn with_state(state: AppState) -> Self {
        Self::build(state, StoreConfig::default(), None)
    }

    fn build(state: AppState, config: StoreConfig, persistence: Option<Arc<dyn Persistence>>) -> Self {
        let snapshot = Arc::new(state);
        let (sender, _) = watch::channel(Arc::clone(&snapshot));
        let processor = match &config.actor {
            Some(actor) => OperationProcessor::with_actor(actor),
            None => OperationProcessor::new(),
        };
        Self {
            snapshot,
            sender,
            processor,
            persistence,
            activity: VecDeque::new(),
            config,
        }
    }

    /// Open a store backed by `persistence`.
    ///
    /// Rehydrates the last saved snapshot. When nothing is stored (or the
    /// stored collection is empty) and `seed_sample_data` is set, the sample
    /// board is created.
    pub fn open(config: StoreConfig, persistence: impl Persistence + 'static) -> Result<Self> {
        let persistence: Arc<dyn Persistence> = Arc::new(persistence);
        let state = match persistence.load()? {
            Some(saved) => saved.into_state(&config.storage_key)?,
            None => AppState::default(),
        };
        tracing::info!(
            storage = %config.storage_key,
            boards = state.boards.len(),
            "opened board store"
        );

        let seed = config.seed_sample_data;
        let mut store = Self::build(state, config, Some(persistence));
        if seed {
            store.initialize_sample_data()?;
        }
        Ok(store)
    }

    /// The current snapshot
    pub fn state(&self) -> &AppState {
        &self.snapshot
    }

    /// A shared handle to the current snapshot; it never changes underneath
    /// the holder
    pub fn snapshot(&self) -> Arc<AppState> {
        Arc::clone(&self.snapshot)
    }

    /// Observe every snapshot published after this call
    pub fn subscribe(&self) -> watch::Receiver<Arc<AppState>> {
        self.sender.subscribe()
    }

    /// Recorded operations, newest first
    pub fn activity(&self) -> impl Iterator<Item = &LogEntry> {
        self.activity.iter()
    }

    /// The configuration this store was built with
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Run `op` against a draft of the current state and commit on success
    pub fn apply<O>(&mut self, op: &O) -> Result<O::Output>
    where
        O: Execute<AppState, BoardError> + Serialize,
        O::Output: Serialize,
    {
        let mut draft = AppState::clone(&self.snapshot);
        let (result, log_entry) = self.processor.run(op, &mut draft).split();
        if let Some(entry) = log_entry {
            self.record(entry);
        }
        let value = result?;
        self.commit(draft);
        Ok(value)
    }

    fn record(&mut self, entry: LogEntry) {
        self.activity.push_front(entry);
        self.activity.truncate(self.config.activity_capacity);
    }

    fn commit(&mut self, draft: AppState) {
        self.snapshot = Arc::new(draft);
        self.sender.send_replace(Arc::clone(&self.snapshot));

        if let Some(persistence) = &self.persistence {
            let saved = PersistedState::new(&self.config.storage_key, AppState::clone(&self.snapshot));
            if let Err(error) = persistence.save(&saved) {
                tracing::warn!(%error, "failed to save snapshot");
            }
        }
    }

    // Board operations

    pub fn create_board(&mut self, title: &str, description: Option<&str>) -> Result<BoardId> {
        let mut op = CreateBoard::new(title);
        op.description = description.map(str::to_string);
        self.apply(&op)
    }

    pub fn update_board(&mut self, op: UpdateBoard) -> Result<()> {
        self.apply(&op)
    }

    pub fn delete_board(&mut self, id: &BoardId) -> Result<()> {
        self.apply(&DeleteBoard::new(id))
    }

    pub fn duplicate_board(&mut self, id: &BoardId) -> Result<BoardId> {
        self.apply(&DuplicateBoard::new(id))
    }

    pub fn set_current_board(&mut self, id: Option<&BoardId>) -> Result<()> {
        self.apply(&SetCurrentBoard::new(id.cloned()))
    }

    // Column operations

    pub fn create_column(
        &mut self,
        board_id: &BoardId,
        title: &str,
        color: Option<&str>,
    ) -> Result<ColumnId> {
        let mut op = CreateColumn::new(board_id, title);
        op.color = color.map(str::to_string);
        self.apply(&op)
    }

    pub fn update_column(&mut self, op: UpdateColumn) -> Result<()> {
        self.apply(&op)
    }

    pub fn delete_column(&mut self, board_id: &BoardId, id: &ColumnId) -> Result<usize> {
        self.apply(&DeleteColumn::new(board_id, id))
    }

    pub fn reorder_columns(
        &mut self,
        board_id: &BoardId,
        start_index: usize,
        end_index: usize,
    ) -> Result<()> {
        self.apply(&ReorderColumns::new(board_id, start_index, end_index))
    }

    // Card operations

    pub fn create_card(
        &mut self,
        board_id: &BoardId,
        column_id: &ColumnId,
        title: &str,
        description: Option<&str>,
    ) -> Result<CardId> {
        let mut op = CreateCard::new(board_id, column_id, title);
        op.description = description.map(str::to_string);
        self.apply(&op)
    }

    pub fn update_card(&mut self, op: UpdateCard) -> Result<()> {
        self.apply(&op)
    }

    pub fn delete_card(&mut self, board_id: &BoardId, id: &CardId) -> Result<()> {
        self.apply(&DeleteCard::new(board_id, id))
    }

    pub fn move_card(
        &mut self,
        board_id: &BoardId,
        id: &CardId,
        source_column_id: &ColumnId,
        target_column_id: &ColumnId,
        position: usize,
    ) -> Result<usize> {
        self.apply(&MoveCard::new(
            board_id,
            id,
            source_column_id,
            target_column_id,
            position,
        ))
    }

    pub fn reorder_cards(
        &mut self,
        board_id: &BoardId,
        column_id: &ColumnId,
        start_index: usize,
        end_index: usize,
    ) -> Result<()> {
        self.apply(&ReorderCards::new(board_id, column_id, start_index, end_index))
    }

    // Labels and users

    pub fn create_label(
        &mut self,
        board_id: &BoardId,
        name: &str,
        color: Option<&str>,
    ) -> Result<LabelId> {
        let mut op = CreateLabel::new(board_id, name);
        op.color = color.map(str::to_string);
        self.apply(&op)
    }

    pub fn update_label(&mut self, op: UpdateLabel) -> Result<()> {
        self.apply(&op)
    }

    pub fn delete_label(&mut self, board_id: &BoardId, id: &LabelId) -> Result<usize> {
        self.apply(&DeleteLabel::new(board_id, id))
    }

    pub fn create_user(&mut self, op: CreateUser) -> Result<UserId> {
        self.apply(&op)
    }

    pub fn update_user(&mut self, op: UpdateUser) -> Result<()> {
        self.apply(&op)
    }

    pub fn delete_user(&mut self, board_id: &BoardId, id: &UserId) -> Result<usize> {
        self.apply(&DeleteUser::new(board_id, id))
    }

    // App flags

    pub fn set_search_query(&mut self, query: &str) -> Result<()> {
        self.apply(&SetSearchQuery::new(query))
    }

    pub fn set_loading(&mut self, loading: bool) -> Result<()> {
        self.apply(&SetLoading::new(loading))
    }

    pub fn set_error(&mut self, error: Option<&str>) -> Result<()> {
        self.apply(&SetError {
            error: error.map(str::to_string),
        })
    }

    // Import / export

    /// Pretty JSON export of every board
    pub fn export_data(&self) -> Result<String> {
        export::export_data(&self.snapshot)
    }

    /// Import an export document.
    ///
    /// A failed import never reaches the caller as an error: the boards are
    /// left as they were and `state().error` carries the failure. Returns the
    /// number of imported boards on success.
    pub fn import_data(&mut self, data: &str, strategy: MergeStrategy) -> Option<usize> {
        match self.apply(&ImportData::new(data, strategy)) {
            Ok(count) => Some(count),
            Err(error) => {
                tracing::warn!(%error, "import failed");
                let message = format!("{IMPORT_FAILED} ({error})");
                if let Err(error) = self.apply(&SetError::new(message)) {
                    tracing::warn!(%error, "failed to record import error");
                }
                None
            }
        }
    }

    /// Create the sample board if there are no boards yet
    pub fn initialize_sample_data(&mut self) -> Result<Option<BoardId>> {
        if !self.snapshot.boards.is_empty() {
            return Ok(None);
        }
        self.apply(&SeedSampleData::new())
    }
}
