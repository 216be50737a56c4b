//! # ghost-store
//!
//! Persists the board as a single JSON document, `<data_dir>/<slot>.json`.
//!
//! Two on-disk shapes are accepted: the current `{ "tasks": [...],
//! "active_id": ... }` object, and the bare task array older builds wrote.
//! Saving always writes the object form. A missing file loads as the seed
//! board.

mod error;

use std::fs;
use std::path::{Path, PathBuf};

use ghost_core::board::Board;
use ghost_core::entities::Task;
use serde::Deserialize;

pub use error::StoreError;

#[derive(Deserialize)]
#[serde(untagged)]
enum StoredBoard {
    Board(Board),
    Legacy(Vec<Task>),
}

impl From<StoredBoard> for Board {
    fn from(stored: StoredBoard) -> Self {
        match stored {
            StoredBoard::Board(board) => board,
            StoredBoard::Legacy(tasks) => Self::new(tasks),
        }
    }
}

/// File-backed board storage.
#[derive(Debug, Clone)]
pub struct BoardStore {
    path: PathBuf,
}

impl BoardStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<data_dir>/<slot>.json`
    pub fn in_dir(data_dir: &Path, slot: &str) -> Self {
        Self::new(data_dir.join(format!("{slot}.json")))
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the board, or the seed board when no file exists yet.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the file exists but cannot be read or parsed.
    /// A corrupt file is never silently replaced.
    pub fn load(&self) -> Result<Board, StoreError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "no board file, using seed board");
                return Ok(Board::seed());
            }
            Err(source) => {
                return Err(StoreError::Io {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        let stored: StoredBoard =
            serde_json::from_str(&raw).map_err(|source| StoreError::Json {
                path: self.path.clone(),
                source,
            })?;
        let mut board = Board::from(stored);

        // drop a dangling focus pointer rather than failing later
        if let Some(id) = board.active_id.as_deref()
            && board.get(id).is_none()
        {
            tracing::debug!(active_id = id, "clearing unknown active task");
            board.active_id = None;
        }
        Ok(board)
    }

    /// Write the board, creating the data directory if needed.
    ///
    /// The document is written to a sibling temp file and renamed into place,
    /// so a crash mid-write leaves the previous board intact.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if the directory or file cannot be written.
    pub fn save(&self, board: &Board) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|source| StoreError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let json = serde_json::to_string_pretty(board).map_err(|source| StoreError::Json {
            path: self.path.clone(),
            source,
        })?;

        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json).map_err(|source| StoreError::Io {
            path: tmp.clone(),
            source,
        })?;
        fs::rename(&tmp, &self.path).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })?;

        tracing::debug!(path = %self.path.display(), tasks = board.tasks.len(), "saved board");
        Ok(())
    }
}
