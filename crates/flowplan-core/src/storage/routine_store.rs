//! JSON file store for the user's routine blocks.
//!
//! The file holds a JSON array of [`TimeBlock`] records in insertion order.
//! Every block is re-validated on load, so a hand-edited file with bad
//! bounds is reported instead of reaching the layout engine.

use std::path::{Path, PathBuf};
use tracing::debug;
use uuid::Uuid;

use super::data_dir;
use crate::error::{Result, StoreError};
use crate::planner::{NewRoutineBlock, TimeBlock};

/// File name inside the data directory.
pub const STORE_FILE: &str = "routine_blocks.json";

/// Routine block persistence backed by a single JSON file.
#[derive(Debug, Clone)]
pub struct RoutineStore {
    path: PathBuf,
}

impl RoutineStore {
    /// Store at an explicit file path.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store in the default data directory.
    pub fn open_default() -> Result<Self> {
        Ok(Self::open(data_dir()?.join(STORE_FILE)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All blocks in insertion order. A missing file is an empty store.
    pub fn list(&self) -> Result<Vec<TimeBlock>> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no routine store yet");
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };
        let blocks: Vec<TimeBlock> = serde_json::from_str(&content)?;
        for block in &blocks {
            block.validate().map_err(|source| StoreError::Corrupt {
                path: self.path.clone(),
                source,
            })?;
        }
        debug!(path = %self.path.display(), count = blocks.len(), "loaded routine blocks");
        Ok(blocks)
    }

    fn write(&self, blocks: &[TimeBlock]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(blocks)?;
        std::fs::write(&self.path, content)?;
        debug!(path = %self.path.display(), count = blocks.len(), "saved routine blocks");
        Ok(())
    }

    /// Validate a form submission and store it under a fresh id.
    pub fn add(&self, form: NewRoutineBlock) -> Result<TimeBlock> {
        let block = form.into_block(Uuid::new_v4().to_string())?;
        self.insert(block.clone())?;
        Ok(block)
    }

    /// Store an already-built block.
    ///
    /// # Errors
    /// Returns [`StoreError::DuplicateId`] if the id is taken.
    pub fn insert(&self, block: TimeBlock) -> Result<()> {
        block.validate()?;
        let mut blocks = self.list()?;
        if blocks.iter().any(|b| b.id == block.id) {
            return Err(StoreError::DuplicateId(block.id).into());
        }
        blocks.push(block);
        self.write(&blocks)
    }

    pub fn get(&self, id: &str) -> Result<Option<TimeBlock>> {
        Ok(self.list()?.into_iter().find(|b| b.id == id))
    }

    /// Remove a block and return it.
    ///
    /// # Errors
    /// Returns [`StoreError::NotFound`] if no block has this id.
    pub fn remove(&self, id: &str) -> Result<TimeBlock> {
        let mut blocks = self.list()?;
        let index = blocks
            .iter()
            .position(|b| b.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        let removed = blocks.remove(index);
        self.write(&blocks)?;
        Ok(removed)
    }

    /// Remove every block. Returns how many were removed.
    pub fn clear(&self) -> Result<usize> {
        let count = self.list()?.len();
        self.write(&[])?;
        Ok(count)
    }
}
