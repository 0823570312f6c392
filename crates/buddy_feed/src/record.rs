//! Persistence of the last-seen update record.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use thiserror::Error;

use crate::types::UpdateRecord;

/// File name of the record under the application's data directory.
pub const RECORD_FILENAME: &str = "last_update.json";

#[derive(Debug, Error)]
pub enum RecordError {
    #[error("record directory missing or not writable: {0}")]
    Dir(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("serialize error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Reads and atomically rewrites the persisted update record.
#[derive(Debug, Clone)]
pub struct RecordStore {
    path: PathBuf,
}

impl RecordStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The previously persisted record. A missing file is a normal first
    /// run; an unreadable or malformed file is logged and treated the same.
    pub fn load(&self) -> Option<UpdateRecord> {
        let content = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return None,
            Err(err) => {
                log::warn!("failed to read update record from {:?}: {}", self.path, err);
                return None;
            }
        };

        match serde_json::from_str(&content) {
            Ok(record) => Some(record),
            Err(err) => {
                log::warn!(
                    "malformed update record in {:?}, treating as absent: {}",
                    self.path,
                    err
                );
                None
            }
        }
    }

    /// Atomically replace the record: write a temp file next to the target,
    /// then rename it into place.
    pub fn store(&self, record: &UpdateRecord) -> Result<(), RecordError> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        ensure_record_dir(&dir)?;

        let content = serde_json::to_string(record)?;
        let mut tmp = NamedTempFile::new_in(&dir)?;
        tmp.write_all(content.as_bytes())?;
        tmp.flush()?;
        tmp.as_file_mut().sync_all()?;

        // Replace the existing file if present to keep determinism.
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        tmp.persist(&self.path).map_err(|e| RecordError::Io(e.error))?;
        Ok(())
    }
}

/// Ensure the record's directory exists; create it if missing.
fn ensure_record_dir(dir: &Path) -> Result<(), RecordError> {
    if dir.exists() {
        let meta = fs::metadata(dir).map_err(|e| RecordError::Dir(e.to_string()))?;
        if !meta.is_dir() {
            return Err(RecordError::Dir("path is not a directory".into()));
        }
    } else {
        fs::create_dir_all(dir).map_err(|e| RecordError::Dir(e.to_string()))?;
    }
    Ok(())
}
