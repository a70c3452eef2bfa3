/*
[INPUT]:  Bearer tokens issued by the server
[OUTPUT]: Durable single-token persistence with atomic writes
[POS]:    Session layer - on-device token record
[UPDATE]: When changing the persisted record shape or storage backend
*/

use std::fmt;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Temporary file error: {0}")]
    TempFile(#[from] tempfile::PersistError),

    #[error("Stored token record is corrupt: {0}")]
    Corrupt(String),
}

type Result<T> = std::result::Result<T, StoreError>;

/// The single record kept on device. Absence means logged out.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TokenRecord {
    pub token: String,
    pub saved_at: DateTime<Utc>,
}

/// Read/write access to the persisted bearer token.
///
/// The session manager is the only writer; the HTTP client holds a
/// read-only handle for attaching the Authorization header.
pub trait TokenStore: Send + Sync + fmt::Debug {
    fn load(&self) -> Result<Option<String>>;
    fn save(&self, token: &str) -> Result<()>;
    fn clear(&self) -> Result<()>;
}

/// File-backed token store (`token.json` under the given directory).
///
/// Writes go through a temp file in the same directory and are persisted
/// with a rename, so a crash mid-write never leaves a half-written record.
#[derive(Debug)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join("token.json"),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_record(&self) -> Result<Option<TokenRecord>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let contents = std::fs::read_to_string(&self.path)?;
        match serde_json::from_str(&contents) {
            Ok(record) => Ok(Some(record)),
            Err(e) => Err(StoreError::Corrupt(e.to_string())),
        }
    }
}

impl TokenStore for FileTokenStore {
    fn load(&self) -> Result<Option<String>> {
        Ok(self.read_record()?.map(|record| record.token))
    }

    fn save(&self, token: &str) -> Result<()> {
        let record = TokenRecord {
            token: token.to_string(),
            saved_at: Utc::now(),
        };

        let parent_dir = self
            .path
            .parent()
            .ok_or_else(|| StoreError::Corrupt("token path has no parent directory".to_string()))?;
        std::fs::create_dir_all(parent_dir)?;

        let mut temp_file = NamedTempFile::new_in(parent_dir)?;
        let json_str = serde_json::to_string_pretty(&record)?;
        temp_file.write_all(json_str.as_bytes())?;
        temp_file.flush()?;
        temp_file.persist(&self.path)?;

        Ok(())
    }

    fn clear(&self) -> Result<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// In-memory token store for tests and embedders with their own persistence
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: RwLock<Option<String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Result<Option<String>> {
        let guard = self.token.read().unwrap_or_else(|e| e.into_inner());
        Ok(guard.clone())
    }

    fn save(&self, token: &str) -> Result<()> {
        let mut guard = self.token.write().unwrap_or_else(|e| e.into_inner());
        *guard = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        let mut guard = self.token.write().unwrap_or_else(|e| e.into_inner());
        *guard = None;
        Ok(())
    }
}
