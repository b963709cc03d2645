use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::Mutex;

use lexiflow_types::SearchHistoryItem;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Persistence boundary for search history: one named blob holding the
/// whole sequence, overwritten on every save.
///
/// Loads are infallible by contract — an absent or unreadable blob is an
/// empty history, never an error.
pub trait HistoryStore: Send + Sync {
    fn load(&self) -> Vec<SearchHistoryItem>;
    fn save(&self, items: &[SearchHistoryItem]) -> Result<(), StoreError>;
    fn clear(&self) -> Result<(), StoreError>;
}

/// History blob stored as a JSON file under the platform data directory.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn default_path() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(std::env::temp_dir)
            .join("lexiflow")
            .join("history.json")
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl Default for JsonFileStore {
    fn default() -> Self {
        Self::new(Self::default_path())
    }
}

impl HistoryStore for JsonFileStore {
    fn load(&self) -> Vec<SearchHistoryItem> {
        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(_) => return Vec::new(),
        };

        serde_json::from_str(&data).unwrap_or_else(|e| {
            tracing::warn!("history blob unreadable, starting empty: {e}");
            Vec::new()
        })
    }

    fn save(&self, items: &[SearchHistoryItem]) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string(items)?)?;
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// In-memory store for tests and ephemeral sessions. Holds the serialized
/// blob, so it round-trips exactly like the file store.
#[derive(Default)]
pub struct MemoryStore {
    blob: Mutex<Option<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a blob is currently present.
    pub fn has_blob(&self) -> bool {
        self.blob.lock().unwrap().is_some()
    }
}

impl HistoryStore for MemoryStore {
    fn load(&self) -> Vec<SearchHistoryItem> {
        let guard = self.blob.lock().unwrap();
        let Some(data) = guard.as_deref() else {
            return Vec::new();
        };
        serde_json::from_str(data).unwrap_or_default()
    }

    fn save(&self, items: &[SearchHistoryItem]) -> Result<(), StoreError> {
        *self.blob.lock().unwrap() = Some(serde_json::to_string(items)?);
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        *self.blob.lock().unwrap() = None;
        Ok(())
    }
}
