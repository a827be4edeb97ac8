// Persistence gateway and shared storage state
//
// The whole store lives in one JSON document under the per-user storage
// directory and is rewritten wholesale after every mutation. The data
// volume (per-user annotations) stays small, so write amplification is a
// fair trade for simplicity.

use parking_lot::RwLock;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::store::MetadataStore;

const METADATA_FILE: &str = "fileMetadata.json";

/// Per-user storage directory (~/.file-assistant/)
pub fn default_storage_dir() -> PathBuf {
    let home = dirs::home_dir().expect("Failed to get home directory");
    home.join(".file-assistant")
}

/// Path of the metadata document inside `dir`
pub fn metadata_path(dir: &Path) -> PathBuf {
    dir.join(METADATA_FILE)
}

/// Load the full store from `dir`. A missing document yields an empty
/// store; an unreadable or corrupt one is logged and dropped.
pub fn load_store(dir: &Path) -> MetadataStore {
    let path = metadata_path(dir);
    if !path.exists() {
        return MetadataStore::new();
    }

    match fs::read_to_string(&path) {
        Ok(data) => match serde_json::from_str(&data) {
            Ok(store) => store,
            Err(e) => {
                tracing::warn!("discarding corrupt metadata document {:?}: {}", path, e);
                MetadataStore::new()
            }
        },
        Err(e) => {
            tracing::warn!("failed to read metadata document {:?}: {}", path, e);
            MetadataStore::new()
        }
    }
}

/// Overwrite the document in `dir` with the full store, creating the
/// directory if needed. The previous on-disk copy is left untouched when
/// this fails.
pub fn save_store(dir: &Path, store: &MetadataStore) -> Result<(), String> {
    fs::create_dir_all(dir)
        .map_err(|e| format!("Failed to create storage directory: {}", e))?;

    let json = serde_json::to_string_pretty(store)
        .map_err(|e| format!("Failed to serialize metadata: {}", e))?;

    fs::write(metadata_path(dir), json)
        .map_err(|e| format!("Failed to write metadata: {}", e))
}

/// Shared storage state: the in-memory store plus its on-disk location.
pub struct Storage {
    storage_dir: PathBuf,
    pub store: RwLock<MetadataStore>,
}

impl Storage {
    /// Storage at the default per-user location, loading any persisted
    /// document on construction.
    pub fn new() -> Self {
        Self::with_dir(default_storage_dir())
    }

    /// Storage rooted at an explicit directory (tests, portable setups).
    pub fn with_dir(dir: PathBuf) -> Self {
        let store = load_store(&dir);
        tracing::info!("loaded metadata for {} file(s) from {:?}", store.len(), dir);
        Self {
            storage_dir: dir,
            store: RwLock::new(store),
        }
    }

    pub fn storage_dir(&self) -> &Path {
        &self.storage_dir
    }

    /// Flush: full overwrite of the persisted document with the current
    /// store. The in-memory state stays valid even when the write fails,
    /// it is just not durable yet.
    pub fn flush(&self) -> Result<(), String> {
        let store = self.store.read();
        save_store(&self.storage_dir, &store).inspect_err(|e| {
            tracing::error!("metadata flush failed: {}", e);
        })
    }
}

impl Default for Storage {
    fn default() -> Self {
        Self::new()
    }
}

pub type StorageState = Arc<Storage>;

/// Initialize storage at the default per-user location.
pub fn init_storage() -> StorageState {
    Arc::new(Storage::new())
}
