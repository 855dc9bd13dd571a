use super::fs_backend::FsBackend;
use super::json_store::JsonStore;
use crate::error::BackendError;
use std::path::{Path, PathBuf};

/// Production store: the collection lives in a single JSON file.
pub type FileStore = JsonStore<FsBackend>;

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonStore::with_backend(FsBackend::new(path))
    }

    pub fn path(&self) -> &Path {
        self.backend.path()
    }

    /// See [`FsBackend::initialize`].
    pub fn initialize(&self) -> Result<bool, BackendError> {
        self.backend.initialize()
    }
}
