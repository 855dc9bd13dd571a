use super::backend::StorageBackend;
use crate::error::BackendError;
use crate::model::Product;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::warn;
use uuid::Uuid;

fn write_synced(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(bytes)?;
    file.sync_all()
}

pub struct FsBackend {
    path: PathBuf,
    pretty: bool,
}

impl FsBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            pretty: false,
        }
    }

    /// Write the collection indented instead of on a single line.
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_pretty(&self) -> bool {
        self.pretty
    }

    fn parent_dir(&self) -> PathBuf {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }

    fn tmp_path(&self) -> PathBuf {
        let stem = self
            .path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("products");
        self.parent_dir()
            .join(format!(".{}-{}.tmp", stem, Uuid::new_v4()))
    }

    /// Create the parent directory and an empty collection when the file is
    /// missing. An existing file is never touched.
    /// Returns true if a new file was written.
    pub fn initialize(&self) -> Result<bool, BackendError> {
        let dir = self.parent_dir();
        if !dir.exists() {
            fs::create_dir_all(&dir)?;
        }
        if self.path.exists() {
            return Ok(false);
        }
        self.save_products(&[])?;
        Ok(true)
    }
}

impl StorageBackend for FsBackend {
    fn load_products(&self) -> Result<Vec<Product>, BackendError> {
        let bytes = fs::read(&self.path)?;
        let products: Vec<Product> = serde_json::from_slice(&bytes)?;
        Ok(products)
    }

    fn save_products(&self, products: &[Product]) -> Result<(), BackendError> {
        let content = if self.pretty {
            serde_json::to_string_pretty(products)?
        } else {
            serde_json::to_string(products)?
        };

        // Atomic write: a crash mid-write leaves the old collection intact
        let tmp_path = self.tmp_path();
        let written = write_synced(&tmp_path, content.as_bytes())
            .and_then(|()| fs::rename(&tmp_path, &self.path));
        if let Err(err) = written {
            warn!(
                tmp_path = %tmp_path.display(),
                error = %err,
                "save failed, removing temp file"
            );
            let _ = fs::remove_file(&tmp_path);
            return Err(err.into());
        }

        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
