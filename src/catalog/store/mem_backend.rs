use super::backend::StorageBackend;
use crate::error::BackendError;
use crate::model::Product;
use parking_lot::RwLock;
use std::io;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

/// In-memory storage backend for testing.
///
/// The collection sits behind a lock so a store built on it can be shared
/// between threads like the file-backed one. `None` plays the part of a
/// missing file.
pub struct MemBackend {
    products: RwLock<Option<Vec<Product>>>,
    simulate_read_error: AtomicBool,
    simulate_write_error: AtomicBool,
    saves: AtomicUsize,
}

impl Default for MemBackend {
    fn default() -> Self {
        Self::with_products(Vec::new())
    }
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_products(products: Vec<Product>) -> Self {
        Self {
            products: RwLock::new(Some(products)),
            simulate_read_error: AtomicBool::new(false),
            simulate_write_error: AtomicBool::new(false),
            saves: AtomicUsize::new(0),
        }
    }

    /// A backend with no collection at all, like a file that was never created.
    pub fn missing() -> Self {
        let backend = Self::default();
        *backend.products.write() = None;
        backend
    }

    /// Enable read error simulation for testing error handling.
    pub fn set_simulate_read_error(&self, simulate: bool) {
        self.simulate_read_error.store(simulate, Ordering::SeqCst);
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.simulate_write_error.store(simulate, Ordering::SeqCst);
    }

    /// Number of successful saves so far.
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }
}

impl StorageBackend for MemBackend {
    fn load_products(&self) -> Result<Vec<Product>, BackendError> {
        if self.simulate_read_error.load(Ordering::SeqCst) {
            return Err(BackendError::Backend("Simulated read error".to_string()));
        }
        self.products.read().clone().ok_or_else(|| {
            BackendError::Io(io::Error::new(
                io::ErrorKind::NotFound,
                "no product collection",
            ))
        })
    }

    fn save_products(&self, products: &[Product]) -> Result<(), BackendError> {
        if self.simulate_write_error.load(Ordering::SeqCst) {
            return Err(BackendError::Backend("Simulated write error".to_string()));
        }
        *self.products.write() = Some(products.to_vec());
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn location(&self) -> String {
        "memory://products".to_string()
    }
}
