use crate::error::BackendError;
use crate::model::Product;

/// Abstract interface for raw collection I/O.
/// This trait handles the "how" of storage (filesystem vs memory),
/// while JsonStore handles the "what" (ids, uniqueness, lookups).
pub trait StorageBackend {
    /// Read and parse the whole collection.
    /// Missing and malformed data are both errors; callers do not tell them apart.
    fn load_products(&self) -> Result<Vec<Product>, BackendError>;

    /// Replace the whole collection.
    /// MUST be atomic (e.g. write to tmp then rename) to avoid partial writes.
    fn save_products(&self, products: &[Product]) -> Result<(), BackendError>;

    /// Human readable location, used in log events.
    fn location(&self) -> String;
}
