//! # Storage Layer
//!
//! The store is the only component that touches the persisted product
//! collection. Everything above it (repository, service, commands) goes
//! through the [`ProductStore`] trait.
//!
//! ## Two Halves
//!
//! - [`backend::StorageBackend`] is the "how": read the whole collection, write
//!   the whole collection. [`fs_backend::FsBackend`] does it on disk,
//!   [`mem_backend::MemBackend`] in memory for tests.
//! - [`json_store::JsonStore`] is the "what": identifier assignment, code-value
//!   uniqueness, the read-modify-write cycle and its error outcomes.
//!
//! ## Read-Modify-Write
//!
//! Every operation re-reads the full collection; every mutation rewrites it.
//! There is no cache and no index, so each call is O(N) in the number of
//! products:
//!
//! ```text
//! load ──► scan / mutate in memory ──► save (mutations only)
//! ```
//!
//! The bare store does no locking. Two overlapping cycles race and the last
//! writer wins. [`serialized::SerializedStore`] wraps any store with a mutex
//! held across each mutating call.
//!
//! ## Identifiers
//!
//! New ids come from [`IdPolicy`]. The default, `Count`, assigns
//! `count + 1`, which re-issues an id still held by a live product once
//! anything has been deleted. `MaxPlusOne` never does. `doctor` finds and
//! repairs the collisions.
//!
//! ## Storage Format
//!
//! ```text
//! <data dir>/
//! ├── products.json   # JSON array of products, insertion order
//! └── config.json     # Catalog configuration
//! ```

use crate::error::StoreResult;
use crate::model::{Product, ProductId};
use serde::Serialize;

pub mod backend;
pub mod fs;
pub mod fs_backend;
pub mod json_store;
pub mod mem_backend;
pub mod memory;
pub mod serialized;

pub use json_store::{IdPolicy, JsonStore};

/// Report from the `doctor` operation.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct DoctorReport {
    /// Ids held by more than one product, in order of first appearance.
    pub duplicate_ids: Vec<ProductId>,
    /// Code values held by more than one product.
    pub duplicate_codes: Vec<String>,
    /// Ids of products whose expiration is not a `dd/mm/yyyy` date.
    pub invalid_expirations: Vec<ProductId>,
    /// `(old, new)` id pairs rewritten by a fixing run.
    pub reassigned: Vec<(ProductId, ProductId)>,
}

impl DoctorReport {
    pub fn is_clean(&self) -> bool {
        self.duplicate_ids.is_empty()
            && self.duplicate_codes.is_empty()
            && self.invalid_expirations.is_empty()
    }
}

/// Abstract interface for product persistence.
///
/// Implementations hold no state between calls; every method observes the
/// collection as it is on the backend at that moment.
pub trait ProductStore {
    /// All products in insertion order.
    fn get_all(&self) -> StoreResult<Vec<Product>>;

    /// The first product carrying `id`.
    fn get_by_id(&self, id: ProductId) -> StoreResult<Product>;

    /// Append a product, assigning its id. Fails with `NotUnique` when the
    /// code value is taken. Returns the product as stored.
    fn create(&self, product: Product) -> StoreResult<Product>;

    /// Replace the first product carrying `id`. The stored product always
    /// keeps `id`, whatever the payload says.
    fn update(&self, id: ProductId, product: Product) -> StoreResult<Product>;

    /// Remove the first product carrying `id`.
    fn delete(&self, id: ProductId) -> StoreResult<()>;

    /// Check the collection for duplicate ids and codes; with `fix`, give
    /// every repeated id a fresh one.
    fn doctor(&self, fix: bool) -> StoreResult<DoctorReport>;
}
