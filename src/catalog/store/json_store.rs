use super::backend::StorageBackend;
use super::{DoctorReport, ProductStore};
use crate::error::{BackendError, StoreError, StoreResult};
use crate::model::{Product, ProductId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;
use tracing::{debug, info, warn};

/// How the store picks the id of a newly created product.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IdPolicy {
    /// `count + 1`. After a deletion this can hand out an id that a live
    /// product still holds.
    #[default]
    Count,
    /// `max(id) + 1`, or `1` for an empty collection.
    MaxPlusOne,
}

impl IdPolicy {
    /// The id a new product gets, or `None` once the id space is used up.
    pub fn next_id(self, products: &[Product]) -> Option<ProductId> {
        match self {
            IdPolicy::Count => ProductId::try_from(products.len()).ok()?.checked_add(1),
            IdPolicy::MaxPlusOne => products
                .iter()
                .map(|p| p.id)
                .max()
                .unwrap_or(0)
                .checked_add(1),
        }
    }
}

impl fmt::Display for IdPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdPolicy::Count => write!(f, "count"),
            IdPolicy::MaxPlusOne => write!(f, "max-plus-one"),
        }
    }
}

impl FromStr for IdPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "count" => Ok(IdPolicy::Count),
            "max-plus-one" | "max" => Ok(IdPolicy::MaxPlusOne),
            other => Err(format!(
                "unknown id policy '{}' (expected 'count' or 'max-plus-one')",
                other
            )),
        }
    }
}

pub struct JsonStore<B: StorageBackend> {
    /// The underlying storage backend.
    /// Exposed as pub(crate) for testing and internal access only.
    pub(crate) backend: B,
    id_policy: IdPolicy,
}

impl<B: StorageBackend> JsonStore<B> {
    pub fn with_backend(backend: B) -> Self {
        Self {
            backend,
            id_policy: IdPolicy::default(),
        }
    }

    pub fn with_id_policy(mut self, id_policy: IdPolicy) -> Self {
        self.id_policy = id_policy;
        self
    }

    pub fn id_policy(&self) -> IdPolicy {
        self.id_policy
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    fn load(&self) -> StoreResult<Vec<Product>> {
        match self.backend.load_products() {
            Ok(products) => {
                debug!(
                    location = %self.backend.location(),
                    count = products.len(),
                    "loaded products"
                );
                Ok(products)
            }
            Err(err) => {
                warn!(location = %self.backend.location(), error = %err, "failed to load products");
                Err(StoreError::Internal(err))
            }
        }
    }

    fn save(&self, products: &[Product]) -> StoreResult<()> {
        match self.backend.save_products(products) {
            Ok(()) => {
                debug!(
                    location = %self.backend.location(),
                    count = products.len(),
                    "saved products"
                );
                Ok(())
            }
            Err(err) => {
                warn!(location = %self.backend.location(), error = %err, "failed to save products");
                Err(StoreError::Internal(err))
            }
        }
    }
}

/// Index of the first product carrying `id`. With colliding ids the earlier
/// entry always wins.
fn position_of(products: &[Product], id: ProductId) -> Option<usize> {
    products.iter().position(|p| p.id == id)
}

fn code_exists(products: &[Product], code_value: &str) -> bool {
    products.iter().any(|p| p.code_value == code_value)
}

fn diagnose(products: &[Product]) -> DoctorReport {
    let mut report = DoctorReport::default();
    let mut seen_ids = HashSet::new();
    let mut seen_codes = HashSet::new();

    for product in products {
        if !seen_ids.insert(product.id) && !report.duplicate_ids.contains(&product.id) {
            report.duplicate_ids.push(product.id);
        }
        if !seen_codes.insert(product.code_value.as_str())
            && !report.duplicate_codes.contains(&product.code_value)
        {
            report.duplicate_codes.push(product.code_value.clone());
        }
        if product.expiration_date().is_none() {
            report.invalid_expirations.push(product.id);
        }
    }

    report
}

/// Give every repeated id a fresh one above the current maximum. The first
/// holder of an id keeps it.
fn reassign_duplicate_ids(
    products: &mut [Product],
) -> StoreResult<Vec<(ProductId, ProductId)>> {
    let mut next = products.iter().map(|p| p.id).max().unwrap_or(0);
    let mut seen = HashSet::new();
    let mut reassigned = Vec::new();

    for product in products.iter_mut() {
        if !seen.insert(product.id) {
            next = next.checked_add(1).ok_or_else(id_space_exhausted)?;
            reassigned.push((product.id, next));
            product.id = next;
            seen.insert(next);
        }
    }

    Ok(reassigned)
}

fn id_space_exhausted() -> StoreError {
    StoreError::Internal(BackendError::Backend("id space exhausted".to_string()))
}

impl<B: StorageBackend> ProductStore for JsonStore<B> {
    fn get_all(&self) -> StoreResult<Vec<Product>> {
        self.load()
    }

    fn get_by_id(&self, id: ProductId) -> StoreResult<Product> {
        let products = self.load()?;
        products
            .into_iter()
            .find(|p| p.id == id)
            .ok_or(StoreError::NotFound(id))
    }

    fn create(&self, mut product: Product) -> StoreResult<Product> {
        let mut products = self.load()?;

        if code_exists(&products, &product.code_value) {
            debug!(code_value = %product.code_value, "rejected duplicate code value");
            return Err(StoreError::NotUnique(product.code_value));
        }

        product.id = self
            .id_policy
            .next_id(&products)
            .ok_or_else(id_space_exhausted)?;
        products.push(product.clone());
        self.save(&products)?;

        info!(id = product.id, code_value = %product.code_value, "product created");
        Ok(product)
    }

    fn update(&self, id: ProductId, mut product: Product) -> StoreResult<Product> {
        let mut products = self.load()?;
        let slot = position_of(&products, id).ok_or(StoreError::NotFound(id))?;

        // The path id always wins over whatever the payload carried
        product.id = id;
        products[slot] = product.clone();
        self.save(&products)?;

        info!(id, "product updated");
        Ok(product)
    }

    fn delete(&self, id: ProductId) -> StoreResult<()> {
        let mut products = self.load()?;
        let slot = position_of(&products, id).ok_or(StoreError::NotFound(id))?;

        products.remove(slot);
        self.save(&products)?;

        info!(id, "product deleted");
        Ok(())
    }

    fn doctor(&self, fix: bool) -> StoreResult<DoctorReport> {
        let mut products = self.load()?;
        let mut report = diagnose(&products);

        if !report.duplicate_ids.is_empty() {
            warn!(ids = ?report.duplicate_ids, "collection holds duplicate ids");
        }

        if fix && !report.duplicate_ids.is_empty() {
            report.reassigned = reassign_duplicate_ids(&mut products)?;
            self.save(&products)?;
            info!(count = report.reassigned.len(), "reassigned duplicate ids");
        }

        Ok(report)
    }
}
