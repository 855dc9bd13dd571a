//! # Repository Layer
//!
//! A thin adapter over [`ProductStore`]. It adds exactly one thing, the
//! price filter, and otherwise translates store errors:
//!
//! - store `Internal` → repository `Internal` (the store error is kept as the cause)
//! - any other store failure → `NotFound` for lookups, updates and deletes,
//!   `NotUnique` for creates

use crate::error::{RepoError, RepoResult, StoreError};
use crate::model::{Product, ProductId};
use crate::store::{DoctorReport, ProductStore};

pub trait ProductRepository {
    fn get_all(&self) -> RepoResult<Vec<Product>>;
    fn get_by_id(&self, id: ProductId) -> RepoResult<Product>;
    /// Products priced strictly above `price`, in collection order.
    fn search_price_gt(&self, price: f64) -> RepoResult<Vec<Product>>;
    fn create(&self, product: Product) -> RepoResult<Product>;
    fn update(&self, id: ProductId, product: Product) -> RepoResult<Product>;
    fn delete(&self, id: ProductId) -> RepoResult<()>;
    fn doctor(&self, fix: bool) -> RepoResult<DoctorReport>;
}

pub struct Repository<S: ProductStore> {
    storage: S,
}

impl<S: ProductStore> Repository<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}

fn lookup_error(id: ProductId, err: StoreError) -> RepoError {
    if matches!(err, StoreError::Internal(_)) {
        RepoError::Internal(err)
    } else {
        RepoError::NotFound(id)
    }
}

fn create_error(code_value: String, err: StoreError) -> RepoError {
    if matches!(err, StoreError::Internal(_)) {
        RepoError::Internal(err)
    } else {
        RepoError::NotUnique(code_value)
    }
}

impl<S: ProductStore> ProductRepository for Repository<S> {
    fn get_all(&self) -> RepoResult<Vec<Product>> {
        self.storage.get_all().map_err(RepoError::Internal)
    }

    fn get_by_id(&self, id: ProductId) -> RepoResult<Product> {
        self.storage.get_by_id(id).map_err(|e| lookup_error(id, e))
    }

    fn search_price_gt(&self, price: f64) -> RepoResult<Vec<Product>> {
        let products = self.storage.get_all().map_err(RepoError::Internal)?;
        Ok(products.into_iter().filter(|p| p.price > price).collect())
    }

    fn create(&self, product: Product) -> RepoResult<Product> {
        let code_value = product.code_value.clone();
        self.storage
            .create(product)
            .map_err(|e| create_error(code_value, e))
    }

    fn update(&self, id: ProductId, product: Product) -> RepoResult<Product> {
        self.storage
            .update(id, product)
            .map_err(|e| lookup_error(id, e))
    }

    fn delete(&self, id: ProductId) -> RepoResult<()> {
        self.storage.delete(id).map_err(|e| lookup_error(id, e))
    }

    fn doctor(&self, fix: bool) -> RepoResult<DoctorReport> {
        self.storage.doctor(fix).map_err(RepoError::Internal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::{product, StoreFixture};
    use crate::store::memory::InMemoryStore;

    fn repo_with(codes: &[&str]) -> Repository<InMemoryStore> {
        Repository::new(StoreFixture::new().with_codes(codes).store)
    }

    #[test]
    fn search_filters_strictly_greater() {
        // Prices are 10, 20, 30, 40
        let repo = repo_with(&["A", "B", "C", "D"]);
        let found = repo.search_price_gt(20.0).unwrap();
        let codes: Vec<_> = found.iter().map(|p| p.code_value.as_str()).collect();
        assert_eq!(codes, vec!["C", "D"]);
    }

    #[test]
    fn search_with_no_matches_is_empty() {
        let repo = repo_with(&["A", "B"]);
        assert!(repo.search_price_gt(1000.0).unwrap().is_empty());
    }

    #[test]
    fn maps_not_found() {
        let repo = repo_with(&["A"]);
        assert!(matches!(repo.get_by_id(3), Err(RepoError::NotFound(3))));
        assert!(matches!(
            repo.update(3, product("Z", 1.0)),
            Err(RepoError::NotFound(3))
        ));
        assert!(matches!(repo.delete(3), Err(RepoError::NotFound(3))));
    }

    #[test]
    fn maps_not_unique() {
        let repo = repo_with(&["A"]);
        assert!(matches!(
            repo.create(product("A", 1.0)),
            Err(RepoError::NotUnique(code)) if code == "A"
        ));
    }

    #[test]
    fn maps_internal_everywhere() {
        let repo = repo_with(&["A"]);
        repo.storage().backend().set_simulate_read_error(true);

        assert!(matches!(repo.get_all(), Err(RepoError::Internal(_))));
        assert!(matches!(repo.get_by_id(1), Err(RepoError::Internal(_))));
        assert!(matches!(
            repo.search_price_gt(0.0),
            Err(RepoError::Internal(_))
        ));
        assert!(matches!(
            repo.create(product("B", 1.0)),
            Err(RepoError::Internal(_))
        ));
        assert!(matches!(
            repo.update(1, product("B", 1.0)),
            Err(RepoError::Internal(_))
        ));
        assert!(matches!(repo.delete(1), Err(RepoError::Internal(_))));
        assert!(matches!(repo.doctor(false), Err(RepoError::Internal(_))));
    }

    #[test]
    fn create_returns_stored_product() {
        let repo = repo_with(&["A", "B"]);
        let created = repo.create(product("C", 5.0)).unwrap();
        assert_eq!(created.id, 3);
        assert_eq!(repo.get_all().unwrap().len(), 3);
    }
}
