//! # Service Layer
//!
//! The surface the commands talk to. Like the repository it mostly translates
//! errors (`Internal` stays `Internal`, everything else becomes the
//! operation's domain failure). On top of that it:
//!
//! - rejects payloads with missing or out-of-range fields (`Invalid`)
//!   before they reach the store
//! - implements partial updates as get → apply patch → validate → update

use crate::error::{RepoError, ServiceError, ServiceResult};
use crate::model::{Product, ProductId, ProductPatch};
use crate::repository::ProductRepository;
use crate::store::DoctorReport;

pub trait ProductService {
    fn get_all(&self) -> ServiceResult<Vec<Product>>;
    fn get_by_id(&self, id: ProductId) -> ServiceResult<Product>;
    fn search_price_gt(&self, price: f64) -> ServiceResult<Vec<Product>>;
    fn create(&self, product: Product) -> ServiceResult<Product>;
    fn update(&self, id: ProductId, product: Product) -> ServiceResult<Product>;
    fn patch(&self, id: ProductId, patch: &ProductPatch) -> ServiceResult<Product>;
    fn delete(&self, id: ProductId) -> ServiceResult<()>;
    fn doctor(&self, fix: bool) -> ServiceResult<DoctorReport>;
}

pub struct Service<R: ProductRepository> {
    repository: R,
}

impl<R: ProductRepository> Service<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }
}

fn lookup_error(id: ProductId, err: RepoError) -> ServiceError {
    if matches!(err, RepoError::Internal(_)) {
        ServiceError::Internal(err)
    } else {
        ServiceError::NotFound(id)
    }
}

fn create_error(code_value: String, err: RepoError) -> ServiceError {
    if matches!(err, RepoError::Internal(_)) {
        ServiceError::Internal(err)
    } else {
        ServiceError::NotUnique(code_value)
    }
}

fn validate(product: &Product) -> ServiceResult<()> {
    let problems = product.problems();
    if problems.is_empty() {
        Ok(())
    } else {
        Err(ServiceError::Invalid(problems.join("; ")))
    }
}

impl<R: ProductRepository> ProductService for Service<R> {
    fn get_all(&self) -> ServiceResult<Vec<Product>> {
        self.repository.get_all().map_err(ServiceError::Internal)
    }

    fn get_by_id(&self, id: ProductId) -> ServiceResult<Product> {
        self.repository
            .get_by_id(id)
            .map_err(|e| lookup_error(id, e))
    }

    fn search_price_gt(&self, price: f64) -> ServiceResult<Vec<Product>> {
        self.repository
            .search_price_gt(price)
            .map_err(ServiceError::Internal)
    }

    fn create(&self, product: Product) -> ServiceResult<Product> {
        validate(&product)?;
        let code_value = product.code_value.clone();
        self.repository
            .create(product)
            .map_err(|e| create_error(code_value, e))
    }

    fn update(&self, id: ProductId, product: Product) -> ServiceResult<Product> {
        validate(&product)?;
        self.repository
            .update(id, product)
            .map_err(|e| lookup_error(id, e))
    }

    fn patch(&self, id: ProductId, patch: &ProductPatch) -> ServiceResult<Product> {
        let mut product = self.get_by_id(id)?;
        patch.apply_to(&mut product);
        self.update(id, product)
    }

    fn delete(&self, id: ProductId) -> ServiceResult<()> {
        self.repository.delete(id).map_err(|e| lookup_error(id, e))
    }

    fn doctor(&self, fix: bool) -> ServiceResult<DoctorReport> {
        self.repository.doctor(fix).map_err(ServiceError::Internal)
    }
}
