//! # Error Types
//!
//! Each layer owns its error enumeration and translates the one below it:
//!
//! ```text
//! BackendError ─► StoreError ─► RepoError ─► ServiceError ─► CatalogError
//! ```
//!
//! The three storage outcomes (`Internal`, `NotFound`, `NotUnique`) stay
//! distinguishable at every boundary. Internal failures keep the lower error
//! as their `source()`, so the full chain is available for logging.

use crate::model::ProductId;
use thiserror::Error;

/// Raw persistence failure underneath the store.
#[derive(Error, Debug)]
pub enum BackendError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Backend error: {0}")]
    Backend(String),
}

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("internal error")]
    Internal(#[from] BackendError),

    #[error("product not found: {0}")]
    NotFound(ProductId),

    #[error("product already exists: {0}")]
    NotUnique(String),
}

#[derive(Error, Debug)]
pub enum RepoError {
    #[error("internal error")]
    Internal(#[source] StoreError),

    #[error("product not found: {0}")]
    NotFound(ProductId),

    #[error("product already exists: {0}")]
    NotUnique(String),
}

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("internal error")]
    Internal(#[source] RepoError),

    #[error("product not found: {0}")]
    NotFound(ProductId),

    #[error("product already exists: {0}")]
    NotUnique(String),

    #[error("invalid product: {0}")]
    Invalid(String),
}

/// Top-level error returned by commands, the API facade and the CLI.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error(transparent)]
    Service(#[from] ServiceError),

    #[error(transparent)]
    Backend(#[from] BackendError),

    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, CatalogError>;
pub type StoreResult<T> = std::result::Result<T, StoreError>;
pub type RepoResult<T> = std::result::Result<T, RepoError>;
pub type ServiceResult<T> = std::result::Result<T, ServiceError>;
