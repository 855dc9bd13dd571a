//! # API Facade
//!
//! The single entry point for catalog operations, whatever the client. It is
//! a **thin facade** over the command layer:
//!
//! - **Dispatches** to the matching `commands::*::run`
//! - **Normalizes inputs**: ids and prices arrive as text and are parsed here
//! - **Returns structured types** (`Result<CmdResult>`), never prints
//!
//! Business rules live in the service and store; formatting lives in the
//! client.
//!
//! ## Generic Over ProductService
//!
//! - Production: `CatalogApi<DefaultService>` (see [`crate::init`])
//! - Testing: a service over the in-memory store
//!
//! API tests check that arguments are parsed and routed. Command and storage
//! behavior is tested where it lives.

use crate::commands;
use crate::commands::config::ConfigAction;
use crate::error::{CatalogError, Result};
use crate::model::{Product, ProductId, ProductPatch};
use crate::service::ProductService;

pub struct CatalogApi<S: ProductService> {
    service: S,
    paths: commands::CatalogPaths,
}

impl<S: ProductService> CatalogApi<S> {
    pub fn new(service: S, paths: commands::CatalogPaths) -> Self {
        Self { service, paths }
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    pub fn paths(&self) -> &commands::CatalogPaths {
        &self.paths
    }

    pub fn list_products(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.service)
    }

    pub fn get_product(&self, id: &str) -> Result<commands::CmdResult> {
        let id = parse_id(id)?;
        commands::get::run(&self.service, id)
    }

    pub fn search_products(&self, price_gt: &str) -> Result<commands::CmdResult> {
        let price = parse_price(price_gt)?;
        commands::search::run(&self.service, price)
    }

    pub fn create_product(&self, product: Product) -> Result<commands::CmdResult> {
        commands::create::run(&self.service, product)
    }

    pub fn update_product(&self, id: &str, product: Product) -> Result<commands::CmdResult> {
        let id = parse_id(id)?;
        commands::update::run(&self.service, id, product)
    }

    pub fn patch_product(&self, id: &str, patch: ProductPatch) -> Result<commands::CmdResult> {
        let id = parse_id(id)?;
        commands::patch::run(&self.service, id, &patch)
    }

    pub fn delete_product(&self, id: &str) -> Result<commands::CmdResult> {
        let id = parse_id(id)?;
        commands::delete::run(&self.service, id)
    }

    pub fn doctor(&self, fix: bool) -> Result<commands::CmdResult> {
        commands::doctor::run(&self.service, fix)
    }

    pub fn init(&self) -> Result<commands::CmdResult> {
        commands::init::run(&self.paths)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.paths, action)
    }
}

/// Parse a product id as typed by a user.
pub fn parse_id(raw: &str) -> Result<ProductId> {
    raw.trim()
        .parse::<ProductId>()
        .map_err(|_| CatalogError::InvalidRequest(format!("'{}' is not a valid product id", raw)))
}

/// Parse a price threshold. Only finite numbers are accepted.
pub fn parse_price(raw: &str) -> Result<f64> {
    match raw.trim().parse::<f64>() {
        Ok(price) if price.is_finite() => Ok(price),
        _ => Err(CatalogError::InvalidRequest(format!(
            "'{}' is not a valid price",
            raw
        ))),
    }
}
