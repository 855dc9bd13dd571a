//! # Commands
//!
//! One module per user-facing operation. Each exposes a `run` function that
//! takes the service (or the data paths) plus already-parsed arguments and
//! returns a [`CmdResult`]: the products it touched or listed, and messages
//! for the user. Nothing here prints; rendering belongs to the client.
//!
//! Domain failures (missing product, taken code value, invalid payload)
//! surface as `Err`. Soft outcomes such as "nothing to patch" or an unknown
//! config key come back as messages instead.

use crate::config::CatalogConfig;
use crate::model::Product;
use crate::store::DoctorReport;
use serde::Serialize;
use std::path::PathBuf;

pub mod config;
pub mod create;
pub mod delete;
pub mod doctor;
pub mod get;
pub mod init;
pub mod list;
pub mod patch;
pub mod search;
pub mod update;

#[derive(Debug, Clone)]
pub struct CatalogPaths {
    pub data_dir: PathBuf,
    pub products_file: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default, Serialize)]
pub struct CmdResult {
    /// Products created, updated or deleted by the command.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub affected_products: Vec<Product>,
    /// Products the command was asked to show.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub listed_products: Vec<Product>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<DoctorReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<CatalogConfig>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_products(mut self, products: Vec<Product>) -> Self {
        self.affected_products = products;
        self
    }

    pub fn with_listed_products(mut self, products: Vec<Product>) -> Self {
        self.listed_products = products;
        self
    }

    pub fn with_report(mut self, report: DoctorReport) -> Self {
        self.report = Some(report);
        self
    }

    pub fn with_config(mut self, config: CatalogConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn has_errors(&self) -> bool {
        self.messages
            .iter()
            .any(|m| m.level == MessageLevel::Error)
    }
}
