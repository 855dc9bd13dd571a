use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Store-assigned product identifier. `0` means "not assigned yet".
pub type ProductId = i64;

/// Expected shape of [`Product::expiration`], e.g. `15/12/2021`.
///
/// The store never enforces it; `doctor` reports entries that don't match.
pub const EXPIRATION_FORMAT: &str = "%d/%m/%Y";

/// One catalog record, serialized with the exact field names of the
/// persisted collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub quantity: i64,
    pub code_value: String,
    pub is_published: bool,
    pub expiration: String,
    pub price: f64,
}

impl Product {
    /// Build an unsaved product. The store assigns the id on create.
    pub fn new(
        name: impl Into<String>,
        quantity: i64,
        code_value: impl Into<String>,
        is_published: bool,
        expiration: impl Into<String>,
        price: f64,
    ) -> Self {
        Self {
            id: 0,
            name: name.into(),
            quantity,
            code_value: code_value.into(),
            is_published,
            expiration: expiration.into(),
            price,
        }
    }

    pub fn expiration_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.expiration.trim(), EXPIRATION_FORMAT).ok()
    }

    /// Field problems that make this product unacceptable as a create or
    /// update payload. Empty when the product is valid.
    pub fn problems(&self) -> Vec<String> {
        let mut problems = Vec::new();
        if self.name.trim().is_empty() {
            problems.push("name is required".to_string());
        }
        if self.code_value.trim().is_empty() {
            problems.push("code_value is required".to_string());
        }
        if self.expiration.trim().is_empty() {
            problems.push("expiration is required".to_string());
        }
        if self.quantity < 0 {
            problems.push(format!("quantity must not be negative (got {})", self.quantity));
        }
        if !self.price.is_finite() || self.price < 0.0 {
            problems.push(format!("price must be a non-negative number (got {})", self.price));
        }
        problems
    }
}

/// Partial update payload: only the fields that are present get applied.
///
/// There is deliberately no `id` field; the target id always comes from the
/// caller's path argument.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code_value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_published: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
}

impl ProductPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.quantity.is_none()
            && self.code_value.is_none()
            && self.is_published.is_none()
            && self.expiration.is_none()
            && self.price.is_none()
    }

    pub fn apply_to(&self, product: &mut Product) {
        if let Some(name) = &self.name {
            product.name = name.clone();
        }
        if let Some(quantity) = self.quantity {
            product.quantity = quantity;
        }
        if let Some(code_value) = &self.code_value {
            product.code_value = code_value.clone();
        }
        if let Some(is_published) = self.is_published {
            product.is_published = is_published;
        }
        if let Some(expiration) = &self.expiration {
            product.expiration = expiration.clone();
        }
        if let Some(price) = self.price {
            product.price = price;
        }
    }
}
