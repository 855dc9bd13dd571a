use super::json_store::JsonStore;
use super::mem_backend::MemBackend;

pub type InMemoryStore = JsonStore<MemBackend>;

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStore {
    pub fn new() -> Self {
        JsonStore::with_backend(MemBackend::new())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::Product;
    use crate::store::ProductStore;

    /// A valid product whose name is derived from its code value.
    pub fn product(code_value: &str, price: f64) -> Product {
        Product::new(
            format!("Product {}", code_value),
            10,
            code_value,
            true,
            "15/12/2030",
            price,
        )
    }

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        /// Create one product per code, priced 10, 20, 30, ...
        pub fn with_codes(self, codes: &[&str]) -> Self {
            for (i, code) in codes.iter().enumerate() {
                let price = (i as f64 + 1.0) * 10.0;
                self.store.create(product(code, price)).unwrap();
            }
            self
        }
    }
}
