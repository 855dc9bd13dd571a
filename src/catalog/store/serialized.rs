//! Process-local serialization of read-modify-write cycles.
//!
//! [`JsonStore`](super::JsonStore) on its own lets two overlapping mutations
//! race: both load the same collection, both save, and the first save is lost.
//! `SerializedStore` holds one mutex across each mutating call so that, within
//! a process, cycles run one after another.
//!
//! Reads skip the lock. Saves replace the file by rename, so a reader sees
//! either the collection before a mutation or after it, never a torn one.
//!
//! Nothing here coordinates separate processes.

use super::{DoctorReport, ProductStore};
use crate::error::StoreResult;
use crate::model::{Product, ProductId};
use parking_lot::Mutex;

pub struct SerializedStore<S: ProductStore> {
    inner: S,
    write_lock: Mutex<()>,
}

impl<S: ProductStore> SerializedStore<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            write_lock: Mutex::new(()),
        }
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }
}

impl<S: ProductStore> ProductStore for SerializedStore<S> {
    fn get_all(&self) -> StoreResult<Vec<Product>> {
        self.inner.get_all()
    }

    fn get_by_id(&self, id: ProductId) -> StoreResult<Product> {
        self.inner.get_by_id(id)
    }

    fn create(&self, product: Product) -> StoreResult<Product> {
        let _guard = self.write_lock.lock();
        self.inner.create(product)
    }

    fn update(&self, id: ProductId, product: Product) -> StoreResult<Product> {
        let _guard = self.write_lock.lock();
        self.inner.update(id, product)
    }

    fn delete(&self, id: ProductId) -> StoreResult<()> {
        let _guard = self.write_lock.lock();
        self.inner.delete(id)
    }

    fn doctor(&self, fix: bool) -> StoreResult<DoctorReport> {
        if fix {
            let _guard = self.write_lock.lock();
            return self.inner.doctor(true);
        }
        self.inner.doctor(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::product;
    use crate::store::memory::InMemoryStore;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn passes_operations_through() {
        let store = SerializedStore::new(InMemoryStore::new());
        let a = store.create(product("A", 1.0)).unwrap();
        store.create(product("B", 2.0)).unwrap();
        store.update(a.id, product("A2", 1.5)).unwrap();
        store.delete(2).unwrap();

        let all = store.get_all().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(store.get_by_id(1).unwrap().code_value, "A2");
        assert_eq!(store.inner().backend().save_count(), 4);
    }

    #[test]
    fn concurrent_creates_are_not_lost() {
        let store = Arc::new(SerializedStore::new(InMemoryStore::new()));
        let handles: Vec<_> = (0..8)
            .map(|t| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    for i in 0..10 {
                        store
                            .create(product(&format!("T{}-{}", t, i), 1.0))
                            .unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let mut ids: Vec<_> = store.get_all().unwrap().iter().map(|p| p.id).collect();
        ids.sort_unstable();
        assert_eq!(ids, (1..=80).collect::<Vec<_>>());
    }
}
