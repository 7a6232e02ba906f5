//! InMemoryStorage - Vec-backed catalog storage for testing and development.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use crate::product::Product;

use super::{CatalogStorage, StorageError};

/// In-memory storage holding the last saved product list.
///
/// Clone-friendly via Arc: a clone handed to a store can be inspected from the
/// test that created it. Saves can be made to fail to exercise the store's
/// behavior when storage is unavailable.
#[derive(Clone)]
pub struct InMemoryStorage {
    products: Arc<RwLock<Vec<Product>>>,
    saves: Arc<AtomicUsize>,
    fail_saves: Arc<AtomicBool>,
}

impl Default for InMemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStorage {
    /// Create storage with nothing saved yet.
    pub fn new() -> Self {
        Self::with_products(Vec::new())
    }

    /// Create storage that already holds `products`.
    pub fn with_products(products: Vec<Product>) -> Self {
        Self {
            products: Arc::new(RwLock::new(products)),
            saves: Arc::new(AtomicUsize::new(0)),
            fail_saves: Arc::new(AtomicBool::new(false)),
        }
    }

    /// The product list as of the last successful save.
    pub fn stored(&self) -> Result<Vec<Product>, StorageError> {
        let products = self
            .products
            .read()
            .map_err(|_| StorageError::LockPoisoned("read"))?;
        Ok(products.clone())
    }

    /// Number of successful saves.
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }

    /// Make every following save fail (or succeed again).
    pub fn set_fail_saves(&self, fail: bool) {
        self.fail_saves.store(fail, Ordering::SeqCst);
    }
}

impl CatalogStorage for InMemoryStorage {
    fn load(&self) -> Result<Vec<Product>, StorageError> {
        self.stored()
    }

    fn save(&self, products: &[Product]) -> Result<(), StorageError> {
        if self.fail_saves.load(Ordering::SeqCst) {
            return Err(StorageError::Io {
                path: "<memory>".into(),
                source: std::io::Error::new(std::io::ErrorKind::Other, "storage unavailable"),
            });
        }

        let mut stored = self
            .products
            .write()
            .map_err(|_| StorageError::LockPoisoned("write"))?;
        *stored = products.to_vec();
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
