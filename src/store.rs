//! ProductStore - CRUD over the catalog with a flush after every change.
//!
//! The store hydrates its `Catalog` from storage once, when it is created, and
//! answers reads from memory. Each add, update and delete rewrites the whole
//! product list to storage. Storage problems never fail an operation:
//!
//! - a catalog that cannot be loaded is logged and replaced by an empty one;
//! - a failed flush is logged and the in-memory change is kept. The store
//!   remembers that it has unsaved changes until a later flush succeeds.
//!
//! Only a missing product id, or running out of ids on add, aborts an
//! operation.
//!
//! ## Example
//!
//! ```ignore
//! use product_catalog::{NewProduct, ProductStore, ProductUpdate};
//!
//! let mut store = ProductStore::open("products.json");
//! let product = store.add(NewProduct::new("Mug", "Stoneware", 12.0, "mug.png", "MUG-1", 40))?;
//! store.update(product.id, ProductUpdate::new().with_stock(39))?;
//! store.delete(product.id)?;
//! ```

use std::path::PathBuf;

use crate::catalog::Catalog;
use crate::config::CatalogConfig;
use crate::error::CatalogError;
use crate::product::{NewProduct, Product, ProductId, ProductUpdate};
use crate::storage::{CatalogStorage, JsonFileStorage};

pub struct ProductStore<S = JsonFileStorage> {
    storage: S,
    catalog: Catalog,
    unsaved_changes: bool,
}

impl ProductStore<JsonFileStorage> {
    /// Open the catalog stored in the JSON file at `path`.
    ///
    /// Never fails: a missing, empty or unreadable file yields an empty catalog.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self::with_storage(JsonFileStorage::new(path))
    }

    pub fn from_config(config: &CatalogConfig) -> Self {
        Self::open(config.path.clone())
    }
}

impl<S: CatalogStorage> ProductStore<S> {
    /// Create a store over `storage`, loading whatever it currently holds.
    pub fn with_storage(storage: S) -> Self {
        let catalog = match storage.load() {
            Ok(products) => {
                let catalog = Catalog::from_products(products);
                tracing::debug!(
                    products = catalog.len(),
                    next_id = catalog.next_id(),
                    "catalog loaded"
                );
                catalog
            }
            Err(err) => {
                tracing::warn!(error = %err, "failed to load catalog, starting empty");
                Catalog::new()
            }
        };

        ProductStore {
            storage,
            catalog,
            unsaved_changes: false,
        }
    }

    /// Copy of every product, in insertion order.
    pub fn list(&self) -> Vec<Product> {
        self.catalog.products().to_vec()
    }

    /// Borrowed view of every product, in insertion order.
    pub fn products(&self) -> &[Product] {
        self.catalog.products()
    }

    pub fn get_by_id(&self, id: ProductId) -> Result<&Product, CatalogError> {
        self.catalog.get(id).ok_or(CatalogError::NotFound { id })
    }

    /// Store a new product under the next id and return it.
    pub fn add(&mut self, fields: NewProduct) -> Result<Product, CatalogError> {
        let product = self
            .catalog
            .insert(fields)
            .cloned()
            .ok_or(CatalogError::IdsExhausted {
                last: self.catalog.next_id(),
            })?;
        self.persist("add");
        Ok(product)
    }

    /// Overwrite the fields set in `update` and return the updated product.
    ///
    /// An update that sets no field changes nothing and is not flushed.
    pub fn update(&mut self, id: ProductId, update: ProductUpdate) -> Result<Product, CatalogError> {
        if update.is_empty() {
            tracing::debug!(id, "empty product update, nothing to flush");
            return self.get_by_id(id).cloned();
        }

        let product = self
            .catalog
            .update(id, update)
            .cloned()
            .ok_or(CatalogError::NotFound { id })?;
        self.persist("update");
        Ok(product)
    }

    pub fn delete(&mut self, id: ProductId) -> Result<(), CatalogError> {
        self.catalog
            .remove(id)
            .ok_or(CatalogError::NotFound { id })?;
        self.persist("delete");
        Ok(())
    }

    /// Write the current catalog to storage, returning any failure.
    pub fn flush(&mut self) -> Result<(), CatalogError> {
        match self.storage.save(self.catalog.products()) {
            Ok(()) => {
                self.unsaved_changes = false;
                Ok(())
            }
            Err(err) => {
                self.unsaved_changes = true;
                Err(err.into())
            }
        }
    }

    /// True when the last flush failed, so storage is behind memory.
    pub fn has_unsaved_changes(&self) -> bool {
        self.unsaved_changes
    }

    /// The highest id assigned so far.
    pub fn next_id(&self) -> ProductId {
        self.catalog.next_id()
    }

    pub fn len(&self) -> usize {
        self.catalog.len()
    }

    pub fn is_empty(&self) -> bool {
        self.catalog.is_empty()
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    fn persist(&mut self, operation: &'static str) {
        match self.flush() {
            Ok(()) => tracing::debug!(operation, products = self.catalog.len(), "catalog flushed"),
            Err(err) => tracing::warn!(
                operation,
                error = %err,
                "failed to flush catalog, keeping in-memory change"
            ),
        }
    }
}
