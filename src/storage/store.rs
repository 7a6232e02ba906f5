//! CatalogStorage - whole-catalog load and save.

use crate::product::Product;

use super::StorageError;

/// Durable home of the product list.
pub trait CatalogStorage: Send + Sync {
    /// Read every stored product in order.
    ///
    /// A backend with nothing stored yet returns an empty list, not an error.
    fn load(&self) -> Result<Vec<Product>, StorageError>;

    /// Replace everything stored with `products`.
    fn save(&self, products: &[Product]) -> Result<(), StorageError>;
}
