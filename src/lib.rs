//! File-backed product catalog.
//!
//! A `ProductStore` loads every product from its storage when it is created,
//! serves reads from memory and rewrites the full list after each change. See
//! the `store` module for how storage failures are handled.

mod catalog;
mod config;
mod error;
mod product;
mod storage;
mod store;

pub use catalog::Catalog;
pub use config::{CatalogConfig, CATALOG_PATH_ENV, DEFAULT_CATALOG_PATH};
pub use error::CatalogError;
pub use product::{NewProduct, Product, ProductId, ProductUpdate};
pub use storage::{CatalogStorage, InMemoryStorage, JsonFileStorage, StorageError};
pub use store::ProductStore;
