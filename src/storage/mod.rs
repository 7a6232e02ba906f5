//! Storage - where the catalog lives between process runs.
//!
//! The store loads the whole product list once and rewrites all of it after
//! every change. Backends only have to implement those two operations, so the
//! JSON file used in production can be swapped for the in-memory backend in
//! tests.
//!
//! ## Example
//!
//! ```ignore
//! use product_catalog::{CatalogStorage, JsonFileStorage};
//!
//! let storage = JsonFileStorage::new("products.json");
//! let products = storage.load()?;
//! storage.save(&products)?;
//! ```

mod error;
mod in_memory;
mod json_file;
mod store;

pub use error::StorageError;
pub use in_memory::InMemoryStorage;
pub use json_file::JsonFileStorage;
pub use store::CatalogStorage;
