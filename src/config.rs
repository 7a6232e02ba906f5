//! Where the catalog file lives.
//!
//! The location comes from `CATALOG_PATH` when it is set to a non-empty value,
//! otherwise `products.json` in the working directory.

use std::env;
use std::path::PathBuf;

pub const CATALOG_PATH_ENV: &str = "CATALOG_PATH";
pub const DEFAULT_CATALOG_PATH: &str = "products.json";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CatalogConfig {
    pub path: PathBuf,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        CatalogConfig {
            path: PathBuf::from(DEFAULT_CATALOG_PATH),
        }
    }
}

impl CatalogConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        CatalogConfig { path: path.into() }
    }

    /// Read the configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        match lookup(CATALOG_PATH_ENV) {
            Some(value) if !value.trim().is_empty() => Self::new(value.trim()),
            _ => Self::default(),
        }
    }
}
