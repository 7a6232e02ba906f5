//! JsonFileStorage - the catalog as one pretty-printed JSON array on disk.

use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::product::Product;

use super::{CatalogStorage, StorageError};

/// File-backed storage. Every save rewrites the whole file.
///
/// Saves go through a sibling `<file>.tmp` that is renamed over the target, so
/// an interrupted write leaves the previous catalog in place.
#[derive(Clone, Debug)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonFileStorage { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = OsString::from(self.path.as_os_str());
        name.push(".tmp");
        PathBuf::from(name)
    }

    fn io_error(path: &Path, source: io::Error) -> StorageError {
        StorageError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

impl CatalogStorage for JsonFileStorage {
    fn load(&self) -> Result<Vec<Product>, StorageError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "no catalog file yet");
                return Ok(Vec::new());
            }
            Err(err) => return Err(Self::io_error(&self.path, err)),
        };

        if text.trim().is_empty() {
            tracing::debug!(path = %self.path.display(), "catalog file is empty");
            return Ok(Vec::new());
        }

        Ok(serde_json::from_str(&text)?)
    }

    fn save(&self, products: &[Product]) -> Result<(), StorageError> {
        if let Some(product) = products.iter().find(|p| !p.price.is_finite()) {
            return Err(StorageError::NonFinitePrice {
                id: product.id,
                price: product.price,
            });
        }

        let mut text = serde_json::to_string_pretty(products)?;
        text.push('\n');

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|err| Self::io_error(parent, err))?;
        }

        let tmp_path = self.tmp_path();
        if let Err(err) = fs::write(&tmp_path, text) {
            let _ = fs::remove_file(&tmp_path);
            return Err(Self::io_error(&tmp_path, err));
        }

        if let Err(err) = fs::rename(&tmp_path, &self.path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(Self::io_error(&self.path, err));
        }

        Ok(())
    }
}
