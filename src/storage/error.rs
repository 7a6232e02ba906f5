use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Error type for catalog storage backends.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading, writing or renaming the backing file failed.
    #[error("catalog storage I/O error at {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The stored content is not a valid product list, or the list could not
    /// be encoded.
    #[error("catalog serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    /// JSON has no encoding for NaN or infinity, so such a price would be
    /// written as `null` and make the whole file unreadable.
    #[error("product {id} has a non-finite price ({price}) that cannot be stored")]
    NonFinitePrice { id: u64, price: f64 },
    /// The in-memory backend's lock was poisoned.
    #[error("catalog storage lock poisoned during {0}")]
    LockPoisoned(&'static str),
}
