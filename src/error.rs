use thiserror::Error;

use crate::product::ProductId;
use crate::storage::StorageError;

/// Error type for product store operations.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// No product has the requested id. The catalog was left unchanged.
    #[error("product not found: {id}")]
    NotFound { id: ProductId },
    /// Every id up to `ProductId::MAX` has been handed out.
    #[error("product ids exhausted: {last} was the last assignable id")]
    IdsExhausted { last: ProductId },
    /// An explicit flush could not write the catalog.
    #[error(transparent)]
    Storage(#[from] StorageError),
}
