//! Product records and the payloads used to create and patch them.
//!
//! `Product` is the persisted shape. Callers never build one directly for
//! insertion: they hand a `NewProduct` to the store, which assigns the id, and
//! patch existing records with a `ProductUpdate`.

mod new_product;
mod update;

use serde::{Deserialize, Serialize};

pub use new_product::NewProduct;
pub use update::ProductUpdate;

/// Store-assigned product identifier. Ids start at 1.
pub type ProductId = u64;

/// A single catalog entry as it is stored on disk.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub thumbnail: String,
    pub code: String,
    pub stock: i64,
}

impl Product {
    pub(crate) fn create(id: ProductId, fields: NewProduct) -> Self {
        let NewProduct {
            title,
            description,
            price,
            thumbnail,
            code,
            stock,
        } = fields;

        Product {
            id,
            title,
            description,
            price,
            thumbnail,
            code,
            stock,
        }
    }
}
