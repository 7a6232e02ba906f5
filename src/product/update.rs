use serde::Deserialize;
use serde_json::Value;

use super::Product;

/// Partial update for an existing product. `None` fields are left untouched.
///
/// There is no `id` field: ids are immutable. A JSON payload carrying `id` is
/// accepted and the key is ignored; other unknown keys are rejected.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(from = "ProductUpdatePayload")]
pub struct ProductUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub thumbnail: Option<String>,
    pub code: Option<String>,
    pub stock: Option<i64>,
}

impl ProductUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    pub fn with_thumbnail(mut self, thumbnail: impl Into<String>) -> Self {
        self.thumbnail = Some(thumbnail.into());
        self
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    pub fn with_stock(mut self, stock: i64) -> Self {
        self.stock = Some(stock);
        self
    }

    /// True when no field would change.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.price.is_none()
            && self.thumbnail.is_none()
            && self.code.is_none()
            && self.stock.is_none()
    }

    /// Overwrite the provided fields on `product`.
    pub(crate) fn apply(self, product: &mut Product) {
        if let Some(title) = self.title {
            product.title = title;
        }
        if let Some(description) = self.description {
            product.description = description;
        }
        if let Some(price) = self.price {
            product.price = price;
        }
        if let Some(thumbnail) = self.thumbnail {
            product.thumbnail = thumbnail;
        }
        if let Some(code) = self.code {
            product.code = code;
        }
        if let Some(stock) = self.stock {
            product.stock = stock;
        }
    }
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct ProductUpdatePayload {
    #[serde(default)]
    id: Option<Value>,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    price: Option<f64>,
    #[serde(default)]
    thumbnail: Option<String>,
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    stock: Option<i64>,
}

impl From<ProductUpdatePayload> for ProductUpdate {
    fn from(payload: ProductUpdatePayload) -> Self {
        if let Some(id) = payload.id {
            tracing::debug!(%id, "ignoring id in product update");
        }

        ProductUpdate {
            title: payload.title,
            description: payload.description,
            price: payload.price,
            thumbnail: payload.thumbnail,
            code: payload.code,
            stock: payload.stock,
        }
    }
}
