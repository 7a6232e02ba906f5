use serde::Deserialize;
use serde_json::Value;

/// Fields for a product that has not been stored yet.
///
/// All fields are required. When deserialized from JSON an `id` key is
/// accepted and dropped, because ids are always assigned by the store; any
/// other unknown key is rejected.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(from = "NewProductPayload")]
pub struct NewProduct {
    pub title: String,
    pub description: String,
    pub price: f64,
    pub thumbnail: String,
    pub code: String,
    pub stock: i64,
}

impl NewProduct {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        price: f64,
        thumbnail: impl Into<String>,
        code: impl Into<String>,
        stock: i64,
    ) -> Self {
        NewProduct {
            title: title.into(),
            description: description.into(),
            price,
            thumbnail: thumbnail.into(),
            code: code.into(),
            stock,
        }
    }
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct NewProductPayload {
    #[serde(default)]
    id: Option<Value>,
    title: String,
    description: String,
    price: f64,
    thumbnail: String,
    code: String,
    stock: i64,
}

impl From<NewProductPayload> for NewProduct {
    fn from(payload: NewProductPayload) -> Self {
        if let Some(id) = payload.id {
            tracing::debug!(%id, "ignoring caller-supplied id on new product");
        }

        NewProduct {
            title: payload.title,
            description: payload.description,
            price: payload.price,
            thumbnail: payload.thumbnail,
            code: payload.code,
            stock: payload.stock,
        }
    }
}
