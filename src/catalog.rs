//! Catalog - the owned, in-memory product collection.
//!
//! Products are kept in insertion order and looked up by linear scan. The
//! catalog also owns the id counter; it never touches storage.

use crate::product::{NewProduct, Product, ProductId, ProductUpdate};

/// Ordered product list plus the last id handed out.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
    next_id: ProductId,
}

impl Catalog {
    /// Create an empty catalog. The first inserted product gets id 1.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a catalog from stored products, restoring the counter from the
    /// highest id present (0 when empty).
    pub fn from_products(products: Vec<Product>) -> Self {
        let next_id = products
            .iter()
            .map(|product| product.id)
            .max()
            .unwrap_or(0);
        Catalog { products, next_id }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// The highest id assigned so far. The next insert uses `next_id() + 1`.
    pub fn next_id(&self) -> ProductId {
        self.next_id
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|product| product.id == id)
    }

    /// Append a new product with the next id.
    ///
    /// Returns `None`, leaving the catalog untouched, once `ProductId::MAX`
    /// has been handed out.
    pub fn insert(&mut self, fields: NewProduct) -> Option<&Product> {
        let id = self.next_id.checked_add(1)?;
        self.next_id = id;
        let index = self.products.len();
        self.products.push(Product::create(id, fields));
        Some(&self.products[index])
    }

    /// Apply `update` to the product with `id`. Returns `None` if absent.
    pub fn update(&mut self, id: ProductId, update: ProductUpdate) -> Option<&Product> {
        let product = self.products.iter_mut().find(|product| product.id == id)?;
        update.apply(product);
        Some(&*product)
    }

    /// Remove the product with `id`, keeping the order of the rest.
    pub fn remove(&mut self, id: ProductId) -> Option<Product> {
        let index = self.products.iter().position(|product| product.id == id)?;
        Some(self.products.remove(index))
    }
}
