//! Walks a fresh catalog through add, update and delete, printing each step.
//!
//! The catalog file comes from `CATALOG_PATH` (default `products.json`).

use product_catalog::{CatalogConfig, NewProduct, Product, ProductStore, ProductUpdate};
use tracing_subscriber::fmt::SubscriberBuilder;

fn print_products(products: &[Product]) {
    match serde_json::to_string_pretty(products) {
        Ok(json) => println!("{}", json),
        Err(err) => eprintln!("unable to render products: {}", err),
    }
}

fn print_product(product: &Product) {
    print_products(std::slice::from_ref(product));
}

fn main() {
    let _ = SubscriberBuilder::default()
        .with_max_level(tracing::Level::INFO)
        .try_init();

    let config = CatalogConfig::from_env();
    tracing::info!(path = %config.path.display(), "opening catalog");
    let mut store = ProductStore::from_config(&config);

    println!("Products in the catalog:");
    print_products(store.products());

    println!("Adding a product:");
    let product = match store.add(NewProduct::new(
        "producto prueba",
        "Este es un producto prueba",
        200.0,
        "Sin imagen",
        "abc123",
        25,
    )) {
        Ok(product) => product,
        Err(err) => {
            eprintln!("{}", err);
            return;
        }
    };
    print_product(&product);

    println!("Products after adding:");
    print_products(store.products());

    println!("Looking the product up by id:");
    match store.get_by_id(product.id) {
        Ok(found) => print_product(found),
        Err(err) => eprintln!("{}", err),
    }

    println!("Updating the price:");
    match store.update(product.id, ProductUpdate::new().with_price(250.0)) {
        Ok(updated) => print_product(&updated),
        Err(err) => eprintln!("{}", err),
    }

    println!("Deleting the product:");
    if let Err(err) = store.delete(product.id) {
        eprintln!("{}", err);
    }
    print_products(store.products());

    println!("Looking up the deleted product:");
    match store.get_by_id(product.id) {
        Ok(found) => print_product(found),
        Err(err) => println!("{}", err),
    }

    if store.has_unsaved_changes() {
        tracing::warn!(path = %config.path.display(), "catalog changes were not saved");
    }
}
