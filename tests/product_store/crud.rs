use product_catalog::{CatalogError, InMemoryStorage, ProductId, ProductStore, ProductUpdate};

use crate::support::{named, sample};

#[test]
fn ids_are_unique_and_increase_from_one() {
    let mut store = ProductStore::with_storage(InMemoryStorage::new());
    let ids: Vec<ProductId> = (0..10)
        .map(|i| store.add(named(&format!("item-{}", i), i)).unwrap().id)
        .collect();

    assert_eq!(ids, (1..=10).collect::<Vec<_>>());
    assert_eq!(store.next_id(), 10);
}

#[test]
fn list_keeps_insertion_order() {
    let mut store = ProductStore::with_storage(InMemoryStorage::new());
    for title in ["pen", "ink", "paper"] {
        store.add(named(title, 1)).unwrap();
    }

    let titles: Vec<String> = store.list().into_iter().map(|p| p.title).collect();
    assert_eq!(titles, vec!["pen", "ink", "paper"]);
}

#[test]
fn update_overwrites_only_given_fields() {
    let mut store = ProductStore::with_storage(InMemoryStorage::new());
    let original = store.add(sample()).unwrap();

    let updated = store
        .update(
            original.id,
            ProductUpdate::new()
                .with_title("renamed")
                .with_stock(3),
        )
        .unwrap();

    assert_eq!(updated.id, original.id);
    assert_eq!(updated.title, "renamed");
    assert_eq!(updated.stock, 3);
    assert_eq!(updated.description, original.description);
    assert_eq!(updated.price, original.price);
    assert_eq!(updated.thumbnail, original.thumbnail);
    assert_eq!(updated.code, original.code);
    assert_eq!(store.get_by_id(original.id).unwrap(), &updated);
}

#[test]
fn update_payload_with_id_keeps_target_id() {
    let mut store = ProductStore::with_storage(InMemoryStorage::new());
    store.add(sample()).unwrap();
    store.add(named("other", 1)).unwrap();

    let update: ProductUpdate = serde_json::from_str(r#"{"id":2,"price":99.5}"#).unwrap();
    let updated = store.update(1, update).unwrap();

    assert_eq!(updated.id, 1);
    assert_eq!(updated.price, 99.5);
    assert_eq!(store.get_by_id(2).unwrap().title, "other");
    assert_eq!(store.len(), 2);
}

#[test]
fn missing_id_fails_and_leaves_catalog_unchanged() {
    let storage = InMemoryStorage::new();
    let mut store = ProductStore::with_storage(storage.clone());
    store.add(sample()).unwrap();
    store.add(named("second", 2)).unwrap();
    let before = store.list();

    assert!(matches!(
        store.get_by_id(42),
        Err(CatalogError::NotFound { id: 42 })
    ));
    assert!(matches!(
        store.update(42, ProductUpdate::new().with_price(1.0)),
        Err(CatalogError::NotFound { id: 42 })
    ));
    assert!(matches!(
        store.delete(42),
        Err(CatalogError::NotFound { id: 42 })
    ));

    assert_eq!(store.list(), before);
    assert_eq!(storage.stored().unwrap(), before);
}

#[test]
fn delete_removes_only_target_and_keeps_order() {
    let mut store = ProductStore::with_storage(InMemoryStorage::new());
    for title in ["a", "b", "c"] {
        store.add(named(title, 1)).unwrap();
    }

    store.delete(2).unwrap();

    assert!(matches!(
        store.get_by_id(2),
        Err(CatalogError::NotFound { id: 2 })
    ));
    let ids: Vec<ProductId> = store.list().iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![1, 3]);
    assert!(matches!(store.delete(2), Err(CatalogError::NotFound { id: 2 })));
}

#[test]
fn deleting_the_newest_product_does_not_reuse_its_id() {
    let mut store = ProductStore::with_storage(InMemoryStorage::new());
    store.add(named("a", 1)).unwrap();
    let last = store.add(named("b", 1)).unwrap();
    store.delete(last.id).unwrap();

    assert_eq!(store.add(named("c", 1)).unwrap().id, 3);
}
