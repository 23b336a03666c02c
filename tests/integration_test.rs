use product_registry::clients::ActorClient;
use product_registry::lifecycle::RegistrySystem;
use product_registry::model::{ProductCreate, ProductId};
use product_registry::product_actor::ProductError;

/// Full end-to-end test against a real product actor.
#[tokio::test]
async fn test_full_registry_integration() {
    let system = RegistrySystem::new(32);
    let client = system.product_client.clone();

    assert!(client.list().await.unwrap().is_empty());

    let widget = client
        .create_product(ProductCreate::new("Widget"))
        .await
        .expect("Failed to create product");
    let gadget = client
        .create_product(ProductCreate::new("Gadget"))
        .await
        .expect("Failed to create product");
    assert_eq!(widget.id, ProductId(1));
    assert_eq!(gadget.id, ProductId(2));

    let fetched = client
        .get(ProductId(2))
        .await
        .expect("Failed to get product")
        .expect("Product not found");
    assert_eq!(fetched, gadget);

    client.delete(ProductId(1)).await.expect("Failed to delete");
    assert!(client.get(ProductId(1)).await.unwrap().is_none());

    let remaining = client.list().await.unwrap();
    assert_eq!(remaining, vec![gadget]);

    drop(client);
    system.shutdown().await.expect("Failed to shutdown system");
}

/// Deleting the newest product frees its ID for the next create.
#[tokio::test]
async fn test_highest_id_is_reissued_after_delete() {
    let system = RegistrySystem::new(8);
    let client = system.product_client.clone();

    for name in ["A", "B", "C"] {
        client.create_product(ProductCreate::new(name)).await.unwrap();
    }

    client.delete(ProductId(3)).await.unwrap();
    let d = client.create_product(ProductCreate::new("D")).await.unwrap();
    assert_eq!(d.id, ProductId(3));

    // A gap below the maximum is never filled.
    client.delete(ProductId(2)).await.unwrap();
    let e = client.create_product(ProductCreate::new("E")).await.unwrap();
    assert_eq!(e.id, ProductId(4));

    let names: Vec<String> = client.list().await.unwrap().into_iter().map(|p| p.name).collect();
    assert_eq!(names, vec!["A", "D", "E"]);

    drop(client);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_empty_registry_starts_over_at_one() {
    let system = RegistrySystem::new(8);
    let client = system.product_client.clone();

    let first = client.create_product(ProductCreate::new("A")).await.unwrap();
    client.delete(first.id).await.unwrap();
    let again = client.create_product(ProductCreate::new("B")).await.unwrap();
    assert_eq!(again.id, ProductId(1));

    drop(client);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_invalid_create_and_missing_delete() {
    let system = RegistrySystem::new(8);
    let client = system.product_client.clone();

    let result = client.create_product(ProductCreate::new("")).await;
    assert_eq!(result, Err(ProductError::MissingName));
    assert!(client.list().await.unwrap().is_empty());

    let result = client.delete(ProductId(42)).await;
    assert!(matches!(result, Err(ProductError::NotFound(id)) if id == "42"));

    drop(client);
    system.shutdown().await.unwrap();
}

/// Concurrent creates are serialized by the actor, so every product gets its own ID.
#[tokio::test]
async fn test_concurrent_creates() {
    let system = RegistrySystem::new(4);

    let mut handles = vec![];
    for i in 0..25 {
        let client = system.product_client.clone();
        handles.push(tokio::spawn(async move {
            client
                .create_product(ProductCreate::new(format!("Product {}", i)))
                .await
        }));
    }

    let mut ids = vec![];
    for handle in handles {
        ids.push(handle.await.unwrap().unwrap().id.0);
    }
    ids.sort_unstable();
    assert_eq!(ids, (1..=25).collect::<Vec<u64>>());

    let listed = system.product_client.list().await.unwrap();
    assert_eq!(listed.len(), 25);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_independent_registries() {
    let first = RegistrySystem::new(8);
    let second = RegistrySystem::new(8);

    first
        .product_client
        .create_product(ProductCreate::new("Only here"))
        .await
        .unwrap();

    assert_eq!(first.product_client.list().await.unwrap().len(), 1);
    assert!(second.product_client.list().await.unwrap().is_empty());

    first.shutdown().await.unwrap();
    second.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_zero_channel_capacity_is_usable() {
    let system = RegistrySystem::new(0);
    let product = system
        .product_client
        .create_product(ProductCreate::new("Widget"))
        .await
        .unwrap();
    assert_eq!(product.id, ProductId(1));
    system.shutdown().await.unwrap();
}
