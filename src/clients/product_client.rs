//! # Product Client
//!
//! Provides a high‑level API for interacting with the `Product` actor.
//! It wraps a `ResourceClient<Product>` and exposes domain‑specific methods; `list`, `get` and
//! `delete` come from [`ActorClient`].
use crate::model::{Product, ProductCreate};
use crate::product_actor::ProductError;
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Product actor.
#[derive(Clone)]
pub struct ProductClient {
    inner: ResourceClient<Product>,
}

impl ProductClient {
    pub fn new(inner: ResourceClient<Product>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Product> for ProductClient {
    type Error = ProductError;

    fn inner(&self) -> &ResourceClient<Product> {
        &self.inner
    }

    /// Validation failures travel through the actor boxed as `EntityError`; unwrap them back
    /// into the `ProductError` they started as.
    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => ProductError::NotFound(id),
            FrameworkError::EntityError(inner) => match inner.downcast::<ProductError>() {
                Ok(product_error) => *product_error,
                Err(other) => ProductError::ActorCommunicationError(other.to_string()),
            },
            other => ProductError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl ProductClient {
    /// Create a product; the registry assigns its ID.
    #[instrument(skip(self))]
    pub async fn create_product(&self, params: ProductCreate) -> Result<Product, ProductError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ProductId;
    use actor_framework::mock::{create_mock_client, expect_create, expect_delete, MockClient};

    #[tokio::test]
    async fn test_create_product_returns_stored_product() {
        let (client, mut receiver) = create_mock_client::<Product>(10);
        let product_client = ProductClient::new(client);

        let create_task = tokio::spawn(async move {
            product_client
                .create_product(ProductCreate::new("Widget"))
                .await
        });

        let (params, responder) = expect_create(&mut receiver)
            .await
            .expect("Expected Create request");
        assert_eq!(params.name, "Widget");

        responder
            .send(Ok(Product::new(ProductId(1), "Widget")))
            .unwrap();

        let result = create_task.await.unwrap();
        assert_eq!(result.unwrap(), Product::new(ProductId(1), "Widget"));
    }

    #[tokio::test]
    async fn test_create_product_recovers_validation_error() {
        let (client, mut receiver) = create_mock_client::<Product>(10);
        let product_client = ProductClient::new(client);

        let create_task =
            tokio::spawn(async move { product_client.create_product(ProductCreate::new("")).await });

        let (_, responder) = expect_create(&mut receiver)
            .await
            .expect("Expected Create request");
        responder
            .send(Err(FrameworkError::entity(ProductError::MissingName)))
            .unwrap();

        let result = create_task.await.unwrap();
        assert_eq!(result, Err(ProductError::MissingName));
    }

    #[tokio::test]
    async fn test_delete_missing_maps_to_not_found() {
        let (client, mut receiver) = create_mock_client::<Product>(10);
        let product_client = ProductClient::new(client);

        let delete_task = tokio::spawn(async move { product_client.delete(ProductId(5)).await });

        let (id, responder) = expect_delete(&mut receiver)
            .await
            .expect("Expected Delete request");
        assert_eq!(id, ProductId(5));
        responder
            .send(Err(FrameworkError::NotFound(id.to_string())))
            .unwrap();

        let result = delete_task.await.unwrap();
        assert_eq!(result, Err(ProductError::NotFound("5".to_string())));
    }

    #[tokio::test]
    async fn test_foreign_entity_error_becomes_communication_error() {
        let mut mock = MockClient::<Product>::new();
        mock.expect_create()
            .return_err(FrameworkError::entity(std::io::Error::other("disk on fire")));
        let product_client = ProductClient::new(mock.client());

        let result = product_client
            .create_product(ProductCreate::new("Widget"))
            .await;
        match result {
            Err(ProductError::ActorCommunicationError(msg)) => assert!(msg.contains("disk on fire")),
            other => panic!("Expected ActorCommunicationError, got {:?}", other),
        }
        mock.verify();
    }

    #[tokio::test]
    async fn test_closed_actor_is_communication_error() {
        let (client, receiver) = create_mock_client::<Product>(10);
        drop(receiver);
        let product_client = ProductClient::new(client);

        let result = product_client.list().await;
        assert!(matches!(
            result,
            Err(ProductError::ActorCommunicationError(_))
        ));
    }
}
