use crate::clients::ProductClient;
use thiserror::Error;
use tokio::task::{JoinError, JoinHandle};
use tracing::{error, info};

/// Raised when an actor task ends abnormally.
#[derive(Debug, Error)]
#[error("Actor task failed: {0}")]
pub struct ShutdownError(#[from] JoinError);

/// The runtime orchestrator of the product registry.
///
/// `RegistrySystem` is responsible for:
/// - **Lifecycle Management**: starting and stopping the product actor
/// - **Ownership**: each instance owns an independent product collection, so tests can run
///   as many registries side by side as they like
///
/// # Example
///
/// ```ignore
/// let system = RegistrySystem::new(32);
/// let product = system.product_client.create_product(ProductCreate::new("Widget")).await?;
/// system.shutdown().await?;
/// ```
pub struct RegistrySystem {
    /// Client for interacting with the Product actor
    pub product_client: ProductClient,

    handle: JoinHandle<()>,
}

impl RegistrySystem {
    /// Spawns the product actor and returns a system ready to accept requests.
    ///
    /// Must be called from within a Tokio runtime.
    ///
    /// # Arguments
    /// * `channel_capacity` - Requests that can queue up before callers wait for the actor.
    pub fn new(channel_capacity: usize) -> Self {
        // tokio panics on a zero-capacity channel
        let (product_actor, generic_client) = crate::product_actor::new(channel_capacity.max(1));
        let handle = tokio::spawn(product_actor.run(()));

        Self {
            product_client: ProductClient::new(generic_client),
            handle,
        }
    }

    /// Gracefully shuts down the system.
    ///
    /// Drops this system's client and waits for the actor task. Returns an error if the task
    /// panicked or was cancelled.
    pub async fn shutdown(self) -> Result<(), ShutdownError> {
        info!("Shutting down registry...");

        drop(self.product_client);

        if let Err(e) = self.handle.await {
            error!(error = %e, "Actor task failed");
            return Err(ShutdownError(e));
        }

        info!("Registry shutdown complete.");
        Ok(())
    }
}
