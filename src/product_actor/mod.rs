//! # Product Actor
//!
//! This module implements the Product resource actor: the single owner of the product
//! collection.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](actor_framework::ActorEntity) implementation for [`Product`]
//! - [`error`] - [`ProductError`] type for type-safe error handling
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## ID policy
//!
//! IDs are not drawn from a counter. Each create scans the products currently stored and
//! takes the highest ID plus one (1 for an empty registry). Deleting the highest product and
//! creating another therefore reissues that ID; deleting any other product does not.
//!
//! ## Usage
//!
//! ```rust
//! use actor_framework::ActorClient;
//! use product_registry::clients::ProductClient;
//! use product_registry::model::ProductCreate;
//! use product_registry::product_actor;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, generic_client) = product_actor::new(32);
//!     let client = ProductClient::new(generic_client);
//!
//!     // Start the actor (no dependencies)
//!     tokio::spawn(actor.run(()));
//!
//!     let product = client.create_product(ProductCreate::new("Widget")).await?;
//!     assert_eq!(product.id.0, 1);
//!     assert_eq!(client.list().await?.len(), 1);
//!     Ok(())
//! }
//! ```

pub mod entity;
pub mod error;

pub use error::*;

use crate::model::{Product, ProductId};
use actor_framework::{ResourceActor, ResourceClient};

/// Returns the ID for the next product: highest current ID plus one.
pub fn next_product_id(products: &[Product]) -> ProductId {
    let max = products.iter().map(|p| p.id.0).max().unwrap_or(0);
    ProductId(max + 1)
}

/// Creates a new Product actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Product>, ResourceClient<Product>) {
    ResourceActor::new(buffer_size, next_product_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn products(ids: &[u64]) -> Vec<Product> {
        ids.iter()
            .map(|&id| Product::new(ProductId(id), format!("p{}", id)))
            .collect()
    }

    #[test]
    fn test_first_id_is_one() {
        assert_eq!(next_product_id(&[]), ProductId(1));
    }

    #[test]
    fn test_next_id_follows_max_not_position() {
        // Insertion order is not sorted by id once products are removed and re-added.
        assert_eq!(next_product_id(&products(&[3, 1])), ProductId(4));
        assert_eq!(next_product_id(&products(&[2])), ProductId(3));
    }
}
