//! Entity trait implementation for the Product domain type.
//!
//! This module contains the [`ActorEntity`] implementation that enables [`Product`] to be
//! managed by the generic [`actor_framework::ResourceActor`]. Validation of the create payload
//! lives here, so a rejected product never reaches the store.

use super::error::ProductError;
use crate::model::{Product, ProductCreate, ProductId};
use actor_framework::ActorEntity;
use async_trait::async_trait;

#[async_trait]
impl ActorEntity for Product {
    type Id = ProductId;
    type Create = ProductCreate;
    type Context = ();
    type Error = ProductError;

    fn id(&self) -> &ProductId {
        &self.id
    }

    /// Creates a new Product from creation parameters.
    ///
    /// # Errors
    /// [`ProductError::MissingName`] when the name is empty.
    fn from_create_params(id: ProductId, params: ProductCreate) -> Result<Self, ProductError> {
        if params.name.is_empty() {
            return Err(ProductError::MissingName);
        }
        Ok(Self::new(id, params.name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_name_is_rejected() {
        let result = Product::from_create_params(ProductId(1), ProductCreate::new(""));
        assert_eq!(result, Err(ProductError::MissingName));
    }

    #[test]
    fn test_whitespace_name_is_accepted() {
        let product = Product::from_create_params(ProductId(1), ProductCreate::new(" ")).unwrap();
        assert_eq!(product.name, " ");
    }

    #[test]
    fn test_id_is_taken_from_allocator() {
        let product = Product::from_create_params(ProductId(9), ProductCreate::new("Bolt")).unwrap();
        assert_eq!(product.id(), &ProductId(9));
    }
}
