//! # ActorEntity Trait
//!
//! The `ActorEntity` trait defines the contract a resource must implement to be managed by the
//! generic `ResourceActor`. It specifies associated types for IDs, creation DTOs, context and
//! errors, and provides lifecycle hooks (`on_create`, `on_delete`). Implementing this trait gives
//! any domain model a uniform Create / List / Get / Delete API.
//!
//! # Identity
//! Entities carry their own identifier and expose it through [`ActorEntity::id`]. The actor never
//! keys its store by ID; it keeps entities in insertion order and matches on `id()` when looking
//! them up, so ID assignment policy stays entirely in the hands of the resource (see
//! [`IdAllocator`](crate::actor::IdAllocator)).
//!
//! # Provided Methods (Hooks)
//! - [`ActorEntity::on_create`]
//! - [`ActorEntity::on_delete`]
//!
//! You do **not** need to implement these unless you want to customize behavior.
//! The default implementation does nothing (`Ok(())`).

use async_trait::async_trait;
use std::fmt::{Debug, Display};

/// Trait that any resource entity must implement to be managed by ResourceActor.
///
/// # Async & Context
/// This trait is `#[async_trait]` to allow asynchronous operations in hooks.
/// It also defines a `Context` type, which is injected into every hook. This allows "Late Binding"
/// of dependencies (passing them to `run()` instead of `new()`).
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The unique identifier for this entity (e.g., a `u64` newtype).
    type Id: Eq + Clone + Send + Sync + Display + Debug;

    /// The data required to create a new instance (DTO - Data Transfer Object).
    type Create: Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// The error type for this entity.
    ///
    /// One enum per entity covers every failure its hooks can produce. The framework boxes it
    /// into [`FrameworkError::EntityError`](crate::FrameworkError::EntityError), and clients can
    /// downcast it back.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Returns the identifier of this entity.
    fn id(&self) -> &Self::Id;

    /// Construct the full Entity from the ID and Payload.
    ///
    /// This is where payload validation belongs. Returning an error leaves the store untouched.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    // --- Lifecycle Hooks (Async) ---

    /// Called after the entity is constructed and before it is stored.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called immediately before the entity is removed from the store.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }
}
