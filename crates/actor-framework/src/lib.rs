//! # Actor Framework
//!
//! This crate provides the building blocks for type-safe, actor-owned resource collections.
//! It implements a **Resource-Oriented Architecture (ROA)** pattern on top of the
//! **Actor Model**: every resource type gets one actor that exclusively owns an ordered
//! collection of entities and processes requests against it one at a time.
//!
//! ## Why ROA + Actor Model?
//!
//! ### Resource-Oriented Architecture (ROA)
//!
//! - Standard collection operations (Create, List, Get, Delete) on well-defined resources
//! - Predictable lifecycle management
//! - Uniform API surface across all resource types
//!
//! ### Actor Model
//!
//! - Isolated state (no shared memory, no locks)
//! - Message-passing concurrency
//! - Sequential processing within each actor: a mutation is fully applied before the next
//!   request observes the collection
//!
//! **Further Reading**:
//! - [Actor Model (Wikipedia)](https://en.wikipedia.org/wiki/Actor_model)
//! - [Actors in Rust](https://ryhl.io/blog/actors-with-tokio/) - Practical guide to implementing actors with Tokio
//!
//! ## Architecture Overview
//!
//! 1. **Entity Layer** ([`ActorEntity`]) - Your domain model, validation and lifecycle hooks
//! 2. **Runtime Layer** ([`ResourceActor`]) - Message processing, ordered storage, ID allocation
//! 3. **Interface Layer** ([`ResourceClient`], [`ActorClient`]) - Type-safe communication
//!
//! ## Example
//!
//! ```rust
//! use actor_framework::{ActorEntity, ResourceActor};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)]
//! struct User {
//!     id: u32,
//!     name: String,
//! }
//!
//! #[derive(Debug)] struct UserCreate { name: String }
//! #[derive(Debug, thiserror::Error)] #[error("user error")] struct UserError;
//!
//! #[async_trait]
//! impl ActorEntity for User {
//!     type Id = u32;
//!     type Create = UserCreate;
//!     type Context = ();
//!     type Error = UserError;
//!
//!     fn id(&self) -> &u32 { &self.id }
//!
//!     fn from_create_params(id: u32, params: UserCreate) -> Result<Self, Self::Error> {
//!         Ok(Self { id, name: params.name })
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     // IDs continue from the highest ID currently stored.
//!     let (actor, client) = ResourceActor::<User>::new(10, |users: &[User]| {
//!         users.iter().map(|u| u.id).max().unwrap_or(0) + 1
//!     });
//!     tokio::spawn(actor.run(()));
//!
//!     let alice = client.create(UserCreate { name: "Alice".into() }).await.unwrap();
//!     let user = client.get(alice.id).await.unwrap().unwrap();
//!     assert_eq!(user.name, "Alice");
//!     assert_eq!(client.list().await.unwrap().len(), 1);
//! }
//! ```
//!
//! ## Context Injection Pattern
//!
//! Dependencies are injected at **runtime** via the `run()` method, not at construction time.
//! Entities without dependencies use `type Context = ()`.
//!
//! ## Concurrency Model
//!
//! - Each actor runs in its own Tokio task
//! - Messages are processed **sequentially** within an actor (no locks needed)
//! - The actor stops when every client clone has been dropped
//!
//! ## Testing
//!
//! The [`mock`] module provides a `MockClient` that answers requests from queued expectations,
//! plus channel helpers for asserting on raw requests.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod tracing;

// Re-export core types for convenience
pub use actor::{IdAllocator, ResourceActor};
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
