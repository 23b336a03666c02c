//! # Product Registry
//!
//! > **An in-memory product registry built on resource-oriented actors.**
//!
//! The registry keeps an ordered collection of products in memory and serves four HTTP
//! operations on it: list, create, get by ID and delete by ID. An OpenAPI document describing
//! that surface is generated from the handler annotations.
//!
//! ## 🏗️ Design
//!
//! The collection is owned by a single [`ResourceActor`](actor_framework::ResourceActor) running
//! in its own Tokio task. HTTP handlers never touch it directly: they talk to the actor through a
//! cloneable [`ProductClient`](clients::ProductClient). Because the actor handles one request at a
//! time, a create or delete is fully applied before any other request sees the collection, and
//! there is no lock anywhere.
//!
//! IDs are assigned as *highest current ID plus one*. This is a deliberate policy: deleting the
//! most recent product and creating another reissues its ID. See [`product_actor`].
//!
//! ## 🗺️ Module Tour
//!
//! - [`model`] - [`Product`](model::Product), [`ProductId`](model::ProductId) and the create DTO.
//! - [`product_actor`] - Validation, ID policy and [`ProductError`](product_actor::ProductError).
//! - [`clients`] - [`ProductClient`](clients::ProductClient), the typed interface to the actor.
//! - [`lifecycle`] - [`RegistrySystem`](lifecycle::RegistrySystem): start and graceful shutdown.
//! - [`http`] - axum router, handlers, JSON errors, CORS.
//! - [`openapi`] - The generated API description.
//! - [`config`] - Command line / environment configuration.
//! - [`app`] - Process wiring used by the binary.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! RUST_LOG=info cargo run
//! curl -X POST localhost:8080/products -H 'content-type: application/json' -d '{"name":"Widget"}'
//! curl localhost:8080/products
//! ```

pub mod app;
pub mod clients;
pub mod config;
pub mod http;
pub mod lifecycle;
pub mod model;
pub mod openapi;
pub mod product_actor;
