//! # System Lifecycle
//!
//! Starts the product actor, hands out clients to the rest of the application and shuts the
//! actor down cleanly.
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop all clients** - Closes the sender side of the channel
//! 2. **Actor detects closure** - `receiver.recv()` returns `None`
//! 3. **Actor logs its final state** and its task completes
//! 4. **Await completion** - [`RegistrySystem::shutdown`] waits for the task
//!
//! Clients cloned into the HTTP router count as well, so the server must have stopped (and
//! dropped its router) before shutdown can complete.
//!
//! ## Observability
//!
//! Tracing is initialised once per process with
//! [`actor_framework::tracing::setup_tracing`].

pub mod registry_system;

pub use registry_system::*;
