//! # Generic Messages
//!
//! This module defines the generic message types used for communication between
//! the `ResourceClient` and `ResourceActor`.

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the actor to request operations.
///
/// # Resource-Oriented Architecture
/// Each actor manages one type of resource (the [`ActorEntity`]). Instead of ad-hoc messages for
/// every operation, requests are standardized around the lifecycle of a collection resource:
///
/// - **Create**: Lifecycle start. Uses [`ActorEntity::Create`] to initialize a new resource and
///   replies with the stored entity.
/// - **List**: Retrieval of the whole collection, in insertion order.
/// - **Get**: Retrieval of a single resource by ID.
/// - **Delete**: Lifecycle end. Removes the resource.
///
/// The enum is generic over `T: ActorEntity`, so a payload meant for one resource type can never
/// be sent to another resource's actor.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T>,
    },
    List {
        respond_to: Response<Vec<T>>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<()>,
    },
}
