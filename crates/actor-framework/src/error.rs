//! # Framework Errors
//!
//! Common error types shared by every actor and client built on this crate.

/// Errors that can occur within the actor framework itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}

impl FrameworkError {
    /// Wraps an entity error raised by one of the [`ActorEntity`](crate::ActorEntity) hooks.
    pub fn entity<E: std::error::Error + Send + Sync + 'static>(error: E) -> Self {
        FrameworkError::EntityError(Box::new(error))
    }
}
