//! # Generic Messages
//!
//! The message types exchanged between a `ResourceClient` and its `ResourceActor`.

use super::entity::ActorEntity;
use super::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the actor to request operations.
///
/// - **Create**: builds an entity from [`ActorEntity::Create`] and stores it under its key.
///   Fails with [`FrameworkError::AlreadyExists`] if the key is taken.
/// - **Get**: returns a snapshot of the entity stored under a key, if any.
/// - **Action**: runs an [`ActorEntity::Action`] against the stored entity in place.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T>,
    },
    Get {
        key: T::Key,
        respond_to: Response<Option<T>>,
    },
    Action {
        key: T::Key,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
}
