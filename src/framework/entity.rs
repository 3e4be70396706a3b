//! # ActorEntity Trait
//!
//! The contract every resource must satisfy to be owned by a [`ResourceActor`](super::ResourceActor).
//!
//! An entity names its own store key ([`ActorEntity::key`]), builds itself from a creation
//! payload, and handles resource-specific [`Action`](ActorEntity::Action)s against its own
//! state. The actor supplies the plumbing: channels, sequencing, key uniqueness and logging.

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any resource entity must implement to be managed by `ResourceActor`.
///
/// # Keys
/// The store is keyed by [`ActorEntity::Key`], which the entity derives from its own state.
/// For a `User` that is the username, so lookup by username and the uniqueness check on
/// creation are both a single map operation inside the actor.
///
/// # Async & Context
/// Hooks are `#[async_trait]` so they can await other actors. The `Context` type is injected
/// into every hook at `run()` time ("late binding"), e.g. a clock or another client.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The lookup key for this entity. Must be unique across the store.
    type Key: Eq + Hash + Clone + Send + Sync + Display + Debug;

    /// The data required to create a new instance.
    type Create: Send + Sync + Debug;

    /// Enum representing resource-specific operations.
    type Action: Send + Sync + Debug;

    /// The result type returned by custom actions.
    type ActionResult: Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// The error type for this entity.
    ///
    /// One enum covers every hook and action of the entity, so clients match on a single
    /// error type.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Construct the full entity from its creation payload.
    /// Called synchronously before `on_create`; nothing is stored if it fails.
    fn from_create_params(params: Self::Create) -> Result<Self, Self::Error>;

    /// The store key of this entity.
    fn key(&self) -> Self::Key;

    /// Called after the entity is built and its key is known to be free,
    /// right before it is inserted.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Handle a custom resource-specific action.
    ///
    /// Implementations must validate before mutating: an `Err` is expected to leave the
    /// entity exactly as it was.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}
