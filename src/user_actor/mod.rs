//! # User Actor
//!
//! The Store: one actor owning every [`User`] and, nested inside each user, that user's
//! technologies.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](crate::framework::ActorEntity) implementation for [`User`]
//! - [`actions`] - [`UserAction`] / [`UserActionResult`] for technology operations
//! - [`error`] - [`UserError`] type for type-safe error handling
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust,ignore
//! let (actor, client) = user_actor::new(32);
//! tokio::spawn(actor.run(Arc::new(mockable::DefaultClock)));
//!
//! let user = client.create_user(UserCreate { name: "Alice".into(), username: "alice".into() }).await?;
//! ```

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use entity::UserContext;
pub use error::*;

use crate::clients::UserClient;
use crate::framework::ResourceActor;
use crate::model::User;

/// Creates a new User actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<User>, UserClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    let client = UserClient::new(generic_client);

    (actor, client)
}
