//! # System Lifecycle
//!
//! Starting and stopping the Store, and installing the tracing subscriber.
//!
//! [`TrackerSystem`] spawns the User actor with its clock injected through
//! `run(context)` and hands out the [`UserClient`](crate::clients::UserClient).
//! Shutdown drops the client; once the HTTP router's clones are gone as well the actor's
//! mailbox closes and the task ends.
//!
//! ```rust,ignore
//! setup_tracing();
//! let system = TrackerSystem::new(config.channel_capacity);
//! // ... serve requests with system.user_client.clone() ...
//! system.shutdown().await?;
//! ```

pub mod tracing;
pub mod tracker_system;

pub use self::tracing::*;
pub use tracker_system::*;
