use std::sync::Arc;
use tracing::{error, info};

use crate::clients::UserClient;
use crate::user_actor::UserContext;

/// Mailbox capacity used when nothing else is configured.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 32;

/// The running Store: the User actor plus the client handed to request handlers.
///
/// # Example
///
/// ```ignore
/// let system = TrackerSystem::new(DEFAULT_CHANNEL_CAPACITY);
///
/// let alice = system.user_client.create_user(params).await?;
///
/// // Gracefully shut down when done
/// system.shutdown().await?;
/// ```
pub struct TrackerSystem {
    /// Client for interacting with the User actor
    pub user_client: UserClient,

    /// Task handles for all running actors (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl TrackerSystem {
    /// Starts the Store with the system clock.
    pub fn new(channel_capacity: usize) -> Self {
        Self::with_clock(channel_capacity, Arc::new(mockable::DefaultClock))
    }

    /// Starts the Store with an injected clock. Tests pass a fixed clock here.
    pub fn with_clock(channel_capacity: usize, clock: UserContext) -> Self {
        let (user_actor, user_client) = crate::user_actor::new(channel_capacity);
        let user_handle = tokio::spawn(user_actor.run(clock));

        Self {
            user_client,
            handles: vec![user_handle],
        }
    }

    /// Gracefully shuts down the Store.
    ///
    /// Dropping the client closes the mailbox once every clone held elsewhere (e.g. by
    /// the HTTP router) is gone too; the actor then drains and exits.
    ///
    /// # Returns
    ///
    /// - `Ok(())` if all actors shut down cleanly
    /// - `Err(JoinError)` if an actor task panicked
    pub async fn shutdown(self) -> Result<(), tokio::task::JoinError> {
        info!("Shutting down system...");

        drop(self.user_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(e);
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
