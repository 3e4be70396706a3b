use crate::framework::{ActorEntity, FrameworkError, ResourceClient};
use async_trait::async_trait;

/// Trait for resource-specific clients to inherit standard operations.
///
/// Implementors supply the inner [`ResourceClient`] and an error mapping; `get` comes for
/// free.
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// The resource-specific error type.
    type Error: Send + Sync;

    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Map framework errors to the specific resource error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch an entity by key.
    #[tracing::instrument(skip(self))]
    async fn get(&self, key: T::Key) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(key).await.map_err(Self::map_error)
    }
}
