//! # Generic Actor Server
//!
//! The `ResourceActor` owns the store for one entity type and processes requests one at a
//! time, so the store needs no lock even on a multi-threaded runtime.

use super::client::ResourceClient;
use super::entity::ActorEntity;
use super::error::FrameworkError;
use super::message::ResourceRequest;
use std::collections::HashMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that manages a collection of entities.
///
/// This struct is the "server" half of the actor. It owns the state (`store`) and the
/// receiver end of the channel. Each request runs to completion before the next one is
/// received, which is what makes "check the key is free, then insert" atomic.
///
/// # Usage Pattern
///
/// 1. **Create**: `ResourceActor::new()` returns the actor and its client.
/// 2. **Wire**: pass dependencies into `actor.run(context)`.
/// 3. **Run**: spawn the run loop in a background task.
///
/// ```rust,ignore
/// let (actor, client) = ResourceActor::<User>::new(32);
/// tokio::spawn(actor.run(Arc::new(DefaultClock)));
/// let user = client.create(params).await?;
/// ```
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: HashMap<T::Key, T>,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// `buffer_size` is the capacity of the mailbox. When it is full, client calls wait
    /// for space.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: HashMap::new(),
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop, processing messages until every client is dropped.
    pub async fn run(mut self, context: T::Context) {
        // Extract just the type name (e.g., "User" instead of "study_tracker::model::user::User")
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let mut item = match T::from_create_params(params) {
                        Ok(item) => item,
                        Err(e) => {
                            warn!(entity_type, error = %e, "Create failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                            continue;
                        }
                    };

                    let key = item.key();
                    if self.store.contains_key(&key) {
                        warn!(entity_type, %key, "Already exists");
                        let _ = respond_to.send(Err(FrameworkError::AlreadyExists(key.to_string())));
                        continue;
                    }

                    if let Err(e) = item.on_create(&context).await {
                        warn!(entity_type, %key, error = %e, "on_create failed");
                        let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        continue;
                    }

                    self.store.insert(key.clone(), item.clone());
                    info!(entity_type, %key, size = self.store.len(), "Created");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::Get { key, respond_to } => {
                    let item = self.store.get(&key).cloned();
                    let found = item.is_some();
                    debug!(entity_type, %key, found, "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::Action {
                    key,
                    action,
                    respond_to,
                } => {
                    debug!(entity_type, %key, ?action, "Action");
                    if let Some(item) = self.store.get_mut(&key) {
                        let result = item
                            .handle_action(action, &context)
                            .await
                            .map_err(|e| FrameworkError::EntityError(Box::new(e)));
                        match &result {
                            Ok(_) => info!(entity_type, %key, "Action ok"),
                            Err(e) => warn!(entity_type, %key, error = %e, "Action failed"),
                        }
                        let _ = respond_to.send(result);
                    } else {
                        warn!(entity_type, %key, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(key.to_string())));
                    }
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }
}
