//! # User Client
//!
//! The high-level API over the Store actor. It wraps a `ResourceClient<User>` and turns
//! framework errors back into [`UserError`]s.

use crate::clients::actor_client::ActorClient;
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::{
    Technology, TechnologyCreate, TechnologyId, TechnologyUpdate, User, UserCreate, Username,
};
use crate::user_actor::{UserAction, UserActionResult, UserError};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the User actor.
#[derive(Clone)]
pub struct UserClient {
    inner: ResourceClient<User>,
}

impl UserClient {
    pub fn new(inner: ResourceClient<User>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<User> for UserClient {
    type Error = UserError;

    fn inner(&self) -> &ResourceClient<User> {
        &self.inner
    }

    /// Missing and duplicate keys become their domain meaning; entity errors are
    /// unboxed back into the `UserError` the actor raised.
    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(username) => UserError::NotFound(username),
            FrameworkError::AlreadyExists(username) => UserError::AlreadyExists(username),
            FrameworkError::EntityError(inner) => match inner.downcast::<UserError>() {
                Ok(err) => *err,
                Err(other) => UserError::ActorCommunicationError(other.to_string()),
            },
            other => UserError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl UserClient {
    #[instrument(skip(self))]
    pub async fn create_user(&self, params: UserCreate) -> Result<User, UserError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Looks a user up by username. `Ok(None)` means no such user.
    #[instrument(skip(self))]
    pub async fn find_by_username(&self, username: &Username) -> Result<Option<User>, UserError> {
        self.get(username.clone()).await
    }

    #[instrument(skip(self))]
    pub async fn add_technology(
        &self,
        username: Username,
        params: TechnologyCreate,
    ) -> Result<Technology, UserError> {
        debug!("Sending request");
        match self
            .inner
            .perform_action(username, UserAction::AddTechnology(params))
            .await
        {
            Ok(UserActionResult::AddTechnology(technology)) => Ok(technology),
            Ok(_) => unreachable!("AddTechnology action must return AddTechnology result"),
            Err(e) => Err(Self::map_error(e)),
        }
    }

    #[instrument(skip(self))]
    pub async fn update_technology(
        &self,
        username: Username,
        id: TechnologyId,
        update: TechnologyUpdate,
    ) -> Result<Technology, UserError> {
        debug!("Sending request");
        match self
            .inner
            .perform_action(username, UserAction::UpdateTechnology { id, update })
            .await
        {
            Ok(UserActionResult::UpdateTechnology(technology)) => Ok(technology),
            Ok(_) => unreachable!("UpdateTechnology action must return UpdateTechnology result"),
            Err(e) => Err(Self::map_error(e)),
        }
    }

    #[instrument(skip(self))]
    pub async fn mark_studied(
        &self,
        username: Username,
        id: TechnologyId,
    ) -> Result<Technology, UserError> {
        debug!("Sending request");
        match self
            .inner
            .perform_action(username, UserAction::MarkStudied(id))
            .await
        {
            Ok(UserActionResult::MarkStudied(technology)) => Ok(technology),
            Ok(_) => unreachable!("MarkStudied action must return MarkStudied result"),
            Err(e) => Err(Self::map_error(e)),
        }
    }

    /// Removes a technology and returns the user's remaining list.
    #[instrument(skip(self))]
    pub async fn remove_technology(
        &self,
        username: Username,
        id: TechnologyId,
    ) -> Result<Vec<Technology>, UserError> {
        debug!("Sending request");
        match self
            .inner
            .perform_action(username, UserAction::RemoveTechnology(id))
            .await
        {
            Ok(UserActionResult::RemoveTechnology(remaining)) => Ok(remaining),
            Ok(_) => unreachable!("RemoveTechnology action must return RemoveTechnology result"),
            Err(e) => Err(Self::map_error(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::{create_mock_client, expect_action, MockClient};
    use crate::model::Deadline;

    #[tokio::test]
    async fn test_duplicate_username_maps_to_already_exists() {
        let mut mock = MockClient::<User>::new();
        mock.expect_create()
            .return_err(FrameworkError::AlreadyExists("alice".to_string()));
        let users = UserClient::new(mock.client());

        let err = users
            .create_user(UserCreate {
                name: "Bob".to_string(),
                username: Username::from("alice"),
            })
            .await
            .unwrap_err();

        assert_eq!(err, UserError::AlreadyExists("alice".to_string()));
        mock.verify();
    }

    #[tokio::test]
    async fn test_entity_error_is_unboxed() {
        let ghost = TechnologyId::new();
        let mut mock = MockClient::<User>::new();
        mock.expect_action(Username::from("alice"))
            .return_err(FrameworkError::EntityError(Box::new(
                UserError::TechnologyNotFound(ghost.to_string()),
            )));
        let users = UserClient::new(mock.client());

        let err = users
            .mark_studied(Username::from("alice"), ghost)
            .await
            .unwrap_err();

        assert_eq!(err, UserError::TechnologyNotFound(ghost.to_string()));
        mock.verify();
    }

    #[tokio::test]
    async fn test_closed_actor_is_a_communication_error() {
        let mut mock = MockClient::<User>::new();
        mock.expect_get(Username::from("alice"))
            .return_err(FrameworkError::ActorClosed);
        let users = UserClient::new(mock.client());

        let err = users
            .find_by_username(&Username::from("alice"))
            .await
            .unwrap_err();

        assert!(matches!(err, UserError::ActorCommunicationError(_)));
    }

    #[tokio::test]
    async fn test_add_technology_sends_payload_to_owner() {
        let (client, mut receiver) = create_mock_client::<User>(10);
        let users = UserClient::new(client);

        let task = tokio::spawn(async move {
            users
                .add_technology(
                    Username::from("alice"),
                    TechnologyCreate {
                        title: "Go".to_string(),
                        deadline: Deadline::parse("2025-01-01"),
                    },
                )
                .await
        });

        let (key, action, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        assert_eq!(key, Username::from("alice"));
        let UserAction::AddTechnology(params) = action else {
            panic!("expected AddTechnology");
        };
        assert_eq!(params.title, "Go");

        let stored = Technology::new(params, chrono::Utc::now());
        responder
            .send(Ok(UserActionResult::AddTechnology(stored.clone())))
            .unwrap();

        assert_eq!(task.await.unwrap().unwrap(), stored);
    }
}
