//! ActorEntity trait implementation for the User domain type.
//!
//! Users are keyed by [`Username`], which makes the username-uniqueness check part of
//! the actor's `Create` handling. Technology operations arrive as [`UserAction`]s.

use async_trait::async_trait;
use mockable::Clock;
use std::sync::Arc;

use super::actions::{UserAction, UserActionResult};
use super::error::UserError;
use crate::framework::ActorEntity;
use crate::model::{Technology, TechnologyId, User, UserCreate, Username};

/// Dependencies injected into the User actor: the clock that stamps `created_at`.
pub type UserContext = Arc<dyn Clock + Send + Sync>;

fn technology_not_found(id: TechnologyId) -> UserError {
    UserError::TechnologyNotFound(id.to_string())
}

#[async_trait]
impl ActorEntity for User {
    type Key = Username;
    type Create = UserCreate;
    type Action = UserAction;
    type ActionResult = UserActionResult;
    type Context = UserContext;
    type Error = UserError;

    fn from_create_params(params: UserCreate) -> Result<Self, UserError> {
        if params.name.is_empty() || params.username.is_empty() {
            return Err(UserError::ValidationError(
                "name and username must not be empty".to_string(),
            ));
        }
        Ok(Self::new(params.name, params.username))
    }

    fn key(&self) -> Username {
        self.username.clone()
    }

    /// # Actions
    /// - `AddTechnology`: appends, preserving the order of existing entries
    /// - `UpdateTechnology`: replaces supplied fields only
    /// - `MarkStudied`: sets `studied = true`
    /// - `RemoveTechnology`: removes one entry, returns the rest
    ///
    /// Unknown technology ids fail with `TechnologyNotFound` and change nothing.
    async fn handle_action(
        &mut self,
        action: UserAction,
        clock: &UserContext,
    ) -> Result<UserActionResult, UserError> {
        match action {
            UserAction::AddTechnology(params) => {
                if params.title.is_empty() {
                    return Err(UserError::ValidationError(
                        "title must not be empty".to_string(),
                    ));
                }
                let technology = Technology::new(params, clock.utc());
                self.technologies.push(technology.clone());
                Ok(UserActionResult::AddTechnology(technology))
            }
            UserAction::UpdateTechnology { id, update } => {
                let technology = self
                    .technology_mut(id)
                    .ok_or_else(|| technology_not_found(id))?;
                technology.apply(update);
                Ok(UserActionResult::UpdateTechnology(technology.clone()))
            }
            UserAction::MarkStudied(id) => {
                let technology = self
                    .technology_mut(id)
                    .ok_or_else(|| technology_not_found(id))?;
                technology.mark_studied();
                Ok(UserActionResult::MarkStudied(technology.clone()))
            }
            UserAction::RemoveTechnology(id) => {
                self.remove_technology(id)
                    .ok_or_else(|| technology_not_found(id))?;
                Ok(UserActionResult::RemoveTechnology(self.technologies.clone()))
            }
        }
    }
}
