//! Custom actions for the User actor.
//!
//! A user's technologies live inside the [`User`](crate::model::User) entity, so every
//! technology operation is an action on the owning user. These actions are handled by
//! [`ActorEntity::handle_action`](crate::framework::ActorEntity::handle_action).

use crate::model::{Technology, TechnologyCreate, TechnologyId, TechnologyUpdate};

/// Technology operations on a user.
#[derive(Debug, Clone)]
pub enum UserAction {
    /// Appends a new technology, stamped with the actor clock.
    AddTechnology(TechnologyCreate),
    /// Edits title and/or deadline of an existing technology.
    UpdateTechnology {
        id: TechnologyId,
        update: TechnologyUpdate,
    },
    /// Sets `studied`. Idempotent.
    MarkStudied(TechnologyId),
    /// Removes a technology.
    RemoveTechnology(TechnologyId),
}

/// Results from UserActions - variants match 1:1 with UserAction
#[derive(Debug, Clone)]
pub enum UserActionResult {
    /// The technology as stored.
    AddTechnology(Technology),
    /// The technology after the update.
    UpdateTechnology(Technology),
    /// The technology after marking it studied.
    MarkStudied(Technology),
    /// The technologies that remain, in order.
    RemoveTechnology(Vec<Technology>),
}
