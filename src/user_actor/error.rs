//! Error types for the User actor.

use thiserror::Error;

/// Errors that can occur during user and technology operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum UserError {
    /// No user is registered under the username.
    #[error("User not found: {0}")]
    NotFound(String),

    /// A user with the same username already exists.
    #[error("User already exists: {0}")]
    AlreadyExists(String),

    /// The user has no technology with this id.
    #[error("Technology not found: {0}")]
    TechnologyNotFound(String),

    /// The data provided is invalid.
    #[error("User validation error: {0}")]
    ValidationError(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
