//! HTTP error responses.
//!
//! Every failure leaves the handler as an [`ApiError`] and reaches the client as
//! `{"error": "<message>"}` with the matching status code.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;
use tracing::error;

use crate::user_actor::UserError;

#[derive(Debug, Error, PartialEq)]
pub enum ApiError {
    /// A required body field is missing or empty.
    #[error("{0}")]
    Validation(String),

    #[error("Username already exists")]
    DuplicateUsername,

    /// The `username` header is absent, empty, repeated or unreadable.
    #[error("Username header is required")]
    MissingHeader,

    #[error("User not exists")]
    UnknownUser,

    #[error("Technology not found")]
    NotFound,

    /// The body claims to be JSON but does not decode.
    #[error("{0}")]
    MalformedBody(String),

    /// Only raised when strict deadline checking is on.
    #[error("Invalid deadline")]
    InvalidDeadline,

    /// The detail is logged, never sent.
    #[error("Internal server error")]
    Internal(String),
}

impl ApiError {
    pub fn validation(message: &str) -> Self {
        Self::Validation(message.to_string())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_)
            | Self::DuplicateUsername
            | Self::MissingHeader
            | Self::MalformedBody(_)
            | Self::InvalidDeadline => StatusCode::BAD_REQUEST,
            Self::UnknownUser | Self::NotFound => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<UserError> for ApiError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::NotFound(_) => Self::UnknownUser,
            UserError::AlreadyExists(_) => Self::DuplicateUsername,
            UserError::TechnologyNotFound(_) => Self::NotFound,
            UserError::ValidationError(detail) => Self::Validation(detail),
            UserError::ActorCommunicationError(detail) => Self::Internal(detail),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let Self::Internal(detail) = &self {
            error!(%detail, "Request failed");
        }
        let status = self.status();
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
