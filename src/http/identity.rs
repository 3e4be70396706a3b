//! Resolves the `username` header to the calling user.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::http::HeaderMap;

use super::{ApiError, AppState};
use crate::clients::UserClient;
use crate::model::{User, Username};

pub const USERNAME_HEADER: &str = "username";

/// The user a request acts for, as stored when the request was resolved.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub user: User,
}

impl CurrentUser {
    pub fn username(&self) -> &Username {
        &self.user.username
    }
}

/// Reads the identity header. It must appear exactly once and hold non-empty UTF-8 text,
/// so any username accepted at registration can be sent back.
pub fn username_from_headers(headers: &HeaderMap) -> Result<Username, ApiError> {
    let mut values = headers.get_all(USERNAME_HEADER).iter();
    let (Some(value), None) = (values.next(), values.next()) else {
        return Err(ApiError::MissingHeader);
    };
    match std::str::from_utf8(value.as_bytes()) {
        Ok(raw) if !raw.is_empty() => Ok(Username::from(raw)),
        _ => Err(ApiError::MissingHeader),
    }
}

pub async fn resolve(users: &UserClient, headers: &HeaderMap) -> Result<CurrentUser, ApiError> {
    let username = username_from_headers(headers)?;
    match users.find_by_username(&username).await? {
        Some(user) => Ok(CurrentUser { user }),
        None => Err(ApiError::UnknownUser),
    }
}

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, ApiError> {
        resolve(&state.users, &parts.headers).await
    }
}
