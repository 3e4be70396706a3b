//! Request bodies.
//!
//! Every field is optional so that presence is checked by the handler and reported with
//! its own message rather than as a decoder error. Unknown fields are ignored.

use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use axum::http::{header, HeaderMap};
use axum::Json;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use super::ApiError;

#[derive(Debug, Default, Deserialize)]
pub struct CreateUserBody {
    pub name: Option<String>,
    pub username: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct CreateTechnologyBody {
    pub title: Option<String>,
    pub deadline: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateTechnologyBody {
    pub title: Option<String>,
    pub deadline: Option<String>,
}

/// A JSON request body. A request without a JSON content type, or with an empty body,
/// counts as an empty object; anything else that does not decode is a malformed body.
#[derive(Debug)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Default,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, ApiError> {
        let is_json = has_json_content_type(req.headers());
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::MalformedBody(rejection.body_text()))?;
        decode(is_json, &bytes).map(JsonBody)
    }
}

fn has_json_content_type(headers: &HeaderMap) -> bool {
    let Some(Ok(content_type)) = headers.get(header::CONTENT_TYPE).map(|v| v.to_str()) else {
        return false;
    };
    let essence = content_type.split(';').next().unwrap_or_default().trim();
    essence.eq_ignore_ascii_case("application/json")
        || essence
            .rsplit_once('+')
            .is_some_and(|(kind, suffix)| {
                kind.starts_with("application/") && suffix.eq_ignore_ascii_case("json")
            })
}

fn decode<T: DeserializeOwned + Default>(is_json: bool, bytes: &[u8]) -> Result<T, ApiError> {
    if !is_json || bytes.is_empty() {
        return Ok(T::default());
    }
    Json::<T>::from_bytes(bytes)
        .map(|Json(value)| value)
        .map_err(|rejection| ApiError::MalformedBody(rejection.body_text()))
}

/// A field counts as supplied only when it is non-empty.
pub fn present(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.is_empty())
}
