use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::{json, Value};
use tracing::{info, instrument};

use super::identity::CurrentUser;
use super::payload::{
    present, CreateTechnologyBody, CreateUserBody, JsonBody, UpdateTechnologyBody,
};
use super::{ApiError, AppState};
use crate::model::{Technology, TechnologyCreate, TechnologyId, TechnologyUpdate, User, UserCreate};

type Created<T> = (StatusCode, Json<T>);

fn technology_id(raw: &str) -> Result<TechnologyId, ApiError> {
    TechnologyId::parse(raw).ok_or(ApiError::NotFound)
}

pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

#[instrument(skip_all)]
pub async fn create_user(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<CreateUserBody>,
) -> Result<Created<User>, ApiError> {
    let (Some(name), Some(username)) = (present(body.name), present(body.username)) else {
        return Err(ApiError::validation("Name and username are required"));
    };

    let user = state
        .users
        .create_user(UserCreate {
            name,
            username: username.into(),
        })
        .await?;

    info!(username = %user.username, "User registered");
    Ok((StatusCode::CREATED, Json(user)))
}

#[instrument(skip_all, fields(username = %current.username()))]
pub async fn list_technologies(current: CurrentUser) -> Json<Vec<Technology>> {
    Json(current.user.technologies)
}

#[instrument(skip_all, fields(username = %current.username()))]
pub async fn create_technology(
    State(state): State<AppState>,
    current: CurrentUser,
    JsonBody(body): JsonBody<CreateTechnologyBody>,
) -> Result<Created<Technology>, ApiError> {
    let (Some(title), Some(deadline)) = (present(body.title), present(body.deadline)) else {
        return Err(ApiError::validation("Title and deadline are required"));
    };
    let deadline = state.parse_deadline(&deadline)?;

    let technology = state
        .users
        .add_technology(
            current.user.username,
            TechnologyCreate { title, deadline },
        )
        .await?;

    Ok((StatusCode::CREATED, Json(technology)))
}

#[instrument(skip_all, fields(username = %current.username(), id = %id))]
pub async fn update_technology(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(id): Path<String>,
    JsonBody(body): JsonBody<UpdateTechnologyBody>,
) -> Result<Json<Technology>, ApiError> {
    let update = TechnologyUpdate {
        title: present(body.title),
        deadline: present(body.deadline)
            .map(|raw| state.parse_deadline(&raw))
            .transpose()?,
    };
    let id = technology_id(&id)?;

    let technology = state
        .users
        .update_technology(current.user.username, id, update)
        .await?;

    Ok(Json(technology))
}

#[instrument(skip_all, fields(username = %current.username(), id = %id))]
pub async fn mark_studied(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(id): Path<String>,
) -> Result<Json<Technology>, ApiError> {
    let id = technology_id(&id)?;
    let technology = state
        .users
        .mark_studied(current.user.username, id)
        .await?;

    Ok(Json(technology))
}

#[instrument(skip_all, fields(username = %current.username(), id = %id))]
pub async fn delete_technology(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(id): Path<String>,
) -> Result<Json<Vec<Technology>>, ApiError> {
    let id = technology_id(&id)?;
    let remaining = state
        .users
        .remove_technology(current.user.username, id)
        .await?;

    Ok(Json(remaining))
}
