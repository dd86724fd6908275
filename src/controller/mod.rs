//! HTTP adapters over [`UserService`].
//!
//! Handlers only extract, delegate and encode. The routes module binds them
//! into the two router flavours.

use axum::{
    extract::{Path, State, rejection::PathRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use std::sync::Arc;

use crate::error::{ApiError, Result};
use crate::service::UserService;

mod form;
mod routes;

pub use form::FormFields;
pub use routes::{RouterKind, basic_router, build_router, full_router};

/// Shared per-process state. Cloned into every request.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<UserService>,
}

impl AppState {
    pub fn new(users: UserService) -> Self {
        Self {
            users: Arc::new(users),
        }
    }
}

pub async fn list_users(State(state): State<AppState>) -> Result<Response> {
    let users = state.users.list().await?;
    json(&users)
}

pub async fn get_user(
    State(state): State<AppState>,
    id: std::result::Result<Path<String>, PathRejection>,
) -> Result<Response> {
    let user = state.users.get(path_id(id)?).await?;
    json(&user)
}

pub async fn create_user(
    State(state): State<AppState>,
    fields: FormFields,
) -> Result<StatusCode> {
    state.users.create(fields.into()).await?;
    Ok(StatusCode::CREATED)
}

pub async fn update_user(
    State(state): State<AppState>,
    id: std::result::Result<Path<String>, PathRejection>,
    fields: FormFields,
) -> Result<StatusCode> {
    state.users.update(path_id(id)?, fields.into()).await?;
    Ok(StatusCode::OK)
}

pub async fn delete_user(
    State(state): State<AppState>,
    id: std::result::Result<Path<String>, PathRejection>,
) -> Result<StatusCode> {
    state.users.delete(path_id(id)?).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Undecodable path segments get the same 400 as unparseable ids.
fn path_id(id: std::result::Result<Path<String>, PathRejection>) -> Result<String> {
    id.map(|Path(id)| id)
        .map_err(|rejection| ApiError::malformed(rejection.body_text()))
}

fn json<T: Serialize>(value: &T) -> Result<Response> {
    let body = serde_json::to_vec(value)?;
    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        body,
    )
        .into_response())
}
