use axum::{
    Router, middleware,
    routing::get,
};
use std::str::FromStr;
use tower_http::trace::TraceLayer;

use super::{AppState, create_user, delete_user, get_user, list_users, update_user};
use crate::interceptor::log_requests;

/// Which set of routes to expose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RouterKind {
    /// List, get, create, update and delete.
    #[default]
    Full,
    /// List, get and create only.
    Basic,
}

impl FromStr for RouterKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "full" => Ok(RouterKind::Full),
            "basic" => Ok(RouterKind::Basic),
            other => Err(format!("unknown router {:?}, expected \"full\" or \"basic\"", other)),
        }
    }
}

pub fn full_router(state: AppState) -> Router {
    Router::new()
        .route("/users", get(list_users).post(create_user))
        .route(
            "/users/{id}",
            get(get_user).put(update_user).delete(delete_user),
        )
        .with_state(state)
}

pub fn basic_router(state: AppState) -> Router {
    Router::new()
        .route("/users", get(list_users).post(create_user))
        .route("/users/{id}", get(get_user))
        .with_state(state)
}

/// The selected router with request logging and tracing layers applied.
pub fn build_router(kind: RouterKind, state: AppState) -> Router {
    let router = match kind {
        RouterKind::Full => full_router(state),
        RouterKind::Basic => basic_router(state),
    };
    router
        .layer(middleware::from_fn(log_requests))
        .layer(TraceLayer::new_for_http())
}
