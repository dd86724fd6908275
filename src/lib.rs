//! # user-crud
//!
//! A small HTTP API for a single `User` resource, persisted through SeaORM.
//!
//! ## Layers
//!
//! - **Entity** ([`entity`]): the `users` table.
//! - **Repository** ([`repository`]): the persistence gateway, one statement
//!   per call.
//! - **Service** ([`service`]): parse, validate, persist. All decisions live
//!   here.
//! - **Controller** ([`controller`]): axum handlers and the two router
//!   flavours (`full` and `basic`) that share them.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use user_crud::{AppConfig, ConfigService, RouterKind, app, database};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = AppConfig::from_service(&ConfigService::from_env())?;
//!     let db = database::connect(&config).await?;
//!     database::ensure_schema(&db).await?;
//!
//!     let router = app(RouterKind::Full, db);
//!     let listener = tokio::net::TcpListener::bind(config.socket_addr()?).await?;
//!     axum::serve(listener, router).await?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod controller;
pub mod database;
pub mod domain;
pub mod entity;
pub mod error;
pub mod interceptor;
pub mod lifecycle;
pub mod pipe;
pub mod repository;
pub mod service;

use sea_orm::DatabaseConnection;
use std::sync::Arc;

pub use config::{AppConfig, ConfigError, ConfigService};
pub use controller::{AppState, RouterKind};
pub use domain::User;
pub use error::{ApiError, Result};
pub use repository::{SeaOrmUserRepository, UserRepository};
pub use service::UserService;

/// Wire a pool into a ready-to-serve router.
pub fn app(kind: RouterKind, db: DatabaseConnection) -> axum::Router {
    let repository = Arc::new(SeaOrmUserRepository::new(db));
    let state = AppState::new(UserService::new(repository));
    controller::build_router(kind, state)
}
