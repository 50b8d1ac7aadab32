//! User Service Library
//!
//! This crate provides user management on top of a relational store:
//! a repository capability, the `UserService` façade that translates
//! persistence outcomes into `AppError`s, and the command-line front end.

pub mod cli;
pub mod config;
pub mod infra;
pub mod repository;
pub mod service;

use std::sync::Arc;

use common::AppResult;
use serde_json::Value;
use tracing::info;

use crate::cli::Commands;
use crate::config::UserServiceConfig;
use crate::infra::Database;
use crate::repository::UserStore;
use crate::service::UserManager;

/// Wire the SeaORM-backed repository into a service.
pub fn build_service(db: &Database) -> UserManager {
    let user_repo = Arc::new(UserStore::new(db.get_connection()));
    UserManager::new(user_repo)
}

/// Connect with the given configuration and run one command.
pub async fn run_command(config: &UserServiceConfig, command: Commands) -> AppResult<Value> {
    let db = Database::connect(&config.database).await?;

    if let Commands::Init = command {
        db.ensure_schema().await?;
        info!("Schema initialized");
    }

    let service = build_service(&db);
    cli::execute(&service, command).await
}
