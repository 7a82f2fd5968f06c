//! Board Service Library
//!
//! Users, movie discussion boards with their comments, and Kakao login over
//! HTTP. The binary in `main.rs` is a thin CLI around [`run_embedded`] and
//! [`run_migrations`].

pub mod api;
pub mod config;
pub mod infra;
pub mod repository;
pub mod service;

use std::sync::Arc;

use tracing::info;

use crate::api::{create_router, AppState};
use crate::config::BoardServiceConfig;
use crate::infra::Database;

/// Run the HTTP server, overriding the configured bind address.
pub async fn run_embedded(host: &str, port: u16) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = BoardServiceConfig::from_env();
    config.service.host = host.to_string();
    config.service.port = port;
    run_server_with_config(config).await
}

/// Run migrations (for CLI commands).
pub async fn run_migrations(action: MigrateAction) -> Result<(), Box<dyn std::error::Error>> {
    let config = BoardServiceConfig::from_env();
    let db = Database::connect_without_migrations(&config.database).await?;

    match action {
        MigrateAction::Up => {
            db.run_migrations().await?;
            info!("Migrations applied successfully");
        }
        MigrateAction::Down => {
            db.rollback_migration().await?;
            info!("Rolled back last migration");
        }
        MigrateAction::Status => {
            let status = db.migration_status().await?;
            for (name, applied) in status {
                let marker = if applied { "[x]" } else { "[ ]" };
                println!("{} {}", marker, name);
            }
        }
        MigrateAction::Fresh => {
            db.fresh_migrations().await?;
            info!("Database reset and migrations applied");
        }
    }

    Ok(())
}

/// Migration action type.
#[derive(Debug, Clone, Copy)]
pub enum MigrateAction {
    Up,
    Down,
    Status,
    Fresh,
}

/// Run the HTTP server with the given configuration.
async fn run_server_with_config(config: BoardServiceConfig) -> Result<(), Box<dyn std::error::Error>> {
    let database = Arc::new(Database::connect(&config.database).await?);
    let oauth_service = auth_service_lib::build_oauth_service(config.kakao.clone())?;

    let state = AppState::from_database(database, oauth_service);
    let app = create_router(state);

    let addr = config.service.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("{} listening on {}", config.service.service_name, addr);

    axum::serve(listener, app).await?;

    Ok(())
}
