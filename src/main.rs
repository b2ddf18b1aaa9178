// Copyright (c) MySocial Team
// SPDX-License-Identifier: Apache-2.0

use anyhow::Result;
use dotenv::dotenv;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tuiter::api;
use tuiter::config::{Config, StoreBackend};
use tuiter::db::init_database;
use tuiter::repository::{MemoryStore, PgStore, Repositories};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file if present
    dotenv().ok();

    // Load configuration
    let config = Config::from_env()?;

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tuiter=debug".into()),
    );
    if config.logging.json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
    info!("Initialized configuration");

    // Open the store once; every handler shares it
    let repos = match config.database.backend {
        StoreBackend::Postgres => {
            let db = init_database(&config.database).await?;
            info!("Connected to database");
            Repositories::from_store(PgStore::new(db))
        }
        StoreBackend::Memory => {
            info!("Using in-memory store; data is lost on exit");
            Repositories::from_store(MemoryStore::new())
        }
    };

    api::start_api_server(&config.server, repos).await?;

    info!("Tuiter shutdown complete");
    Ok(())
}
