// Copyright (c) MySocial Team
// SPDX-License-Identifier: Apache-2.0

mod error;
mod handlers;
mod metrics;
mod routes;

pub use error::{ApiError, ApiResult};
pub use metrics::Metrics;
pub use routes::router;

use crate::config::ServerConfig;
use crate::repository::Repositories;
use anyhow::Result;
use axum::extract::FromRef;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{error, info};

/// State shared by every handler
#[derive(Clone)]
pub struct AppState {
    pub repos: Repositories,
    pub metrics: Arc<Metrics>,
}

impl AppState {
    pub fn new(repos: Repositories) -> Result<Self> {
        Ok(Self {
            repos,
            metrics: Arc::new(Metrics::new()?),
        })
    }
}

impl FromRef<AppState> for Repositories {
    fn from_ref(state: &AppState) -> Self {
        state.repos.clone()
    }
}

impl FromRef<AppState> for Arc<Metrics> {
    fn from_ref(state: &AppState) -> Self {
        state.metrics.clone()
    }
}

/// Start the API server and serve until ctrl-c
pub async fn start_api_server(config: &ServerConfig, repos: Repositories) -> Result<()> {
    let app = router(AppState::new(repos)?, config.enable_cors);

    // Get bind address
    let addr = format!("{}:{}", config.host, config.port).parse::<SocketAddr>()?;

    info!("Starting API server on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    match signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received, initiating graceful shutdown"),
        Err(e) => {
            error!("Failed to listen for shutdown signal: {}", e);
            std::future::pending::<()>().await
        }
    }
}
