// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Auth Responder API Server
//!
//! Issues access tokens for principals authenticated by the upstream layer.

use auth_responder::{config::Config, db::InMemoryUserDirectory, AppState};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize structured JSON logging
    init_logging();

    // Load configuration from environment
    let config = Config::from_env()?;
    tracing::info!(port = config.port, "Starting Auth Responder API");

    // Load user directory
    let users = match &config.users_file {
        Some(path) => {
            tracing::info!(path = %path, "Loading user directory");
            let users = InMemoryUserDirectory::load_from_file(path)?;
            tracing::info!(count = users.len(), "User directory loaded");
            users
        }
        None => {
            tracing::warn!("USERS_FILE not set, user directory is empty");
            InMemoryUserDirectory::new()
        }
    };

    let state = Arc::new(AppState::new(config.clone(), Arc::new(users)));

    // Build router
    let app = auth_responder::routes::create_router(state);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Initialize structured JSON logging.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("auth_responder=debug".parse().unwrap())
                .add_directive("info".parse().unwrap()),
        )
        .with(format)
        .init();
}
