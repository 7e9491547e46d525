// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! RunMate API Server
//!
//! Registers and authenticates users, issues session tokens, and serves
//! profiles aggregated from workout records.

use runmate_api::{
    config::Config,
    db::FirestoreDb,
    services::{ProfileService, RecordService, TokenService},
    AppState,
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize structured JSON logging for GCP
    init_logging();

    // Load configuration from environment
    let config = Config::from_env().expect("Failed to load configuration");
    tracing::info!(port = config.port, "Starting RunMate API");

    // Initialize Firestore database
    let db = FirestoreDb::new(&config.gcp_project_id)
        .await
        .expect("Failed to connect to Firestore");

    // Token service holds the signing key for the life of the process
    let token_service = TokenService::new(
        &config.jwt_signing_key,
        chrono::Duration::hours(config.session_lifetime_hours),
    );
    tracing::info!(
        lifetime_hours = config.session_lifetime_hours,
        "Token service initialized"
    );

    let record_service = RecordService::new(db.clone());
    let profile_service = ProfileService::new(db.clone(), record_service.clone());

    // Build shared state
    let state = Arc::new(AppState {
        config: config.clone(),
        db,
        token_service,
        record_service,
        profile_service,
    });

    // Build router
    let app = runmate_api::routes::create_router(state);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Initialize structured JSON logging (GCP-compliant).
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("runmate_api=debug".parse().unwrap())
                .add_directive("info".parse().unwrap()),
        )
        .with(format)
        .init();
}
