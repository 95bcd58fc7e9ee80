// ABOUTME: LiftLog HTTP server binary
// ABOUTME: Loads configuration, opens the set store, and serves the dashboard API
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # LiftLog Server Binary
//!
//! Starts the dashboard API with environment configuration and optional
//! command-line overrides.

use anyhow::{Context, Result};
use clap::Parser;
use liftlog_server::{
    config::{DatabaseUrl, ServerConfig},
    logging,
    resources::ServerResources,
    routes,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "liftlog-server")]
#[command(about = "LiftLog - workout volume dashboard API")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override database URL
    #[arg(long)]
    database_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if let Some(url) = args.database_url {
        config.database.url = DatabaseUrl::parse_url(&url)?;
    }
    config.validate()?;

    logging::init_from_env()?;

    info!("Starting LiftLog server");
    info!("{}", config.summary());

    let config = Arc::new(config);
    let resources = Arc::new(
        ServerResources::from_config(Arc::clone(&config))
            .await
            .context("Failed to initialize server resources")?,
    );
    info!(
        reporting_offset = %resources.calendar.offset(),
        identity_header = %resources.identity.user_header(),
        request_id_header = %resources.identity.request_id_header(),
        "Server resources ready"
    );

    let app = routes::router(resources);
    let addr = SocketAddr::from(([0, 0, 0, 0], config.http_port));
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!("HTTP server listening on http://{addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    info!("LiftLog server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {e}");
    }
    info!("Shutdown signal received");
}
