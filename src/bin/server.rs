//! GEA HTTP Server Binary
//!
//! This is the main entry point for the GEA REST API server. It loads the
//! daily and hourly tables once at startup, builds the shared data context,
//! and serves the dashboard API. A malformed dataset is a startup failure;
//! no partial dashboard is ever served.
//!
//! # Usage
//!
//! ```bash
//! DAILY_DATA=data/daily.csv HOURLY_DATA=data/hourly.csv cargo run --bin gea-server
//! ```
//!
//! # Environment Variables
//!
//! - `DAILY_DATA`: Path to the daily table CSV export (required)
//! - `HOURLY_DATA`: Path to the hourly table CSV export (required)
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use gea_rust::config::AppConfig;
use gea_rust::http::{create_router, AppState};
use gea_rust::parsing::load_dataset;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .init();

    info!("Starting GEA HTTP Server");

    let config = AppConfig::from_env().map_err(|e| anyhow::anyhow!(e))?;

    // Load both tables once; any schema problem aborts startup.
    let context = load_dataset(&config.daily_data, &config.hourly_data)
        .context("failed to load dataset")?;
    info!(
        "dataset loaded: {} daily rows, {} hourly rows, {} years",
        context.daily.len(),
        context.hourly.len(),
        context.years.len()
    );

    let state = AppState::new(Arc::new(context));
    let app = create_router(state);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
