//! # Alpha Clock Main Entry Point
//!
//! Initializes logging, loads configuration, opens the preference store and
//! serves the clock over HTTP until interrupted.

use anyhow::Result;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use alpha_clock::config::{Config, StoreBackend};
use alpha_clock::services::clock::{ClockService, SystemClock};
use alpha_clock::services::preferences::{
    InMemoryPreferenceStore, PreferenceStore, SqlitePreferenceStore,
};
use alpha_clock::services::timezone::TimezoneCatalog;
use alpha_clock::utils::logging::log_system_event;
use alpha_clock::web;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "alpha_clock=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    info!("Starting Alpha Clock v{}", env!("CARGO_PKG_VERSION"));
    info!("Configuration loaded - Store: {:?}, HTTP Port: {}, Default timezone: {}",
        config.preference_store, config.http_port, config.default_timezone);

    let preferences: Arc<dyn PreferenceStore> = match config.preference_store {
        StoreBackend::Sqlite => {
            info!("Initializing database connection...");
            let store = SqlitePreferenceStore::new(&config.database_url).await?;
            store.run_migrations().await?;
            info!("Database initialized successfully");
            Arc::new(store)
        }
        StoreBackend::Memory => {
            info!("Using in-memory preference store");
            Arc::new(InMemoryPreferenceStore::new())
        }
    };

    let clock = ClockService::new(
        Arc::new(TimezoneCatalog::new()),
        preferences,
        Arc::new(SystemClock),
    )
    .with_default_timezone(config.default_timezone.clone());
    info!("Clock service ready - {} timezones, sessions default to {}",
        clock.timezones().list().len(), clock.default_timezone());

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.http_port))
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind to port {}: {}", config.http_port, e))?;

    log_system_event("HTTP server starting", Some(&format!("port {}", config.http_port)));

    axum::serve(listener, web::router(clock))
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!("Failed to listen for shutdown signal: {}", e);
            }
        })
        .await
        .map_err(|e| anyhow::anyhow!("HTTP server error: {}", e))?;

    log_system_event("Application stopped", None);
    Ok(())
}
