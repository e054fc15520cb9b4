//! Server initialization and routing
//!
//! This module handles the Axum server setup including:
//! - Router configuration with all API endpoints
//! - Middleware stack (request ids, logging, timeouts, CORS)
//! - Dataset reload triggers (timer and SIGHUP)
//! - Graceful shutdown handling

use crate::config::{LogFormat, ServerConfig};
use crate::middleware::{log_requests, request_id};
use crate::routes::{cities, city, health, not_found, suggest};
use crate::state::ServerState;
use axum::http::StatusCode;
use axum::middleware::from_fn;
use axum::routing::get;
use axum::Router;
use citydb_core::{CityCatalog, LoadMode};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

/// Build the Axum router with all routes and middleware
///
/// Middleware stack (outermost first):
/// 1. Tracing spans
/// 2. Request ID tracking
/// 3. Request logging
/// 4. CORS
/// 5. Timeout handling
pub fn build_router(state: Arc<ServerState>) -> Router {
    let cors = if state.config.enable_cors {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        CorsLayer::new()
    };

    Router::new()
        .route("/city/", get(city::missing_city))
        .route("/city/{id}", get(city::get_city))
        .route("/city/compare/{name1}/{name2}", get(city::compare_cities))
        .route("/cities", get(cities::list_cities))
        .route("/cities/", get(cities::list_cities))
        .route("/suggest", get(suggest::suggest))
        .route("/health", get(health::health_check))
        .fallback(not_found)
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            state.config.timeout(),
        ))
        .layer(cors)
        .layer(from_fn(log_requests))
        .layer(from_fn(request_id))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Install the global tracing subscriber.
///
/// Safe to call more than once; later calls are no-ops.
pub fn init_tracing(config: &ServerConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    let result = match config.log_format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Pretty => builder.try_init(),
    };
    if result.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}

/// Start the citydb HTTP server
///
/// Loads the dataset, builds the router, binds the configured address and
/// serves until SIGTERM or Ctrl+C.
///
/// ```rust,no_run
/// use server::ServerConfig;
///
/// #[tokio::main]
/// async fn main() -> anyhow::Result<()> {
///     let config = ServerConfig::load()?;
///     server::start_server(config).await?;
///     Ok(())
/// }
/// ```
pub async fn start_server(config: ServerConfig) -> anyhow::Result<()> {
    init_tracing(&config);

    let data_path = config.data_path.clone();
    let state = tokio::task::spawn_blocking(move || ServerState::new(config)).await??;
    let state = Arc::new(state);

    let addr: SocketAddr = state.config.socket_addr()?;
    let stats = state.catalog.stats();

    tracing::info!(
        "Starting citydb server on {} ({} cities from {})",
        addr,
        stats.cities,
        data_path.display()
    );
    tracing::info!(
        "Load mode: {:?}, timeout: {}s, CORS: {}",
        state.catalog.mode(),
        state.config.timeout_secs,
        state.config.enable_cors
    );

    if state.catalog.mode() == LoadMode::Snapshot {
        if let Some(every) = state.config.reload_interval() {
            tracing::info!("Reloading dataset every {}s", every.as_secs());
            tokio::spawn(reload_periodically(Arc::clone(&state.catalog), every));
        }
        #[cfg(unix)]
        tokio::spawn(reload_on_hangup(Arc::clone(&state.catalog)));
    }

    let app = build_router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Re-read the dataset off the async workers and publish it.
pub async fn reload(catalog: Arc<CityCatalog>) {
    match tokio::task::spawn_blocking(move || catalog.reload()).await {
        Ok(Ok(stats)) => tracing::info!(cities = stats.cities, "dataset reloaded"),
        Ok(Err(err)) => tracing::warn!(error = %err, "dataset reload failed; keeping previous snapshot"),
        Err(err) => tracing::error!(error = %err, "dataset reload task panicked"),
    }
}

async fn reload_periodically(catalog: Arc<CityCatalog>, every: Duration) {
    let mut ticker = tokio::time::interval(every);
    ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
    // The first tick completes immediately; the dataset was just loaded.
    ticker.tick().await;

    loop {
        ticker.tick().await;
        reload(Arc::clone(&catalog)).await;
    }
}

#[cfg(unix)]
async fn reload_on_hangup(catalog: Arc<CityCatalog>) {
    use tokio::signal::unix::{signal, SignalKind};

    let mut hangup = match signal(SignalKind::hangup()) {
        Ok(s) => s,
        Err(err) => {
            tracing::warn!(error = %err, "SIGHUP reload unavailable");
            return;
        }
    };

    while hangup.recv().await.is_some() {
        tracing::info!("Received SIGHUP, reloading dataset");
        reload(Arc::clone(&catalog)).await;
    }
}

/// Shutdown signal handler
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut s) => {
                s.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received Ctrl+C, shutting down..."),
        _ = terminate => tracing::info!("Received SIGTERM, shutting down..."),
    }
}
