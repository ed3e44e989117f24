//! Server initialization and routing
//!
//! This module handles the Axum server setup including:
//! - Router configuration with all API endpoints
//! - Middleware stack (logging, compression, CORS, limits)
//! - Graceful shutdown handling

use crate::config::ServerConfig;
use crate::middleware::{log_requests, request_id};
use crate::routes::{api_info, not_found};
use crate::routes::{health, process, sources};
use crate::state::ServerState;
use axum::extract::DefaultBodyLimit;
use axum::http::StatusCode;
use axum::middleware::from_fn;
use axum::routing::{get, post};
use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

/// Build the Axum router with all routes and middleware
///
/// Middleware stack (outermost last):
/// 1. Body size limit
/// 2. Timeout handling
/// 3. Compression
/// 4. CORS (when enabled)
/// 5. Request logging
/// 6. Request ID tracking
/// 7. HTTP tracing
pub fn build_router(state: Arc<ServerState>) -> Router {
    let routes = Router::new()
        .route("/", get(api_info))
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        .route("/metrics", get(health::metrics))
        .route("/api/v1/preprocess", post(process::preprocess_article))
        .route("/api/v1/preprocess/batch", post(process::preprocess_batch))
        .route("/api/v1/sources", get(sources::list_sources))
        .fallback(not_found)
        .layer(DefaultBodyLimit::max(state.config.max_body_size()))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            state.config.timeout(),
        ))
        .layer(CompressionLayer::new());

    let routes = match cors_layer(&state) {
        Some(cors) => routes.layer(cors),
        None => routes,
    };

    routes
        .layer(from_fn(log_requests))
        .layer(from_fn(request_id))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn cors_layer(state: &ServerState) -> Option<CorsLayer> {
    if !state.config.enable_cors {
        return None;
    }
    let wildcard = state.allowed_origins.iter().any(|origin| origin == "*");
    let origin = if state.allowed_origins.is_empty() || wildcard {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(state.allowed_origins.clone())
    };
    Some(
        CorsLayer::new()
            .allow_origin(origin)
            .allow_methods(Any)
            .allow_headers(Any),
    )
}

/// Start the newsprep HTTP server
///
/// Initializes logging, builds shared state and serves until SIGTERM or
/// Ctrl+C.
///
/// # Example
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
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(&config.log_level)
        .with_target(false)
        .with_thread_ids(true)
        .with_thread_names(true)
        .json()
        .init();

    // Refuse to start on a broken rule table.
    let registry = newsprep::registry()
        .map_err(|err| anyhow::anyhow!("rule registry failed to build: {err}"))?;

    let state = Arc::new(ServerState::new(config.clone())?);
    let app = build_router(state.clone());

    let addr: SocketAddr = config.socket_addr()?;

    tracing::info!(
        "Starting newsprep server on {} with {} sources",
        addr,
        registry.len()
    );
    tracing::info!(
        "Timeout: {}s, Max body: {}MB, Max batch: {}",
        config.timeout_secs,
        config.max_body_size_mb,
        config.max_batch_size
    );
    tracing::info!(
        "CORS: {}, Metrics: {}, Downstream: {}",
        config.enable_cors,
        state.metrics.is_some(),
        config.downstream_url.as_deref().unwrap_or("disabled")
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
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
            Ok(mut stream) => {
                stream.recv().await;
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
