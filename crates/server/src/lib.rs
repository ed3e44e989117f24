//! newsprep server - HTTP REST API for news article preprocessing
//!
//! Exposes the boilerplate normalization engine over HTTP:
//!
//! - **Preprocessing**: Single and batch article cleaning
//! - **Forwarding**: Successful single-article outcomes POSTed to an analysis service
//! - **Health & Metrics**: Liveness/readiness probes and Prometheus metrics
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use server::ServerConfig;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::load()?;
//!     server::start_server(config).await?;
//!     Ok(())
//! }
//! ```
//!
//! # API Endpoints
//!
//! - `GET /` - API information
//! - `GET /health` - Liveness probe
//! - `GET /ready` - Readiness probe
//! - `GET /metrics` - Prometheus metrics
//! - `POST /api/v1/preprocess` - Clean one article
//! - `POST /api/v1/preprocess/batch` - Clean many articles
//! - `GET /api/v1/sources` - Registered source identifiers
//!
//! Engine statuses (1001, 1002, ...) travel in the response body with HTTP
//! 200. Transport failures use the `{ "error": { code, message } }` shape.

pub mod config;
pub mod downstream;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;
pub mod telemetry;

pub use config::ServerConfig;
pub use downstream::{DownstreamError, DownstreamSink, HttpDownstream};
pub use error::{ServerError, ServerResult};
pub use server::{build_router, start_server};
pub use state::ServerState;
