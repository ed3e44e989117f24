use crate::config::ServerConfig;
use crate::downstream::{DownstreamSink, HttpDownstream};
use crate::error::{ServerError, ServerResult};
use crate::telemetry;
use axum::http::HeaderValue;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct ServerState {
    /// Server configuration
    pub config: Arc<ServerConfig>,

    /// Parsed CORS allow-list. Empty means any origin.
    pub allowed_origins: Vec<HeaderValue>,

    /// Where successful single-article outcomes are forwarded, if anywhere
    pub downstream: Option<Arc<dyn DownstreamSink>>,

    /// Prometheus renderer, present when metrics are enabled
    pub metrics: Option<PrometheusHandle>,
}

impl ServerState {
    /// Create new server state
    pub fn new(config: ServerConfig) -> ServerResult<Self> {
        let downstream = match &config.downstream_url {
            Some(url) if !url.trim().is_empty() => {
                let sink = HttpDownstream::new(url.trim(), config.downstream_timeout())
                    .map_err(|err| ServerError::Config(err.to_string()))?;
                Some(Arc::new(sink) as Arc<dyn DownstreamSink>)
            }
            _ => None,
        };
        Self::with_downstream(config, downstream)
    }

    /// Create state with an explicit downstream sink instead of the
    /// configured URL.
    pub fn with_downstream(
        config: ServerConfig,
        downstream: Option<Arc<dyn DownstreamSink>>,
    ) -> ServerResult<Self> {
        let allowed_origins = config
            .cors_allowed_origins
            .iter()
            .map(|origin| {
                HeaderValue::from_str(origin.trim()).map_err(|err| {
                    ServerError::Config(format!("invalid CORS origin '{origin}': {err}"))
                })
            })
            .collect::<ServerResult<Vec<_>>>()?;

        let metrics = telemetry::init(config.metrics_enabled);

        Ok(Self {
            config: Arc::new(config),
            allowed_origins,
            downstream,
            metrics,
        })
    }
}

/// Server metadata for health checks
#[derive(Debug, serde::Serialize)]
pub struct ServerMetadata {
    pub version: String,
    pub uptime_seconds: u64,
}
