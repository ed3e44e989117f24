//! Prometheus export of normalization metrics.
//!
//! Normalization calls are observed through [`newsprep::PipelineMetrics`]
//! and recorded with the `metrics` macros; the Prometheus recorder is
//! installed once per process and rendered by `GET /metrics`.

use std::sync::{Arc, OnceLock};
use std::time::Duration;

use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use newsprep::{set_pipeline_metrics, PipelineMetrics, StatusKind};

pub const ARTICLES_TOTAL: &str = "newsprep_articles_total";
pub const NORMALIZE_SECONDS: &str = "newsprep_normalize_seconds";
pub const BATCH_SIZE: &str = "newsprep_batch_size";

/// Forwards pipeline observations to the global `metrics` recorder.
#[derive(Debug, Default)]
pub struct RecorderMetrics;

impl PipelineMetrics for RecorderMetrics {
    fn record_normalize(&self, latency: Duration, kind: StatusKind) {
        metrics::counter!(ARTICLES_TOTAL, "status" => kind.as_str()).increment(1);
        metrics::histogram!(NORMALIZE_SECONDS).record(latency.as_secs_f64());
    }

    fn record_batch(&self, _latency: Duration, size: usize) {
        metrics::histogram!(BATCH_SIZE).record(size as f64);
    }
}

/// Installs the Prometheus recorder on first call and returns its handle.
/// `None` if another recorder already owns the process.
pub fn prometheus_handle() -> Option<PrometheusHandle> {
    static HANDLE: OnceLock<Option<PrometheusHandle>> = OnceLock::new();
    HANDLE
        .get_or_init(|| match PrometheusBuilder::new().install_recorder() {
            Ok(handle) => Some(handle),
            Err(err) => {
                tracing::warn!(error = %err, "prometheus_recorder_unavailable");
                None
            }
        })
        .clone()
}

/// Wires the recorder and the pipeline observer when metrics are enabled.
pub fn init(metrics_enabled: bool) -> Option<PrometheusHandle> {
    if !metrics_enabled {
        return None;
    }
    let handle = prometheus_handle();
    if handle.is_some() {
        set_pipeline_metrics(Some(Arc::new(RecorderMetrics)));
    }
    handle
}
