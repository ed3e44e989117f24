//! Workspace umbrella crate for newsprep.
//!
//! Re-exports the normalization engine and adds what a host process needs
//! around it: a metrics hook, order-preserving batch processing, and parsing
//! of article JSON as produced by the scrapers.

pub use preprocess::{
    ArticleIn, Category, DownstreamPayload, Outcome, Registry, RegistryBuilder, Rule, RuleError,
    RuleSet, RuleSetSpec, Scope, StatusKind, TextCleaner, collapse_whitespace, is_permitted_char,
    normalize, normalize_with, registry, repair_sentence_boundaries, restrict_charset,
};
pub use preprocess::{primitives, sources};

use std::sync::{Arc, OnceLock, RwLock};
use std::time::{Duration, Instant};

use thiserror::Error;
use tracing::info;

/// Errors raised while reading article input.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("input is empty")]
    Empty,
    #[error("invalid article JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Parses either a single article object or an array of them.
pub fn parse_articles(input: &str) -> Result<Vec<ArticleIn>, InputError> {
    let trimmed = input.trim_start();
    if trimmed.is_empty() {
        return Err(InputError::Empty);
    }
    if trimmed.starts_with('[') {
        Ok(serde_json::from_str(trimmed)?)
    } else {
        Ok(vec![serde_json::from_str(trimmed)?])
    }
}

/// Metrics observer for normalization calls.
pub trait PipelineMetrics: Send + Sync {
    fn record_normalize(&self, latency: Duration, kind: StatusKind);

    /// Called once per [`process_batch`] with the batch size. No-op by default.
    fn record_batch(&self, _latency: Duration, _size: usize) {}
}

/// Install or clear the global pipeline metrics recorder.
pub fn set_pipeline_metrics(recorder: Option<Arc<dyn PipelineMetrics>>) {
    let mut guard = metrics_lock()
        .write()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    *guard = recorder;
}

fn metrics_lock() -> &'static RwLock<Option<Arc<dyn PipelineMetrics>>> {
    static METRICS: OnceLock<RwLock<Option<Arc<dyn PipelineMetrics>>>> = OnceLock::new();
    METRICS.get_or_init(|| RwLock::new(None))
}

fn metrics_recorder() -> Option<Arc<dyn PipelineMetrics>> {
    let guard = metrics_lock()
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    guard.clone()
}

struct MetricsSpan {
    recorder: Arc<dyn PipelineMetrics>,
    start: Instant,
}

impl MetricsSpan {
    fn start() -> Option<Self> {
        metrics_recorder().map(|recorder| Self {
            recorder,
            start: Instant::now(),
        })
    }

    fn record_normalize(self, outcome: &Outcome) {
        // Codes outside the known set cannot come out of `normalize`.
        let kind = outcome.kind().unwrap_or(StatusKind::InternalError);
        self.recorder.record_normalize(self.start.elapsed(), kind);
    }

    fn record_batch(self, size: usize) {
        self.recorder.record_batch(self.start.elapsed(), size);
    }
}

/// Normalizes one article with the built-in registry and reports the call
/// to the installed [`PipelineMetrics`], if any.
pub fn process_article(article: ArticleIn) -> Outcome {
    let span = MetricsSpan::start();
    let outcome = normalize(article);
    if let Some(span) = span {
        span.record_normalize(&outcome);
    }
    outcome
}

/// Normalizes a batch of articles. Outcomes come back in input order.
///
/// With the `parallel` feature the batch is spread over the rayon pool;
/// each article is still processed independently.
pub fn process_batch(articles: Vec<ArticleIn>) -> Vec<Outcome> {
    let span = MetricsSpan::start();
    let start = Instant::now();
    let size = articles.len();

    let outcomes = run_batch(articles);

    let successful = outcomes.iter().filter(|outcome| outcome.is_success()).count();
    info!(
        processed = size,
        successful,
        failed = size - successful,
        elapsed_micros = start.elapsed().as_micros(),
        "batch_complete"
    );
    if let Some(span) = span {
        span.record_batch(size);
    }
    outcomes
}

#[cfg(feature = "parallel")]
fn run_batch(articles: Vec<ArticleIn>) -> Vec<Outcome> {
    use rayon::prelude::*;

    articles.into_par_iter().map(process_article).collect()
}

#[cfg(not(feature = "parallel"))]
fn run_batch(articles: Vec<ArticleIn>) -> Vec<Outcome> {
    articles.into_iter().map(process_article).collect()
}
