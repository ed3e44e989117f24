use crate::error::{ServerError, ServerResult};
use crate::state::ServerState;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use newsprep::{ArticleIn, Outcome};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Response from preprocessing a single article
#[derive(Debug, Serialize)]
pub struct PreprocessResponse {
    #[serde(flatten)]
    pub outcome: Outcome,

    /// Reply of the analysis service, when forwarding is configured and the
    /// article was cleaned successfully.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub downstream: Option<serde_json::Value>,
}

/// Batch preprocessing request
#[derive(Debug, Deserialize)]
pub struct BatchPreprocessRequest {
    pub articles: Vec<ArticleIn>,
}

/// Batch preprocessing response
#[derive(Debug, Serialize)]
pub struct BatchPreprocessResponse {
    pub processed: usize,
    pub successful: usize,
    pub failed: usize,
    pub results: Vec<Outcome>,
}

/// Preprocess a single article.
///
/// Every outcome kind is answered with HTTP 200; the engine status lives in
/// `status_code`. Only transport problems (malformed JSON, a failed
/// downstream forward) change the HTTP status.
///
/// # Example
/// ```json
/// // Request
/// {
///   "title": "Rates unchanged",
///   "content": "Rates were held.\nView Full Image\nBanks led the gains.",
///   "url": "https://www.livemint.com/economy/rates",
///   "source": "mint"
/// }
///
/// // Response
/// {
///   "title": "Rates unchanged",
///   "content": "Rates were held. Banks led the gains.",
///   "url": "https://www.livemint.com/economy/rates",
///   "source": "mint",
///   "status_code": 200,
///   "status_message": "preprocessed successfully using mint preprocessor"
/// }
/// ```
pub async fn preprocess_article(
    State(state): State<Arc<ServerState>>,
    payload: Result<Json<ArticleIn>, JsonRejection>,
) -> ServerResult<impl IntoResponse> {
    let Json(article) = payload?;

    let outcome = tokio::task::spawn_blocking(move || newsprep::process_article(article)).await?;

    let downstream = match (&state.downstream, outcome.downstream_payload()) {
        (Some(sink), Some(forward)) => {
            let reply = sink.forward(&forward).await.map_err(|err| {
                tracing::warn!(source = %outcome.source, error = %err, "downstream_forward_failed");
                ServerError::from(err)
            })?;
            Some(reply)
        }
        _ => None,
    };

    Ok(Json(PreprocessResponse {
        outcome,
        downstream,
    }))
}

/// Preprocess many articles at once.
///
/// Results come back in request order. Batches are never forwarded
/// downstream.
pub async fn preprocess_batch(
    State(state): State<Arc<ServerState>>,
    payload: Result<Json<BatchPreprocessRequest>, JsonRejection>,
) -> ServerResult<impl IntoResponse> {
    let Json(request) = payload?;

    let size = request.articles.len();
    let max = state.config.max_batch_size;
    if size > max {
        return Err(ServerError::BatchTooLarge { size, max });
    }

    let results =
        tokio::task::spawn_blocking(move || newsprep::process_batch(request.articles)).await?;

    let successful = results.iter().filter(|outcome| outcome.is_success()).count();
    Ok(Json(BatchPreprocessResponse {
        processed: results.len(),
        successful,
        failed: results.len() - successful,
        results,
    }))
}
