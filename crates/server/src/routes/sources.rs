use crate::error::{ServerError, ServerResult};
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

/// Registered source identifiers, sorted
#[derive(Debug, Serialize)]
pub struct SourcesResponse {
    pub count: usize,
    pub sources: Vec<String>,
}

/// List every source identifier the engine accepts.
pub async fn list_sources() -> ServerResult<impl IntoResponse> {
    let registry = newsprep::registry()
        .map_err(|err| ServerError::NotReady(format!("rule registry failed to build: {err}")))?;

    let sources: Vec<String> = registry.sources().into_iter().map(str::to_owned).collect();
    Ok(Json(SourcesResponse {
        count: sources.len(),
        sources,
    }))
}
