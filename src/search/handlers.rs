use super::engine::search;
use super::types::{SearchParams, SearchRequest, SearchResponse, StatusResponse};
use crate::error::ApiError;
use crate::storage::memory::DocumentStore;
use axum::extract::Query;
use axum::extract::rejection::QueryRejection;
use axum::{Extension, Json};
use std::sync::Arc;

pub const STATUS_TEXT: &str = "BO7 backend running";

pub async fn handle_status(
    Extension(store): Extension<Arc<DocumentStore>>,
) -> Json<StatusResponse> {
    Json(StatusResponse {
        status: STATUS_TEXT.to_string(),
        num_docs: store.len().await,
    })
}

pub async fn handle_search(
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
    Extension(store): Extension<Arc<DocumentStore>>,
) -> Result<Json<SearchResponse>, ApiError> {
    let Query(pairs) = query.map_err(|e| ApiError::Validation(e.body_text()))?;

    let request = SearchRequest::try_from(SearchParams::from_pairs(pairs))
        .inspect_err(|e| tracing::debug!("Rejected search request: {}", e))?;

    let results = search(&request.query, request.limit, store).await;

    tracing::debug!(
        "Search {:?} (limit {}) returned {} docs",
        request.query,
        request.limit,
        results.len()
    );

    Ok(Json(SearchResponse { results }))
}
