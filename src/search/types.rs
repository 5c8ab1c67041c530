use crate::error::ApiError;
use crate::storage::types::Document;
use serde::{Deserialize, Serialize};

pub const DEFAULT_LIMIT: usize = 5;
pub const MIN_LIMIT: usize = 1;
pub const MAX_LIMIT: usize = 20;

/// Raw `/search` query string.
///
/// Both fields are taken as plain strings so that a missing or malformed value
/// becomes an `ApiError` with our own body instead of an extractor rejection.
#[derive(Debug, Default)]
pub struct SearchParams {
    pub query: Option<String>,
    pub limit: Option<String>,
}

impl SearchParams {
    /// Builds params from decoded key/value pairs. A repeated key keeps its
    /// last value; unknown keys are ignored.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut params = Self::default();
        for (key, value) in pairs {
            match key.as_str() {
                "query" => params.query = Some(value),
                "limit" => params.limit = Some(value),
                _ => {}
            }
        }
        params
    }
}

/// A validated search: `limit` is within `MIN_LIMIT..=MAX_LIMIT`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub query: String,
    pub limit: usize,
}

impl TryFrom<SearchParams> for SearchRequest {
    type Error = ApiError;

    fn try_from(params: SearchParams) -> Result<Self, Self::Error> {
        let query = params
            .query
            .ok_or_else(|| ApiError::Validation("query parameter is required".to_string()))?;

        let limit = match params.limit {
            None => DEFAULT_LIMIT,
            Some(raw) => parse_limit(&raw)?,
        };

        Ok(Self { query, limit })
    }
}

fn parse_limit(raw: &str) -> Result<usize, ApiError> {
    let value: i64 = raw.trim().parse().map_err(|_| {
        ApiError::Validation(format!("limit must be an integer, got {:?}", raw))
    })?;

    if value < MIN_LIMIT as i64 || value > MAX_LIMIT as i64 {
        return Err(ApiError::Validation(format!(
            "limit must be between {} and {}, got {}",
            MIN_LIMIT, MAX_LIMIT, value
        )));
    }

    Ok(value as usize)
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: String,
    pub num_docs: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResponse {
    pub results: Vec<Document>,
}
