use serde::{Deserialize, Serialize};
use crate::SeriesResult;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
    pub query: String,
}

/// Body of a `/search` answer.
///
/// A body carrying an `error` field is an error even if it also carries results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SearchResponse {
    Error { error: String },
    Results { results: Vec<SeriesResult> },
}

impl SearchResponse {
    pub fn error(message: impl Into<String>) -> Self {
        SearchResponse::Error { error: message.into() }
    }

    pub fn results(results: Vec<SeriesResult>) -> Self {
        SearchResponse::Results { results }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LikeRequest {
    pub title: String,
}

/// Body of a `/like` answer. An absent `success` counts as a failure.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LikeResponse {
    #[serde(default)]
    pub success: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionResponse {
    pub version: u64,
}
