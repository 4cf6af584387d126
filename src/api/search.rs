//! Search Endpoint
//!
//! `GET /api/search?q=..&enrich=1&limit=6`. What `enrich` and `limit` do is
//! up to the server.

use serde::Deserialize;

use super::{ApiResult, HttpApi};
use crate::models::SearchResult;

const SEARCH_PATH: &str = "/api/search";

#[derive(Debug, Clone, PartialEq)]
pub struct SearchQuery {
    pub text: String,
    pub enrich: bool,
    pub limit: u32,
}

impl SearchQuery {
    /// Trimmed query, or `None` when nothing is left to search for
    pub fn new(raw: &str, enrich: bool, limit: u32) -> Option<Self> {
        let text = raw.trim();
        if text.is_empty() {
            return None;
        }
        Some(Self {
            text: text.to_string(),
            enrich,
            limit,
        })
    }

    fn params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("q", self.text.clone()),
            ("enrich", if self.enrich { "1" } else { "0" }.to_string()),
            ("limit", self.limit.to_string()),
        ]
    }
}

#[derive(Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Vec<SearchResult>,
}

impl HttpApi {
    pub(super) async fn search_foods(&self, query: &SearchQuery) -> ApiResult<Vec<SearchResult>> {
        if query.text.trim().is_empty() {
            log::debug!("[API] empty search skipped");
            return Ok(Vec::new());
        }
        let response: SearchResponse = self.get_json(SEARCH_PATH, &query.params()).await?;
        Ok(response.results)
    }
}
