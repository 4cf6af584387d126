//! Nutrition API Gateway
//!
//! Typed bindings to the nutrition HTTP API, organized by endpoint group.
//! No business logic lives here; callers decide what to do with failures.

mod aggregate;
mod logs;
mod search;

use async_trait::async_trait;
use chrono::NaiveDate;
use thiserror::Error;

use crate::models::{AggregatePoint, AggregateWindow, DailyLog, NewLogEntry, SearchResult};

pub use search::SearchQuery;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{url} responded with status {status}")]
    Status { url: String, status: u16 },
    #[error("malformed response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

pub type ApiResult<T> = Result<T, ApiError>;

/// The remote operations the dashboard depends on
///
/// Futures are not `Send`: in the browser everything runs on one thread.
#[async_trait(?Send)]
pub trait NutritionApi {
    /// Enriched food search; an all-whitespace query issues no request
    async fn search(&self, query: &SearchQuery) -> ApiResult<Vec<SearchResult>>;

    async fn logs_by_date(&self, date: NaiveDate) -> ApiResult<DailyLog>;

    async fn aggregate(&self, window: AggregateWindow) -> ApiResult<Vec<AggregatePoint>>;

    async fn create_log(&self, entry: &NewLogEntry) -> ApiResult<()>;

    async fn delete_log(&self, id: u32) -> ApiResult<()>;

    /// Where the CSV download lives; reached by plain navigation
    fn export_url(&self) -> String;
}

/// `reqwest`-backed client (fetch on wasm32)
#[derive(Clone, Debug)]
pub struct HttpApi {
    client: reqwest::Client,
    base: String,
}

impl HttpApi {
    pub fn new(base: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base: base.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    async fn get_json<T>(&self, path: &str, query: &[(&str, String)]) -> ApiResult<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let url = self.url(path);
        log::debug!("[API] GET {} {:?}", url, query);
        let response = self
            .client
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(|source| ApiError::Transport { url: url.clone(), source })?;
        let response = check_status(&url, response)?;
        response
            .json::<T>()
            .await
            .map_err(|source| ApiError::Decode { url, source })
    }

    /// Send a request whose response body is not used
    async fn send_ignoring_body(
        &self,
        url: String,
        request: reqwest::RequestBuilder,
    ) -> ApiResult<()> {
        let response = request
            .send()
            .await
            .map_err(|source| ApiError::Transport { url: url.clone(), source })?;
        check_status(&url, response).map(|_| ())
    }
}

fn check_status(url: &str, response: reqwest::Response) -> ApiResult<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(ApiError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        })
    }
}

#[async_trait(?Send)]
impl NutritionApi for HttpApi {
    async fn search(&self, query: &SearchQuery) -> ApiResult<Vec<SearchResult>> {
        self.search_foods(query).await
    }

    async fn logs_by_date(&self, date: NaiveDate) -> ApiResult<DailyLog> {
        self.fetch_logs_by_date(date).await
    }

    async fn aggregate(&self, window: AggregateWindow) -> ApiResult<Vec<AggregatePoint>> {
        self.fetch_aggregate(window).await
    }

    async fn create_log(&self, entry: &NewLogEntry) -> ApiResult<()> {
        self.post_log(entry).await
    }

    async fn delete_log(&self, id: u32) -> ApiResult<()> {
        self.delete_log_by_id(id).await
    }

    fn export_url(&self) -> String {
        self.url(logs::EXPORT_PATH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_is_normalized() {
        let api = HttpApi::new("http://localhost:5000/");
        assert_eq!(api.url("/api/log"), "http://localhost:5000/api/log");
        assert_eq!(api.export_url(), "http://localhost:5000/api/logs/export");
    }
}
