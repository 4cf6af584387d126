//! Aggregate Endpoint
//!
//! `GET /api/logs/aggregate?mode=week|month`, points in server order.

use super::{ApiResult, HttpApi};
use crate::models::{AggregatePoint, AggregateWindow};

const AGGREGATE_PATH: &str = "/api/logs/aggregate";

impl HttpApi {
    pub(super) async fn fetch_aggregate(
        &self,
        window: AggregateWindow,
    ) -> ApiResult<Vec<AggregatePoint>> {
        self.get_json(AGGREGATE_PATH, &[("mode", window.as_param().to_string())])
            .await
    }
}
