//! Log Endpoints
//!
//! Daily log reads, create/delete mutations and the export location.

use chrono::NaiveDate;

use super::{ApiResult, HttpApi};
use crate::models::{DailyLog, NewLogEntry, DATE_FORMAT};

const BY_DATE_PATH: &str = "/api/logs/by-date";
const CREATE_PATH: &str = "/api/log";
pub(super) const EXPORT_PATH: &str = "/api/logs/export";

fn delete_path(id: u32) -> String {
    format!("/api/logs/{}", id)
}

fn date_param(date: NaiveDate) -> (&'static str, String) {
    ("date", date.format(DATE_FORMAT).to_string())
}

impl HttpApi {
    pub(super) async fn fetch_logs_by_date(&self, date: NaiveDate) -> ApiResult<DailyLog> {
        self.get_json(BY_DATE_PATH, &[date_param(date)]).await
    }

    pub(super) async fn post_log(&self, entry: &NewLogEntry) -> ApiResult<()> {
        let url = self.url(CREATE_PATH);
        log::debug!("[API] POST {} {:?}", url, entry);
        let request = self.client.post(&url).json(entry);
        self.send_ignoring_body(url, request).await
    }

    pub(super) async fn delete_log_by_id(&self, id: u32) -> ApiResult<()> {
        let url = self.url(&delete_path(id));
        log::debug!("[API] DELETE {}", url);
        let request = self.client.delete(&url);
        self.send_ignoring_body(url, request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delete_path() {
        assert_eq!(delete_path(7), "/api/logs/7");
    }

    #[test]
    fn test_date_param_is_zero_padded_iso() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        assert_eq!(date_param(date), ("date", "2024-03-09".to_string()));
        assert_eq!(
            NaiveDate::parse_from_str(&date_param(date).1, DATE_FORMAT).ok(),
            Some(date)
        );
    }
}
