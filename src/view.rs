//! View Models and the View Seam
//!
//! Controllers push fully built view models through `DashboardView`; the
//! Leptos side only stores and draws them.

use leptos_chartjs::ChartConfig;

use crate::charts::ChartSlot;
use crate::models::{LogEntry, SearchResult};
use crate::totals::TotalsView;

pub const NO_LOGS_MESSAGE: &str = "No logs for this date.";
pub const NO_RESULTS_MESSAGE: &str = "No results found.";
pub const SEARCHING_MESSAGE: &str = "Searching...";
pub const SEARCH_FAILED_MESSAGE: &str = "Search failed.";

/// Where controllers send their output
pub trait DashboardView {
    fn show_logs(&self, logs: LogListView);
    fn show_totals(&self, totals: TotalsView);
    fn show_search(&self, state: SearchState);
    fn render_chart(&self, slot: ChartSlot, config: ChartConfig);
}

/// One row of the day's log, contributions rounded for display
#[derive(Debug, Clone, PartialEq)]
pub struct LogRow {
    pub id: u32,
    pub name: String,
    pub servings: f64,
    pub calories: i64,
    pub protein: i64,
    pub fat: i64,
    pub carbs: i64,
}

impl From<&LogEntry> for LogRow {
    fn from(entry: &LogEntry) -> Self {
        let contribution = entry.contribution();
        Self {
            id: entry.id,
            name: entry.name.clone(),
            servings: entry.quantity,
            calories: round_display(contribution.calories),
            protein: round_display(contribution.protein),
            fat: round_display(contribution.fat),
            carbs: round_display(contribution.carbs),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum LogListView {
    #[default]
    Loading,
    Empty,
    Rows(Vec<LogRow>),
}

impl LogListView {
    pub fn from_entries(entries: &[LogEntry]) -> Self {
        if entries.is_empty() {
            LogListView::Empty
        } else {
            LogListView::Rows(entries.iter().map(LogRow::from).collect())
        }
    }

    pub fn message(&self) -> Option<&'static str> {
        match self {
            LogListView::Empty => Some(NO_LOGS_MESSAGE),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum SearchState {
    #[default]
    Idle,
    Searching,
    NoResults,
    Results(Vec<SearchResult>),
    Failed,
}

impl SearchState {
    pub fn message(&self) -> Option<&'static str> {
        match self {
            SearchState::Searching => Some(SEARCHING_MESSAGE),
            SearchState::NoResults => Some(NO_RESULTS_MESSAGE),
            SearchState::Failed => Some(SEARCH_FAILED_MESSAGE),
            SearchState::Idle | SearchState::Results(_) => None,
        }
    }
}

/// Presentation-only rounding; models keep full precision
pub fn round_display(value: f64) -> i64 {
    value.round() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: u32, quantity: f64) -> LogEntry {
        LogEntry {
            id,
            name: format!("Food {}", id),
            quantity,
            calories: 200.0,
            protein: 10.4,
            fat: 5.0,
            carbs: 20.0,
            log_date: "2024-05-01".to_string(),
        }
    }

    #[test]
    fn test_empty_entries_show_message() {
        let view = LogListView::from_entries(&[]);
        assert_eq!(view, LogListView::Empty);
        assert_eq!(view.message(), Some("No logs for this date."));
    }

    #[test]
    fn test_rows_show_rounded_contributions() {
        let view = LogListView::from_entries(&[entry(1, 2.0), entry(2, 0.5)]);
        let LogListView::Rows(rows) = view else {
            panic!("expected rows");
        };
        assert_eq!(rows.len(), 2);
        assert_eq!(
            (rows[0].calories, rows[0].protein, rows[0].fat, rows[0].carbs),
            (400, 21, 10, 40)
        );
        assert_eq!(rows[1].calories, 100);
        assert_eq!(rows[1].protein, 5);
        assert_eq!(rows[1].servings, 0.5);
    }

    #[test]
    fn test_search_messages() {
        assert_eq!(SearchState::NoResults.message(), Some("No results found."));
        assert_eq!(SearchState::Searching.message(), Some("Searching..."));
        assert_eq!(SearchState::Results(vec![]).message(), None);
    }
}
