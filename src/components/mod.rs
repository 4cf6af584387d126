//! UI Components
//!
//! Leptos components for each dashboard region.

mod date_header;
mod diagnostics_panel;
mod log_list;
mod quantity_prompt;
mod search_panel;
mod totals_panel;
mod trend_panel;

pub use date_header::DateHeader;
pub use diagnostics_panel::DiagnosticsPanel;
pub use log_list::LogList;
pub use quantity_prompt::QuantityPrompt;
pub use search_panel::SearchPanel;
pub use totals_panel::TotalsPanel;
pub use trend_panel::TrendPanel;
