//! Dashboard configuration
//!
//! Resolved once at startup. Nutrition goals are fixed and live in
//! `models::Goals`.

use log::LevelFilter;

pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:5000";
pub const DEFAULT_SEARCH_LIMIT: u32 = 6;

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    /// Origin serving `/api/*`
    pub api_base: String,
    pub search_limit: u32,
    pub enrich: bool,
    /// Drop log responses that arrive after a newer request was issued
    pub discard_stale_responses: bool,
    pub log_level: LevelFilter,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            search_limit: DEFAULT_SEARCH_LIMIT,
            enrich: true,
            discard_stale_responses: true,
            log_level: LevelFilter::Info,
        }
    }
}

impl DashboardConfig {
    /// Build-time `NUTRITION_API_BASE`, else the page origin, else the default
    pub fn from_window() -> Self {
        let api_base = option_env!("NUTRITION_API_BASE")
            .map(str::to_string)
            .or_else(window_origin)
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());

        let log_level = option_env!("NUTRITION_LOG_LEVEL")
            .and_then(|v| v.parse::<LevelFilter>().ok())
            .unwrap_or(LevelFilter::Info);

        Self {
            api_base,
            log_level,
            ..Default::default()
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn window_origin() -> Option<String> {
    web_sys::window()?.location().origin().ok()
}

#[cfg(not(target_arch = "wasm32"))]
fn window_origin() -> Option<String> {
    None
}
