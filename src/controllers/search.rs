//! Search Controller

use std::rc::Rc;

use chrono::NaiveDate;

use super::DailyController;
use crate::api::{NutritionApi, SearchQuery};
use crate::config::DashboardConfig;
use crate::models::SearchResult;
use crate::view::{DashboardView, SearchState};

pub struct SearchController<A, V> {
    api: Rc<A>,
    view: Rc<V>,
    daily: DailyController<A, V>,
    enrich: bool,
    limit: u32,
}

impl<A, V> Clone for SearchController<A, V> {
    fn clone(&self) -> Self {
        Self {
            api: Rc::clone(&self.api),
            view: Rc::clone(&self.view),
            daily: self.daily.clone(),
            enrich: self.enrich,
            limit: self.limit,
        }
    }
}

impl<A: NutritionApi, V: DashboardView> SearchController<A, V> {
    pub fn new(
        api: Rc<A>,
        view: Rc<V>,
        daily: DailyController<A, V>,
        config: &DashboardConfig,
    ) -> Self {
        Self {
            api,
            view,
            daily,
            enrich: config.enrich,
            limit: config.search_limit,
        }
    }

    /// Blank queries are a no-op: no request, no view change
    pub async fn search(&self, raw: &str) {
        let Some(query) = SearchQuery::new(raw, self.enrich, self.limit) else {
            log::debug!("[SEARCH] blank query ignored");
            return;
        };

        self.view.show_search(SearchState::Searching);
        let state = match self.api.search(&query).await {
            Ok(results) if results.is_empty() => SearchState::NoResults,
            Ok(results) => SearchState::Results(results),
            Err(e) => {
                log::error!("[SEARCH] '{}' failed: {}", query.text, e);
                SearchState::Failed
            }
        };
        self.view.show_search(state);
    }

    /// "Add" on a result row; logs against `date`, the day selected at click time
    pub async fn add_result(
        &self,
        date: NaiveDate,
        food: &SearchResult,
        quantity_input: Option<&str>,
        current_date: impl Fn() -> NaiveDate,
    ) {
        self.daily
            .add_entry(date, food, quantity_input, current_date)
            .await;
    }
}
