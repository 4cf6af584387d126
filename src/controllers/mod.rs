//! View Controllers
//!
//! Fetch-then-render orchestration for each region of the dashboard.
//! Controllers share no mutable state; the selected date is passed into
//! every call instead of being read from a global.

mod aggregate;
mod daily;
mod search;

use std::rc::Rc;

use chrono::NaiveDate;

use crate::api::NutritionApi;
use crate::config::DashboardConfig;
use crate::view::DashboardView;

pub use aggregate::AggregateController;
pub use daily::DailyController;
pub use search::SearchController;

/// All controllers wired over one gateway and one view
pub struct Dashboard<A, V> {
    pub daily: DailyController<A, V>,
    pub trend: AggregateController<A, V>,
    pub monthly: AggregateController<A, V>,
    pub search: SearchController<A, V>,
    api: Rc<A>,
}

impl<A, V> Clone for Dashboard<A, V> {
    fn clone(&self) -> Self {
        Self {
            daily: self.daily.clone(),
            trend: self.trend.clone(),
            monthly: self.monthly.clone(),
            search: self.search.clone(),
            api: Rc::clone(&self.api),
        }
    }
}

impl<A: NutritionApi, V: DashboardView> Dashboard<A, V> {
    pub fn new(api: A, view: V, config: &DashboardConfig) -> Self {
        let api = Rc::new(api);
        let view = Rc::new(view);

        let trend = AggregateController::weekly_trend(Rc::clone(&api), Rc::clone(&view));
        let monthly = AggregateController::monthly(Rc::clone(&api), Rc::clone(&view));
        let daily = DailyController::new(
            Rc::clone(&api),
            Rc::clone(&view),
            config.discard_stale_responses,
            trend.clone(),
            monthly.clone(),
        );
        let search = SearchController::new(Rc::clone(&api), view, daily.clone(), config);

        Self {
            daily,
            trend,
            monthly,
            search,
            api,
        }
    }

    /// First paint: the day's log plus both aggregate windows
    pub async fn load_initial(&self, date: NaiveDate) {
        log::info!("[DASHBOARD] initial load for {}", date);
        futures::join!(
            self.daily.refresh_logs(date),
            self.trend.refresh(),
            self.monthly.refresh()
        );
    }

    pub fn export_url(&self) -> String {
        self.api.export_url()
    }
}
