//! Daily View Controller
//!
//! Log list, totals, daily charts and the add/delete mutation flow.
//! Every operation takes the selected date explicitly. Mutations also take
//! a reader for the selected date, consulted once the server has answered,
//! so the follow-up refresh targets the day on screen.

use std::cell::Cell;
use std::rc::Rc;

use chrono::NaiveDate;

use super::AggregateController;
use crate::api::NutritionApi;
use crate::charts::{self, ChartSlot};
use crate::models::{DailyTotals, Goals, NewLogEntry, SearchResult};
use crate::quantity::coerce_quantity;
use crate::totals::TotalsView;
use crate::view::{DashboardView, LogListView};

/// Monotonic counter identifying the newest log request
#[derive(Debug, Default)]
struct RequestGeneration {
    latest: Cell<u64>,
}

impl RequestGeneration {
    fn issue(&self) -> u64 {
        let next = self.latest.get() + 1;
        self.latest.set(next);
        next
    }

    fn is_current(&self, generation: u64) -> bool {
        self.latest.get() == generation
    }
}

pub struct DailyController<A, V> {
    api: Rc<A>,
    view: Rc<V>,
    generation: Rc<RequestGeneration>,
    discard_stale: bool,
    trend: AggregateController<A, V>,
    monthly: AggregateController<A, V>,
}

impl<A, V> Clone for DailyController<A, V> {
    fn clone(&self) -> Self {
        Self {
            api: Rc::clone(&self.api),
            view: Rc::clone(&self.view),
            generation: Rc::clone(&self.generation),
            discard_stale: self.discard_stale,
            trend: self.trend.clone(),
            monthly: self.monthly.clone(),
        }
    }
}

impl<A: NutritionApi, V: DashboardView> DailyController<A, V> {
    pub fn new(
        api: Rc<A>,
        view: Rc<V>,
        discard_stale: bool,
        trend: AggregateController<A, V>,
        monthly: AggregateController<A, V>,
    ) -> Self {
        Self {
            api,
            view,
            generation: Rc::new(RequestGeneration::default()),
            discard_stale,
            trend,
            monthly,
        }
    }

    pub async fn on_date_change(&self, date: NaiveDate) {
        log::debug!("[DAILY] date changed to {}", date);
        self.refresh_logs(date).await;
    }

    /// Fetch the day's log and redraw the list, totals and daily charts
    pub async fn refresh_logs(&self, date: NaiveDate) {
        let generation = self.generation.issue();
        let log = match self.api.logs_by_date(date).await {
            Ok(log) => log,
            Err(e) => {
                log::error!("[DAILY] failed to load logs for {}: {}", date, e);
                return;
            }
        };

        if self.discard_stale && !self.generation.is_current(generation) {
            log::warn!("[DAILY] dropping stale response for {}", date);
            return;
        }
        if !log.summed_totals().approx_eq(&log.totals) {
            log::warn!(
                "[DAILY] server totals {:?} differ from entry sum {:?}",
                log.totals,
                log.summed_totals()
            );
        }

        log::debug!(
            "[DAILY] {} entries for {}",
            log.entries.len(),
            log.date.as_deref().unwrap_or("?")
        );
        self.view.show_logs(LogListView::from_entries(&log.entries));
        self.render_totals(&log.totals);
    }

    /// Displays, progress bars and both daily charts from server totals
    pub fn render_totals(&self, totals: &DailyTotals) {
        self.view.show_totals(TotalsView::new(totals, &Goals::DEFAULT));
        self.view.render_chart(ChartSlot::DailyBar, charts::daily_bar(totals));
        self.view.render_chart(ChartSlot::DailyPie, charts::daily_pie(totals));
    }

    /// Log `food` on `date`; `quantity_input` goes through the coercion rule
    pub async fn add_entry(
        &self,
        date: NaiveDate,
        food: &SearchResult,
        quantity_input: Option<&str>,
        current_date: impl Fn() -> NaiveDate,
    ) {
        let entry = NewLogEntry::from_search_result(food, coerce_quantity(quantity_input), date);
        log::info!("[DAILY] logging {} x{} on {}", entry.name, entry.quantity, date);

        if let Err(e) = self.api.create_log(&entry).await {
            log::error!("[DAILY] failed to log {}: {}", entry.name, e);
            return;
        }
        self.refresh_after_mutation(current_date()).await;
    }

    pub async fn delete_entry(&self, id: u32, current_date: impl Fn() -> NaiveDate) {
        log::info!("[DAILY] deleting entry {}", id);

        if let Err(e) = self.api.delete_log(id).await {
            log::error!("[DAILY] failed to delete entry {}: {}", id, e);
            return;
        }
        self.refresh_after_mutation(current_date()).await;
    }

    /// Issued as logs, trend, monthly; they complete in any order
    async fn refresh_after_mutation(&self, date: NaiveDate) {
        futures::join!(
            self.refresh_logs(date),
            self.trend.refresh(),
            self.monthly.refresh()
        );
    }
}
