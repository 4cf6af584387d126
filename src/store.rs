//! Dashboard State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. `StoreView` is
//! the browser-side `DashboardView`: view models land in store fields and
//! chart configs go to the persistent Chart.js slots.

use std::cell::RefCell;

use leptos::prelude::*;
use leptos_chartjs::{ChartConfig, ChartJs, ChartSlots};
use reactive_stores::Store;

use crate::charts::ChartSlot;
use crate::totals::TotalsView;
use crate::view::{DashboardView, LogListView, SearchState};

/// Everything the panels draw, except charts
#[derive(Clone, Debug, Default, Store)]
pub struct DashboardState {
    /// Selected day's log rows
    pub logs: LogListView,
    /// Rounded totals and progress bars
    pub totals: TotalsView,
    /// Search box state and results
    pub search: SearchState,
}

pub type DashboardStore = Store<DashboardState>;

/// Get the dashboard store from context
pub fn use_dashboard_store() -> DashboardStore {
    expect_context::<DashboardStore>()
}

pub struct StoreView {
    store: DashboardStore,
    charts: RefCell<ChartSlots<ChartSlot, ChartJs>>,
}

impl StoreView {
    pub fn new(store: DashboardStore) -> Self {
        Self {
            store,
            charts: RefCell::new(ChartSlots::new(ChartJs)),
        }
    }
}

impl DashboardView for StoreView {
    fn show_logs(&self, logs: LogListView) {
        *self.store.logs().write() = logs;
    }

    fn show_totals(&self, totals: TotalsView) {
        *self.store.totals().write() = totals;
    }

    fn show_search(&self, state: SearchState) {
        *self.store.search().write() = state;
    }

    fn render_chart(&self, slot: ChartSlot, config: ChartConfig) {
        if let Err(e) = self.charts.borrow_mut().render(slot, config) {
            log::error!("[CHART] {:?} not rendered: {}", slot, e);
        }
    }
}
