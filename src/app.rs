//! Nutrition Dashboard App
//!
//! Main application component with a two-column layout.

use chrono::Local;
use console_logger::ConsoleLogger;
use leptos::prelude::*;
use reactive_stores::Store;

use crate::api::HttpApi;
use crate::components::{
    DateHeader, DiagnosticsPanel, LogList, SearchPanel, TotalsPanel, TrendPanel,
};
use crate::config::DashboardConfig;
use crate::context::AppContext;
use crate::controllers::Dashboard;
use crate::store::{DashboardState, StoreView};

#[component]
pub fn App(config: DashboardConfig, logger: Option<&'static ConsoleLogger>) -> impl IntoView {
    // State
    let store = Store::new(DashboardState::default());
    provide_context(store);
    let (selected_date, set_selected_date) = signal(Local::now().date_naive());

    let dashboard = Dashboard::new(HttpApi::new(&config.api_base), StoreView::new(store), &config);
    let ctx = AppContext::new(
        (selected_date, set_selected_date),
        StoredValue::new_local(dashboard),
    );
    provide_context(ctx);

    // Effects run after mount, so the chart canvases exist by now
    Effect::new(move |_| {
        ctx.load_initial();
    });

    view! {
        <div class="app-layout">
            <DateHeader />
            <main class="dashboard">
                <div class="column">
                    <SearchPanel />
                    <LogList />
                </div>
                <div class="column">
                    <TotalsPanel />
                    <TrendPanel />
                </div>
            </main>
            {logger.map(|logger| view! { <DiagnosticsPanel logger=logger /> })}
        </div>
    }
}
