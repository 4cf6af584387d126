//! Totals Panel Component
//!
//! Rounded daily totals, goal progress bars and the two daily charts.

use leptos::prelude::*;
use leptos_chartjs::{ChartCanvas, ChartSlotKey};

use crate::charts::ChartSlot;
use crate::store::{use_dashboard_store, DashboardStateStoreFields};
use crate::totals::ProgressBar;

#[component]
fn ProgressRow(bar: ProgressBar) -> impl IntoView {
    view! {
        <div class="progress-row">
            <div class="progress-label">
                <span>{bar.label}</span>
                <span>{format!("{} / {} {}", bar.current, bar.goal, bar.unit)}</span>
            </div>
            <div class="progress-track">
                <div class="progress-fill" style=format!("width: {}%", bar.width_percent)></div>
            </div>
        </div>
    }
}

#[component]
pub fn TotalsPanel() -> impl IntoView {
    let store = use_dashboard_store();
    let totals = move || store.totals().get();

    view! {
        <section class="totals-panel">
            <div class="totals-grid">
                <div class="total">
                    <span id="calTotal">{move || totals().calories}</span>
                    <small>"kcal"</small>
                </div>
                <div class="total">
                    <span id="proTotal">{move || totals().protein}</span>
                    <small>"protein (g)"</small>
                </div>
                <div class="total">
                    <span id="fatTotal">{move || totals().fat}</span>
                    <small>"fat (g)"</small>
                </div>
                <div class="total">
                    <span id="carbTotal">{move || totals().carbs}</span>
                    <small>"carbs (g)"</small>
                </div>
            </div>
            <div class="progress-list">
                {move || totals()
                    .progress
                    .into_iter()
                    .map(|bar| view! { <ProgressRow bar=bar /> })
                    .collect_view()}
            </div>
            <div class="chart-row">
                <ChartCanvas canvas_id=ChartSlot::DailyBar.canvas_id() title="Daily Intake" />
                <ChartCanvas canvas_id=ChartSlot::DailyPie.canvas_id() title="Macro Split" />
            </div>
        </section>
    }
}
