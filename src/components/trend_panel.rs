use leptos::prelude::*;
use leptos_chartjs::{ChartCanvas, ChartSlotKey};

use crate::charts::ChartSlot;

/// Weekly trend and monthly totals
#[component]
pub fn TrendPanel() -> impl IntoView {
    view! {
        <section class="trend-panel">
            <ChartCanvas canvas_id=ChartSlot::TrendLine.canvas_id() title="Last Week" />
            <ChartCanvas canvas_id=ChartSlot::MonthlyBar.canvas_id() title="By Month" />
        </section>
    }
}
