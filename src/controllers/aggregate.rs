//! Trend and Monthly Controllers
//!
//! Same flow over different windows: fetch the aggregate series and feed
//! the slot's chart. No dependency on the selected date.

use std::rc::Rc;

use crate::api::NutritionApi;
use crate::charts::{self, ChartSlot};
use crate::models::AggregateWindow;
use crate::view::DashboardView;

pub struct AggregateController<A, V> {
    api: Rc<A>,
    view: Rc<V>,
    window: AggregateWindow,
    slot: ChartSlot,
}

impl<A, V> Clone for AggregateController<A, V> {
    fn clone(&self) -> Self {
        Self {
            api: Rc::clone(&self.api),
            view: Rc::clone(&self.view),
            window: self.window,
            slot: self.slot,
        }
    }
}

impl<A: NutritionApi, V: DashboardView> AggregateController<A, V> {
    /// Week window on the line chart
    pub fn weekly_trend(api: Rc<A>, view: Rc<V>) -> Self {
        Self {
            api,
            view,
            window: AggregateWindow::Week,
            slot: ChartSlot::TrendLine,
        }
    }

    /// Month window on the bar chart
    pub fn monthly(api: Rc<A>, view: Rc<V>) -> Self {
        Self {
            api,
            view,
            window: AggregateWindow::Month,
            slot: ChartSlot::MonthlyBar,
        }
    }

    /// On failure the previous chart stays on screen
    pub async fn refresh(&self) {
        match self.api.aggregate(self.window).await {
            Ok(points) => {
                log::debug!("[{:?}] {} points", self.window, points.len());
                let config = match self.window {
                    AggregateWindow::Week => charts::trend_line(&points),
                    AggregateWindow::Month => charts::monthly_bar(&points),
                };
                self.view.render_chart(self.slot, config);
            }
            Err(e) => log::error!("[{:?}] failed to load aggregate: {}", self.window, e),
        }
    }
}
