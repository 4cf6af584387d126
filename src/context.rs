//! Application Context
//!
//! Shared handles provided via Leptos Context API. Every action reads the
//! selected date at the moment it fires and hands it to the controllers by
//! value; mutations also hand over a reader so their follow-up refresh sees
//! the date selected once the server has answered.

use chrono::NaiveDate;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::HttpApi;
use crate::controllers::Dashboard;
use crate::models::SearchResult;
use crate::store::StoreView;

pub type AppDashboard = Dashboard<HttpApi, StoreView>;

#[derive(Clone, Copy)]
pub struct AppContext {
    /// Selected day - read
    pub selected_date: ReadSignal<NaiveDate>,
    /// Selected day - write
    set_selected_date: WriteSignal<NaiveDate>,
    dashboard: StoredValue<AppDashboard, LocalStorage>,
}

impl AppContext {
    pub fn new(
        selected_date: (ReadSignal<NaiveDate>, WriteSignal<NaiveDate>),
        dashboard: StoredValue<AppDashboard, LocalStorage>,
    ) -> Self {
        Self {
            selected_date: selected_date.0,
            set_selected_date: selected_date.1,
            dashboard,
        }
    }

    fn dashboard(&self) -> AppDashboard {
        self.dashboard.get_value()
    }

    pub fn load_initial(&self) {
        let dashboard = self.dashboard();
        let date = self.selected_date.get_untracked();
        spawn_local(async move {
            dashboard.load_initial(date).await;
        });
    }

    pub fn change_date(&self, date: NaiveDate) {
        self.set_selected_date.set(date);
        let dashboard = self.dashboard();
        spawn_local(async move {
            dashboard.daily.on_date_change(date).await;
        });
    }

    pub fn search(&self, query: String) {
        let dashboard = self.dashboard();
        spawn_local(async move {
            dashboard.search.search(&query).await;
        });
    }

    pub fn add_result(&self, food: SearchResult, quantity: String) {
        let dashboard = self.dashboard();
        let selected_date = self.selected_date;
        let date = selected_date.get_untracked();
        spawn_local(async move {
            dashboard
                .search
                .add_result(date, &food, Some(&quantity), move || {
                    selected_date.get_untracked()
                })
                .await;
        });
    }

    pub fn delete_entry(&self, id: u32) {
        let dashboard = self.dashboard();
        let selected_date = self.selected_date;
        spawn_local(async move {
            dashboard
                .daily
                .delete_entry(id, move || selected_date.get_untracked())
                .await;
        });
    }

    pub fn export_url(&self) -> String {
        self.dashboard.with_value(|dashboard| dashboard.export_url())
    }
}
