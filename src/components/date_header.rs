//! Date Header Component
//!
//! Date picker plus the CSV export link.

use chrono::NaiveDate;
use leptos::prelude::*;

use crate::context::AppContext;
use crate::models::DATE_FORMAT;

#[component]
pub fn DateHeader() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let export_url = ctx.export_url();

    let on_change = move |ev: web_sys::Event| {
        let value = event_target_value(&ev);
        match NaiveDate::parse_from_str(&value, DATE_FORMAT) {
            Ok(date) => ctx.change_date(date),
            Err(_) => log::warn!("[APP] ignoring date input '{}'", value),
        }
    };

    view! {
        <header class="dashboard-header">
            <h1>"Nutrition Dashboard"</h1>
            <div class="header-actions">
                <input
                    type="date"
                    id="datePicker"
                    prop:value=move || ctx.selected_date.get().format(DATE_FORMAT).to_string()
                    on:change=on_change
                />
                // Plain navigation; the browser handles the download
                <a id="exportBtn" class="export-btn" href=export_url>"Export CSV"</a>
            </div>
        </header>
    }
}
