//! Log List Component
//!
//! Entries logged on the selected date, with per-entry contributions.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::store::{use_dashboard_store, DashboardStateStoreFields};
use crate::view::{LogListView, LogRow};

#[component]
fn LogRowItem(row: LogRow) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let id = row.id;

    view! {
        <div class="log-item">
            <div>
                <b>{row.name}</b>
                <br />
                <small>{format!("{} serving(s)", row.servings)}</small>
            </div>
            <small>"kcal " {row.calories}</small>
            <small>"P " {row.protein} "g"</small>
            <small>"F " {row.fat} "g"</small>
            <small>"C " {row.carbs} "g"</small>
            <button class="del-btn" title="Delete" on:click=move |_| ctx.delete_entry(id)>
                "❌"
            </button>
        </div>
    }
}

#[component]
pub fn LogList() -> impl IntoView {
    let store = use_dashboard_store();

    view! {
        <section class="log-panel">
            <h2>"Logged Foods"</h2>
            <div id="logList">
                {move || match store.logs().get() {
                    LogListView::Loading => view! { <p class="muted">"Loading..."</p> }.into_any(),
                    LogListView::Empty => {
                        let message = LogListView::Empty.message().unwrap_or_default();
                        view! { <p class="muted">{message}</p> }.into_any()
                    }
                    LogListView::Rows(rows) => rows
                        .into_iter()
                        .map(|row| view! { <LogRowItem row=row /> })
                        .collect_view()
                        .into_any(),
                }}
            </div>
        </section>
    }
}
