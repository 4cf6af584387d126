//! Search Panel Component
//!
//! Food search box and candidate results, each with an add-to-log action.

use leptos::prelude::*;

use super::QuantityPrompt;
use crate::context::AppContext;
use crate::models::SearchResult;
use crate::store::{use_dashboard_store, DashboardStateStoreFields};
use crate::view::{round_display, SearchState};

#[component]
fn SearchResultRow(food: SearchResult) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let name = food.name.clone();
    let (calories, protein, fat, carbs) = (
        round_display(food.calories),
        round_display(food.protein),
        round_display(food.fat),
        round_display(food.carbs),
    );
    let on_confirm = Callback::new(move |quantity: String| ctx.add_result(food.clone(), quantity));

    view! {
        <div class="result-item">
            <div><b>{name}</b></div>
            <small>"kcal: " {calories}</small>
            <small>"P: " {protein} "g"</small>
            <small>"F: " {fat} "g"</small>
            <small>"C: " {carbs} "g"</small>
            <QuantityPrompt on_confirm=on_confirm />
        </div>
    }
}

#[component]
pub fn SearchPanel() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_dashboard_store();
    let (query, set_query) = signal(String::new());

    // Form submit also covers the Enter key
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        ctx.search(query.get_untracked());
    };

    view! {
        <section class="search-panel">
            <form class="search-form" on:submit=on_submit>
                <input
                    type="text"
                    id="searchInput"
                    placeholder="Search food..."
                    prop:value=move || query.get()
                    on:input=move |ev| set_query.set(event_target_value(&ev))
                />
                <button type="submit" id="searchBtn">"Search"</button>
            </form>
            <div id="results" class="results">
                {move || match store.search().get() {
                    SearchState::Results(results) => results
                        .into_iter()
                        .map(|food| view! { <SearchResultRow food=food /> })
                        .collect_view()
                        .into_any(),
                    other => view! {
                        <p class="muted">{other.message().unwrap_or_default()}</p>
                    }
                    .into_any(),
                }}
            </div>
        </section>
    }
}
