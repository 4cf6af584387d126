use leptos::prelude::*;

/// Canvas host for a chart slot
///
/// The canvas stays mounted for the life of the page; the chart drawn on it
/// is owned by a `ChartSlots` registry keyed by the same id.
#[component]
pub fn ChartCanvas(
    canvas_id: &'static str,
    #[prop(optional)] title: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div class="chart-card">
            {title.map(|t| view! { <h3 class="chart-title">{t}</h3> })}
            <canvas id=canvas_id></canvas>
        </div>
    }
}
