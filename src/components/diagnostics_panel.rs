//! Diagnostics Panel Component
//!
//! Collapsible view of the logger's recent lines. Failed requests only show
//! up here and in the devtools console.

use console_logger::ConsoleLogger;
use leptos::prelude::*;

const SHOWN_LINES: usize = 50;

#[component]
pub fn DiagnosticsPanel(logger: &'static ConsoleLogger) -> impl IntoView {
    let (lines, set_lines) = signal(Vec::<String>::new());
    let reload = move || set_lines.set(logger.tail(SHOWN_LINES));

    view! {
        <details class="diagnostics" on:toggle=move |_| reload()>
            <summary>"Diagnostics"</summary>
            <div class="diagnostics-actions">
                <button type="button" on:click=move |_| reload()>"Reload"</button>
                <button
                    type="button"
                    on:click=move |_| {
                        logger.clear();
                        set_lines.set(Vec::new());
                    }
                >
                    "Clear"
                </button>
            </div>
            <Show
                when=move || lines.with(|l| !l.is_empty())
                fallback=|| view! { <p class="muted">"Nothing logged yet."</p> }
            >
                <pre class="diagnostics-log">{move || lines.get().join("\n")}</pre>
            </Show>
        </details>
    }
}
