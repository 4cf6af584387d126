//! Quantity Prompt Component
//!
//! Inline, non-blocking replacement for `prompt("Quantity?")`.

use leptos::prelude::*;

const DEFAULT_INPUT: &str = "1";

/// Open/closed state plus the text typed so far
#[derive(Clone, Debug, PartialEq)]
struct QuantityDraft {
    open: bool,
    text: String,
}

impl Default for QuantityDraft {
    fn default() -> Self {
        Self {
            open: false,
            text: String::from(DEFAULT_INPUT),
        }
    }
}

impl QuantityDraft {
    fn opened() -> Self {
        Self {
            open: true,
            ..Self::default()
        }
    }

    /// Closes the prompt and yields the text for `on_confirm`
    fn submit(&mut self) -> String {
        std::mem::take(self).text
    }

    /// Closes without confirming; the typed text is discarded
    fn cancel(&mut self) {
        *self = Self::default();
    }
}

/// Shows an "Add" button. When clicked, shows a quantity field with ✓/✗.
///
/// The raw text is handed to `on_confirm`; coercion happens downstream.
#[component]
pub fn QuantityPrompt(#[prop(into)] on_confirm: Callback<String>) -> impl IntoView {
    let (draft, set_draft) = signal(QuantityDraft::default());

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let mut text = String::new();
        set_draft.update(|draft| text = draft.submit());
        on_confirm.run(text);
    };

    view! {
        <Show when=move || !draft.with(|d| d.open)>
            <button class="add-btn" on:click=move |_| set_draft.set(QuantityDraft::opened())>
                "Add"
            </button>
        </Show>
        <Show when=move || draft.with(|d| d.open)>
            <form class="quantity-prompt" on:submit=submit>
                <label>"Quantity?"</label>
                <input
                    type="text"
                    inputmode="decimal"
                    prop:value=move || draft.with(|d| d.text.clone())
                    on:input=move |ev| set_draft.update(|d| d.text = event_target_value(&ev))
                />
                <button type="submit" class="confirm-btn">"✓"</button>
                <button
                    type="button"
                    class="cancel-btn"
                    on:click=move |_| set_draft.update(QuantityDraft::cancel)
                >
                    "✗"
                </button>
            </form>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cancel_resets_typed_quantity() {
        let mut draft = QuantityDraft::opened();
        draft.text = "5".to_string();

        draft.cancel();
        assert_eq!(draft, QuantityDraft::default());

        let reopened = QuantityDraft::opened();
        assert_eq!(reopened.text, "1");
    }

    #[test]
    fn test_submit_yields_text_and_closes() {
        let mut draft = QuantityDraft::opened();
        draft.text = "2.5".to_string();

        assert_eq!(draft.submit(), "2.5");
        assert!(!draft.open);
        assert_eq!(draft.text, "1");
    }
}
