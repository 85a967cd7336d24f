//! Small feedback pieces shared by both forms.

use leptos::prelude::*;

/// Inline validation message under a field; renders nothing when `None`.
#[component]
pub fn FieldMessage(message: Signal<Option<&'static str>>) -> impl IntoView {
    view! {
        <Show when=move || message.get().is_some()>
            <p class="field-message">{move || message.get().unwrap_or_default()}</p>
        </Show>
    }
}

/// Busy indicator shown inside a submit button.
#[component]
pub fn Spinner(busy: Signal<bool>) -> impl IntoView {
    view! {
        <Show when=move || busy.get()>
            <span class="spinner" aria-hidden="true"></span>
        </Show>
    }
}
