//! Text input whose label floats out of the way on focus or once filled.
//!
//! DESIGN
//! ======
//! The label position is derived from two observable conditions, focus and
//! non-empty value. Class strings are computed by pure helpers so the
//! transition rules are testable without a DOM.

#[cfg(test)]
#[path = "floating_label_input_test.rs"]
mod floating_label_input_test;

use leptos::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LabelPosition {
    /// Centered over the empty, unfocused input.
    Resting,
    /// Shrunk into the top corner.
    Raised,
}

impl LabelPosition {
    pub fn from_state(has_focus: bool, is_filled: bool) -> Self {
        if has_focus || is_filled { Self::Raised } else { Self::Resting }
    }
}

pub fn label_class(position: LabelPosition, focused: bool, has_icon: bool) -> String {
    let mut class = String::from("floating-input__label");
    class.push_str(match position {
        LabelPosition::Resting => " floating-input__label--resting",
        LabelPosition::Raised => " floating-input__label--raised",
    });
    if focused {
        class.push_str(" floating-input__label--focused");
    }
    class.push_str(if has_icon { " floating-input__label--with-icon" } else { " floating-input__label--plain" });
    class
}

pub fn input_class(has_icon: bool, disabled: bool) -> String {
    let mut class = String::from("floating-input__field");
    class.push_str(if has_icon { " floating-input__field--with-icon" } else { " floating-input__field--plain" });
    if disabled {
        class.push_str(" floating-input__field--readonly");
    }
    class
}

/// Floating-label text input.
///
/// `disabled` renders the read-only variant; `on_input` is ignored there.
/// `icon` names a leading glyph (`icon--{name}`).
#[component]
pub fn FloatingLabelInput(
    #[prop(into)] id: String,
    #[prop(into)] label: String,
    value: Signal<String>,
    #[prop(optional)] on_input: Option<Callback<String>>,
    #[prop(optional, into)] input_type: Option<String>,
    #[prop(optional)] icon: Option<&'static str>,
    #[prop(optional)] disabled: bool,
) -> impl IntoView {
    let focused = RwSignal::new(false);
    let has_icon = icon.is_some();
    let position = move || LabelPosition::from_state(focused.get(), !value.with(String::is_empty));

    view! {
        <div class="floating-input">
            {icon.map(|name| {
                view! { <span class=format!("floating-input__icon icon icon--{name}") aria-hidden="true"></span> }
            })}
            <input
                id=id.clone()
                type=input_type.unwrap_or_else(|| "text".to_owned())
                class=input_class(has_icon, disabled)
                placeholder=" "
                disabled=disabled
                readonly=disabled
                prop:value=move || value.get()
                on:focus=move |_| focused.set(true)
                on:blur=move |_| focused.set(false)
                on:input=move |ev| {
                    if disabled {
                        return;
                    }
                    if let Some(on_input) = on_input {
                        on_input.run(event_target_value(&ev));
                    }
                }
            />
            <label for=id class=move || label_class(position(), focused.get(), has_icon)>
                {label}
            </label>
        </div>
    }
}
