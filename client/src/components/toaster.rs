//! Toast viewport for transient notifications.

#[cfg(test)]
#[path = "toaster_test.rs"]
mod toaster_test;

use leptos::prelude::*;

use crate::state::toast::{ShownToast, Toast, ToastState, ToastVariant};

/// Show `toast` and, in the browser, schedule its dismissal.
pub fn show_toast(toasts: RwSignal<ToastState>, toast: Toast) {
    let id = toasts.try_update(|s| s.push(toast));
    #[cfg(feature = "hydrate")]
    if let Some(id) = id {
        leptos::task::spawn_local(async move {
            let delay = u64::from(crate::state::toast::TOAST_DURATION_MS);
            gloo_timers::future::sleep(std::time::Duration::from_millis(delay)).await;
            toasts.update(|s| s.dismiss(id));
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = id;
}

pub fn toast_class(variant: ToastVariant) -> &'static str {
    match variant {
        ToastVariant::Default => "toast",
        ToastVariant::Destructive => "toast toast--destructive",
    }
}

#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <ol class="toaster" aria-live="polite">
            <For
                each=move || toasts.with(|s| s.visible().to_vec())
                key=|shown| shown.id
                children=move |shown: ShownToast| {
                    let ShownToast { id, toast } = shown;
                    view! {
                        <li class=toast_class(toast.variant) role="status">
                            <div class="toast__title">{toast.title}</div>
                            <div class="toast__description">{toast.description}</div>
                            <button
                                type="button"
                                class="toast__close"
                                aria-label="Close"
                                on:click=move |_| toasts.update(|s| s.dismiss(id))
                            >
                                "×"
                            </button>
                        </li>
                    }
                }
            />
        </ol>
    }
}
