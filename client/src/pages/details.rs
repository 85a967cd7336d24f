//! Gated profile details page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reachable at `/details` only with an active session; otherwise the gate
//! replaces the route with `/` before anything renders. Submissions go to
//! `POST /api/details/` and report through toasts. Logout is purely local.

#[cfg(test)]
#[path = "details_test.rs"]
mod details_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::app::ENTRY_PATH;
use crate::components::floating_label_input::FloatingLabelInput;
use crate::components::form_feedback::{FieldMessage, Spinner};
use crate::components::toaster::show_toast;
use crate::config::ClientConfig;
use crate::net::api::{ApiError, AuthApi, HttpApi};
use crate::state::details_form::{DetailsForm, DetailsView};
use crate::state::session::{KeyValueStore, SessionStore};
use crate::state::submit::{BusyGuard, FormCell, SubmitBlocked};
use crate::state::toast::{Toast, ToastState};
use crate::util::auth::install_session_gate;
use crate::util::validate::Field;

pub const SUBMIT_SUCCESS_TITLE: &str = "Success!";
pub const SUBMIT_SUCCESS_DESCRIPTION: &str = "Your details have been submitted successfully.";
pub const SUBMIT_FAILED_TITLE: &str = "Submission Failed";
pub const SUBMIT_FAILED_FALLBACK: &str = "Could not submit your details.";
pub const SUBMIT_ERROR_TITLE: &str = "Error";
pub const SUBMIT_UNEXPECTED_FALLBACK: &str = "An unexpected error occurred.";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DetailsOutcome {
    Submitted,
    Failed,
    Blocked(SubmitBlocked),
}

/// Validate and send the profile, reporting the result through `notify`.
///
/// On success the editable fields are cleared; the username stays.
pub async fn submit_details<C, A, T>(view: &C, api: &A, notify: T) -> DetailsOutcome
where
    C: FormCell<DetailsView>,
    A: AuthApi + ?Sized,
    T: Fn(Toast),
{
    let details = match view.modify(DetailsView::begin_submit) {
        Some(Ok(details)) => details,
        Some(Err(blocked)) => return DetailsOutcome::Blocked(blocked),
        None => return DetailsOutcome::Blocked(SubmitBlocked::Detached),
    };
    let _busy = BusyGuard::<_, DetailsView>::new(view);
    log::debug!("details submit started");

    match api.submit_details(&details).await {
        Ok(()) => {
            let _ = view.modify(DetailsView::reset_fields);
            notify(Toast::success(SUBMIT_SUCCESS_TITLE, SUBMIT_SUCCESS_DESCRIPTION));
            DetailsOutcome::Submitted
        }
        Err(e) => {
            log::debug!("details submit failed: {e}");
            let toast = match &e {
                ApiError::Rejected { .. } => Toast::failure(
                    SUBMIT_FAILED_TITLE,
                    &e.display_message(SUBMIT_FAILED_FALLBACK, SUBMIT_UNEXPECTED_FALLBACK),
                ),
                ApiError::Transport(_) => Toast::failure(SUBMIT_ERROR_TITLE, SUBMIT_UNEXPECTED_FALLBACK),
            };
            notify(toast);
            DetailsOutcome::Failed
        }
    }
}

/// Tear down the session and return to the entry page. No network call.
pub fn logout<C, S, N>(view: &C, session: &SessionStore<S>, navigate: N)
where
    C: FormCell<DetailsView>,
    S: KeyValueStore,
    N: Fn(&str, NavigateOptions),
{
    session.clear();
    let _ = view.modify(|v| *v = DetailsView::Redirecting);
    log::debug!("logged out");
    navigate(ENTRY_PATH, NavigateOptions::default());
}

#[component]
pub fn DetailsPage() -> impl IntoView {
    let details = RwSignal::new(DetailsView::default());
    let toasts = expect_context::<RwSignal<ToastState>>();
    let session = SessionStore::browser();
    let navigate = use_navigate();
    install_session_gate(details, session, navigate.clone());

    let navigate = StoredValue::new(navigate);
    let api = StoredValue::new(HttpApi::new(&ClientConfig::from_build_env()));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let api = api.get_value();
        leptos::task::spawn_local(async move {
            submit_details(&details, &api, |toast| show_toast(toasts, toast)).await;
        });
    };
    let on_logout = move |_| navigate.with_value(|nav| logout(&details, &session, nav));

    let read = move |pick: fn(&DetailsForm) -> String| details.with(|v| v.form().map(pick).unwrap_or_default());
    let username = move || read(|f| f.username().to_owned());
    let busy = move || details.with(|v| v.form().is_some_and(DetailsForm::is_busy));
    let field_error = move |field: Field| details.with(|v| v.form().and_then(|f| f.field_error(field)));
    let edit = move |apply: fn(&mut DetailsForm, String)| {
        Callback::new(move |value: String| {
            details.update(|v| {
                if let Some(form) = v.form_mut() {
                    apply(form, value);
                    form.revalidate();
                }
            });
        })
    };

    view! {
        <Show when=move || details.with(DetailsView::is_active)>
            <div class="auth-card">
                <header class="auth-card__header auth-card__header--split">
                    <div>
                        <h1 class="auth-card__title">"Welcome, " {username} "!"</h1>
                        <p class="auth-card__subtitle">"Please provide your details below."</p>
                    </div>
                    <button type="button" class="btn btn--ghost btn--icon" aria-label="Log out" on:click=on_logout>
                        <span class="icon icon--log-out"></span>
                    </button>
                </header>
                <form class="auth-form" on:submit=on_submit>
                    <FloatingLabelInput
                        id="username"
                        label="Username"
                        icon="user"
                        value=Signal::derive(username)
                        disabled=true
                    />
                    <FloatingLabelInput
                        id="email"
                        label="Gmail Address"
                        input_type="email"
                        icon="mail"
                        value=Signal::derive(move || read(|f| f.email.clone()))
                        on_input=edit(|f, value| f.email = value)
                    />
                    <FieldMessage message=Signal::derive(move || field_error(Field::Email))/>
                    <FloatingLabelInput
                        id="favoriteSubject"
                        label="Favourite Subject"
                        icon="book"
                        value=Signal::derive(move || read(|f| f.favorite_subject.clone()))
                        on_input=edit(|f, value| f.favorite_subject = value)
                    />
                    <FieldMessage message=Signal::derive(move || field_error(Field::FavoriteSubject))/>
                    <button type="submit" class="btn btn--accent" disabled=busy>
                        <Spinner busy=Signal::derive(busy)/>
                        "Submit Details"
                    </button>
                </form>
            </div>
        </Show>
    }
}
