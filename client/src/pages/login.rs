//! Login / sign-up page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Entry route (`/`). A successful submit writes the session marker and
//! moves on to the gated details page. Both buttons run the same
//! `submit_credentials` procedure against `POST /api/auth/`.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::app::DETAILS_PATH;
use crate::components::floating_label_input::FloatingLabelInput;
use crate::components::form_feedback::{FieldMessage, Spinner};
use crate::config::ClientConfig;
use crate::net::api::{AuthApi, HttpApi};
use crate::state::auth_form::{AuthAction, AuthForm};
use crate::state::session::{KeyValueStore, SessionStore};
use crate::state::submit::{BusyGuard, FormCell, SubmitBlocked};
use crate::util::validate::Field;

pub const LOGIN_FAILED_FALLBACK: &str = "Login failed. Please check your credentials.";
pub const LOGIN_UNEXPECTED_FALLBACK: &str = "An unexpected error occurred. Please try again later.";

/// How one call to [`submit_credentials`] ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoginOutcome {
    /// Session written and navigation to the details page issued.
    Authenticated,
    /// The attempt failed; the inline alert holds the message.
    Failed,
    /// Nothing was sent.
    Blocked(SubmitBlocked),
}

/// Validate, call the auth endpoint, and establish the session on success.
///
/// The session write completes before `navigate` is called, and the form
/// leaves `Submitting` on every exit path.
pub async fn submit_credentials<C, A, S, N>(
    form: &C,
    api: &A,
    session: &SessionStore<S>,
    action: AuthAction,
    navigate: N,
) -> LoginOutcome
where
    C: FormCell<AuthForm>,
    A: AuthApi + ?Sized,
    S: KeyValueStore,
    N: Fn(&str, NavigateOptions),
{
    let credentials = match form.modify(AuthForm::begin_submit) {
        Some(Ok(credentials)) => credentials,
        Some(Err(blocked)) => return LoginOutcome::Blocked(blocked),
        None => return LoginOutcome::Blocked(SubmitBlocked::Detached),
    };
    let busy = BusyGuard::<_, AuthForm>::new(form);
    log::debug!("auth submit started via {}", action.label());

    let message = match api.login(&credentials).await {
        Ok(()) => match session.write(&credentials.username) {
            Ok(()) => {
                drop(busy);
                log::debug!("auth accepted; entering {DETAILS_PATH}");
                navigate(DETAILS_PATH, NavigateOptions::default());
                return LoginOutcome::Authenticated;
            }
            Err(e) => {
                log::debug!("auth accepted but session write failed: {e}");
                LOGIN_UNEXPECTED_FALLBACK.to_owned()
            }
        },
        Err(e) => {
            log::debug!("auth failed: {e}");
            e.display_message(LOGIN_FAILED_FALLBACK, LOGIN_UNEXPECTED_FALLBACK)
        }
    };
    let _ = form.modify(|f| f.show_error(message));
    LoginOutcome::Failed
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let form = RwSignal::new(AuthForm::default());
    let api = HttpApi::new(&ClientConfig::from_build_env());
    let session = SessionStore::browser();
    let navigate = use_navigate();

    let submit = move |action: AuthAction| {
        let api = api.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            submit_credentials(&form, &api, &session, action, navigate).await;
        });
    };

    // The Login button is the form's submit button, so Enter lands here too.
    let submit_login = submit.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        submit_login(AuthAction::Login);
    };
    let submit_sign_up = submit;

    let busy = move || form.with(AuthForm::is_busy);
    let error = move || form.with(|f| f.error().map(str::to_owned));

    view! {
        <div class="auth-card">
            <header class="auth-card__header">
                <h1 class="auth-card__title">"AuthFlow"</h1>
                <p class="auth-card__subtitle">"Enter your credentials to login or sign up"</p>
            </header>
            <form class="auth-form" on:submit=on_submit>
                <FloatingLabelInput
                    id="username"
                    label="Username"
                    icon="user"
                    value=Signal::derive(move || form.with(|f| f.username.clone()))
                    on_input=Callback::new(move |value: String| {
                        form.update(|f| {
                            f.username = value;
                            f.revalidate();
                        });
                    })
                />
                <FieldMessage message=Signal::derive(move || form.with(|f| f.field_error(Field::Username)))/>
                <FloatingLabelInput
                    id="password"
                    label="Password"
                    input_type="password"
                    icon="lock"
                    value=Signal::derive(move || form.with(|f| f.password.clone()))
                    on_input=Callback::new(move |value: String| {
                        form.update(|f| {
                            f.password = value;
                            f.revalidate();
                        });
                    })
                />
                <FieldMessage message=Signal::derive(move || form.with(|f| f.field_error(Field::Password)))/>

                <Show when=move || error().is_some()>
                    <div class="alert alert--destructive" role="alert">
                        <span class="icon icon--alert-triangle"></span>
                        <div class="alert__body">
                            <h5 class="alert__title">"Authentication Failed"</h5>
                            <p class="alert__description">{move || error().unwrap_or_default()}</p>
                        </div>
                        <button
                            type="button"
                            class="alert__dismiss"
                            aria-label="Dismiss"
                            on:click=move |_| form.update(AuthForm::dismiss_error)
                        >
                            "×"
                        </button>
                    </div>
                </Show>

                <div class="auth-form__actions">
                    <button type=AuthAction::Login.button_type() class="btn btn--primary" disabled=busy>
                        <Spinner busy=Signal::derive(busy)/>
                        {AuthAction::Login.label()}
                    </button>
                    <button
                        type=AuthAction::SignUp.button_type()
                        class="btn btn--outline"
                        disabled=busy
                        on:click=move |_| submit_sign_up(AuthAction::SignUp)
                    >
                        <Spinner busy=Signal::derive(busy)/>
                        {AuthAction::SignUp.label()}
                    </button>
                </div>
            </form>
            <footer class="auth-card__footer">"Your journey starts here."</footer>
        </div>
    }
}
