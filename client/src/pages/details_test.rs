use std::cell::RefCell;
use std::pin::pin;

use futures::executor::block_on;
use futures::poll;

use super::*;
use crate::state::session::{MemoryStorage, SessionState};
use crate::state::toast::ToastVariant;
use crate::test_support::{FakeApi, NavLog, rejected};

fn active_view(email: &str, subject: &str) -> RefCell<DetailsView> {
    let mut view = DetailsView::from_session(&SessionState { is_active: true, username: "alice".to_owned() });
    let form = view.form_mut().unwrap();
    form.email = email.to_owned();
    form.favorite_subject = subject.to_owned();
    RefCell::new(view)
}

fn run(view: &RefCell<DetailsView>, api: &FakeApi) -> (DetailsOutcome, Vec<Toast>) {
    let toasts = RefCell::new(Vec::new());
    let outcome = block_on(submit_details(view, api, |t| toasts.borrow_mut().push(t)));
    (outcome, toasts.into_inner())
}

// =============================================================
// submit_details
// =============================================================

#[test]
fn invalid_details_are_not_sent() {
    let view = active_view("not-an-email", "");
    let api = FakeApi::default();

    let (outcome, toasts) = run(&view, &api);

    assert_eq!(outcome, DetailsOutcome::Blocked(SubmitBlocked::Invalid));
    assert_eq!(api.call_count(), 0);
    assert!(toasts.is_empty());
    let view = view.borrow();
    let form = view.form().unwrap();
    assert_eq!(form.field_error(Field::Email), Some("Please enter a valid Gmail address."));
}

#[test]
fn submit_outside_active_view_is_blocked() {
    let view = RefCell::new(DetailsView::Redirecting);
    let api = FakeApi::default();

    let (outcome, _) = run(&view, &api);

    assert_eq!(outcome, DetailsOutcome::Blocked(SubmitBlocked::Inactive));
    assert_eq!(api.call_count(), 0);
}

#[test]
fn success_sends_payload_resets_fields_and_toasts() {
    let view = active_view("alice@example.org", "Physics");
    let api = FakeApi::replying(Ok(()));

    let (outcome, toasts) = run(&view, &api);

    assert_eq!(outcome, DetailsOutcome::Submitted);
    let sent = api.details_calls.borrow()[0].clone();
    assert_eq!(sent.username, "alice");
    assert_eq!(sent.email, "alice@example.org");
    assert_eq!(sent.favorite_subject, "Physics");

    assert_eq!(toasts, vec![Toast::success(SUBMIT_SUCCESS_TITLE, SUBMIT_SUCCESS_DESCRIPTION)]);
    let view = view.borrow();
    let form = view.form().unwrap();
    assert_eq!(form.username(), "alice");
    assert_eq!(form.email, "");
    assert_eq!(form.favorite_subject, "");
    assert!(!form.is_busy());
}

#[test]
fn rejection_toasts_server_message() {
    let view = active_view("alice@example.org", "Physics");
    let api = FakeApi::replying(Err(rejected(Some("Email already registered"))));

    let (outcome, toasts) = run(&view, &api);

    assert_eq!(outcome, DetailsOutcome::Failed);
    assert_eq!(toasts, vec![Toast::failure(SUBMIT_FAILED_TITLE, "Email already registered")]);
    let view = view.borrow();
    let form = view.form().unwrap();
    assert_eq!(form.email, "alice@example.org");
    assert!(!form.is_busy());
}

#[test]
fn rejection_without_message_uses_fallback() {
    let view = active_view("alice@example.org", "Physics");
    let api = FakeApi::replying(Err(rejected(None)));

    let (_, toasts) = run(&view, &api);

    assert_eq!(toasts[0].description, SUBMIT_FAILED_FALLBACK);
    assert_eq!(toasts[0].variant, ToastVariant::Destructive);
}

#[test]
fn transport_failure_toasts_generic_error() {
    let view = active_view("alice@example.org", "Physics");
    let api = FakeApi::replying(Err(ApiError::Transport("offline".to_owned())));

    let (outcome, toasts) = run(&view, &api);

    assert_eq!(outcome, DetailsOutcome::Failed);
    assert_eq!(toasts, vec![Toast::failure(SUBMIT_ERROR_TITLE, SUBMIT_UNEXPECTED_FALLBACK)]);
    assert!(!view.borrow().form().unwrap().is_busy());
}

#[test]
fn second_submit_while_in_flight_is_ignored() {
    let view = active_view("alice@example.org", "Physics");
    let (api, release) = FakeApi::gated();

    block_on(async {
        let mut first = pin!(submit_details(&view, &api, |_| {}));
        assert!(poll!(first.as_mut()).is_pending());
        assert!(view.borrow().form().unwrap().is_busy());

        let second = submit_details(&view, &api, |_| {}).await;
        assert_eq!(second, DetailsOutcome::Blocked(SubmitBlocked::Busy));
        assert_eq!(api.call_count(), 1);

        release.send(Ok(())).unwrap();
        assert_eq!(first.await, DetailsOutcome::Submitted);
    });

    assert!(!view.borrow().form().unwrap().is_busy());
}

// =============================================================
// logout
// =============================================================

#[test]
fn logout_clears_session_and_navigates_home() {
    let view = active_view("", "");
    let session = SessionStore::new(MemoryStorage::default());
    session.write("alice").unwrap();
    let nav = NavLog::default();
    let api = FakeApi::default();

    logout(&view, &session, nav.navigator());

    assert_eq!(session.read(), SessionState::default());
    assert_eq!(*view.borrow(), DetailsView::Redirecting);
    assert_eq!(nav.entries(), vec![("/".to_owned(), false)]);
    assert_eq!(api.call_count(), 0);
}

#[test]
fn logout_twice_is_harmless() {
    let view = active_view("", "");
    let session = SessionStore::new(MemoryStorage::default());
    session.write("alice").unwrap();
    let nav = NavLog::default();

    logout(&view, &session, nav.navigator());
    logout(&view, &session, nav.navigator());

    assert_eq!(session.read(), SessionState::default());
    assert_eq!(nav.count(), 2);
}
