use std::cell::RefCell;
use std::pin::pin;

use futures::executor::block_on;
use futures::poll;

use super::*;
use crate::net::api::ApiError;
use crate::net::types::Credentials;
use crate::state::session::{MemoryStorage, SessionState};
use crate::test_support::{FakeApi, NavLog, rejected};

fn filled_form(username: &str, password: &str) -> RefCell<AuthForm> {
    RefCell::new(AuthForm::with_credentials(username, password))
}

// =============================================================
// Validation
// =============================================================

#[test]
fn empty_credentials_never_reach_network() {
    for (user, pass) in [("", "pw"), ("alice", ""), ("", "")] {
        let form = filled_form(user, pass);
        let api = FakeApi::default();
        let session = SessionStore::new(MemoryStorage::default());
        let nav = NavLog::default();

        let outcome = block_on(submit_credentials(&form, &api, &session, AuthAction::Login, nav.navigator()));

        assert_eq!(outcome, LoginOutcome::Blocked(SubmitBlocked::Invalid));
        assert_eq!(api.call_count(), 0);
        assert_eq!(nav.count(), 0);
        let form = form.borrow();
        assert!(!form.is_busy());
        assert!(form.field_error(Field::Username).is_some() || form.field_error(Field::Password).is_some());
    }
}

// =============================================================
// Success
// =============================================================

#[test]
fn success_writes_session_and_navigates_once() {
    let form = filled_form("alice", "pw");
    let api = FakeApi::replying(Ok(()));
    let session = SessionStore::new(MemoryStorage::default());
    let nav = NavLog::default();

    let outcome = block_on(submit_credentials(&form, &api, &session, AuthAction::Login, nav.navigator()));

    assert_eq!(outcome, LoginOutcome::Authenticated);
    assert_eq!(session.read(), SessionState { is_active: true, username: "alice".to_owned() });
    assert_eq!(nav.entries(), vec![("/details".to_owned(), false)]);
    assert_eq!(api.login_calls.borrow()[0], Credentials { username: "alice".to_owned(), password: "pw".to_owned() });
    let form = form.borrow();
    assert!(!form.is_busy());
    assert_eq!(form.error(), None);
}

#[test]
fn sign_up_runs_the_same_procedure() {
    let form = filled_form("bob", "pw");
    let api = FakeApi::replying(Ok(()));
    let session = SessionStore::new(MemoryStorage::default());
    let nav = NavLog::default();

    let outcome = block_on(submit_credentials(&form, &api, &session, AuthAction::SignUp, nav.navigator()));

    assert_eq!(outcome, LoginOutcome::Authenticated);
    assert_eq!(api.login_calls.borrow().len(), 1);
    assert_eq!(session.read().identity(), Some("bob"));
}

// =============================================================
// Failures
// =============================================================

#[test]
fn rejection_shows_server_message() {
    let form = filled_form("alice", "wrong");
    let api = FakeApi::replying(Err(rejected(Some("Invalid password"))));
    let session = SessionStore::new(MemoryStorage::default());
    let nav = NavLog::default();

    let outcome = block_on(submit_credentials(&form, &api, &session, AuthAction::Login, nav.navigator()));

    assert_eq!(outcome, LoginOutcome::Failed);
    assert_eq!(form.borrow().error(), Some("Invalid password"));
    assert!(!form.borrow().is_busy());
    assert_eq!(nav.count(), 0);
    assert_eq!(session.read(), SessionState::default());
}

#[test]
fn rejection_without_message_uses_fallback() {
    let form = filled_form("alice", "wrong");
    let api = FakeApi::replying(Err(rejected(None)));
    let session = SessionStore::new(MemoryStorage::default());
    let nav = NavLog::default();

    block_on(submit_credentials(&form, &api, &session, AuthAction::Login, nav.navigator()));

    assert_eq!(form.borrow().error(), Some(LOGIN_FAILED_FALLBACK));
}

#[test]
fn transport_failure_uses_unexpected_fallback() {
    let form = filled_form("alice", "pw");
    let api = FakeApi::replying(Err(ApiError::Transport("offline".to_owned())));
    let session = SessionStore::new(MemoryStorage::default());
    let nav = NavLog::default();

    let outcome = block_on(submit_credentials(&form, &api, &session, AuthAction::Login, nav.navigator()));

    assert_eq!(outcome, LoginOutcome::Failed);
    assert_eq!(form.borrow().error(), Some(LOGIN_UNEXPECTED_FALLBACK));
    assert!(!form.borrow().is_busy());
    assert_eq!(nav.count(), 0);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn session_write_failure_stays_on_page() {
    let form = filled_form("alice", "pw");
    let api = FakeApi::replying(Ok(()));
    let session = SessionStore::browser();
    let nav = NavLog::default();

    let outcome = block_on(submit_credentials(&form, &api, &session, AuthAction::Login, nav.navigator()));

    assert_eq!(outcome, LoginOutcome::Failed);
    assert_eq!(form.borrow().error(), Some(LOGIN_UNEXPECTED_FALLBACK));
    assert_eq!(nav.count(), 0);
}

#[test]
fn retry_after_failure_is_allowed() {
    let form = filled_form("alice", "wrong");
    let session = SessionStore::new(MemoryStorage::default());
    let nav = NavLog::default();

    let api = FakeApi::replying(Err(rejected(Some("Invalid password"))));
    block_on(submit_credentials(&form, &api, &session, AuthAction::Login, nav.navigator()));

    form.borrow_mut().password = "right".to_owned();
    let api = FakeApi::replying(Ok(()));
    let outcome = block_on(submit_credentials(&form, &api, &session, AuthAction::Login, nav.navigator()));

    assert_eq!(outcome, LoginOutcome::Authenticated);
    assert_eq!(form.borrow().error(), None);
}

// =============================================================
// Busy gate
// =============================================================

#[test]
fn second_submit_while_in_flight_is_ignored() {
    let form = filled_form("alice", "pw");
    let (api, release) = FakeApi::gated();
    let session = SessionStore::new(MemoryStorage::default());
    let nav = NavLog::default();

    block_on(async {
        let mut first = pin!(submit_credentials(&form, &api, &session, AuthAction::Login, nav.navigator()));
        assert!(poll!(first.as_mut()).is_pending());
        assert!(form.borrow().is_busy());

        let second = submit_credentials(&form, &api, &session, AuthAction::SignUp, nav.navigator()).await;
        assert_eq!(second, LoginOutcome::Blocked(SubmitBlocked::Busy));
        assert_eq!(api.call_count(), 1);

        release.send(Ok(())).unwrap();
        assert_eq!(first.await, LoginOutcome::Authenticated);
    });

    assert!(!form.borrow().is_busy());
    assert_eq!(nav.count(), 1);
}

#[test]
fn dropping_in_flight_submit_clears_busy() {
    let form = filled_form("alice", "pw");
    let (api, _release) = FakeApi::gated();
    let session = SessionStore::new(MemoryStorage::default());
    let nav = NavLog::default();

    block_on(async {
        let mut pending = Box::pin(submit_credentials(&form, &api, &session, AuthAction::Login, nav.navigator()));
        assert!(poll!(pending.as_mut()).is_pending());
        assert!(form.borrow().is_busy());
        drop(pending);
    });

    assert!(!form.borrow().is_busy());
    assert_eq!(session.read(), SessionState::default());
}
