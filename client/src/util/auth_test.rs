use std::cell::RefCell;

use super::*;
use crate::state::session::MemoryStorage;
use crate::test_support::NavLog;

#[test]
fn inactive_session_redirects_with_replace() {
    let view = RefCell::new(DetailsView::Unresolved);
    let session = SessionStore::new(MemoryStorage::default());
    let nav = NavLog::default();

    assert!(!resolve_session_gate(&view, &session, nav.navigator()));
    assert_eq!(*view.borrow(), DetailsView::Redirecting);
    assert!(view.borrow().form().is_none());
    assert_eq!(nav.entries(), vec![("/".to_owned(), true)]);
}

#[test]
fn active_session_renders_prefilled_form() {
    let view = RefCell::new(DetailsView::Unresolved);
    let session = SessionStore::new(MemoryStorage::default());
    session.write("alice").unwrap();
    let nav = NavLog::default();

    assert!(resolve_session_gate(&view, &session, nav.navigator()));
    let view = view.borrow();
    let form = view.form().unwrap();
    assert_eq!(form.username(), "alice");
    assert_eq!(nav.count(), 0);
}

#[test]
fn each_mount_rereads_storage() {
    let session = SessionStore::new(MemoryStorage::default());
    let nav = NavLog::default();
    session.write("alice").unwrap();

    let first = RefCell::new(DetailsView::Unresolved);
    assert!(resolve_session_gate(&first, &session, nav.navigator()));

    session.clear();
    let second = RefCell::new(DetailsView::Unresolved);
    assert!(!resolve_session_gate(&second, &session, nav.navigator()));
    assert_eq!(nav.count(), 1);
}
