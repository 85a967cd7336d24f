//! Session gate for routes that require an active session.
//!
//! SYSTEM CONTEXT
//! ==============
//! Gated pages call `install_session_gate` once per mount. The session is
//! read from storage every time; nothing is cached across mounts.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::app::ENTRY_PATH;
use crate::state::details_form::DetailsView;
use crate::state::session::{KeyValueStore, SessionStore};
use crate::state::submit::FormCell;

/// Resolve `Unresolved` into `Active` or `Redirecting` from the stored
/// session, replacing the history entry with `/` when there is none.
/// Returns whether the page may render.
pub fn resolve_session_gate<C, S, N>(view: &C, session: &SessionStore<S>, navigate: N) -> bool
where
    C: FormCell<DetailsView>,
    S: KeyValueStore,
    N: Fn(&str, NavigateOptions),
{
    let next = DetailsView::from_session(&session.read());
    let allowed = next.is_active();
    let _ = view.modify(|v| *v = next);
    if !allowed {
        log::debug!("no active session; redirecting to {ENTRY_PATH}");
        navigate(ENTRY_PATH, NavigateOptions { replace: true, ..NavigateOptions::default() });
    }
    allowed
}

/// Run [`resolve_session_gate`] after mount. Effects only run in the
/// browser, so server rendering leaves the view `Unresolved`.
pub fn install_session_gate<S, F>(view: RwSignal<DetailsView>, session: SessionStore<S>, navigate: F)
where
    S: KeyValueStore + 'static,
    F: Fn(&str, NavigateOptions) + 'static,
{
    Effect::new(move || {
        resolve_session_gate(&view, &session, &navigate);
    });
}
