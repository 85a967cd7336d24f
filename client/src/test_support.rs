//! Fakes shared by controller tests.

use std::cell::{Cell, RefCell};

use async_trait::async_trait;
use futures::channel::oneshot;
use leptos_router::NavigateOptions;

use crate::net::api::{ApiError, AuthApi};
use crate::net::types::{Credentials, ProfileDetails};

type Reply = Result<(), ApiError>;

/// Scripted `AuthApi` that records every call.
#[derive(Default)]
pub(crate) struct FakeApi {
    reply: RefCell<Option<Reply>>,
    gate: RefCell<Option<oneshot::Receiver<Reply>>>,
    pub login_calls: RefCell<Vec<Credentials>>,
    pub details_calls: RefCell<Vec<ProfileDetails>>,
}

impl FakeApi {
    pub fn replying(reply: Reply) -> Self {
        Self { reply: RefCell::new(Some(reply)), ..Self::default() }
    }

    /// The first call waits until the returned sender fires.
    pub fn gated() -> (Self, oneshot::Sender<Reply>) {
        let (tx, rx) = oneshot::channel();
        (Self { gate: RefCell::new(Some(rx)), ..Self::default() }, tx)
    }

    pub fn call_count(&self) -> usize {
        self.login_calls.borrow().len() + self.details_calls.borrow().len()
    }

    async fn respond(&self) -> Reply {
        let gate = self.gate.borrow_mut().take();
        if let Some(rx) = gate {
            return rx.await.unwrap_or_else(|_| Err(ApiError::Transport("gate dropped".to_owned())));
        }
        self.reply.borrow().clone().unwrap_or(Ok(()))
    }
}

#[async_trait(?Send)]
impl AuthApi for FakeApi {
    async fn login(&self, credentials: &Credentials) -> Result<(), ApiError> {
        self.login_calls.borrow_mut().push(credentials.clone());
        self.respond().await
    }

    async fn submit_details(&self, details: &ProfileDetails) -> Result<(), ApiError> {
        self.details_calls.borrow_mut().push(details.clone());
        self.respond().await
    }
}

/// Records `(path, replace)` for each navigation.
#[derive(Default)]
pub(crate) struct NavLog {
    entries: RefCell<Vec<(String, bool)>>,
    calls: Cell<usize>,
}

impl NavLog {
    pub fn navigator(&self) -> impl Fn(&str, NavigateOptions) + '_ {
        move |path: &str, options: NavigateOptions| {
            self.calls.set(self.calls.get() + 1);
            self.entries.borrow_mut().push((path.to_owned(), options.replace));
        }
    }

    pub fn entries(&self) -> Vec<(String, bool)> {
        self.entries.borrow().clone()
    }

    pub fn count(&self) -> usize {
        self.calls.get()
    }
}

pub(crate) fn rejected(message: Option<&str>) -> ApiError {
    ApiError::Rejected { status: 401, message: message.map(str::to_owned) }
}
