//! Login / sign-up form state.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owned by the login page as an `RwSignal`. The async submit procedure in
//! `pages::login` drives the transitions defined here.

#[cfg(test)]
#[path = "auth_form_test.rs"]
mod auth_form_test;

use super::submit::{SubmitBlocked, SubmitPhase, Submittable};
use crate::net::types::Credentials;
use crate::util::validate::{Field, Validation, validate_credentials};

/// Which button triggered the submit. Both run the same procedure against
/// the same endpoint; the variant only changes the label.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthAction {
    Login,
    SignUp,
}

impl AuthAction {
    pub fn label(self) -> &'static str {
        match self {
            Self::Login => "Login",
            Self::SignUp => "Sign Up",
        }
    }

    /// HTML button type. Login doubles as the form's submit button.
    pub fn button_type(self) -> &'static str {
        match self {
            Self::Login => "submit",
            Self::SignUp => "button",
        }
    }
}

#[derive(Clone, Default)]
pub struct AuthForm {
    pub username: String,
    pub password: String,
    phase: SubmitPhase,
    validation: Validation,
    /// Set by the first submit; field errors then track every edit.
    attempted: bool,
    error: Option<String>,
}

impl std::fmt::Debug for AuthForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthForm")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("phase", &self.phase)
            .field("validation", &self.validation)
            .field("attempted", &self.attempted)
            .field("error", &self.error)
            .finish()
    }
}

impl AuthForm {
    pub(crate) fn with_credentials(username: &str, password: &str) -> Self {
        Self { username: username.to_owned(), password: password.to_owned(), ..Self::default() }
    }

    pub fn is_busy(&self) -> bool {
        self.phase.is_busy()
    }

    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    /// Inline alert text from the last failed attempt.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn field_error(&self, field: Field) -> Option<&'static str> {
        self.validation.message_for(field)
    }

    /// Recompute field errors after an edit. No-op before the first submit.
    pub fn revalidate(&mut self) {
        if self.attempted {
            self.validation = validate_credentials(&self.username, &self.password);
        }
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    pub(crate) fn show_error(&mut self, message: String) {
        self.error = Some(message);
    }

    /// Validate and enter `Submitting`, yielding the request payload.
    ///
    /// # Errors
    ///
    /// `SubmitBlocked::Busy` while a submission is outstanding (state left
    /// untouched), `SubmitBlocked::Invalid` when a field fails validation.
    pub fn begin_submit(&mut self) -> Result<Credentials, SubmitBlocked> {
        if self.phase.is_busy() {
            return Err(SubmitBlocked::Busy);
        }
        self.attempted = true;
        self.validation = validate_credentials(&self.username, &self.password);
        if !self.validation.is_empty() {
            return Err(SubmitBlocked::Invalid);
        }
        self.phase.try_begin();
        self.error = None;
        Ok(Credentials { username: self.username.clone(), password: self.password.clone() })
    }
}

impl Submittable for AuthForm {
    fn settle(&mut self) {
        self.phase = SubmitPhase::Idle;
    }
}
