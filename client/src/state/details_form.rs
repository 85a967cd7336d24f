//! Gated details form state.
//!
//! DESIGN
//! ======
//! `DetailsView` is `Unresolved -> {Redirecting | Active}`. The editable
//! form, and therefore its submit phase, only exists inside `Active`, so a
//! submission can never be in flight while the page is redirecting.

#[cfg(test)]
#[path = "details_form_test.rs"]
mod details_form_test;

use super::session::SessionState;
use super::submit::{SubmitBlocked, SubmitPhase, Submittable};
use crate::net::types::ProfileDetails;
use crate::util::validate::{Field, Validation, validate_details};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum DetailsView {
    /// Session not consulted yet (also the SSR state). Renders nothing.
    #[default]
    Unresolved,
    /// No session; navigation back to the entry page is underway.
    Redirecting,
    Active(DetailsForm),
}

impl DetailsView {
    /// Resolve the gate from a freshly read session.
    pub fn from_session(session: &SessionState) -> Self {
        match session.identity() {
            Some(username) => Self::Active(DetailsForm::new(username)),
            None => Self::Redirecting,
        }
    }

    pub fn form(&self) -> Option<&DetailsForm> {
        match self {
            Self::Active(form) => Some(form),
            _ => None,
        }
    }

    pub fn form_mut(&mut self) -> Option<&mut DetailsForm> {
        match self {
            Self::Active(form) => Some(form),
            _ => None,
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active(_))
    }

    /// # Errors
    ///
    /// `SubmitBlocked::Inactive` unless the view is `Active`; otherwise see
    /// [`DetailsForm::begin_submit`].
    pub fn begin_submit(&mut self) -> Result<ProfileDetails, SubmitBlocked> {
        self.form_mut().ok_or(SubmitBlocked::Inactive)?.begin_submit()
    }

    /// Clear the editable fields after a successful submit.
    pub fn reset_fields(&mut self) {
        if let Some(form) = self.form_mut() {
            form.reset();
        }
    }
}

impl Submittable for DetailsView {
    fn settle(&mut self) {
        if let Some(form) = self.form_mut() {
            form.phase = SubmitPhase::Idle;
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DetailsForm {
    username: String,
    pub email: String,
    pub favorite_subject: String,
    phase: SubmitPhase,
    validation: Validation,
    attempted: bool,
}

impl DetailsForm {
    pub fn new(username: &str) -> Self {
        Self { username: username.to_owned(), ..Self::default() }
    }

    /// Session username; always rendered read-only.
    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn is_busy(&self) -> bool {
        self.phase.is_busy()
    }

    pub fn field_error(&self, field: Field) -> Option<&'static str> {
        self.validation.message_for(field)
    }

    /// Recompute field errors after an edit, once a submit has been tried.
    pub fn revalidate(&mut self) {
        if self.attempted {
            self.validation = validate_details(&self.email, &self.favorite_subject);
        }
    }

    /// # Errors
    ///
    /// `SubmitBlocked::Busy` while a submission is outstanding,
    /// `SubmitBlocked::Invalid` when a field fails validation.
    pub fn begin_submit(&mut self) -> Result<ProfileDetails, SubmitBlocked> {
        if self.phase.is_busy() {
            return Err(SubmitBlocked::Busy);
        }
        self.attempted = true;
        self.validation = validate_details(&self.email, &self.favorite_subject);
        if !self.validation.is_empty() {
            return Err(SubmitBlocked::Invalid);
        }
        self.phase.try_begin();
        Ok(ProfileDetails {
            username: self.username.clone(),
            email: self.email.clone(),
            favorite_subject: self.favorite_subject.clone(),
        })
    }

    pub fn reset(&mut self) {
        self.email.clear();
        self.favorite_subject.clear();
        self.validation = Validation::default();
        self.attempted = false;
    }
}
