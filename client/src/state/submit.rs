//! Submission phase shared by both forms.
//!
//! DESIGN
//! ======
//! The phase is an explicit `Idle | Submitting` state rather than a loose
//! boolean. It acts as a mutual-exclusion gate: a second submit while one is
//! in flight is refused, never queued. Controllers reach their form state
//! through `FormCell`, so the same async procedure runs against a Leptos
//! `RwSignal` in the browser and a plain `RefCell` in tests.

#[cfg(test)]
#[path = "submit_test.rs"]
mod submit_test;

use std::cell::RefCell;
use std::marker::PhantomData;

use leptos::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Submitting,
}

impl SubmitPhase {
    pub fn is_busy(self) -> bool {
        matches!(self, Self::Submitting)
    }

    /// Move to `Submitting`. Returns `false` if already submitting.
    pub fn try_begin(&mut self) -> bool {
        if self.is_busy() {
            return false;
        }
        *self = Self::Submitting;
        true
    }
}

/// Why a submit attempt did not reach the network.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitBlocked {
    /// A submission is already outstanding.
    Busy,
    /// Field validation failed; messages are stored on the form.
    Invalid,
    /// The form is not mounted in an active state.
    Inactive,
    /// The backing reactive state was disposed.
    Detached,
}

/// Form state that carries a submit phase.
pub trait Submittable {
    /// Return to `SubmitPhase::Idle`.
    fn settle(&mut self);
}

/// Interior-mutable handle to form state.
pub trait FormCell<F> {
    /// Mutate the form. Returns `None` if the state no longer exists.
    fn modify<R>(&self, f: impl FnOnce(&mut F) -> R) -> Option<R>;
}

impl<F> FormCell<F> for RefCell<F> {
    fn modify<R>(&self, f: impl FnOnce(&mut F) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

impl<F: Send + Sync + 'static> FormCell<F> for RwSignal<F> {
    fn modify<R>(&self, f: impl FnOnce(&mut F) -> R) -> Option<R> {
        self.try_update(f)
    }
}

/// Returns the form to `Idle` when dropped, whichever way the submission
/// ends (success, failure, or the future being dropped mid-flight).
pub struct BusyGuard<'a, C: FormCell<F>, F: Submittable> {
    cell: &'a C,
    _form: PhantomData<fn(&mut F)>,
}

impl<'a, C: FormCell<F>, F: Submittable> BusyGuard<'a, C, F> {
    pub fn new(cell: &'a C) -> Self {
        Self { cell, _form: PhantomData }
    }
}

impl<C: FormCell<F>, F: Submittable> Drop for BusyGuard<'_, C, F> {
    fn drop(&mut self) {
        let _ = self.cell.modify(F::settle);
    }
}
