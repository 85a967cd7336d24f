//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render form chrome and notifications while reading/writing
//! shared state from Leptos context providers or props.

pub mod floating_label_input;
pub mod form_feedback;
pub mod toaster;
