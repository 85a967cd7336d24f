//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`session`, form state, `toast`) so pages and
//! components depend on small focused models. Everything here is plain data
//! and compiles without a browser.

pub mod auth_form;
pub mod details_form;
pub mod session;
pub mod submit;
pub mod toast;
