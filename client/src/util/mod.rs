//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate route guarding and field validation from page
//! and component rendering to improve reuse and testability.

pub mod auth;
pub mod validate;
