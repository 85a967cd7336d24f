//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (submit, gate, logout) and
//! delegates rendering details to `components`.

pub mod details;
pub mod login;
