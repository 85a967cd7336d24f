//! Networking modules for the two backend REST endpoints.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the requests and classifies failures, `types` defines the
//! JSON wire schema.

pub mod api;
pub mod types;
