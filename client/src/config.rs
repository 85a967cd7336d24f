//! Client configuration resolved at build time.
//!
//! SYSTEM CONTEXT
//! ==============
//! The WASM bundle has no process environment at runtime, so the backend
//! origin is baked in from `AUTHFLOW_API_ORIGIN` when the crate is compiled.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_ORIGIN: &str = "http://localhost:8000";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_origin: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self { api_origin: DEFAULT_API_ORIGIN.to_owned() }
    }
}

impl ClientConfig {
    /// Build config from the compile-time `AUTHFLOW_API_ORIGIN`, falling back
    /// to [`DEFAULT_API_ORIGIN`].
    pub fn from_build_env() -> Self {
        Self { api_origin: normalize_origin(option_env!("AUTHFLOW_API_ORIGIN")) }
    }
}

fn normalize_origin(raw: Option<&str>) -> String {
    let origin = raw.map(str::trim).filter(|v| !v.is_empty()).unwrap_or(DEFAULT_API_ORIGIN);
    origin.trim_end_matches('/').to_owned()
}
