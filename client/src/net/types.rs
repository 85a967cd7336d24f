//! Wire types for the auth and details endpoints.
//!
//! DESIGN
//! ======
//! Field names follow the backend's JSON (`favoriteSubject`). Request types
//! are form-local and never persisted.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Login / sign-up request body for `POST /api/auth/`.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Profile request body for `POST /api/details/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileDetails {
    pub username: String,
    pub email: String,
    #[serde(rename = "favoriteSubject")]
    pub favorite_subject: String,
}

/// Optional failure body returned by either endpoint.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<serde_json::Value>,
}

impl ErrorBody {
    /// Displayable message. Non-empty strings are used as-is; non-zero
    /// numbers and `true` are shown in their JSON form. Anything else is
    /// treated as absent.
    pub fn text(&self) -> Option<String> {
        match self.message.as_ref()? {
            serde_json::Value::String(s) if !s.is_empty() => Some(s.clone()),
            serde_json::Value::Number(n) if n.as_f64().is_some_and(|v| v.abs() > 0.0) => Some(n.to_string()),
            serde_json::Value::Bool(true) => Some("true".to_owned()),
            _ => None,
        }
    }
}
