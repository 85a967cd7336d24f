//! REST API client for the auth and details endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Elsewhere: every call fails with `ApiError::Transport`, since these
//! endpoints are only reachable from the browser.
//!
//! ERROR HANDLING
//! ==============
//! A non-OK status with a JSON body is `ApiError::Rejected`; the body's
//! `message` is carried when present. Anything that prevents reading a
//! response (network failure, unreadable, non-JSON or `null` body) is
//! `ApiError::Transport`. A login success must also carry a JSON body. Callers pick user-facing text with
//! `ApiError::display_message`.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use async_trait::async_trait;
use serde::Serialize;

use super::types::{Credentials, ProfileDetails};
#[cfg(any(test, feature = "hydrate"))]
use super::types::ErrorBody;
use crate::config::ClientConfig;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("request rejected with status {status}")]
    Rejected { status: u16, message: Option<String> },
    #[error("transport failure: {0}")]
    Transport(String),
}

impl ApiError {
    /// Text to show the user: the server's message for a rejection that
    /// carried one, otherwise the matching fallback.
    pub fn display_message(&self, rejected_fallback: &str, transport_fallback: &str) -> String {
        match self {
            Self::Rejected { message: Some(message), .. } => message.clone(),
            Self::Rejected { message: None, .. } => rejected_fallback.to_owned(),
            Self::Transport(_) => transport_fallback.to_owned(),
        }
    }
}

/// The two backend operations the forms depend on.
#[async_trait(?Send)]
pub trait AuthApi {
    /// `POST /api/auth/`. The success body must be JSON; its content is
    /// not used.
    async fn login(&self, credentials: &Credentials) -> Result<(), ApiError>;

    /// `POST /api/details/`.
    async fn submit_details(&self, details: &ProfileDetails) -> Result<(), ApiError>;
}

pub fn auth_endpoint(origin: &str) -> String {
    format!("{origin}/api/auth/")
}

pub fn details_endpoint(origin: &str) -> String {
    format!("{origin}/api/details/")
}

/// Classify the body of a non-OK response.
#[cfg(any(test, feature = "hydrate"))]
fn rejection_from_body(status: u16, body: &str) -> ApiError {
    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(serde_json::Value::Null) => ApiError::Transport(format!("null error body ({status})")),
        Ok(value @ serde_json::Value::Object(_)) => {
            let message = serde_json::from_value::<ErrorBody>(value).unwrap_or_default().text();
            ApiError::Rejected { status, message }
        }
        Ok(_) => ApiError::Rejected { status, message: None },
        Err(e) => ApiError::Transport(format!("unreadable error body ({status}): {e}")),
    }
}

/// Check the body of an OK response that is expected to be JSON.
#[cfg(any(test, feature = "hydrate"))]
fn accepted_from_body(body: &str) -> Result<(), ApiError> {
    serde_json::from_str::<serde_json::Value>(body)
        .map(drop)
        .map_err(|e| ApiError::Transport(format!("unreadable success body: {e}")))
}

/// What a 2xx response must contain.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SuccessBody {
    Ignored,
    Json,
}

/// `gloo-net` backed implementation against a fixed origin.
#[derive(Clone, Debug)]
pub struct HttpApi {
    origin: String,
}

impl HttpApi {
    pub fn new(config: &ClientConfig) -> Self {
        Self { origin: config.api_origin.clone() }
    }
}

#[async_trait(?Send)]
impl AuthApi for HttpApi {
    async fn login(&self, credentials: &Credentials) -> Result<(), ApiError> {
        post_json(&auth_endpoint(&self.origin), credentials, SuccessBody::Json).await
    }

    async fn submit_details(&self, details: &ProfileDetails) -> Result<(), ApiError> {
        post_json(&details_endpoint(&self.origin), details, SuccessBody::Ignored).await
    }
}

async fn post_json<T: Serialize>(url: &str, body: &T, success: SuccessBody) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(url)
            .json(body)
            .map_err(|e| ApiError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        if resp.ok() && success == SuccessBody::Ignored {
            return Ok(());
        }
        let status = resp.status();
        let text = resp.text().await.map_err(|e| ApiError::Transport(e.to_string()))?;
        if resp.ok() {
            return accepted_from_body(&text);
        }
        Err(rejection_from_body(status, &text))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (url, body, success);
        Err(ApiError::Transport("not available on server".to_owned()))
    }
}
