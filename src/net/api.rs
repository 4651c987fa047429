//! REST API helpers for the remote identity service.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning errors since credential submission is
//! only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is flattened to a `Result<_, String>` carrying the message
//! the form should display: the service's own `message` when it sent one,
//! otherwise a generic retryable fallback. Nothing here panics.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::Identity;

/// Sign-in endpoint of the identity service.
pub const LOGIN_ENDPOINT: &str = "/api/auth/login";
/// Account-creation endpoint of the identity service.
pub const REGISTER_ENDPOINT: &str = "/api/auth/register";

/// Fallback shown when the service was unreachable or gave no usable
/// failure message.
pub const GENERIC_FAILURE: &str = "Something went wrong";

/// Failure payload optionally carried by a non-2xx response.
#[cfg(any(test, feature = "hydrate"))]
#[derive(Debug, serde::Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

#[cfg(any(test, feature = "hydrate"))]
fn login_payload(email: &str, password: &str) -> serde_json::Value {
    serde_json::json!({ "email": email, "password": password })
}

#[cfg(any(test, feature = "hydrate"))]
fn register_payload(name: &str, email: &str, password: &str) -> serde_json::Value {
    serde_json::json!({ "name": name, "email": email, "password": password })
}

#[cfg(any(test, feature = "hydrate"))]
fn rejection_message(body: Option<ErrorBody>) -> String {
    body.and_then(|body| body.message)
        .unwrap_or_else(|| GENERIC_FAILURE.to_owned())
}

/// Exchange credentials for an identity via `POST /api/auth/login`.
///
/// # Errors
///
/// Returns the service's rejection message on a non-2xx response, or the
/// generic fallback when the service was unreachable or sent no message.
pub async fn login(email: &str, password: &str) -> Result<Identity, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(LOGIN_ENDPOINT)
            .json(&login_payload(email, password))
            .map_err(|_| GENERIC_FAILURE.to_owned())?
            .send()
            .await
            .map_err(|_| GENERIC_FAILURE.to_owned())?;
        if !resp.ok() {
            return Err(rejection_message(resp.json::<ErrorBody>().await.ok()));
        }
        resp.json::<Identity>()
            .await
            .map_err(|_| GENERIC_FAILURE.to_owned())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err("not available on server".to_owned())
    }
}

/// Create an account via `POST /api/auth/register`. Success is an
/// acknowledgement only; no session is issued.
///
/// # Errors
///
/// Returns the service's rejection message on a non-2xx response, or the
/// generic fallback when the service was unreachable or sent no message.
pub async fn register(name: &str, email: &str, password: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(REGISTER_ENDPOINT)
            .json(&register_payload(name, email, password))
            .map_err(|_| GENERIC_FAILURE.to_owned())?
            .send()
            .await
            .map_err(|_| GENERIC_FAILURE.to_owned())?;
        if !resp.ok() {
            return Err(rejection_message(resp.json::<ErrorBody>().await.ok()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (name, email, password);
        Err("not available on server".to_owned())
    }
}
