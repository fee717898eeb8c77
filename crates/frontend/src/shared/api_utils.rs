//! API plumbing shared by every endpoint module.
//!
//! Resolves the backend base URL and maps HTTP/transport failures into
//! [`ApiError`] carrying the server-provided message where one exists.

use std::fmt;

use gloo_net::http::Response;
use once_cell::unsync::OnceCell;
use serde::de::DeserializeOwned;

/// Window global the host page may set to point the client at a backend.
const API_URL_GLOBAL: &str = "SPEAKER_SHOP_API_URL";

thread_local! {
    static API_BASE: OnceCell<String> = const { OnceCell::new() };
}

/// Get the base URL for API requests.
///
/// Prefers the `SPEAKER_SHOP_API_URL` global when the host page provides
/// one; otherwise derives the URL from the current window location, using
/// port 3000 for the backend server. Resolved once per session.
pub fn api_base() -> String {
    API_BASE.with(|cell| cell.get_or_init(resolve_api_base).clone())
}

fn resolve_api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };

    if let Ok(value) = js_sys::Reflect::get(&window, &wasm_bindgen::JsValue::from_str(API_URL_GLOBAL))
    {
        if let Some(url) = value.as_string() {
            if !url.is_empty() {
                return url.trim_end_matches('/').to_string();
            }
        }
    }

    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

/// Build a full API URL from a path starting with "/".
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

pub fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}

/// Failure of an API call: transport errors carry no status, HTTP errors
/// carry the status plus whatever message the server supplied.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiError {
    pub status: Option<u16>,
    pub message: String,
}

impl ApiError {
    pub fn transport(message: impl Into<String>) -> Self {
        Self {
            status: None,
            message: message.into(),
        }
    }

    /// Client-side failure caught before any network call was made.
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            status: None,
            message: message.into(),
        }
    }

    pub fn http(status: u16, body: &serde_json::Value) -> Self {
        Self {
            status: Some(status),
            message: error_message(status, body),
        }
    }

    /// Session-expiry shaped failure: the token is stale or revoked.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self.status, Some(401) | Some(422))
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ApiError {}

/// Extract the user-facing message from an error body.
///
/// The backend answers with `error` on most failures and `msg` on JWT
/// failures; anything else falls back to a generic status line.
pub fn error_message(status: u16, body: &serde_json::Value) -> String {
    body.get("error")
        .and_then(|v| v.as_str())
        .or_else(|| body.get("msg").and_then(|v| v.as_str()))
        .map(str::to_string)
        .unwrap_or_else(|| format!("HTTP error! status: {}", status))
}

/// Turn a response into `T`, mapping non-success statuses to [`ApiError`].
pub async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();
    if response.ok() {
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::transport(format!("Failed to parse response: {}", e)))
    } else {
        let body = response
            .json::<serde_json::Value>()
            .await
            .unwrap_or(serde_json::Value::Null);
        Err(ApiError::http(status, &body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_message_prefers_error_field() {
        let body: serde_json::Value =
            serde_json::from_str(r#"{"error":"Email already exists","msg":"nope"}"#).unwrap();
        assert_eq!(error_message(400, &body), "Email already exists");
    }

    #[test]
    fn error_message_falls_back_to_msg() {
        let body: serde_json::Value =
            serde_json::from_str(r#"{"msg":"Token has expired"}"#).unwrap();
        assert_eq!(error_message(401, &body), "Token has expired");
    }

    #[test]
    fn error_message_generic_when_body_unusable() {
        assert_eq!(
            error_message(500, &serde_json::Value::Null),
            "HTTP error! status: 500"
        );
        let body: serde_json::Value = serde_json::from_str(r#"{"error":42}"#).unwrap();
        assert_eq!(error_message(502, &body), "HTTP error! status: 502");
    }

    #[test]
    fn unauthorized_detection() {
        let expired = ApiError {
            status: Some(401),
            message: "Token has expired".into(),
        };
        assert!(expired.is_unauthorized());

        let transport = ApiError::transport("connection refused");
        assert!(!transport.is_unauthorized());

        let denied = ApiError {
            status: Some(403),
            message: "Access denied".into(),
        };
        assert!(!denied.is_unauthorized());
    }
}
