use reqwest::header::{HeaderMap, AUTHORIZATION};
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::api::types::ApiError;
use crate::config;
use crate::utils::storage as storage_utils;

/// Local storage key the hosted sign-in flow stores the bearer token under.
pub const ACCESS_TOKEN_KEY: &str = "access_token";
/// Local storage key holding the serialized signed-in user.
pub const CURRENT_USER_KEY: &str = "current_user";

/// Thin wrapper around `reqwest` with one method per backend operation.
/// Tokens are short-lived, so the bearer token is read fresh from the
/// identity snapshot immediately before every request, never cached here.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
    token_override: Option<String>,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
            token_override: None,
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(base_url.into()),
            token_override: None,
        }
    }

    /// Fixed token for host-side tests, where no browser storage exists.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token_override = Some(token.into());
        self
    }

    pub(crate) fn http_client(&self) -> &Client {
        &self.client
    }

    pub(crate) async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.clone()
        } else {
            config::await_api_base_url().await
        }
    }

    fn fresh_token(&self) -> Result<String, ApiError> {
        if let Some(token) = &self.token_override {
            return Ok(token.clone());
        }
        let storage = storage_utils::local_storage().map_err(ApiError::unknown)?;
        storage
            .get_item(ACCESS_TOKEN_KEY)
            .map_err(|_| ApiError::unknown("Failed to read token"))?
            .ok_or_else(|| ApiError::unknown("Not signed in"))
    }

    pub(crate) fn get_auth_headers(&self) -> Result<HeaderMap, ApiError> {
        let token = self.fresh_token()?;
        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            format!("Bearer {}", token)
                .parse()
                .map_err(|_| ApiError::unknown("Invalid token format"))?,
        );
        Ok(headers)
    }

    pub(crate) fn handle_unauthorized_status(status: StatusCode) {
        if status == StatusCode::UNAUTHORIZED {
            Self::clear_session_snapshot();
            Self::redirect_to_landing_if_needed();
        }
    }

    fn clear_session_snapshot() {
        if let Ok(storage) = storage_utils::local_storage() {
            let _ = storage.remove_item(ACCESS_TOKEN_KEY);
            let _ = storage.remove_item(CURRENT_USER_KEY);
        }
    }

    fn redirect_to_landing_if_needed() {
        if let Ok(window) = storage_utils::window() {
            let location = window.location();
            if let Ok(pathname) = location.pathname() {
                if pathname == "/" {
                    return;
                }
            }
            let _ = location.set_href("/");
        }
    }

    /// Parse a success body, or turn a non-success status into a
    /// request-failed error carrying the backend's message when present.
    pub(crate) async fn parse_response<T: DeserializeOwned>(
        response: Response,
    ) -> Result<T, ApiError> {
        let status = response.status();
        Self::handle_unauthorized_status(status);
        if status.is_success() {
            response
                .json()
                .await
                .map_err(|e| ApiError::request_failed(format!("Failed to parse response: {}", e)))
        } else {
            let body: Option<Value> = response.json().await.ok();
            Err(error_from_body(status, body))
        }
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

fn error_from_body(status: StatusCode, body: Option<Value>) -> ApiError {
    let message = body
        .as_ref()
        .and_then(|v| {
            v.get("error")
                .or_else(|| v.get("message"))
                .and_then(Value::as_str)
        })
        .map(str::to_string)
        .unwrap_or_else(|| format!("Request failed with status {}", status.as_u16()));
    ApiError {
        error: message,
        code: "REQUEST_FAILED".to_string(),
        details: body,
    }
}
