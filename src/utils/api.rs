//! JSON API client.
//!
//! Every request is sent under [`API_BASE_URL`], carries the stored bearer
//! token when one exists and is aborted after [`API_TIMEOUT_MS`]. A 401
//! response sends the user back to the login screen.

use gloo_net::http::{Request, RequestBuilder};
use gloo_timers::callback::Timeout;
use serde::Serialize;
use serde::de::DeserializeOwned;
use web_sys::AbortController;

use super::storage;
use crate::config::{API_BASE_URL, API_TIMEOUT_MS};
use crate::core::error::ApiError;
use crate::models::AppRoute;

/// `Authorization` header value for `token`; `None` when there is no usable token.
pub fn bearer_header(token: Option<&str>) -> Option<String> {
    match token.map(str::trim) {
        Some(token) if !token.is_empty() => Some(format!("Bearer {}", token)),
        _ => None,
    }
}

/// Map an HTTP status to success or the matching [`ApiError`].
pub fn classify_status(status: u16) -> Result<(), ApiError> {
    match status {
        200..=299 => Ok(()),
        401 => Err(ApiError::Unauthorized),
        status => Err(ApiError::HttpError(status)),
    }
}

/// Classify a response status, sending the user to the login screen on 401.
pub fn check_response(status: u16, url: &str) -> Result<(), ApiError> {
    let result = classify_status(status);
    if let Err(e) = &result {
        tracing::warn!(status, url, error = %e, "api request failed");
        if *e == ApiError::Unauthorized {
            AppRoute::Login.push();
        }
    }
    result
}

/// Thin wrapper over `gloo-net` with the dashboard's request conventions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiClient {
    base_url: String,
    timeout_ms: u32,
}

impl ApiClient {
    pub fn new() -> Self {
        Self::with_base_url(API_BASE_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout_ms: API_TIMEOUT_MS,
        }
    }

    pub fn with_timeout(mut self, timeout_ms: u32) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    /// Absolute request URL for an endpoint path.
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.dispatch::<(), T>(Request::get(&self.url(path)), None)
            .await
    }

    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.dispatch(Request::post(&self.url(path)), Some(body))
            .await
    }

    pub async fn put<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.dispatch(Request::put(&self.url(path)), Some(body))
            .await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.dispatch::<(), T>(Request::delete(&self.url(path)), None)
            .await
    }

    async fn dispatch<B, T>(&self, builder: RequestBuilder, body: Option<&B>) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let controller = AbortController::new()
            .map_err(|e| ApiError::RequestCreationFailed(format!("{:?}", e)))?;
        let signal = controller.signal();

        let mut builder = builder.abort_signal(Some(&signal));
        if let Some(auth) = bearer_header(storage::auth_token().as_deref()) {
            builder = builder.header("Authorization", &auth);
        }
        let request = match body {
            Some(body) => builder.json(body),
            None => builder.build(),
        }
        .map_err(|e| ApiError::RequestCreationFailed(e.to_string()))?;

        tracing::debug!(method = %request.method(), url = %request.url(), "api request");

        // Aborts the request (and body read) unless dropped first.
        let _deadline = Timeout::new(self.timeout_ms, move || controller.abort());

        let response = request.send().await.map_err(|e| {
            if signal.aborted() {
                ApiError::Timeout
            } else {
                ApiError::NetworkError(e.to_string())
            }
        })?;

        check_response(response.status(), &response.url())?;

        response.json::<T>().await.map_err(|e| {
            if signal.aborted() {
                ApiError::Timeout
            } else {
                ApiError::JsonParseError(e.to_string())
            }
        })
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}
