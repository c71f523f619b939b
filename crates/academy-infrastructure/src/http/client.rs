//! Shared HTTP client with credential-scoped authorization.

use academy_core::auth::{AuthScope, CredentialStore};
use academy_core::config::ClientConfig;
use academy_core::error::{AcademyError, Result};
use reqwest::header::ACCEPT;
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use std::sync::Arc;

/// HTTP client for the storefront API.
///
/// Every request names the `AuthScope` whose bearer token authorizes it and
/// always asks for JSON. The client is cheap to clone; clones share the
/// connection pool and the credential store.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    config: ClientConfig,
    credentials: Arc<dyn CredentialStore>,
}

impl ApiClient {
    /// Creates a client for the configured base URL and timeout.
    pub fn new(config: ClientConfig, credentials: Arc<dyn CredentialStore>) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| AcademyError::config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            config,
            credentials,
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn credentials(&self) -> &Arc<dyn CredentialStore> {
        &self.credentials
    }

    /// Starts a request authorized with the credential of `scope`.
    ///
    /// The Authorization header is omitted when that scope has no token; the
    /// server then answers 401, which callers handle like any other failure.
    pub fn request(&self, method: Method, path: &str, scope: AuthScope) -> RequestBuilder {
        let request = self
            .client
            .request(method, self.config.endpoint(path))
            .header(ACCEPT, "application/json");

        match self.credentials.token(scope) {
            Ok(Some(token)) => request.bearer_auth(token),
            Ok(None) => request,
            Err(e) => {
                tracing::warn!("[ApiClient] Failed to read {:?} credential: {}", scope, e);
                request
            }
        }
    }

    /// Starts a request whose scope is inferred from where it is issued.
    ///
    /// Admin scope is chosen when either `navigation_path` or `path` lies in
    /// the admin area. Prefer [`ApiClient::request`] with an explicit scope.
    pub fn request_in_context(
        &self,
        method: Method,
        path: &str,
        navigation_path: &str,
    ) -> RequestBuilder {
        self.request(method, path, AuthScope::infer(navigation_path, path))
    }

    /// Sends a request and maps non-success statuses to errors.
    pub async fn send(&self, request: RequestBuilder) -> Result<Response> {
        let response = request.send().await.map_err(AcademyError::from)?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        Err(error_for_status(status.as_u16(), &body))
    }

    /// Sends a request and decodes the JSON body.
    pub async fn send_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        let response = self.send(request).await?;
        let bytes = response.bytes().await.map_err(AcademyError::from)?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

/// Maps a non-success response to an error, preferring the server's
/// `message` field over the raw body.
pub(crate) fn error_for_status(status: u16, body: &str) -> AcademyError {
    let message = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|json| {
            json.get("message")
                .and_then(|message| message.as_str())
                .map(str::to_string)
        })
        .unwrap_or_else(|| {
            if body.trim().is_empty() {
                format!("status {}", status)
            } else {
                body.trim().to_string()
            }
        });

    match status {
        401 | 403 => AcademyError::Unauthenticated(message),
        _ => AcademyError::http(status, message),
    }
}
