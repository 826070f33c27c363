//! # lf-client
//!
//! Async client for the Labfolder electronic lab notebook API (v2).
//!
//! One [`LabfolderClient`] holds the server address, the bearer token issued
//! by `auth/login` and the request timeouts. Resource methods live in:
//! - [`auth`]: login, logout, the current user
//! - [`entries`]: read, create and update notebook entries
//! - [`elements`]: text, data, table, image, file and well-plate elements

pub mod auth;
pub mod elements;
pub mod entries;

mod error;
mod http;

pub use entries::{EntryDetail, RawEntryDetail};
pub use error::ClientError;

use std::time::Duration;

use lf_core::{CoreError, ElementKind, UserInfo};
use reqwest::StatusCode;
use serde_json::Value;

/// Default timeout for resource calls.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
/// Default timeout for `auth/*` and `me` calls.
pub const DEFAULT_AUTH_TIMEOUT: Duration = Duration::from_secs(5);

const API_PATH: &str = "/api/v2/";

/// HTTP client bound to one Labfolder server.
#[derive(Clone)]
pub struct LabfolderClient {
    http: reqwest::Client,
    server_url: String,
    api_base: String,
    token: Option<String>,
    user: Option<UserInfo>,
    request_timeout: Duration,
    auth_timeout: Duration,
}

impl std::fmt::Debug for LabfolderClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LabfolderClient")
            .field("api_base", &self.api_base)
            .field("authenticated", &self.token.is_some())
            .field("user", &self.user.as_ref().map(|u| &u.email))
            .finish_non_exhaustive()
    }
}

impl LabfolderClient {
    /// Create a client for `server_url` (e.g. `https://labfolder.example.org`).
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidUrl`] if the url is empty or not
    /// http(s), or [`ClientError::Http`] if the HTTP client cannot be built.
    pub fn new(server_url: &str) -> Result<Self, ClientError> {
        let server_url = server_url.trim().trim_end_matches('/');
        if server_url.is_empty() {
            return Err(ClientError::InvalidUrl("no server url configured".into()));
        }
        if !(server_url.starts_with("https://") || server_url.starts_with("http://")) {
            return Err(ClientError::InvalidUrl(format!(
                "'{server_url}' must start with http:// or https://"
            )));
        }
        let http = reqwest::Client::builder()
            .user_agent(concat!("labfolder-rs/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            http,
            server_url: server_url.to_string(),
            api_base: format!("{server_url}{API_PATH}"),
            token: None,
            user: None,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            auth_timeout: DEFAULT_AUTH_TIMEOUT,
        })
    }

    #[must_use]
    pub fn with_timeouts(mut self, request: Duration, auth: Duration) -> Self {
        self.request_timeout = request;
        self.auth_timeout = auth;
        self
    }

    /// Reuse a token from an earlier login.
    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Server address without trailing slash.
    #[must_use]
    pub fn server_url(&self) -> &str {
        &self.server_url
    }

    /// `<server>/api/v2/`.
    #[must_use]
    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// The user fetched at login, if any.
    #[must_use]
    pub const fn user(&self) -> Option<&UserInfo> {
        self.user.as_ref()
    }

    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.api_base)
    }

    fn bearer(&self) -> Result<&str, ClientError> {
        self.token.as_deref().ok_or(ClientError::NotAuthenticated)
    }

    /// Authenticated GET with the resource timeout, returning JSON.
    async fn get_json(&self, path: &str) -> Result<Value, ClientError> {
        let token = self.bearer()?;
        tracing::debug!(path, "GET");
        let resp = self
            .http
            .get(self.url(path))
            .bearer_auth(token)
            .timeout(self.request_timeout)
            .send()
            .await?;
        Ok(http::check_response(resp).await?.json().await?)
    }

    /// Authenticated GET returning the raw body.
    async fn get_bytes(&self, path: &str) -> Result<Vec<u8>, ClientError> {
        let token = self.bearer()?;
        tracing::debug!(path, "GET (bytes)");
        let resp = self
            .http
            .get(self.url(path))
            .bearer_auth(token)
            .timeout(self.request_timeout)
            .send()
            .await?;
        Ok(http::check_response(resp).await?.bytes().await?.to_vec())
    }

    /// `POST` a new record and return the id the server assigned.
    async fn create(&self, path: &str, body: &Value, kind: &str) -> Result<String, ClientError> {
        let token = self.bearer()?;
        tracing::debug!(path, kind, "POST");
        let resp = self
            .http
            .post(self.url(path))
            .bearer_auth(token)
            .timeout(self.request_timeout)
            .json(body)
            .send()
            .await?;
        let resp = http::expect_status(resp, StatusCode::CREATED, http::WRITTEN, kind).await?;
        let created: Value = resp.json().await?;
        created_id(&created)
    }

    /// `PUT` an existing record.
    async fn update(&self, path: &str, body: &Value, kind: &str) -> Result<(), ClientError> {
        let token = self.bearer()?;
        tracing::debug!(path, kind, "PUT");
        let resp = self
            .http
            .put(self.url(path))
            .bearer_auth(token)
            .timeout(self.request_timeout)
            .json(body)
            .send()
            .await?;
        http::expect_status(resp, StatusCode::OK, http::UPDATED, kind).await?;
        Ok(())
    }
}

/// `elements/<endpoint>/<id>` with the id percent-encoded.
fn element_path(kind: ElementKind, id: &str) -> String {
    format!("elements/{}/{}", kind.endpoint(), urlencoding::encode(id))
}

/// Reject empty ids before any request is made.
fn require_id<'a>(id: &'a str, what: &str) -> Result<&'a str, ClientError> {
    if id.trim().is_empty() {
        return Err(CoreError::Validation(format!("{what} id is empty")).into());
    }
    Ok(id)
}

/// The `id` of a create response, which servers send as a string or number.
fn created_id(body: &Value) -> Result<String, ClientError> {
    match body.get("id") {
        Some(Value::String(id)) if !id.is_empty() => Ok(id.clone()),
        Some(Value::Number(id)) => Ok(id.to_string()),
        _ => Err(ClientError::UnexpectedResponse(
            "create response carried no id".into(),
        )),
    }
}
