/*
[INPUT]:  HTTP configuration (base URL, timeouts, API key)
[OUTPUT]: Configured reqwest client and the shared request/response core
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing client behavior
*/

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use reqwest::{Client, Method, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

use crate::http::{LockstepError, Result};

/// Base URLs for the published Lockstep Platform environments
const PRODUCTION_BASE_URL: &str = "https://api.lockstep.io";
const SANDBOX_BASE_URL: &str = "https://api.sbx.lockstep.io";

/// Characters escaped in query-string values, beyond controls and non-ASCII
const QUERY_VALUE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'&')
    .add(b'\'')
    .add(b'+')
    .add(b'<')
    .add(b'=')
    .add(b'>')
    .add(b'?');

/// Published Lockstep Platform environments
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockstepEnv {
    Production,
    Sandbox,
}

impl LockstepEnv {
    fn base_url(self) -> &'static str {
        match self {
            LockstepEnv::Production => PRODUCTION_BASE_URL,
            LockstepEnv::Sandbox => SANDBOX_BASE_URL,
        }
    }
}

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(120),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

/// Main HTTP client for the Lockstep Platform API
#[derive(Debug, Clone)]
pub struct LockstepClient {
    http_client: Client,
    base_url: Url,
    api_key: Option<String>,
}

impl LockstepClient {
    /// Create a new client against the production environment
    pub fn new() -> Result<Self> {
        Self::with_env(LockstepEnv::Production)
    }

    /// Create a new client against a published environment
    pub fn with_env(env: LockstepEnv) -> Result<Self> {
        Self::with_config_and_base_url(ClientConfig::default(), env.base_url())
    }

    /// Create a new client with custom configuration against production
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        Self::with_config_and_base_url(config, PRODUCTION_BASE_URL)
    }

    /// Create a new client with custom configuration and an explicit base URL
    pub fn with_config_and_base_url(config: ClientConfig, base_url: &str) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()?;

        Ok(Self {
            http_client,
            base_url: Url::parse(base_url)?,
            api_key: None,
        })
    }

    /// Set the API key sent as a bearer token on every request
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Build request builder for an API endpoint (path plus optional query)
    pub(crate) fn api_request(&self, method: Method, endpoint: &str) -> Result<RequestBuilder> {
        let url = self.base_url.join(endpoint)?;
        debug!(%method, %url, "lockstep api request");
        let mut builder = self.http_client.request(method, url);
        if let Some(key) = &self.api_key {
            builder = builder.bearer_auth(key);
        }
        Ok(builder)
    }

    /// Execute a request and deserialize the JSON response body.
    ///
    /// Non-2xx statuses surface as `LockstepError::Api` with the body text
    /// as message. Scalar and array payloads share this one path.
    pub(crate) async fn send_json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T> {
        let response = builder.send().await?;
        let status = response.status();
        debug!(%status, "lockstep api response");
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(LockstepError::api_error(status, message));
        }
        Ok(response.json::<T>().await?)
    }

    /// Execute a request and return the raw response body text
    pub(crate) async fn send_text(&self, builder: RequestBuilder) -> Result<String> {
        let response = builder.send().await?;
        let status = response.status();
        debug!(%status, "lockstep api response");
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(LockstepError::api_error(status, message));
        }
        Ok(response.text().await?)
    }
}

/// Append non-empty query pairs to a path, percent-encoding the values.
///
/// Pairs come from the named optional parameters of each endpoint method;
/// a parameter that was `None` is never in the list.
pub(crate) fn with_query(path: &str, pairs: &[(&str, String)]) -> String {
    if pairs.is_empty() {
        return path.to_string();
    }
    let query = pairs
        .iter()
        .map(|(key, value)| format!("{key}={}", utf8_percent_encode(value, QUERY_VALUE_SET)))
        .collect::<Vec<_>>()
        .join("&");
    format!("{path}?{query}")
}

/// Query pairs for the standard Searchlight query parameters, in the order
/// the API documents them
pub(crate) fn searchlight_query(
    filter: Option<&str>,
    include: Option<&str>,
    order: Option<&str>,
    page_size: Option<i32>,
    page_number: Option<i32>,
) -> Vec<(&'static str, String)> {
    let mut pairs = Vec::new();
    if let Some(filter) = filter {
        pairs.push(("filter", filter.to_string()));
    }
    if let Some(include) = include {
        pairs.push(("include", include.to_string()));
    }
    if let Some(order) = order {
        pairs.push(("order", order.to_string()));
    }
    if let Some(page_size) = page_size {
        pairs.push(("pageSize", page_size.to_string()));
    }
    if let Some(page_number) = page_number {
        pairs.push(("pageNumber", page_number.to_string()));
    }
    pairs
}
