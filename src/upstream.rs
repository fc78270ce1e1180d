use anyhow::{Context, Result};
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Method, StatusCode, Url};
use serde_json::Value as JsonValue;
use std::collections::HashMap;
use std::time::Duration;

use crate::config::Config;

/// The upstream API host. Compiled in, not environment-configured;
/// callers cannot redirect the proxy elsewhere.
pub const VAULTN_API_BASE: &str = "https://api.vaultn.com";

/// Default timeout applied to every outbound call.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Upstream response body, classified by whether it parses as JSON.
///
/// JSON bodies are relayed as structured JSON; anything else is relayed
/// as raw text with the original status code preserved. A parse failure
/// is not an error.
#[derive(Debug, Clone, PartialEq)]
pub enum RelayBody {
    Parsed(JsonValue),
    Raw(String),
}

/// Status and classified body of a completed upstream call
#[derive(Debug, Clone)]
pub struct UpstreamReply {
    pub status: StatusCode,
    pub body: RelayBody,
}

/// Shareable client for the upstream API, for use across async handlers
///
/// Holds the fixed base URL and the bearer credential that is injected
/// into every outbound call. Both are set once at construction and never
/// mutated; `reqwest::Client` handles connection reuse internally.
#[derive(Clone)]
pub struct UpstreamClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl UpstreamClient {
    /// Create a client targeting the compiled-in VaultN API host
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::with_base_url(VAULTN_API_BASE, &config.vaultn_api_key)
    }

    /// Create a client targeting an explicit base URL.
    ///
    /// Production always goes through [`UpstreamClient::from_config`];
    /// this constructor exists so tests can point the relay at a mock
    /// server.
    pub fn with_base_url(base_url: &str, api_key: &str) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("Failed to build upstream HTTP client")?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        })
    }

    /// Build the outbound URL: `<base>/<suffix>` plus every inbound query
    /// parameter. Repeated keys have already collapsed to their last value
    /// by the time they reach the map.
    pub fn build_url(&self, path_suffix: &str, query: &HashMap<String, String>) -> Result<Url> {
        let mut url = Url::parse(&format!("{}/{}", self.base_url, path_suffix))
            .with_context(|| format!("Malformed upstream URL for path '{}'", path_suffix))?;

        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query.iter());
        }

        Ok(url)
    }

    /// Issue one outbound call and classify the response body.
    ///
    /// This is the relay's only suspension point. No retry is attempted;
    /// any transport or serialization failure surfaces to the caller as
    /// an error.
    pub async fn forward(
        &self,
        method: Method,
        url: Url,
        body: Option<&JsonValue>,
    ) -> Result<UpstreamReply> {
        let mut request = self
            .http
            .request(method, url)
            .header(CONTENT_TYPE, "application/json")
            .header(AUTHORIZATION, format!("Bearer {}", self.api_key))
            .header(ACCEPT, "application/json");

        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request
            .send()
            .await
            .context("Upstream request failed")?;

        let status = response.status();
        let text = response
            .text()
            .await
            .context("Failed to read upstream response body")?;

        Ok(UpstreamReply {
            status,
            body: classify_body(text),
        })
    }
}

/// Attempt a JSON parse; fall back to raw text passthrough.
fn classify_body(text: String) -> RelayBody {
    match serde_json::from_str::<JsonValue>(&text) {
        Ok(value) => RelayBody::Parsed(value),
        Err(_) => RelayBody::Raw(text),
    }
}
