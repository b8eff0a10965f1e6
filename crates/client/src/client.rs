use crate::error::{ClientError, Result};
use crate::normalize::normalize_name;
use ferrous_doh_domain::{DohAnswer, RecordType};
use reqwest::Client as HttpClient;
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;
use url::Url;

const DEFAULT_BASE_URL: &str = "http://localhost:3000";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const FALLBACK_DNS_ERROR: &str = "DNS error";

/// Every field is optional so that success, resolution failures and `{error}`
/// validation bodies all decode through the same shape.
#[derive(Debug, Deserialize)]
struct Envelope {
    #[serde(rename = "Status")]
    status: Option<i64>,
    #[serde(rename = "Answer", default)]
    answer: Vec<DohAnswer>,
    #[serde(rename = "Comment")]
    comment: Option<String>,
    error: Option<String>,
}

impl Envelope {
    fn into_result(self) -> Result<Vec<DohAnswer>> {
        if self.status == Some(0) {
            return Ok(self.answer);
        }

        let message = self
            .comment
            .or(self.error)
            .unwrap_or_else(|| FALLBACK_DNS_ERROR.to_string());
        Err(ClientError::Dns(message))
    }
}

/// Client for a `/dns-query` endpoint.
#[derive(Clone)]
pub struct DohClient {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    http: HttpClient,
    base_url: Url,
}

impl DohClient {
    /// Client with default settings against `base_url`.
    pub fn new(base_url: &str) -> Result<Self> {
        DohClientBuilder::new().base_url(base_url).build()
    }

    #[must_use]
    pub fn builder() -> DohClientBuilder {
        DohClientBuilder::new()
    }

    pub fn base_url(&self) -> &Url {
        &self.inner.base_url
    }

    /// Normalizes `input` to a hostname and asks the server for its records.
    pub async fn query(&self, input: &str, record_type: RecordType) -> Result<Vec<DohAnswer>> {
        let name = normalize_name(input);
        let url = self.query_url(&name, record_type);
        debug!(url = %url, "GET request");

        let response = self
            .inner
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| {
                debug!(error = %e, "Request failed");
                ClientError::Connection
            })?;

        // The envelope, not the HTTP status, decides the outcome.
        let body = response.text().await.map_err(|e| {
            debug!(error = %e, "Failed to read response body");
            ClientError::Connection
        })?;

        let envelope: Envelope = serde_json::from_str(&body).map_err(|e| {
            debug!(error = %e, "Response is not a DoH envelope");
            ClientError::Connection
        })?;

        envelope.into_result()
    }

    fn query_url(&self, name: &str, record_type: RecordType) -> Url {
        let mut url = self.inner.base_url.clone();

        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push("dns-query");
        }
        url.query_pairs_mut()
            .clear()
            .append_pair("name", name)
            .append_pair("type", record_type.as_str());

        url
    }
}

/// Builder for configuring a [`DohClient`]
pub struct DohClientBuilder {
    base_url: String,
    timeout: Duration,
    user_agent: String,
}

impl Default for DohClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DohClientBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: format!("ferrous-doh/{}", env!("CARGO_PKG_VERSION")),
        }
    }

    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    #[must_use]
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = agent.into();
        self
    }

    pub fn build(self) -> Result<DohClient> {
        let base_url = Url::parse(&self.base_url)
            .map_err(|e| ClientError::InvalidBaseUrl(self.base_url.clone(), e.to_string()))?;

        if base_url.cannot_be_a_base() {
            return Err(ClientError::InvalidBaseUrl(
                self.base_url,
                "not a base URL".to_string(),
            ));
        }

        let http = HttpClient::builder()
            .timeout(self.timeout)
            .user_agent(&self.user_agent)
            .build()
            .map_err(|e| ClientError::Build(e.to_string()))?;

        Ok(DohClient {
            inner: Arc::new(ClientInner { http, base_url }),
        })
    }
}
