/*
[INPUT]:  HTTP configuration (base URL, timeouts, credentials, clock)
[OUTPUT]: Configured reqwest client and request/response plumbing
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing client behavior
*/

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use reqwest::{Client, Method, RequestBuilder};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};
use url::Url;

use crate::http::signature::{Clock, RequestSigner, SystemClock};
use crate::http::{BitflyerError, Result};

/// Base URL for the bitFlyer Lightning API
pub const BASE_URL: &str = "https://api.bitflyer.com";

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

/// Credentials for private endpoints
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub api_key: String,
    pub api_secret: String,
}

impl Credentials {
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: api_secret.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &self.api_key)
            .field("api_secret", &"<redacted>")
            .finish()
    }
}

/// Main HTTP client for the bitFlyer API
#[derive(Debug)]
pub struct BitflyerClient {
    http_client: Client,
    base_url: Url,
    clock: Arc<dyn Clock>,
    signer: Option<RequestSigner>,
}

impl BitflyerClient {
    /// Create a public-only client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a public-only client with custom configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()?;

        Ok(Self {
            http_client,
            base_url: Url::parse(&config.base_url)?,
            clock: Arc::new(SystemClock),
            signer: None,
        })
    }

    /// Attach credentials, enabling private endpoints
    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.set_credentials(credentials);
        self
    }

    /// Replace the timestamp source used for signing
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        if let Some(signer) = self.signer.take() {
            self.signer = Some(RequestSigner::with_clock(
                signer.credentials().clone(),
                self.clock.clone(),
            ));
        }
        self
    }

    /// Set credentials for private requests
    pub fn set_credentials(&mut self, credentials: Credentials) {
        self.signer = Some(RequestSigner::with_clock(credentials, self.clock.clone()));
    }

    /// Get credentials if set
    pub fn credentials(&self) -> Option<&Credentials> {
        self.signer.as_ref().map(RequestSigner::credentials)
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build full URL for an endpoint, appending query pairs if any
    fn endpoint_url(&self, endpoint: &str, query: &[(String, String)]) -> Result<Url> {
        let mut url = self.base_url.join(endpoint)?;
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }
        Ok(url)
    }

    /// GET a public endpoint; no authentication headers are sent
    pub(crate) async fn public_get(
        &self,
        endpoint: &str,
        query: &[(String, String)],
    ) -> Result<Value> {
        let url = self.endpoint_url(endpoint, query)?;
        debug!(method = "GET", path = url.path(), signed = false, "sending request");
        let builder = self.http_client.request(Method::GET, url);
        self.send_json(builder).await
    }

    /// GET a private endpoint with signed headers
    pub(crate) async fn private_get(
        &self,
        endpoint: &str,
        query: &[(String, String)],
    ) -> Result<Value> {
        let builder = self.signed_request(Method::GET, endpoint, query, None)?;
        self.send_json(builder).await
    }

    /// POST a JSON body to a private endpoint and return the decoded response
    pub(crate) async fn private_post<B>(&self, endpoint: &str, body: &B) -> Result<Value>
    where
        B: Serialize + ?Sized,
    {
        let body = serde_json::to_string(body)?;
        let builder = self.signed_request(Method::POST, endpoint, &[], Some(body))?;
        self.send_json(builder).await
    }

    /// POST a JSON body to a private endpoint, failing on any non-2xx status
    pub(crate) async fn private_post_ack<B>(&self, endpoint: &str, body: &B) -> Result<bool>
    where
        B: Serialize + ?Sized,
    {
        let body = serde_json::to_string(body)?;
        let builder = self.signed_request(Method::POST, endpoint, &[], Some(body))?;
        self.send_ack(builder).await
    }

    /// Build a request carrying ACCESS-* headers.
    ///
    /// The signed path is the request path plus its query string, exactly as sent.
    fn signed_request(
        &self,
        method: Method,
        endpoint: &str,
        query: &[(String, String)],
        body: Option<String>,
    ) -> Result<RequestBuilder> {
        let signer = self
            .signer
            .as_ref()
            .ok_or_else(|| BitflyerError::missing_credentials(endpoint))?;

        let url = self.endpoint_url(endpoint, query)?;
        let mut signed_path = url.path().to_string();
        if let Some(query) = url.query() {
            signed_path.push('?');
            signed_path.push_str(query);
        }

        let body = body.unwrap_or_default();
        let headers = signer
            .signed_headers(method.as_str(), &signed_path, &body)?
            .to_header_map()?;

        debug!(method = %method, path = %signed_path, signed = true, "sending request");

        let builder = self.http_client.request(method, url).headers(headers);
        Ok(if body.is_empty() {
            builder
        } else {
            builder.body(body)
        })
    }

    /// Send a request and decode the body as JSON, whatever the status.
    ///
    /// Error bodies are returned verbatim; an empty body decodes to `null`.
    pub(crate) async fn send_json(&self, builder: RequestBuilder) -> Result<Value> {
        let response = builder.send().await?;
        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), url = %response.url(), "non-success response");
        }

        let body = response.bytes().await?;
        if body.is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_slice(&body)?)
    }

    /// Send a request whose only result is success or failure
    pub(crate) async fn send_ack(&self, builder: RequestBuilder) -> Result<bool> {
        let response = builder.send().await?;
        let status = response.status();
        if !status.is_success() {
            let url = response.url().clone();
            let message = response.text().await?;
            warn!(status = status.as_u16(), %url, "request rejected");
            return Err(BitflyerError::api_error(status, message));
        }
        Ok(true)
    }
}

/// Flatten a serializable parameter struct into query pairs.
///
/// `None` fields are skipped by the structs themselves; stray nulls are dropped here.
pub(crate) fn query_pairs<Q>(params: &Q) -> Result<Vec<(String, String)>>
where
    Q: Serialize + ?Sized,
{
    let map = match serde_json::to_value(params)? {
        Value::Object(map) => map,
        Value::Null => return Ok(Vec::new()),
        other => {
            return Err(BitflyerError::Config(format!(
                "query parameters must be an object, got {other}"
            )));
        }
    };

    Ok(map
        .into_iter()
        .filter_map(|(key, value)| {
            let value = match value {
                Value::Null => return None,
                Value::String(s) => s,
                other => other.to_string(),
            };
            Some((key, value))
        })
        .collect())
}
