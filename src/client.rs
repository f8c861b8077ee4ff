//! Blocking HTTP transport for the storefront REST API.
//!
//! Owns the base URL and a lazily built `reqwest` client. Responses are
//! returned as raw JSON; typed decoding and error classification happen in
//! the query layer.

use reqwest::blocking::Client;
use serde::Serialize;
use serde_json::Value;
use std::fmt;
use std::sync::OnceLock;
use std::time::Duration;
use tracing::debug;

/// A failed request, before it is classified as a fetch, auth or mutation error.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("undecodable response body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Sends requests to the storefront API.
pub struct ApiClient {
    base_url: String,
    timeout: Option<Duration>,
    client: OnceLock<Client>,
}

impl ApiClient {
    /// Create a transport for `base_url`.
    ///
    /// With no `timeout`, the transport's default applies.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout,
            client: OnceLock::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Lazy HTTP client, created on first use.
    fn client(&self) -> Result<&Client, TransportError> {
        if let Some(client) = self.client.get() {
            return Ok(client);
        }
        let mut builder = Client::builder().redirect(reqwest::redirect::Policy::limited(10));
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        let built = builder.build()?;
        Ok(self.client.get_or_init(|| built))
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GET `path` and parse the body as JSON.
    ///
    /// An empty body decodes to `Value::Null` rather than failing.
    pub fn get_json(&self, path: &str) -> Result<Value, TransportError> {
        let url = self.url(path);
        debug!(%url, "GET");
        let resp = self.client()?.get(&url).send()?.error_for_status()?;
        decode_body(&resp.text()?)
    }

    /// POST a JSON body to `path` and parse the JSON response.
    pub fn post_json<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Value, TransportError> {
        let url = self.url(path);
        debug!(%url, "POST");
        let resp = self
            .client()?
            .post(&url)
            .json(body)
            .send()?
            .error_for_status()?;
        decode_body(&resp.text()?)
    }

    /// PUT a JSON body to `path` and parse the JSON response.
    pub fn put_json<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Value, TransportError> {
        let url = self.url(path);
        debug!(%url, "PUT");
        let resp = self
            .client()?
            .put(&url)
            .json(body)
            .send()?
            .error_for_status()?;
        decode_body(&resp.text()?)
    }

    /// DELETE `path`. Any response body is ignored.
    pub fn delete(&self, path: &str) -> Result<(), TransportError> {
        let url = self.url(path);
        debug!(%url, "DELETE");
        self.client()?.delete(&url).send()?.error_for_status()?;
        Ok(())
    }
}

impl fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

fn decode_body(text: &str) -> Result<Value, TransportError> {
    if text.trim().is_empty() {
        return Ok(Value::Null);
    }
    Ok(serde_json::from_str(text)?)
}
