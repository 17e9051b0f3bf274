// Copyright 2026 Paul Adamson
// Licensed under the Apache License, Version 2.0
//
// HTTP Test Client - thin session wrapper for API tests
//
// Every status code the server returns is a successful transport outcome.
// 400/404/405 responses come back as `Ok(ApiResponse)` so error paths can be
// asserted on like any other scenario. Only transport failures are `Err`.

use crate::config::ApiConfig;
use crate::error::{Error, Result};
use parking_lot::RwLock;
use reqwest::StatusCode;
use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue, USER_AGENT};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::{Duration, Instant};
use url::Url;

/// Default `Accept` and `Content-Type` value.
pub const APPLICATION_JSON: &str = "application/json";

/// `Accept` value used to negotiate XML bodies.
pub const APPLICATION_XML: &str = "application/xml";

/// HTTP session with default headers and no status validation.
///
/// Default headers can be changed at runtime with [`set_header`](Self::set_header)
/// or temporarily with [`override_header`](Self::override_header); the
/// underlying connection pool is never rebuilt.
pub struct TestClient {
    http: reqwest::Client,
    base_url: Url,
    headers: RwLock<HeaderMap>,
}

impl TestClient {
    /// Creates a session from configuration.
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }
        let http = builder.build()?;

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(APPLICATION_JSON));
        headers.insert(ACCEPT, HeaderValue::from_static(APPLICATION_JSON));
        headers.insert(USER_AGENT, header_value(USER_AGENT.as_str(), config.user_agent_str())?);

        Ok(Self {
            http,
            base_url: config.base_url().clone(),
            headers: RwLock::new(headers),
        })
    }

    /// Creates a session against `base_url` with default settings.
    pub fn with_base_url(base_url: Url) -> Result<Self> {
        Self::new(&ApiConfig::new(base_url))
    }

    /// Creates a session from `PROTOCOL` and `API_BASE_URL`.
    pub fn from_env() -> Result<Self> {
        Self::new(&ApiConfig::from_env()?)
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Returns a snapshot of the current default headers.
    pub fn default_headers(&self) -> HeaderMap {
        self.headers.read().clone()
    }

    /// Returns the current value of one default header.
    pub fn header(&self, name: &str) -> Option<String> {
        self.headers
            .read()
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    }

    /// Replaces a single default header for all subsequent requests.
    pub fn set_header(&self, name: &str, value: &str) -> Result<()> {
        let header_name = header_name(name)?;
        let header_value = header_value(name, value)?;
        tracing::debug!(header = name, value, "Updating session header");
        self.headers.write().insert(header_name, header_value);
        Ok(())
    }

    /// Sets a default header until the returned guard is dropped.
    ///
    /// The previous value (or absence) is restored on drop, including when a
    /// test fails between setting and restoring.
    pub fn override_header(&self, name: &str, value: &str) -> Result<HeaderOverride<'_>> {
        let header_name = header_name(name)?;
        let header_value = header_value(name, value)?;
        let previous = self
            .headers
            .write()
            .insert(header_name.clone(), header_value);
        Ok(HeaderOverride {
            client: self,
            name: header_name,
            previous,
        })
    }

    /// Sends a GET request to `path`, relative to the base URL.
    pub async fn get(&self, path: &str, query: Option<&[(&str, &str)]>) -> Result<ApiResponse> {
        let url = self.resolve(path)?;
        let mut request = self.http.get(url.clone()).headers(self.default_headers());
        if let Some(query) = query {
            request = request.query(query);
        }
        self.send("GET", url, request).await
    }

    /// Sends a POST request to `path` with an optional JSON body.
    pub async fn post<B>(&self, path: &str, body: Option<&B>) -> Result<ApiResponse>
    where
        B: Serialize + ?Sized,
    {
        let url = self.resolve(path)?;
        let mut request = self.http.post(url.clone()).headers(self.default_headers());
        if let Some(body) = body {
            // Content-Type comes from the session headers
            request = request.body(serde_json::to_vec(body)?);
        }
        self.send("POST", url, request).await
    }

    fn resolve(&self, path: &str) -> Result<Url> {
        // Joined as strings so a path prefix in the base URL survives; exactly
        // one '/' separates the two parts.
        let raw = format!(
            "{}/{}",
            self.base_url.as_str().trim_end_matches('/'),
            path.trim_start_matches('/')
        );
        Url::parse(&raw).map_err(|source| Error::InvalidUrl { url: raw, source })
    }

    async fn send(
        &self,
        method: &str,
        url: Url,
        request: reqwest::RequestBuilder,
    ) -> Result<ApiResponse> {
        let start = Instant::now();
        let response = request
            .send()
            .await
            .map_err(|e| Error::Transport(e).context(format!("{} {}", method, url)))?;

        let status = response.status();
        let headers = response.headers().clone();
        let body = response.text().await?;
        let elapsed = start.elapsed();

        tracing::debug!(
            method,
            url = %url,
            status = status.as_u16(),
            elapsed_ms = elapsed.as_millis() as u64,
            "Received response"
        );

        Ok(ApiResponse {
            url,
            status,
            headers,
            body,
            elapsed,
        })
    }
}

/// Scoped header override returned by [`TestClient::override_header`].
pub struct HeaderOverride<'a> {
    client: &'a TestClient,
    name: HeaderName,
    previous: Option<HeaderValue>,
}

impl Drop for HeaderOverride<'_> {
    fn drop(&mut self) {
        let mut headers = self.client.headers.write();
        match self.previous.take() {
            Some(value) => {
                headers.insert(self.name.clone(), value);
            }
            None => {
                headers.remove(&self.name);
            }
        }
    }
}

/// A fully-read HTTP response.
///
/// Status and body are surfaced unmodified, whatever the status code.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    url: Url,
    status: StatusCode,
    headers: HeaderMap,
    body: String,
    elapsed: Duration,
}

impl ApiResponse {
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Numeric status code.
    pub fn status(&self) -> u16 {
        self.status.as_u16()
    }

    /// Returns true for 2xx statuses.
    pub fn ok(&self) -> bool {
        self.status.is_success()
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Returns a response header as a string, if present and valid UTF-8.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Returns the `Content-Type` header, if any.
    pub fn content_type(&self) -> Option<&str> {
        self.header(CONTENT_TYPE.as_str())
    }

    /// Raw body text.
    pub fn text(&self) -> &str {
        &self.body
    }

    /// Time from sending the request to reading the full body.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Deserializes the body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_str(&self.body).map_err(|e| {
            Error::Json(e).context(format!("Decoding JSON body from {} ({})", self.url, self.status))
        })
    }

    /// Parses the body as an untyped JSON value.
    pub fn json_value(&self) -> Result<serde_json::Value> {
        self.json()
    }

    /// Deserializes the body as XML.
    ///
    /// The document's root element maps to `T`; its child elements map to
    /// `T`'s fields.
    pub fn xml<T: DeserializeOwned>(&self) -> Result<T> {
        quick_xml::de::from_str(&self.body).map_err(|e| {
            Error::Xml(e).context(format!("Decoding XML body from {} ({})", self.url, self.status))
        })
    }
}

fn header_name(name: &str) -> Result<HeaderName> {
    HeaderName::from_bytes(name.as_bytes()).map_err(|e| Error::InvalidHeader {
        name: name.to_string(),
        message: e.to_string(),
    })
}

fn header_value(name: &str, value: &str) -> Result<HeaderValue> {
    HeaderValue::from_str(value).map_err(|e| Error::InvalidHeader {
        name: name.to_string(),
        message: e.to_string(),
    })
}
