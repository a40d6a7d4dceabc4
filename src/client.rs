//! The chainable request client
//!
//! A [`RequestClient`] collects request settings through `set_*` calls and
//! runs one exchange per [`send`](RequestClient::send). Cookies announced by
//! the server replace the stored cookie after every exchange, so a reused
//! client carries a session forward.

use std::path::PathBuf;
use std::time::Duration;

use serde_json::Value;

use crate::config::{HttpMethod, RequestConfig};
use crate::cookie::CookieCollector;
use crate::error::Result;
use crate::form::FormData;
use crate::http::{PreparedRequest, ReqwestTransport, Transport, TransportResponse};
use crate::output::OutputWriter;

const JSON_CONTENT_TYPE: &str = "application/json";

/// Result of a completed exchange
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// Body parsed from an `application/json` response
    Json(Value),
    /// Raw body text, including header blocks when those were requested
    Text(String),
    /// Body was written to the output instead of being returned
    Emitted,
}

impl Payload {
    pub fn as_json(&self) -> Option<&Value> {
        match self {
            Payload::Json(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Payload::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn into_json(self) -> Option<Value> {
        match self {
            Payload::Json(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_emitted(&self) -> bool {
        matches!(self, Payload::Emitted)
    }
}

/// Per-call overrides for [`RequestClient::send_with`]
///
/// An empty URL or empty data counts as "not given" and leaves the stored
/// value alone.
#[derive(Debug, Clone, Default)]
pub struct SendOptions {
    url: Option<String>,
    data: Option<FormData>,
    method: Option<HttpMethod>,
}

impl SendOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn data(mut self, data: impl Into<FormData>) -> Self {
        self.data = Some(data.into());
        self
    }

    pub fn method(mut self, method: HttpMethod) -> Self {
        self.method = Some(method);
        self
    }
}

/// Configurable single-shot HTTP client
#[derive(Debug, Clone, Default)]
pub struct RequestClient<T = ReqwestTransport> {
    config: RequestConfig,
    transport: T,
}

impl RequestClient<ReqwestTransport> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a client from an existing configuration
    pub fn with_config(config: RequestConfig) -> Self {
        Self {
            config,
            transport: ReqwestTransport::new(),
        }
    }
}

impl<T: Transport> RequestClient<T> {
    /// Create a client that executes requests through `transport`
    pub fn with_transport(config: RequestConfig, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn set_url(&mut self, url: impl Into<String>) -> &mut Self {
        self.config.url = url.into();
        self
    }

    pub fn set_data(&mut self, data: impl Into<FormData>) -> &mut Self {
        self.config.data = data.into();
        self
    }

    pub fn set_method(&mut self, method: HttpMethod) -> &mut Self {
        self.config.method = method;
        self
    }

    /// Add a header, replacing any previous value under the same name
    pub fn set_header(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.config.headers.insert(name.into(), value.into());
        self
    }

    pub fn set_cookie(&mut self, cookie: impl Into<String>) -> &mut Self {
        self.config.cookie = cookie.into();
        self
    }

    pub fn set_ssl_verify_peer(&mut self, verify: bool) -> &mut Self {
        self.config.ssl_verify_peer = verify;
        self
    }

    pub fn set_ssl_verify_host(&mut self, verify: bool) -> &mut Self {
        self.config.ssl_verify_host = verify;
        self
    }

    pub fn set_include_header(&mut self, include: bool) -> &mut Self {
        self.config.include_header = include;
        self
    }

    pub fn set_return_transfer(&mut self, return_transfer: bool) -> &mut Self {
        self.config.return_transfer = return_transfer;
        self
    }

    pub fn set_follow_location(&mut self, follow: bool) -> &mut Self {
        self.config.follow_location = follow;
        self
    }

    pub fn set_timeout(&mut self, timeout: Duration) -> &mut Self {
        self.config.timeout = timeout;
        self
    }

    pub fn set_connect_timeout(&mut self, timeout: Duration) -> &mut Self {
        self.config.connect_timeout = timeout;
        self
    }

    pub fn set_max_redirects(&mut self, max_redirects: usize) -> &mut Self {
        self.config.max_redirects = max_redirects;
        self
    }

    /// Write emitted bodies to a file instead of stdout
    pub fn set_output_file(&mut self, path: impl Into<PathBuf>) -> &mut Self {
        self.config.output_file = Some(path.into());
        self
    }

    pub fn url(&self) -> &str {
        &self.config.url
    }

    pub fn data(&self) -> &FormData {
        &self.config.data
    }

    pub fn method(&self) -> HttpMethod {
        self.config.method
    }

    pub fn cookie(&self) -> &str {
        &self.config.cookie
    }

    pub fn config(&self) -> &RequestConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Send a request with the stored configuration
    ///
    /// Blocks the calling thread. With the default [`ReqwestTransport`] this
    /// fails with [`HttpCurlError::Runtime`](crate::HttpCurlError::Runtime)
    /// when called from inside a tokio runtime; async callers should await
    /// [`ReqwestTransport::exchange`] instead.
    pub fn send(&mut self) -> Result<Payload> {
        self.send_with(SendOptions::default())
    }

    /// Apply overrides, send the request and decode the response
    ///
    /// The stored cookie is replaced by the cookies received during this
    /// exchange (or cleared when there were none), even if the exchange or
    /// the decoding fails afterwards.
    pub fn send_with(&mut self, options: SendOptions) -> Result<Payload> {
        self.apply_overrides(options);

        let request = PreparedRequest::from_config(&self.config);
        let mut collector = CookieCollector::new();
        let result = self
            .transport
            .execute(&request, &mut |line: &str| collector.observe_line(line));

        self.config.cookie = collector.into_cookie_header();
        let response = result?;

        log::debug!(
            "< {} ({})",
            response.status,
            response.content_type.as_deref().unwrap_or("no content type")
        );

        if !self.config.return_transfer {
            OutputWriter::new(self.config.output_file.clone()).write(&response.body)?;
            return Ok(Payload::Emitted);
        }

        decode_payload(response, self.config.include_header)
    }

    fn apply_overrides(&mut self, options: SendOptions) {
        if let Some(url) = options.url.filter(|url| !url.is_empty()) {
            self.config.url = url;
        }
        if let Some(data) = options.data.filter(|data| !data.is_empty()) {
            self.config.data = data;
        }
        if let Some(method) = options.method {
            self.config.method = method;
        }
    }
}

fn decode_payload(response: TransportResponse, include_header: bool) -> Result<Payload> {
    if include_header || !is_json_content(response.content_type.as_deref()) {
        return Ok(Payload::Text(response.body));
    }
    if response.body.is_empty() {
        return Ok(Payload::Json(Value::Null));
    }
    Ok(Payload::Json(serde_json::from_str(&response.body)?))
}

fn is_json_content(content_type: Option<&str>) -> bool {
    content_type
        .and_then(|ct| ct.trim_start().get(..JSON_CONTENT_TYPE.len()))
        .map(|prefix| prefix.eq_ignore_ascii_case(JSON_CONTENT_TYPE))
        .unwrap_or(false)
}
