//! Outbound request description handed to a transport

use std::time::Duration;

use crate::config::{HttpMethod, RequestConfig};
use crate::ssl::TlsVerification;
use crate::utils::{StringUtils, UrlUtils};

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// A fully resolved request: URL with query, header lines, cookie and body
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedRequest {
    pub url: String,
    pub method: HttpMethod,
    /// `(name, value)` pairs, one per configured header
    pub headers: Vec<(String, String)>,
    /// Sent as the `Cookie` header even when empty
    pub cookie: String,
    pub body: Option<String>,
    pub tls: TlsVerification,
    pub include_header: bool,
    pub follow_location: bool,
    pub max_redirects: usize,
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl PreparedRequest {
    /// Build the request described by the effective configuration
    pub fn from_config(config: &RequestConfig) -> Self {
        let encoded = config.data.encode();

        let (url, body) = match config.method {
            HttpMethod::Get if !config.data.is_empty() => {
                (UrlUtils::append_query(&config.url, &encoded), None)
            }
            HttpMethod::Get => (config.url.clone(), None),
            HttpMethod::Post => (config.url.clone(), Some(encoded)),
        };

        let headers = config
            .headers
            .iter()
            .map(|(name, value)| (name.clone(), value.clone()))
            .collect();

        PreparedRequest {
            url,
            method: config.method,
            headers,
            cookie: config.cookie.clone(),
            body,
            tls: TlsVerification::new(config.ssl_verify_peer, config.ssl_verify_host),
            include_header: config.include_header,
            follow_location: config.follow_location,
            max_redirects: config.max_redirects,
            timeout: config.timeout,
            connect_timeout: config.connect_timeout,
        }
    }

    /// Content type of the body, if one is sent
    pub fn body_content_type(&self) -> Option<&'static str> {
        self.body.as_ref().map(|_| FORM_CONTENT_TYPE)
    }

    /// Header lines in `Name: Value` form
    pub fn header_lines(&self) -> Vec<String> {
        self.headers
            .iter()
            .map(|(name, value)| StringUtils::header_line(name, value))
            .collect()
    }
}
