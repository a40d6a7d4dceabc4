//! Configuration management for httpcurl

use std::collections::HashMap;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{HttpCurlError, Result};
use crate::form::FormData;
use crate::utils::StringUtils;

/// Environment variable holding the overall exchange timeout
pub const ENV_TIMEOUT: &str = "HTTPCURL_TIMEOUT";
/// Environment variable holding the connect timeout
pub const ENV_CONNECT_TIMEOUT: &str = "HTTPCURL_CONNECT_TIMEOUT";
/// Environment variable holding the redirect limit
pub const ENV_MAX_REDIRECTS: &str = "HTTPCURL_MAX_REDIRECTS";

/// HTTP method enumeration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    #[default]
    Get,
    Post,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for HttpMethod {
    type Err = HttpCurlError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "GET" => Ok(HttpMethod::Get),
            "POST" => Ok(HttpMethod::Post),
            _ => Err(HttpCurlError::Config(format!(
                "Unsupported HTTP method: {}",
                s
            ))),
        }
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
        }
    }
}

/// Stored request configuration of a [`RequestClient`](crate::RequestClient)
#[derive(Debug, Clone, PartialEq)]
pub struct RequestConfig {
    pub url: String,
    pub data: FormData,
    pub method: HttpMethod,
    pub headers: HashMap<String, String>,
    pub cookie: String,
    pub ssl_verify_peer: bool,
    pub ssl_verify_host: bool,
    pub include_header: bool,
    pub return_transfer: bool,
    pub follow_location: bool,
    pub timeout: Duration,
    pub connect_timeout: Duration,
    pub max_redirects: usize,
    /// Destination for direct-emit mode; stdout when unset
    pub output_file: Option<PathBuf>,
}

impl Default for RequestConfig {
    fn default() -> Self {
        RequestConfig {
            url: String::new(),
            data: FormData::new(),
            method: HttpMethod::Get,
            headers: HashMap::new(),
            cookie: String::new(),
            ssl_verify_peer: false,
            ssl_verify_host: false,
            include_header: false,
            return_transfer: true,
            follow_location: true,
            timeout: Duration::from_secs(300),
            connect_timeout: Duration::from_secs(30),
            max_redirects: 50,
            output_file: None,
        }
    }
}

impl RequestConfig {
    /// Default configuration with timeouts and redirect limit taken from the environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = RequestConfig::default();

        if let Some(timeout) = lookup(ENV_TIMEOUT) {
            config.timeout = StringUtils::parse_timeout(timeout.trim())?;
        }

        if let Some(connect_timeout) = lookup(ENV_CONNECT_TIMEOUT) {
            config.connect_timeout = StringUtils::parse_timeout(connect_timeout.trim())?;
        }

        if let Some(max_redirects) = lookup(ENV_MAX_REDIRECTS) {
            config.max_redirects = max_redirects.trim().parse().map_err(|_| {
                HttpCurlError::Config(format!(
                    "Invalid {} value: '{}'",
                    ENV_MAX_REDIRECTS, max_redirects
                ))
            })?;
        }

        Ok(config)
    }
}
