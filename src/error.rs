//! Error handling for httpcurl

use thiserror::Error;

/// Main error type for httpcurl operations
#[derive(Error, Debug)]
pub enum HttpCurlError {
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Network timeout")]
    Timeout,

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Redirect limit exceeded: {0}")]
    RedirectLimitExceeded(usize),

    #[error("JSON decoding error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Runtime error: {0}")]
    Runtime(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl HttpCurlError {
    /// Whether the exchange itself failed (network, DNS, TLS, timeout, URL, redirects).
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            HttpCurlError::Transport(_)
                | HttpCurlError::Timeout
                | HttpCurlError::InvalidUrl(_)
                | HttpCurlError::RedirectLimitExceeded(_)
        )
    }

    /// Whether a JSON response body failed to parse.
    pub fn is_decode(&self) -> bool {
        matches!(self, HttpCurlError::Decode(_))
    }

    /// Map a reqwest failure, splitting timeouts out of the generic case.
    pub(crate) fn from_transport(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            HttpCurlError::Timeout
        } else {
            HttpCurlError::Transport(err)
        }
    }
}

/// Result type alias for httpcurl operations
pub type Result<T> = std::result::Result<T, HttpCurlError>;
