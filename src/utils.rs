//! Utility functions and helpers

use crate::error::{HttpCurlError, Result};
use url::Url;

/// URL validation and composition utilities
pub struct UrlUtils;

impl UrlUtils {
    /// Parse the effective request URL
    pub fn validate_url(input: &str) -> Result<Url> {
        Url::parse(input)
            .map_err(|e| HttpCurlError::InvalidUrl(format!("Invalid URL '{}': {}", input, e)))
    }

    /// Append an encoded query string; an existing query is not merged
    pub fn append_query(url: &str, query: &str) -> String {
        if query.is_empty() {
            url.to_string()
        } else {
            format!("{}?{}", url, query)
        }
    }
}

/// String utilities
pub struct StringUtils;

impl StringUtils {
    /// Render a single `Name: Value` header line
    pub fn header_line(name: &str, value: &str) -> String {
        format!("{}: {}", name, value)
    }

    /// Parse timeout values (supports suffixes like 's', 'm', 'h')
    pub fn parse_timeout(input: &str) -> Result<std::time::Duration> {
        if let Ok(seconds) = input.parse::<u64>() {
            return Ok(std::time::Duration::from_secs(seconds));
        }

        let (number_part, suffix) = if let Some(stripped) = input.strip_suffix('s') {
            (stripped, 1)
        } else if let Some(stripped) = input.strip_suffix('m') {
            (stripped, 60)
        } else if let Some(stripped) = input.strip_suffix('h') {
            (stripped, 3600)
        } else {
            return Err(HttpCurlError::Config(format!(
                "Invalid timeout format: '{}'. Use number with optional suffix (s/m/h)",
                input
            )));
        };

        let number: u64 = number_part.parse().map_err(|_| {
            HttpCurlError::Config(format!("Invalid timeout number: '{}'", number_part))
        })?;

        Ok(std::time::Duration::from_secs(number * suffix))
    }
}
