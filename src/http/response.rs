//! HTTP response handling and formatting

use encoding_rs::Encoding;
use reqwest::header::HeaderMap;
use reqwest::{StatusCode, Version};

/// What a transport reports back after the exchange completes
#[derive(Debug, Clone, PartialEq)]
pub struct TransportResponse {
    /// Status of the final response in the redirect chain
    pub status: u16,
    pub content_type: Option<String>,
    /// Body text, prefixed with every header block when headers are included
    pub body: String,
}

/// Status line and headers of one response in a redirect chain
#[derive(Debug, Clone)]
pub struct ResponseInfo {
    pub version: Version,
    pub status: StatusCode,
    pub headers: HeaderMap,
}

impl ResponseInfo {
    pub fn from_response(response: &reqwest::Response) -> Self {
        Self {
            version: response.version(),
            status: response.status(),
            headers: response.headers().clone(),
        }
    }

    /// Header lines as received, status line first
    pub fn lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.headers.len() + 1);
        lines.push(status_line(self.version, self.status));
        for (name, value) in self.headers.iter() {
            let value = String::from_utf8_lossy(value.as_bytes());
            lines.push(format!("{}: {}", name, value));
        }
        lines
    }

    /// Raw header block terminated by an empty line
    pub fn header_block(&self) -> String {
        format_response_headers(self.version, self.status, &self.headers)
    }
}

pub fn http_version_label(version: Version) -> &'static str {
    match version {
        Version::HTTP_09 => "HTTP/0.9",
        Version::HTTP_10 => "HTTP/1.0",
        Version::HTTP_11 => "HTTP/1.1",
        Version::HTTP_2 => "HTTP/2",
        Version::HTTP_3 => "HTTP/3",
        _ => "HTTP",
    }
}

fn status_line(version: Version, status: StatusCode) -> String {
    match status.canonical_reason() {
        Some(reason) => format!("{} {} {}", http_version_label(version), status.as_u16(), reason),
        None => format!("{} {}", http_version_label(version), status.as_u16()),
    }
}

pub fn format_response_headers(version: Version, status: StatusCode, headers: &HeaderMap) -> String {
    let mut output = status_line(version, status);
    output.push_str("\r\n");
    for (name, value) in headers.iter() {
        output.push_str(name.as_str());
        output.push_str(": ");
        output.push_str(&String::from_utf8_lossy(value.as_bytes()));
        output.push_str("\r\n");
    }
    output.push_str("\r\n");
    output
}

/// Charset parameter of a content type, if any
pub fn extract_charset(content_type: Option<&str>) -> Option<String> {
    content_type?.split(';').skip(1).find_map(|param| {
        let (name, value) = param.split_once('=')?;
        if name.trim().eq_ignore_ascii_case("charset") {
            Some(value.trim().trim_matches('"').to_string())
        } else {
            None
        }
    })
}

/// Decode body bytes using the declared charset, falling back to UTF-8
pub fn decode_body_with_charset(body: &[u8], content_type: Option<&str>) -> String {
    let encoding = extract_charset(content_type)
        .and_then(|label| Encoding::for_label(label.as_bytes()));
    match encoding {
        Some(encoding) => {
            let (decoded, _, _) = encoding.decode(body);
            decoded.into_owned()
        }
        None => String::from_utf8_lossy(body).into_owned(),
    }
}
