//! httpcurl - a chainable, curl-style HTTP request client
//!
//! Configure a [`RequestClient`] through `set_*` calls, then [`send`] it. JSON
//! responses come back parsed, everything else as text, and cookies set by
//! the server are kept for the next request.
//!
//! [`send`]: RequestClient::send

pub mod client;
pub mod config;
pub mod cookie;
pub mod error;
pub mod form;
pub mod http;
pub mod logging;
pub mod output;
pub mod ssl;
pub mod utils;

pub use client::{Payload, RequestClient, SendOptions};
pub use config::{HttpMethod, RequestConfig};
pub use error::{HttpCurlError, Result};
pub use form::FormData;
pub use http::{ReqwestTransport, Transport};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
