//! HTTP transport module
//!
//! [`Transport`] is the seam between the request client and the network.
//! [`ReqwestTransport`] is the default implementation: it runs one exchange
//! on a private current-thread runtime, walks redirects itself so that every
//! hop's headers reach the header callback, and hands back the final body.

use crate::config::HttpMethod;
use crate::error::{HttpCurlError, Result};
use crate::utils::UrlUtils;
use reqwest::header::{CONTENT_TYPE, COOKIE, LOCATION};
use reqwest::{Client, ClientBuilder};
use url::Url;

pub mod request;
pub mod response;

pub use request::PreparedRequest;
pub use response::{ResponseInfo, TransportResponse};

use response::decode_body_with_charset;

/// Executes a prepared request
pub trait Transport {
    /// Run the exchange, calling `on_header` once per received header line
    /// (status lines included) of every response in the redirect chain.
    fn execute(
        &self,
        request: &PreparedRequest,
        on_header: &mut dyn FnMut(&str),
    ) -> Result<TransportResponse>;
}

/// Blocking transport backed by reqwest
#[derive(Debug, Clone, Copy, Default)]
pub struct ReqwestTransport;

impl ReqwestTransport {
    pub fn new() -> Self {
        Self
    }

    fn build_client(request: &PreparedRequest) -> Result<Client> {
        let builder = ClientBuilder::new()
            .timeout(request.timeout)
            .connect_timeout(request.connect_timeout)
            .redirect(reqwest::redirect::Policy::none());

        request
            .tls
            .apply(builder)
            .build()
            .map_err(HttpCurlError::Transport)
    }

    /// Execute the request asynchronously
    ///
    /// `request.timeout` bounds the whole redirect chain, not each hop.
    pub async fn exchange(
        &self,
        request: &PreparedRequest,
        on_header: &mut dyn FnMut(&str),
    ) -> Result<TransportResponse> {
        tokio::time::timeout(request.timeout, self.walk(request, on_header))
            .await
            .map_err(|_| HttpCurlError::Timeout)?
    }

    async fn walk(
        &self,
        request: &PreparedRequest,
        on_header: &mut dyn FnMut(&str),
    ) -> Result<TransportResponse> {
        let mut url = UrlUtils::validate_url(&request.url)?;
        let client = Self::build_client(request)?;

        let mut method = request.method;
        let mut body = request.body.clone();
        let mut output = String::new();
        let mut redirects = 0;

        loop {
            let response = send_once(&client, request, method, url.clone(), body.as_deref()).await?;
            let info = ResponseInfo::from_response(&response);

            for line in info.lines() {
                on_header(&line);
            }
            if request.include_header {
                output.push_str(&info.header_block());
            }

            if request.follow_location {
                if let Some(location) = redirect_target(&info) {
                    if redirects >= request.max_redirects {
                        return Err(HttpCurlError::RedirectLimitExceeded(request.max_redirects));
                    }
                    redirects += 1;

                    url = url.join(&location).map_err(|e| {
                        HttpCurlError::InvalidUrl(format!(
                            "Invalid redirect location '{}': {}",
                            location, e
                        ))
                    })?;
                    if method == HttpMethod::Post
                        && matches!(info.status.as_u16(), 301 | 302 | 303)
                    {
                        method = HttpMethod::Get;
                        body = None;
                    }
                    log::debug!("following {} redirect to {}", info.status.as_u16(), url);
                    continue;
                }
            }

            let content_type = info
                .headers
                .get(CONTENT_TYPE)
                .and_then(|value| value.to_str().ok())
                .map(str::to_string);
            let bytes = response
                .bytes()
                .await
                .map_err(HttpCurlError::from_transport)?;
            output.push_str(&decode_body_with_charset(&bytes, content_type.as_deref()));

            return Ok(TransportResponse {
                status: info.status.as_u16(),
                content_type,
                body: output,
            });
        }
    }
}

impl Transport for ReqwestTransport {
    fn execute(
        &self,
        request: &PreparedRequest,
        on_header: &mut dyn FnMut(&str),
    ) -> Result<TransportResponse> {
        if tokio::runtime::Handle::try_current().is_ok() {
            return Err(HttpCurlError::Runtime(
                "blocking send called inside an async runtime; await ReqwestTransport::exchange instead"
                    .to_string(),
            ));
        }
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;
        runtime.block_on(self.exchange(request, on_header))
    }
}

async fn send_once(
    client: &Client,
    request: &PreparedRequest,
    method: HttpMethod,
    url: Url,
    body: Option<&str>,
) -> Result<reqwest::Response> {
    log::debug!("> {} {}", method, url);
    for line in request.header_lines() {
        log::trace!("> {}", line);
    }

    let mut builder = client.request(method.into(), url);

    for (name, value) in &request.headers {
        if name.eq_ignore_ascii_case("cookie") {
            log::warn!("ignoring custom Cookie header; the stored cookie is sent instead");
            continue;
        }
        builder = builder.header(name.as_str(), value.as_str());
    }

    builder = builder.header(COOKIE, request.cookie.as_str());

    if let (Some(body), Some(content_type)) = (body, request.body_content_type()) {
        if !has_header(&request.headers, "content-type") {
            builder = builder.header(CONTENT_TYPE, content_type);
        }
        builder = builder.body(body.to_string());
    }

    builder.send().await.map_err(HttpCurlError::from_transport)
}

fn redirect_target(info: &ResponseInfo) -> Option<String> {
    if !matches!(info.status.as_u16(), 301 | 302 | 303 | 307 | 308) {
        return None;
    }
    info.headers
        .get(LOCATION)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
}

fn has_header(headers: &[(String, String)], name: &str) -> bool {
    headers.iter().any(|(key, _)| key.eq_ignore_ascii_case(name))
}
