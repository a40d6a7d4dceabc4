use httpcurl::{HttpMethod, RequestClient};

#[test]
fn test_version() {
    assert!(!httpcurl::VERSION.is_empty());
}

#[test]
fn test_new_client_has_documented_defaults() {
    let client = RequestClient::new();
    let config = client.config();
    assert_eq!(client.url(), "");
    assert_eq!(client.method(), HttpMethod::Get);
    assert_eq!(client.cookie(), "");
    assert!(!config.ssl_verify_peer);
    assert!(!config.ssl_verify_host);
    assert!(!config.include_header);
    assert!(config.return_transfer);
    assert!(config.follow_location);
}

#[test]
fn test_empty_url_is_a_transport_error() {
    let mut client = RequestClient::new();
    let err = client.send().expect_err("no url configured");
    assert!(err.is_transport());
}

#[tokio::test]
async fn test_blocking_send_inside_runtime_returns_error() {
    let mut client = RequestClient::new();
    client.set_url("http://127.0.0.1:9/");
    let err = client.send().expect_err("blocking send inside a runtime");
    assert!(matches!(err, httpcurl::HttpCurlError::Runtime(_)));
}
