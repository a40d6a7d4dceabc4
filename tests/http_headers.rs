mod common;

use common::Harness;
use httpcurl::RequestClient;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, ResponseTemplate};

#[cfg_attr(miri, ignore)]
#[test]
fn test_every_custom_header_sent() {
    let Some(harness) = Harness::start() else {
        return;
    };
    harness.mount(
        Mock::given(method("GET"))
            .and(path("/headers"))
            .and(header("X-First", "one"))
            .and(header("X-Second", "two"))
            .respond_with(ResponseTemplate::new(200).set_body_string("ok")),
    );

    let mut client = RequestClient::new();
    client
        .set_url(harness.url("/headers"))
        .set_header("X-First", "one")
        .set_header("X-Second", "two");
    let payload = client.send().expect("request should succeed");
    assert_eq!(payload.as_text(), Some("ok"));

    let requests = harness.received();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].headers.get_all("x-first").iter().count(), 1);
}

#[cfg_attr(miri, ignore)]
#[test]
fn test_cookie_header_sent_verbatim() {
    let Some(harness) = Harness::start() else {
        return;
    };
    harness.mount(
        Mock::given(method("GET"))
            .and(path("/cookie"))
            .and(header("cookie", "a=1; b=2"))
            .respond_with(ResponseTemplate::new(200).set_body_string("ok")),
    );

    let mut client = RequestClient::new();
    client.set_url(harness.url("/cookie")).set_cookie("a=1; b=2");
    let payload = client.send().expect("request should succeed");
    assert_eq!(payload.as_text(), Some("ok"));
}

#[cfg_attr(miri, ignore)]
#[test]
fn test_empty_cookie_still_sent() {
    let Some(harness) = Harness::start() else {
        return;
    };
    harness.mount(
        Mock::given(method("GET"))
            .and(path("/empty"))
            .respond_with(ResponseTemplate::new(200).set_body_string("ok")),
    );

    let mut client = RequestClient::new();
    client.set_url(harness.url("/empty"));
    client.send().expect("request should succeed");

    let requests = harness.received();
    let cookie = requests[0].headers.get("cookie").expect("cookie header");
    assert_eq!(cookie.as_bytes(), b"");
}

#[cfg_attr(miri, ignore)]
#[test]
fn test_custom_cookie_header_does_not_duplicate_cookie() {
    let Some(harness) = Harness::start() else {
        return;
    };
    harness.mount(
        Mock::given(method("GET"))
            .and(path("/single"))
            .respond_with(ResponseTemplate::new(200).set_body_string("ok")),
    );

    let mut client = RequestClient::new();
    client
        .set_url(harness.url("/single"))
        .set_header("Cookie", "x=1")
        .set_cookie("y=2");
    client.send().expect("request should succeed");

    let requests = harness.received();
    let cookies: Vec<&[u8]> = requests[0]
        .headers
        .get_all("cookie")
        .iter()
        .map(|value| value.as_bytes())
        .collect();
    assert_eq!(cookies, vec![b"y=2".as_slice()]);
}
