mod common;

use common::Harness;
use httpcurl::RequestClient;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, ResponseTemplate};

#[cfg_attr(miri, ignore)]
#[test]
fn test_set_cookie_values_are_captured() {
    let Some(harness) = Harness::start() else {
        return;
    };
    harness.mount(
        Mock::given(method("GET"))
            .and(path("/login"))
            .respond_with(
                ResponseTemplate::new(200)
                    .append_header("Set-Cookie", "a=1; Path=/")
                    .append_header("Set-Cookie", "b=2; Path=/; HttpOnly")
                    .set_body_string("ok"),
            ),
    );

    let mut client = RequestClient::new();
    client.set_url(harness.url("/login"));
    client.send().expect("request should succeed");
    assert_eq!(client.cookie(), "a=1;b=2");
}

#[cfg_attr(miri, ignore)]
#[test]
fn test_captured_cookie_sent_on_next_request() {
    let Some(harness) = Harness::start() else {
        return;
    };
    harness.mount(
        Mock::given(method("GET"))
            .and(path("/login"))
            .respond_with(
                ResponseTemplate::new(200)
                    .append_header("Set-Cookie", "session=abc; Path=/")
                    .set_body_string("welcome"),
            ),
    );
    harness.mount(
        Mock::given(method("GET"))
            .and(path("/profile"))
            .and(header("cookie", "session=abc"))
            .respond_with(ResponseTemplate::new(200).set_body_string("profile")),
    );

    let mut client = RequestClient::new();
    client.set_url(harness.url("/login"));
    client.send().expect("login");

    client.set_url(harness.url("/profile"));
    let payload = client.send().expect("profile");
    assert_eq!(payload.as_text(), Some("profile"));
    assert_eq!(client.cookie(), "");
}

#[cfg_attr(miri, ignore)]
#[test]
fn test_cookie_cleared_when_response_sets_none() {
    let Some(harness) = Harness::start() else {
        return;
    };
    harness.mount(
        Mock::given(method("GET"))
            .and(path("/plain"))
            .respond_with(ResponseTemplate::new(200).set_body_string("ok")),
    );

    let mut client = RequestClient::new();
    client.set_url(harness.url("/plain")).set_cookie("stale=1");
    client.send().expect("request should succeed");
    assert_eq!(client.cookie(), "");
}
