mod common;

use common::Harness;
use httpcurl::RequestClient;
use tempfile::tempdir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

#[cfg_attr(miri, ignore)]
#[test]
fn test_include_header_prefixes_header_block() {
    let Some(harness) = Harness::start() else {
        return;
    };
    harness.mount(
        Mock::given(method("GET"))
            .and(path("/json"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("X-Trace", "t1")
                    .set_body_raw(r#"{"x":1}"#, "application/json"),
            ),
    );

    let mut client = RequestClient::new();
    client.set_url(harness.url("/json")).set_include_header(true);
    let payload = client.send().expect("request should succeed");
    let text = payload.as_text().expect("raw text with headers");
    assert!(text.starts_with("HTTP/1.1 200 OK\r\n"));
    assert!(text.contains("x-trace: t1\r\n"));
    assert!(text.ends_with("\r\n\r\n{\"x\":1}"));
}

#[cfg_attr(miri, ignore)]
#[test]
fn test_direct_emit_writes_body_to_file() {
    let Some(harness) = Harness::start() else {
        return;
    };
    harness.mount(
        Mock::given(method("GET"))
            .and(path("/download"))
            .respond_with(ResponseTemplate::new(200).set_body_string("file body")),
    );

    let temp = tempdir().expect("tempdir");
    let out = temp.path().join("out.txt");
    let mut client = RequestClient::new();
    client
        .set_url(harness.url("/download"))
        .set_return_transfer(false)
        .set_output_file(&out);
    let payload = client.send().expect("request should succeed");
    assert!(payload.is_emitted());
    assert_eq!(std::fs::read_to_string(out).expect("read"), "file body");
}
