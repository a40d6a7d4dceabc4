#![allow(dead_code)]

use tokio::runtime::Runtime;
use wiremock::{Mock, MockServer, Request};

pub fn can_bind_localhost() -> bool {
    std::net::TcpListener::bind("127.0.0.1:0").is_ok()
}

/// Mock server driven by its own runtime so blocking sends can run on the test thread
pub struct Harness {
    pub server: MockServer,
    pub runtime: Runtime,
}

impl Harness {
    pub fn start() -> Option<Self> {
        if !can_bind_localhost() {
            return None;
        }
        httpcurl::logging::init();
        let runtime = Runtime::new().expect("runtime");
        let server = runtime.block_on(MockServer::start());
        Some(Self { server, runtime })
    }

    pub fn mount(&self, mock: Mock) {
        self.runtime.block_on(mock.mount(&self.server));
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.server.uri(), path)
    }

    pub fn received(&self) -> Vec<Request> {
        self.runtime
            .block_on(self.server.received_requests())
            .expect("requests")
    }
}
