//! SSL/TLS verification settings

use reqwest::ClientBuilder;

/// Peer and host verification toggles handed to the transport
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TlsVerification {
    pub verify_peer: bool,
    pub verify_host: bool,
}

impl TlsVerification {
    pub fn new(verify_peer: bool, verify_host: bool) -> Self {
        Self {
            verify_peer,
            verify_host,
        }
    }

    /// Whether any part of certificate checking is switched off
    pub fn is_relaxed(&self) -> bool {
        !self.verify_peer || !self.verify_host
    }

    /// Configure a reqwest client builder accordingly
    pub fn apply(&self, builder: ClientBuilder) -> ClientBuilder {
        if self.is_relaxed() {
            log::debug!(
                "TLS verification relaxed (peer: {}, host: {})",
                self.verify_peer,
                self.verify_host
            );
        }
        builder
            .danger_accept_invalid_certs(!self.verify_peer)
            .danger_accept_invalid_hostnames(!self.verify_host)
    }
}
