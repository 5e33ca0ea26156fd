// ── Runtime client configuration ──
//
// These types describe *how* to reach the events service. They never touch
// disk: the CLI builds a `ClientConfig` from its profile and hands it in.

use std::path::PathBuf;
use std::time::Duration;

pub use eventdesk_api::client::DEFAULT_BASE_URL;
use eventdesk_api::transport::{TlsMode, TransportConfig};
use url::Url;

/// Page size used by the event search when nothing else is configured.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// TLS verification strategy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TlsVerification {
    /// System CA store (strict).
    #[default]
    SystemDefaults,
    /// Custom CA certificate file.
    CustomCa(PathBuf),
    /// Skip verification (self-signed development servers).
    DangerAcceptInvalid,
}

/// Configuration for one events service.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Service root, including the fixed API base path
    /// (e.g., `http://localhost:8080/api`).
    pub server: Url,
    /// TLS verification strategy.
    pub tls: TlsVerification,
    /// Request timeout.
    pub timeout: Duration,
    /// Events per search page.
    pub page_size: u32,
}

impl ClientConfig {
    /// Config for `server` with strict TLS, a 30s timeout and the default
    /// page size.
    pub fn new(server: Url) -> Self {
        Self {
            server,
            tls: TlsVerification::default(),
            timeout: Duration::from_secs(30),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Transport settings for the gateway's HTTP client.
    pub fn transport(&self) -> TransportConfig {
        TransportConfig {
            tls: match &self.tls {
                TlsVerification::SystemDefaults => TlsMode::System,
                TlsVerification::CustomCa(path) => TlsMode::CustomCa(path.clone()),
                TlsVerification::DangerAcceptInvalid => TlsMode::DangerAcceptInvalid,
            },
            timeout: self.timeout,
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn new_fills_in_defaults() {
        let config = ClientConfig::new(Url::parse("http://events.test/api").unwrap());
        assert_eq!(config.server.as_str(), "http://events.test/api");
        assert_eq!(config.tls, TlsVerification::SystemDefaults);
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.page_size, DEFAULT_PAGE_SIZE);

        let transport = config.transport();
        assert!(matches!(transport.tls, TlsMode::System));
        assert_eq!(transport.timeout, Duration::from_secs(30));
    }
}
