// Transport configuration for building the underlying reqwest::Client.
//
// Timeout, trust-store, and identifying-header settings live here so the
// API client itself only deals in requests and responses.

use std::path::PathBuf;
use std::time::Duration;

use crate::error::Error;

/// Identifying header sent with every request:
/// client name and version, plus the host-runtime version.
pub const USER_AGENT: &str = concat!(
    "toopher-rust/",
    env!("CARGO_PKG_VERSION"),
    " (rust ",
    env!("CARGO_PKG_RUST_VERSION"),
    ")"
);

/// TLS trust-store selection.
#[derive(Debug, Clone)]
pub enum TlsMode {
    /// Use the system certificate store.
    System,
    /// Trust an additional CA certificate from the given PEM file.
    CustomCa(PathBuf),
}

/// Transport settings applied when the HTTP client is built.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    pub tls: TlsMode,
    pub timeout: Duration,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            tls: TlsMode::System,
            timeout: Duration::from_secs(30),
        }
    }
}

impl TransportConfig {
    /// Build a `reqwest::Client` from this config.
    pub fn build_client(&self) -> Result<reqwest::Client, Error> {
        let mut builder = reqwest::Client::builder()
            .timeout(self.timeout)
            .user_agent(USER_AGENT);

        match &self.tls {
            TlsMode::System => {}
            TlsMode::CustomCa(path) => {
                let cert_pem = std::fs::read(path)
                    .map_err(|e| Error::Tls(format!("failed to read CA cert: {e}")))?;
                let cert = reqwest::Certificate::from_pem(&cert_pem)
                    .map_err(|e| Error::Tls(format!("invalid CA cert: {e}")))?;
                builder = builder.add_root_certificate(cert);
            }
        }

        builder
            .build()
            .map_err(|e| Error::Tls(format!("failed to build HTTP client: {e}")))
    }

    /// Trust an additional CA certificate from a PEM file.
    pub fn with_ca_certificate(mut self, path: impl Into<PathBuf>) -> Self {
        self.tls = TlsMode::CustomCa(path.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_agent_identifies_client_and_runtime() {
        assert!(USER_AGENT.starts_with("toopher-rust/"));
        assert!(USER_AGENT.contains("(rust "));
    }

    #[test]
    fn default_config_builds() {
        assert!(TransportConfig::default().build_client().is_ok());
    }

    #[test]
    fn missing_ca_file_is_a_tls_error() {
        let config = TransportConfig::default().with_ca_certificate("/nonexistent/ca.pem");
        let result = config.build_client();
        assert!(
            matches!(result, Err(Error::Tls(ref msg)) if msg.contains("failed to read CA cert")),
            "expected Tls error, got: {result:?}"
        );
    }
}
