// Toopher API HTTP client
//
// Wraps `reqwest::Client` with OAuth-1 signing, form encoding, response
// decoding, and error classification. Endpoint operations (pairings,
// authentication requests, terminals) are implemented as inherent methods
// via separate files to keep this module focused on request mechanics.

use std::collections::BTreeMap;

use reqwest::{Method, header};
use secrecy::SecretString;
use serde_json::Value;
use tracing::debug;
use url::Url;

use crate::error::{self, Error};
use crate::signing;
use crate::transport::TransportConfig;

/// Production API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.toopher.com/v1";

/// OAuth 1.0 consumer credentials issued for a requester account.
///
/// Immutable for the lifetime of the client. The secret is only exposed
/// at the signing boundary.
#[derive(Debug, Clone)]
pub struct Credentials {
    key: String,
    secret: SecretString,
}

impl Credentials {
    pub fn new(key: impl Into<String>, secret: impl Into<SecretString>) -> Self {
        Self {
            key: key.into(),
            secret: secret.into(),
        }
    }

    pub(crate) fn key(&self) -> &str {
        &self.key
    }

    pub(crate) fn secret(&self) -> &SecretString {
        &self.secret
    }
}

/// Client for the Toopher two-factor-authentication API.
///
/// Holds only immutable state, so one instance can serve concurrent calls
/// from multiple tasks. Every operation is a single signed request with no
/// internal retries; callers own retry policy.
pub struct ToopherApi {
    http: reqwest::Client,
    base_url: String,
    credentials: Credentials,
}

impl ToopherApi {
    /// Create a client against the production endpoint with default
    /// transport settings.
    pub fn new(credentials: Credentials) -> Result<Self, Error> {
        Self::with_config(credentials, DEFAULT_BASE_URL, &TransportConfig::default())
    }

    /// Create a client against a custom endpoint.
    ///
    /// A trailing slash on `base_url` is stripped before paths are
    /// appended.
    pub fn with_config(
        credentials: Credentials,
        base_url: &str,
        transport: &TransportConfig,
    ) -> Result<Self, Error> {
        let http = transport.build_client()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_owned(),
            credentials,
        })
    }

    /// The configured base URL (trailing slash stripped).
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // ── Request helpers ──────────────────────────────────────────────

    /// Send a signed GET request and decode the response. Identifiers
    /// travel in the path; GET carries no separately encoded parameters.
    pub(crate) async fn get(&self, path: &str) -> Result<Value, Error> {
        self.request(Method::GET, path, &BTreeMap::new()).await
    }

    /// Send a signed POST request with a form-encoded body and decode the
    /// response.
    pub(crate) async fn post(
        &self,
        path: &str,
        params: &BTreeMap<String, String>,
    ) -> Result<Value, Error> {
        self.request(Method::POST, path, params).await
    }

    async fn request(
        &self,
        method: Method,
        path: &str,
        params: &BTreeMap<String, String>,
    ) -> Result<Value, Error> {
        let url = Url::parse(&format!("{}{}", self.base_url, path))?;
        let authorization =
            signing::authorization_header(&method, &url, params, &self.credentials);

        debug!(method = %method, url = %url, "sending API request");

        let mut builder = self
            .http
            .request(method.clone(), url)
            .header(header::AUTHORIZATION, authorization);
        if method == Method::POST {
            builder = builder.form(params);
        }

        let response = builder.send().await.map_err(Error::Transport)?;
        let status = response.status();
        let body = response.text().await.map_err(Error::Transport)?;

        let decoded: Value = serde_json::from_str(&body).map_err(|_| Error::Api {
            message: "Response from server could not be decoded as JSON.".to_owned(),
        })?;

        if status.as_u16() > 300 {
            return Err(error::classify(&decoded));
        }

        Ok(decoded)
    }
}

/// Merge named parameters and caller-supplied extras into one form map.
/// Extras win on key collision.
pub(crate) fn form_params(
    named: &[(&str, &str)],
    extras: &[(&str, &str)],
) -> BTreeMap<String, String> {
    named
        .iter()
        .chain(extras)
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_stripped() {
        let credentials = Credentials::new("key", "secret".to_string());
        let api = ToopherApi::with_config(
            credentials,
            "https://api.example.com/v1/",
            &TransportConfig::default(),
        )
        .expect("client builds");
        assert_eq!(api.base_url(), "https://api.example.com/v1");
    }

    #[test]
    fn form_params_merges_named_and_extras() {
        let params = form_params(&[("a", "1"), ("b", "2")], &[("c", "3")]);
        assert_eq!(params.len(), 3);
        assert_eq!(params.get("a").map(String::as_str), Some("1"));
        assert_eq!(params.get("c").map(String::as_str), Some("3"));
    }

    #[test]
    fn extras_override_named_parameters() {
        let params = form_params(&[("a", "named")], &[("a", "extra")]);
        assert_eq!(params.get("a").map(String::as_str), Some("extra"));
    }
}
