// Result models for decoded API responses.
//
// Required fields are strict: a response missing any of them (or carrying
// the wrong shape) fails construction outright rather than producing a
// partial object. Fields the client does not model explicitly land in
// `extra` and stay retrievable by name.

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::Error;

/// The state of a pairing between a user's authenticator and the
/// requesting account.
#[derive(Debug, Clone, Deserialize)]
pub struct PairingStatus {
    pub id: String,
    pub enabled: bool,
    pub user: UserRef,
    /// Catch-all for fields the client does not model.
    #[serde(flatten)]
    extra: Map<String, Value>,
}

/// The user a pairing belongs to.
#[derive(Debug, Clone, Deserialize)]
pub struct UserRef {
    pub id: String,
    pub name: String,
}

impl PairingStatus {
    /// Build a `PairingStatus` from a decoded response body.
    pub fn from_response(response: Value) -> Result<Self, Error> {
        serde_json::from_value(response).map_err(|e| Error::Api {
            message: format!("Could not parse pairing status from response: {e}"),
        })
    }

    /// Whether the pairing is active and usable for authentication.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn user_id(&self) -> &str {
        &self.user.id
    }

    pub fn user_name(&self) -> &str {
        &self.user.name
    }

    /// Look up a field the client does not model explicitly.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.extra.get(field)
    }
}

/// The state of a single authentication request.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthenticationStatus {
    pub id: String,
    pub pending: bool,
    pub granted: bool,
    pub automated: bool,
    pub reason: String,
    pub terminal: TerminalRef,
    /// Catch-all for fields the client does not model.
    #[serde(flatten)]
    extra: Map<String, Value>,
}

/// The terminal an authentication request was issued for.
#[derive(Debug, Clone, Deserialize)]
pub struct TerminalRef {
    pub id: String,
    pub name: String,
}

impl AuthenticationStatus {
    /// Build an `AuthenticationStatus` from a decoded response body.
    pub fn from_response(response: Value) -> Result<Self, Error> {
        serde_json::from_value(response).map_err(|e| Error::Api {
            message: format!("Could not parse authentication status from response: {e}"),
        })
    }

    /// Whether the request was approved.
    pub fn is_granted(&self) -> bool {
        self.granted
    }

    /// Whether the authenticator has not yet responded.
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub fn terminal_id(&self) -> &str {
        &self.terminal.id
    }

    pub fn terminal_name(&self) -> &str {
        &self.terminal.name
    }

    /// Look up a field the client does not model explicitly.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.extra.get(field)
    }
}
