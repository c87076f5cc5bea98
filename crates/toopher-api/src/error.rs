use serde_json::Value;
use thiserror::Error;

/// Top-level error type for the `toopher-api` crate.
///
/// Service-reported failures keep the `error_message` text verbatim in
/// their `message` field so callers can log exactly what the API said.
#[derive(Debug, Error)]
pub enum Error {
    // ── Service errors ──────────────────────────────────────────────
    /// Unclassified service error, or a malformed response
    /// (non-JSON body, unparseable status fields).
    #[error("API error: {message}")]
    Api { message: String },

    /// The user account has been disabled (error code 704).
    #[error("user disabled: {message}")]
    UserDisabled { message: String },

    /// The referenced user does not exist (error code 705).
    #[error("unknown user: {message}")]
    UnknownUser { message: String },

    /// The referenced terminal does not exist (error code 706).
    #[error("unknown terminal: {message}")]
    UnknownTerminal { message: String },

    /// The pairing has been deactivated, or was never authorized.
    #[error("pairing deactivated: {message}")]
    PairingDeactivated { message: String },

    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, timeout, etc.)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// TLS trust-store or client construction error.
    #[error("TLS error: {0}")]
    Tls(String),
}

impl Error {
    /// The error message reported by the service, verbatim, if this error
    /// came from a decoded service response.
    pub fn service_message(&self) -> Option<&str> {
        match self {
            Self::Api { message }
            | Self::UserDisabled { message }
            | Self::UnknownUser { message }
            | Self::UnknownTerminal { message }
            | Self::PairingDeactivated { message } => Some(message),
            _ => None,
        }
    }
}

// ── Error classification ────────────────────────────────────────────

const USER_DISABLED: i64 = 704;
const UNKNOWN_USER: i64 = 705;
const UNKNOWN_TERMINAL: i64 = 706;

/// Message fragments that identify a deactivated or unauthorized pairing.
/// The service does not yet assign a dedicated error code for this
/// condition, so classification falls back to the message text.
const PAIRING_DEACTIVATED_MARKERS: [&str; 2] = [
    "pairing has been deactivated",
    "pairing has not been authorized",
];

/// Map a decoded error body onto the taxonomy.
///
/// Known `error_code` values win over the message heuristic; anything
/// unrecognized becomes [`Error::Api`]. A body missing `error_message`
/// falls back to its own serialized form so the message is never empty.
pub(crate) fn classify(body: &Value) -> Error {
    let code = body.get("error_code").and_then(Value::as_i64);
    let message = body
        .get("error_message")
        .and_then(Value::as_str)
        .map_or_else(|| body.to_string(), str::to_owned);

    match code {
        Some(USER_DISABLED) => Error::UserDisabled { message },
        Some(UNKNOWN_USER) => Error::UnknownUser { message },
        Some(UNKNOWN_TERMINAL) => Error::UnknownTerminal { message },
        _ => {
            if PAIRING_DEACTIVATED_MARKERS
                .iter()
                .any(|marker| message.contains(marker))
            {
                Error::PairingDeactivated { message }
            } else {
                Error::Api { message }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn known_codes_map_to_specific_variants() {
        let cases = [
            (704, "user disabled"),
            (705, "no such user"),
            (706, "no such terminal"),
        ];
        for (code, msg) in cases {
            let err = classify(&json!({ "error_code": code, "error_message": msg }));
            let matched = match (code, &err) {
                (704, Error::UserDisabled { message })
                | (705, Error::UnknownUser { message })
                | (706, Error::UnknownTerminal { message }) => message == msg,
                _ => false,
            };
            assert!(matched, "code {code} produced the wrong variant: {err:?}");
        }
    }

    #[test]
    fn deactivated_pairing_matches_on_message() {
        let err = classify(&json!({
            "error_code": 601,
            "error_message": "this pairing has been deactivated"
        }));
        assert!(
            matches!(err, Error::PairingDeactivated { .. }),
            "expected PairingDeactivated, got: {err:?}"
        );
    }

    #[test]
    fn unauthorized_pairing_matches_on_message() {
        let err = classify(&json!({
            "error_code": 601,
            "error_message": "this pairing has not been authorized to authenticate"
        }));
        assert!(
            matches!(err, Error::PairingDeactivated { .. }),
            "expected PairingDeactivated, got: {err:?}"
        );
    }

    #[test]
    fn known_code_wins_over_message_heuristic() {
        let err = classify(&json!({
            "error_code": 704,
            "error_message": "pairing has been deactivated"
        }));
        assert!(
            matches!(err, Error::UserDisabled { .. }),
            "code mapping must take precedence, got: {err:?}"
        );
    }

    #[test]
    fn unmapped_code_and_message_fall_back_to_generic() {
        let err = classify(&json!({
            "error_code": 42,
            "error_message": "something else entirely"
        }));
        match err {
            Error::Api { ref message } => {
                assert_eq!(message, "something else entirely", "message must be verbatim");
            }
            other => panic!("expected generic Api error, got: {other:?}"),
        }
    }

    #[test]
    fn missing_fields_degrade_to_generic() {
        let err = classify(&json!({ "detail": "totally different shape" }));
        assert!(
            matches!(err, Error::Api { .. }),
            "expected Api for an unrecognized body, got: {err:?}"
        );
        assert!(
            err.service_message().is_some_and(|m| m.contains("detail")),
            "fallback message should carry the body"
        );
    }

    #[test]
    fn service_message_is_verbatim() {
        let err = classify(&json!({
            "error_code": 705,
            "error_message": "No matching user exists."
        }));
        assert_eq!(err.service_message(), Some("No matching user exists."));
    }

    #[test]
    fn transport_errors_carry_no_service_message() {
        let parse_err = url::ParseError::EmptyHost;
        assert!(Error::InvalidUrl(parse_err).service_message().is_none());
    }
}
