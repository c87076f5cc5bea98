// Pairing endpoints
//
// Pairing creation (by phrase or by SMS) and status retrieval.

use tracing::debug;

use crate::client::{ToopherApi, form_params};
use crate::error::Error;
use crate::models::PairingStatus;

impl ToopherApi {
    /// Pair an authenticator with a user account using a pairing phrase.
    ///
    /// `POST /pairings/create`. `extras` is forwarded as additional form
    /// parameters; colliding keys override the named ones.
    pub async fn pair(
        &self,
        pairing_phrase: &str,
        user_name: &str,
        extras: &[(&str, &str)],
    ) -> Result<PairingStatus, Error> {
        debug!(user_name, "creating pairing by phrase");
        let params = form_params(
            &[("pairing_phrase", pairing_phrase), ("user_name", user_name)],
            extras,
        );
        let result = self.post("/pairings/create", &params).await?;
        PairingStatus::from_response(result)
    }

    /// Pair an authenticator by sending an SMS invitation to a phone
    /// number.
    ///
    /// `POST /pairings/create/sms`. When `phone_country` is `None` the
    /// key is left out of the request entirely.
    pub async fn pair_sms(
        &self,
        phone_number: &str,
        user_name: &str,
        phone_country: Option<&str>,
    ) -> Result<PairingStatus, Error> {
        debug!(user_name, "creating pairing by SMS");
        let mut named = vec![("phone_number", phone_number), ("user_name", user_name)];
        if let Some(country) = phone_country {
            named.push(("phone_country", country));
        }
        let params = form_params(&named, &[]);
        let result = self.post("/pairings/create/sms", &params).await?;
        PairingStatus::from_response(result)
    }

    /// Fetch the current status of a pairing.
    ///
    /// `GET /pairings/{pairing_id}`
    pub async fn get_pairing_status(&self, pairing_id: &str) -> Result<PairingStatus, Error> {
        let result = self.get(&format!("/pairings/{pairing_id}")).await?;
        PairingStatus::from_response(result)
    }
}
