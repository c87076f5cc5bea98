// Authentication-request endpoints
//
// Initiating challenges, polling their status, and the OTP fallback.

use tracing::debug;

use crate::client::{ToopherApi, form_params};
use crate::error::Error;
use crate::models::AuthenticationStatus;

impl ToopherApi {
    /// Ask a paired authenticator to approve an action at a terminal.
    ///
    /// `POST /authentication_requests/initiate`. `action_name` is omitted
    /// from the request when `None`, which makes the service use its
    /// default action. `extras` is forwarded as additional form
    /// parameters; colliding keys override the named ones.
    pub async fn authenticate(
        &self,
        pairing_id: &str,
        terminal_name: &str,
        action_name: Option<&str>,
        extras: &[(&str, &str)],
    ) -> Result<AuthenticationStatus, Error> {
        debug!(pairing_id, terminal_name, "initiating authentication request");
        let mut named = vec![("pairing_id", pairing_id), ("terminal_name", terminal_name)];
        if let Some(action) = action_name {
            named.push(("action_name", action));
        }
        let params = form_params(&named, extras);
        let result = self.post("/authentication_requests/initiate", &params).await?;
        AuthenticationStatus::from_response(result)
    }

    /// Fetch the current status of an authentication request.
    ///
    /// `GET /authentication_requests/{id}`
    pub async fn get_authentication_status(
        &self,
        authentication_request_id: &str,
    ) -> Result<AuthenticationStatus, Error> {
        let result = self
            .get(&format!(
                "/authentication_requests/{authentication_request_id}"
            ))
            .await?;
        AuthenticationStatus::from_response(result)
    }

    /// Satisfy an authentication request with a one-time password instead
    /// of the primary authenticator.
    ///
    /// `POST /authentication_requests/{id}/otp_auth`
    pub async fn authenticate_with_otp(
        &self,
        authentication_request_id: &str,
        otp: &str,
    ) -> Result<AuthenticationStatus, Error> {
        let params = form_params(&[("otp", otp)], &[]);
        let result = self
            .post(
                &format!("/authentication_requests/{authentication_request_id}/otp_auth"),
                &params,
            )
            .await?;
        AuthenticationStatus::from_response(result)
    }

    /// Initiate an authentication request for a user by name, without a
    /// pairing id.
    ///
    /// The service resolves the pairing from `user_name` and
    /// `terminal_name_extra`. The pairing id and terminal name are sent
    /// as empty placeholders; callers must not rely on those values
    /// appearing in the request.
    pub async fn authenticate_by_user_name(
        &self,
        user_name: &str,
        terminal_name_extra: &str,
        action_name: Option<&str>,
        extras: &[(&str, &str)],
    ) -> Result<AuthenticationStatus, Error> {
        let mut merged = extras.to_vec();
        merged.push(("user_name", user_name));
        merged.push(("terminal_name_extra", terminal_name_extra));
        self.authenticate("", "", action_name, &merged).await
    }
}
