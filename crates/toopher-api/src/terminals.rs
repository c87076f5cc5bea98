// Terminal-name endpoints

use crate::client::{ToopherApi, form_params};
use crate::error::Error;

impl ToopherApi {
    /// Assign a friendly display name to a user's terminal.
    ///
    /// `POST /user_terminals/create`. The response carries no modeled
    /// fields; success is an error-free return.
    pub async fn assign_friendly_name_to_terminal(
        &self,
        user_name: &str,
        terminal_name: &str,
        terminal_name_extra: &str,
    ) -> Result<(), Error> {
        let params = form_params(
            &[
                ("user_name", user_name),
                ("name", terminal_name),
                ("name_extra", terminal_name_extra),
            ],
            &[],
        );
        self.post("/user_terminals/create", &params).await?;
        Ok(())
    }
}
