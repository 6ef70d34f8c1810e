//! Phone number API operations

use crate::config::api;
use crate::error::Result;
use crate::webex::WebexClient;

use super::models::{PhoneNumber, PhoneNumbersResponse};

impl WebexClient {
    /// List numbers configured in a customer organization
    pub async fn get_phone_numbers(&self, org_id: &str) -> Result<Vec<PhoneNumber>> {
        let response: PhoneNumbersResponse = self
            .get_for_org(org_id, api::NUMBERS, &[(api::ORG_ID_PARAM, org_id)])
            .await?;
        Ok(response.phone_numbers)
    }
}
