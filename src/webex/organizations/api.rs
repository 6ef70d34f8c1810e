//! Organization API operations

use log::debug;

use crate::config::api;
use crate::error::Result;
use crate::webex::WebexClient;

use super::models::{Organization, OrganizationsResponse};

impl WebexClient {
    /// List every organization visible to the partner token
    pub async fn list_organizations(&self) -> Result<Vec<Organization>> {
        debug!("Fetching organizations");
        let response: OrganizationsResponse = self.get_json(api::ORGANIZATIONS, &[]).await?;
        Ok(response.items)
    }

    /// Fetch a single organization's details (also re-establishes partner scope)
    pub async fn get_organization(&self, org_id: &str) -> Result<Organization> {
        let path = format!("{}/{}", api::ORGANIZATIONS, urlencoding::encode(org_id));
        self.get_for_org(org_id, &path, &[]).await
    }
}
