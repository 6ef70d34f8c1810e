//! Trunk API operations

use crate::config::api;
use crate::error::Result;
use crate::webex::WebexClient;

use super::models::{RouteGroup, RouteGroupsResponse, Trunk, TrunksResponse};

impl WebexClient {
    /// List premise PSTN trunks of a customer organization
    pub async fn get_trunks(&self, org_id: &str) -> Result<Vec<Trunk>> {
        let response: TrunksResponse = self
            .get_for_org(org_id, api::TRUNKS, &[(api::ORG_ID_PARAM, org_id)])
            .await?;
        Ok(response.trunks)
    }

    /// Route groups that use the given trunk
    pub async fn get_trunk_route_groups(
        &self,
        org_id: &str,
        trunk_id: &str,
    ) -> Result<Vec<RouteGroup>> {
        let path = format!(
            "{}/{}/usageRouteGroup",
            api::TRUNKS,
            urlencoding::encode(trunk_id)
        );
        let response: RouteGroupsResponse = self
            .get_for_org(org_id, &path, &[(api::ORG_ID_PARAM, org_id)])
            .await?;
        Ok(response.route_groups)
    }
}
