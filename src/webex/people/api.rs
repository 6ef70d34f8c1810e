//! Person feature API operations

use crate::config::api;
use crate::error::Result;
use crate::webex::WebexClient;

use super::models::{InterceptSettings, OutgoingPermission};

impl WebexClient {
    /// Outgoing calling permissions of a person
    pub async fn get_outgoing_permission(
        &self,
        org_id: &str,
        person_id: &str,
    ) -> Result<OutgoingPermission> {
        let path = feature_path(person_id, "outgoingPermission");
        self.get_for_org(org_id, &path, &[(api::ORG_ID_PARAM, org_id)])
            .await
    }

    /// Call intercept settings of a person
    pub async fn get_intercept(&self, org_id: &str, person_id: &str) -> Result<InterceptSettings> {
        let path = feature_path(person_id, "intercept");
        self.get_for_org(org_id, &path, &[(api::ORG_ID_PARAM, org_id)])
            .await
    }
}

fn feature_path(person_id: &str, feature: &str) -> String {
    format!(
        "{}/{}/features/{}",
        api::PEOPLE,
        urlencoding::encode(person_id),
        feature
    )
}
