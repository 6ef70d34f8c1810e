//! License API operations

use crate::config::api;
use crate::error::Result;
use crate::webex::WebexClient;

use super::models::{License, LicensesResponse};

impl WebexClient {
    /// List license lines for a customer organization
    pub async fn get_licenses(&self, org_id: &str) -> Result<Vec<License>> {
        let response: LicensesResponse = self
            .get_for_org(org_id, api::LICENSES, &[(api::ORG_ID_PARAM, org_id)])
            .await?;
        Ok(response.items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_get_licenses_scoped_to_org() {
        let mock_server = MockServer::start().await;
        let client = WebexClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/licenses"))
            .and(query_param("orgId", "org-2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "items": [
                    {"name": "Webex Calling - Professional", "totalUnits": 10, "consumedUnits": 3},
                    {"name": "Webex Meetings", "totalUnits": 100, "consumedUnits": 40}
                ]
            })))
            .mount(&mock_server)
            .await;

        let licenses = client.get_licenses("org-2").await.unwrap();
        assert_eq!(licenses.len(), 2);
        assert_eq!(licenses[0].name, "Webex Calling - Professional");
    }
}
