//! License data models

use serde::Deserialize;

/// Response wrapper for the licenses list
#[derive(Deserialize, Debug)]
pub struct LicensesResponse {
    #[serde(default)]
    pub items: Vec<License>,
}

/// A license line held by an organization
#[derive(Deserialize, Debug, Clone)]
pub struct License {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "totalUnits", default)]
    pub total_units: i64,
    #[serde(rename = "consumedUnits", default)]
    pub consumed_units: i64,
    #[serde(rename = "subscriptionId")]
    pub subscription_id: Option<String>,
}

impl License {
    /// Subscription the license line belongs to, if any
    pub fn subscription(&self) -> Option<&str> {
        self.subscription_id.as_deref().filter(|s| !s.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_license_parsing() {
        let license: License = serde_json::from_value(serde_json::json!({
            "id": "lic-1",
            "name": "Webex Calling - Professional",
            "totalUnits": 50,
            "consumedUnits": 12,
            "subscriptionId": "Sub123"
        }))
        .unwrap();
        assert_eq!(license.total_units, 50);
        assert_eq!(license.consumed_units, 12);
        assert_eq!(license.subscription(), Some("Sub123"));
    }

    #[test]
    fn test_empty_subscription_is_none() {
        let license: License = serde_json::from_value(serde_json::json!({
            "name": "Webex Calling - Workspaces",
            "subscriptionId": ""
        }))
        .unwrap();
        assert_eq!(license.subscription(), None);
        assert_eq!(license.total_units, 0);
    }
}
