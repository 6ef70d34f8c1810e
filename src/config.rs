/// Configuration constants for the Webex Calling API
pub mod api {
    /// Base URL for all Webex API calls
    pub const BASE_URL: &str = "https://webexapis.com/v1";

    /// Organizations endpoint
    pub const ORGANIZATIONS: &str = "organizations";

    /// Licenses endpoint
    pub const LICENSES: &str = "licenses";

    /// Phone numbers endpoint
    pub const NUMBERS: &str = "telephony/config/numbers";

    /// Premise PSTN trunks endpoint
    pub const TRUNKS: &str = "telephony/config/premisePstn/trunks";

    /// People endpoint (feature settings live under people/{id}/features)
    pub const PEOPLE: &str = "people";

    /// Query parameter that scopes a call to a customer organization
    pub const ORG_ID_PARAM: &str = "orgId";
}

/// License names counted in the summary report
pub mod licenses {
    /// Professional user license
    pub const PROFESSIONAL: &str = "Webex Calling - Professional";

    /// Workspace (common area) license
    pub const WORKSPACES: &str = "Webex Calling - Workspaces";
}

/// Configuration constants for the commerce subscription API
pub mod commerce {
    /// Client-credential token endpoint
    pub const TOKEN_URL: &str = "https://id.cisco.com/oauth2/default/v1/token";

    /// Subscription detail lookup endpoint
    pub const SUBSCRIPTION_URL: &str =
        "https://apix.cisco.com/commerce/ORDER/v2/sync/getSubscriptionDetails";

    /// Marker the response expression must contain for a successful lookup
    pub const SUCCESS_MARKER: &str = "SUCCESS";

    /// Placeholder date when a lookup does not succeed
    pub const UNKNOWN_DATE: &str = "Unknown";
}

/// Configuration constants for token handling
pub mod tokens {
    /// Token refresh endpoint
    pub const REFRESH_URL: &str = "https://webexapis.com/v1/access_token";

    /// Token store file name in the working directory
    pub const FILE_NAME: &str = "tokens.json";

    /// Fallback token store directory (relative to HOME)
    pub const DIR_NAME: &str = ".webex-calling-report";

    /// Environment variables holding the integration credentials used for refresh
    pub const CLIENT_ID_ENV: &str = "WEBEX_CLIENT_ID";
    pub const CLIENT_SECRET_ENV: &str = "WEBEX_CLIENT_SECRET";
}

/// Default values for CLI
pub mod defaults {
    /// Default log level
    pub const LOG_LEVEL: &str = "warn";

    /// Default report destination directory
    pub const OUTPUT_DIR: &str = "reports";

    /// Default run log directory
    pub const LOG_DIR: &str = "logs";

    /// Timestamp format used for report and log file names
    pub const STAMP_FORMAT: &str = "%m-%d-%Y_%H-%M-%S";

    /// Report file name prefix
    pub const REPORT_PREFIX: &str = "calling_report";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_base_url_format() {
        assert!(api::BASE_URL.starts_with("https://"));
        assert!(!api::BASE_URL.ends_with('/'));
    }

    #[test]
    fn test_license_names_are_distinct() {
        assert_ne!(licenses::PROFESSIONAL, licenses::WORKSPACES);
    }

    #[test]
    fn test_endpoints_are_relative() {
        for endpoint in [api::ORGANIZATIONS, api::LICENSES, api::NUMBERS, api::TRUNKS] {
            assert!(!endpoint.starts_with('/'));
        }
    }
}
