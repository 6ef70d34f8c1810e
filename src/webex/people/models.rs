//! Person feature data models

use serde::Deserialize;

/// Outgoing calling permission feature of a person
#[derive(Deserialize, Debug, Clone, Default)]
pub struct OutgoingPermission {
    #[serde(rename = "useCustomEnabled", default)]
    pub use_custom_enabled: bool,
    #[serde(rename = "callingPermissions", default)]
    pub calling_permissions: Vec<CallingPermission>,
}

/// Action configured for one call type
#[derive(Deserialize, Debug, Clone)]
pub struct CallingPermission {
    #[serde(rename = "callType")]
    pub call_type: String,
    #[serde(default)]
    pub action: String,
}

/// Call intercept feature of a person
#[derive(Deserialize, Debug, Clone, Default)]
pub struct InterceptSettings {
    #[serde(default)]
    pub enabled: bool,
    pub outgoing: Option<InterceptOutgoing>,
}

/// Outgoing half of the intercept feature
#[derive(Deserialize, Debug, Clone)]
pub struct InterceptOutgoing {
    #[serde(rename = "type", default)]
    pub intercept_type: String,
}

impl InterceptSettings {
    /// Outgoing intercept type, empty when absent
    pub fn outgoing_type(&self) -> &str {
        self.outgoing
            .as_ref()
            .map(|o| o.intercept_type.as_str())
            .unwrap_or("")
    }
}
