//! Organization data models

use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine;
use serde::Deserialize;

use crate::error::{ReportError, Result};

/// Lenient standard-alphabet engine; Webex ids are often served without
/// padding, and non-canonical trailing bits are ignored
const ORG_ID_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

/// Response wrapper for organizations list
#[derive(Deserialize, Debug)]
pub struct OrganizationsResponse {
    #[serde(default)]
    pub items: Vec<Organization>,
}

/// Organization as returned by the Webex API
#[derive(Deserialize, Debug, Clone)]
pub struct Organization {
    pub id: String,
    #[serde(rename = "displayName", default)]
    pub display_name: String,
}

impl Organization {
    /// Numeric Control Hub org id embedded in the opaque API id
    pub fn decoded_id(&self) -> Result<String> {
        decode_org_id(&self.id)
    }
}

/// Decode an opaque API org id (`ciscospark://us/ORGANIZATION/<n>`) to its last path segment
pub fn decode_org_id(api_id: &str) -> Result<String> {
    let trimmed = api_id.trim_end_matches('=');
    let bytes = ORG_ID_ENGINE
        .decode(trimmed)
        .map_err(|e| ReportError::Decode(format!("organization id '{}': {}", api_id, e)))?;
    let text = String::from_utf8(bytes)
        .map_err(|e| ReportError::Decode(format!("organization id '{}': {}", api_id, e)))?;

    Ok(text.rsplit('/').next().unwrap_or_default().to_string())
}
