//! Token record data models

use serde::{Deserialize, Serialize};

/// Persisted OAuth token record
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TokenRecord {
    pub access_token: String,
    pub refresh_token: String,
    /// Unix timestamp (seconds) at which the access token expires
    pub expires_at: f64,
    /// Access token lifetime in seconds
    pub expires_in: i64,
    /// Refresh token lifetime in seconds
    pub refresh_token_expires_in: i64,
}

/// Validity of a stored token record at a point in time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenStatus {
    /// Access token still valid
    Valid,
    /// Access token expired, refresh token still valid
    AccessExpired,
    /// Both tokens expired
    Expired,
}

/// Refresh endpoint response
#[derive(Debug, Deserialize)]
pub struct RefreshResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub expires_in: i64,
    pub refresh_token_expires_in: i64,
}

impl TokenRecord {
    /// Unix timestamp at which the refresh token expires
    pub fn refresh_expires_at(&self) -> f64 {
        self.expires_at + (self.refresh_token_expires_in - self.expires_in) as f64
    }

    /// Classify the record relative to `now` (Unix seconds)
    pub fn status(&self, now: f64) -> TokenStatus {
        if now > self.refresh_expires_at() {
            TokenStatus::Expired
        } else if now > self.expires_at {
            TokenStatus::AccessExpired
        } else {
            TokenStatus::Valid
        }
    }

    /// Build a new record from a refresh response issued at `now`
    pub fn from_refresh(response: RefreshResponse, now: f64) -> Self {
        Self {
            access_token: response.access_token,
            refresh_token: response.refresh_token,
            expires_at: now + response.expires_in as f64,
            expires_in: response.expires_in,
            refresh_token_expires_in: response.refresh_token_expires_in,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(expires_at: f64) -> TokenRecord {
        TokenRecord {
            access_token: "access".to_string(),
            refresh_token: "refresh".to_string(),
            expires_at,
            expires_in: 1_209_599,
            refresh_token_expires_in: 7_775_999,
        }
    }

    #[test]
    fn test_status_valid() {
        assert_eq!(record(1000.0).status(999.0), TokenStatus::Valid);
    }

    #[test]
    fn test_status_access_expired() {
        assert_eq!(record(1000.0).status(1001.0), TokenStatus::AccessExpired);
    }

    #[test]
    fn test_status_both_expired() {
        let rec = record(1000.0);
        let now = rec.refresh_expires_at() + 1.0;
        assert_eq!(rec.status(now), TokenStatus::Expired);
    }

    #[test]
    fn test_refresh_expiry_offset() {
        let rec = record(1000.0);
        assert_eq!(rec.refresh_expires_at(), 1000.0 + (7_775_999 - 1_209_599) as f64);
    }

    #[test]
    fn test_from_refresh_computes_expires_at() {
        let response = RefreshResponse {
            access_token: "new-access".to_string(),
            refresh_token: "new-refresh".to_string(),
            expires_in: 100,
            refresh_token_expires_in: 1000,
        };
        let rec = TokenRecord::from_refresh(response, 50.0);
        assert_eq!(rec.expires_at, 150.0);
        assert_eq!(rec.access_token, "new-access");
    }

    #[test]
    fn test_parses_record_with_extra_fields() {
        let rec: TokenRecord = serde_json::from_value(serde_json::json!({
            "access_token": "a",
            "refresh_token": "r",
            "expires_at": 1700000000.5,
            "expires_in": 1209599,
            "refresh_token_expires_in": 7775999,
            "token_type": "Bearer"
        }))
        .unwrap();
        assert_eq!(rec.expires_at, 1700000000.5);
    }
}
