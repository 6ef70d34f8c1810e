//! Webex access token resolution
//!
//! The report consumes a bearer token only. This module finds one: an
//! explicit token wins, otherwise the persisted token record is used and
//! refreshed when only the access token has expired.

mod models;
mod store;

use log::{debug, info};
use reqwest::Client;

use crate::config::tokens as token_config;
use crate::error::{ReportError, Result};
use crate::webex::request_failed;

pub use models::{RefreshResponse, TokenRecord, TokenStatus};
pub use store::TokenStore;

/// Integration credentials used for the refresh grant
#[derive(Debug, Clone)]
pub struct IntegrationCredentials {
    pub client_id: String,
    pub client_secret: String,
}

/// Token resolution with fallback logic
pub struct TokenResolver {
    store: TokenStore,
    credentials: Option<IntegrationCredentials>,
    refresh_url: String,
}

impl TokenResolver {
    /// Create a resolver over a token store
    pub fn new(store: TokenStore, credentials: Option<IntegrationCredentials>) -> Self {
        Self {
            store,
            credentials,
            refresh_url: token_config::REFRESH_URL.to_string(),
        }
    }

    /// Point refreshes at a different endpoint (for testing with mock servers)
    #[cfg(test)]
    fn with_refresh_url(mut self, url: String) -> Self {
        self.refresh_url = url;
        self
    }

    /// Resolve the bearer token:
    /// 1. Explicit token (CLI argument / environment)
    /// 2. Token store, refreshing an expired access token
    pub async fn resolve(&self, explicit: Option<&str>) -> Result<String> {
        if let Some(token) = explicit {
            debug!("Using explicitly provided access token");
            return Ok(token.to_string());
        }

        let record = self.store.load()?.ok_or_else(|| {
            ReportError::TokenNotFound(format!(
                "No Webex token found. Provide one with --token / WEBEX_ACCESS_TOKEN \
                 or complete the OAuth workflow to create {}",
                self.store.path().display()
            ))
        })?;

        match record.status(unix_now()) {
            TokenStatus::Valid => {
                info!("Existing access token is valid");
                Ok(record.access_token)
            }
            TokenStatus::AccessExpired => {
                info!("Access token expired, using refresh token");
                let refreshed = self.refresh(&record).await?;
                self.store.save(&refreshed)?;
                info!("New token stored in {}", self.store.path().display());
                Ok(refreshed.access_token)
            }
            TokenStatus::Expired => Err(ReportError::TokenExpired(
                "Both access and refresh tokens are expired; run the OAuth workflow again"
                    .to_string(),
            )),
        }
    }

    /// Exchange the refresh token for a new token record
    async fn refresh(&self, record: &TokenRecord) -> Result<TokenRecord> {
        let credentials = self.credentials.as_ref().ok_or_else(|| {
            ReportError::Config(format!(
                "{} and {} are required to refresh the access token",
                token_config::CLIENT_ID_ENV,
                token_config::CLIENT_SECRET_ENV
            ))
        })?;

        let body = format!(
            "grant_type=refresh_token&client_id={}&client_secret={}&refresh_token={}",
            urlencoding::encode(&credentials.client_id),
            urlencoding::encode(&credentials.client_secret),
            urlencoding::encode(&record.refresh_token)
        );

        let response = Client::new()
            .post(&self.refresh_url)
            .header("Content-Type", "application/x-www-form-urlencoded")
            .header("Accept", "application/json")
            .body(body)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(request_failed(response).await);
        }
        let refreshed: RefreshResponse = response.json().await?;
        Ok(TokenRecord::from_refresh(refreshed, unix_now()))
    }
}

fn unix_now() -> f64 {
    chrono::Utc::now().timestamp_millis() as f64 / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use wiremock::matchers::{body_string_contains, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn record_expiring_at(expires_at: f64) -> TokenRecord {
        TokenRecord {
            access_token: "stored-access".to_string(),
            refresh_token: "stored-refresh".to_string(),
            expires_at,
            expires_in: 1_209_599,
            refresh_token_expires_in: 7_775_999,
        }
    }

    fn credentials() -> Option<IntegrationCredentials> {
        Some(IntegrationCredentials {
            client_id: "cid".to_string(),
            client_secret: "csecret".to_string(),
        })
    }

    #[tokio::test]
    async fn test_explicit_token_takes_precedence() {
        let dir = TempDir::new().unwrap();
        let resolver = TokenResolver::new(
            TokenStore::with_path(dir.path().join("tokens.json")),
            None,
        );
        assert_eq!(resolver.resolve(Some("cli-token")).await.unwrap(), "cli-token");
    }

    #[tokio::test]
    async fn test_missing_store_is_token_not_found() {
        let dir = TempDir::new().unwrap();
        let resolver = TokenResolver::new(
            TokenStore::with_path(dir.path().join("tokens.json")),
            None,
        );
        assert!(matches!(
            resolver.resolve(None).await,
            Err(ReportError::TokenNotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_valid_stored_token() {
        let dir = TempDir::new().unwrap();
        let store = TokenStore::with_path(dir.path().join("tokens.json"));
        store
            .save(&record_expiring_at(unix_now() + 3600.0))
            .unwrap();

        let resolver = TokenResolver::new(store, None);
        assert_eq!(resolver.resolve(None).await.unwrap(), "stored-access");
    }

    #[tokio::test]
    async fn test_fully_expired_tokens() {
        let dir = TempDir::new().unwrap();
        let store = TokenStore::with_path(dir.path().join("tokens.json"));
        store.save(&record_expiring_at(1_000.0)).unwrap();

        let resolver = TokenResolver::new(store, credentials());
        assert!(matches!(
            resolver.resolve(None).await,
            Err(ReportError::TokenExpired(_))
        ));
    }

    #[tokio::test]
    async fn test_refresh_without_credentials_is_config_error() {
        let dir = TempDir::new().unwrap();
        let store = TokenStore::with_path(dir.path().join("tokens.json"));
        store.save(&record_expiring_at(unix_now() - 60.0)).unwrap();

        let resolver = TokenResolver::new(store, None);
        assert!(matches!(
            resolver.resolve(None).await,
            Err(ReportError::Config(_))
        ));
    }

    #[tokio::test]
    async fn test_expired_access_token_is_refreshed_and_saved() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/access_token"))
            .and(body_string_contains("grant_type=refresh_token"))
            .and(body_string_contains("refresh_token=stored-refresh"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "access_token": "fresh-access",
                "refresh_token": "fresh-refresh",
                "expires_in": 1209599,
                "refresh_token_expires_in": 7775999,
                "token_type": "Bearer"
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let dir = TempDir::new().unwrap();
        let token_path = dir.path().join("tokens.json");
        let store = TokenStore::with_path(token_path.clone());
        store.save(&record_expiring_at(unix_now() - 60.0)).unwrap();

        let resolver = TokenResolver::new(store, credentials())
            .with_refresh_url(format!("{}/access_token", mock_server.uri()));

        assert_eq!(resolver.resolve(None).await.unwrap(), "fresh-access");

        let saved = TokenStore::with_path(token_path).load().unwrap().unwrap();
        assert_eq!(saved.refresh_token, "fresh-refresh");
        assert!(saved.expires_at > unix_now());
    }
}
