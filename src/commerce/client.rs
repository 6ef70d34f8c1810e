//! Commerce HTTP client (client-credential token + subscription lookup)

use log::debug;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use crate::config::commerce;
use crate::error::Result;
use crate::webex::request_failed;

/// Token response of the client-credential exchange
#[derive(Deserialize, Debug)]
struct TokenResponse {
    access_token: String,
}

/// Commerce API client
pub struct CommerceClient {
    client: Client,
    client_id: String,
    client_secret: String,
    token_url: String,
    subscription_url: String,
}

impl CommerceClient {
    /// Create a client for the production commerce endpoints
    pub fn new(client_id: String, client_secret: String) -> Self {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            client_id,
            client_secret,
            token_url: commerce::TOKEN_URL.to_string(),
            subscription_url: commerce::SUBSCRIPTION_URL.to_string(),
        }
    }

    /// Create a client pointing at a mock server
    #[cfg(test)]
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            client_id: "ccw-id".to_string(),
            client_secret: "ccw-secret".to_string(),
            token_url: format!("{}/oauth2/default/v1/token", base_url),
            subscription_url: format!("{}/commerce/ORDER/v2/sync/getSubscriptionDetails", base_url),
        }
    }

    /// Exchange the client credentials for a bearer token
    pub async fn fetch_access_token(&self) -> Result<String> {
        let body = format!(
            "client_id={}&client_secret={}&grant_type=client_credentials",
            urlencoding::encode(&self.client_id),
            urlencoding::encode(&self.client_secret)
        );
        debug!("Requesting commerce token from {}", self.token_url);

        let response = self
            .client
            .post(&self.token_url)
            .header("Accept", "application/json")
            .header("Content-Type", "application/x-www-form-urlencoded")
            .header("Cache-Control", "no-cache")
            .body(body)
            .send()
            .await?;

        if response.status().as_u16() != 200 {
            return Err(request_failed(response).await);
        }
        let token: TokenResponse = response.json().await?;
        Ok(token.access_token)
    }

    /// Fetch the purchase-order document for a subscription id
    pub async fn get_subscription(
        &self,
        access_token: &str,
        subscription_id: &str,
    ) -> Result<serde_json::Value> {
        let url = format!(
            "{}?subscriptionId={}",
            self.subscription_url,
            urlencoding::encode(subscription_id)
        );
        debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .header("Authorization", format!("Bearer {}", access_token))
            .header("Accept", "application/json")
            .header("Cache-Control", "no-cache")
            .send()
            .await?;

        if response.status().as_u16() != 200 {
            return Err(request_failed(response).await);
        }
        Ok(response.json().await?)
    }
}
