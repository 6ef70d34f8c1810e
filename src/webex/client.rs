//! Webex HTTP client for API interactions

use log::{debug, warn};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::config::api;
use crate::error::{ReportError, Result};

/// Webex Calling API client
pub struct WebexClient {
    client: Client,
    token: String,
    /// Custom base URL override (for testing with mock servers)
    base_url_override: Option<String>,
}

impl WebexClient {
    /// Create a new client; only the connect timeout is set, request time is left to the default
    pub fn new(token: String) -> Self {
        let client = Client::builder()
            .pool_idle_timeout(Duration::from_secs(90))
            .tcp_keepalive(Duration::from_secs(60))
            .connect_timeout(Duration::from_secs(10))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            token,
            base_url_override: None,
        }
    }

    /// Create a client with custom base URL (for testing with mock servers)
    #[cfg(test)]
    pub fn with_base_url(token: String, base_url: String) -> Self {
        let client = Client::builder().build().unwrap_or_else(|_| Client::new());

        Self {
            client,
            token,
            base_url_override: Some(base_url),
        }
    }

    /// Build the base URL for API requests
    pub(crate) fn base_url(&self) -> String {
        if let Some(ref url) = self.base_url_override {
            return url.clone();
        }
        api::BASE_URL.to_string()
    }

    /// Build a full URL from a relative path and query parameters
    pub(crate) fn url(&self, path: &str, query: &[(&str, &str)]) -> String {
        let mut url = format!("{}/{}", self.base_url(), path.trim_start_matches('/'));
        for (i, (key, value)) in query.iter().enumerate() {
            let separator = if i == 0 { '?' } else { '&' };
            url.push(separator);
            url.push_str(key);
            url.push('=');
            url.push_str(&urlencoding::encode(value));
        }
        url
    }

    /// Create a GET request builder with the bearer token attached
    fn get(&self, url: &str) -> reqwest::RequestBuilder {
        self.client
            .get(url)
            .header("Authorization", format!("Bearer {}", self.token))
    }

    /// GET a JSON document without any recovery path
    pub async fn get_json<T>(&self, path: &str, query: &[(&str, &str)]) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let url = self.url(path, query);
        debug!("GET {}", url);

        let response = self.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(request_failed(response).await);
        }
        Ok(response.json().await?)
    }

    /// GET a JSON document on behalf of a customer organization
    ///
    /// A 403 usually means the elevated partner scope for `org_id` lapsed.
    /// The organization details endpoint is fetched once (result discarded)
    /// to regain it, then the original request is retried exactly once.
    pub async fn get_for_org<T>(&self, org_id: &str, path: &str, query: &[(&str, &str)]) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let url = self.url(path, query);
        debug!("GET {}", url);

        let mut response = self.get(&url).send().await?;

        if response.status().as_u16() == 403 {
            warn!("403 for {}, refreshing organization scope and retrying once", url);
            self.refresh_org_scope(org_id).await;
            response = self.get(&url).send().await?;
        }

        if !response.status().is_success() {
            return Err(request_failed(response).await);
        }
        Ok(response.json().await?)
    }

    /// Touch the organization details endpoint, ignoring the outcome
    async fn refresh_org_scope(&self, org_id: &str) {
        let path = format!("{}/{}", api::ORGANIZATIONS, urlencoding::encode(org_id));
        let url = self.url(&path, &[]);
        match self.get(&url).send().await {
            Ok(response) => debug!("Scope refresh returned {}", response.status()),
            Err(e) => debug!("Scope refresh failed: {}", e),
        }
    }
}

/// Turn a non-success response into a terminal per-call error
pub(crate) async fn request_failed(response: reqwest::Response) -> ReportError {
    let status = response.status().as_u16();
    let headers = format!("{:?}", response.headers());
    let body = response.text().await.unwrap_or_default();
    ReportError::RequestFailed {
        status,
        body,
        headers,
    }
}

#[cfg(test)]
impl WebexClient {
    /// Create a test client with mock base URL
    pub fn test_client(base_url: &str) -> Self {
        Self::with_base_url("test-token".to_string(), base_url.to_string())
    }
}
