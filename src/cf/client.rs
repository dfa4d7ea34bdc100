//! CF HTTP client and login handshake

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use log::debug;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use crate::config::api;
use crate::error::{CfError, Result};
use crate::settings::{Endpoint, Settings};

/// Cloud controller info, fetched before login
#[derive(Deserialize, Debug)]
struct Info {
    authorization_endpoint: String,
}

/// Token grant response from the UAA
#[derive(Deserialize, Debug)]
struct TokenResponse {
    access_token: String,
}

/// Authenticated CF API client
#[derive(Debug)]
pub struct CfClient {
    client: Client,
    api_url: String,
    token: String,
}

impl CfClient {
    /// Connect to a foundation: fetch the authorization endpoint from
    /// `/v2/info`, then obtain a bearer token via the password grant.
    ///
    /// Both handshake steps are fatal on failure; the session is
    /// established exactly once, with no refresh handling.
    pub async fn connect(settings: &Settings) -> Result<Self> {
        let api_url = normalize_host(&settings.endpoint.host);
        let client = build_http_client();

        let info = fetch_info(&client, &api_url).await?;
        debug!(
            "Authorization endpoint for {}: {}",
            api_url, info.authorization_endpoint
        );

        let token = request_token(&client, &info.authorization_endpoint, &settings.endpoint).await?;
        debug!("Login succeeded for user: {}", settings.endpoint.username);

        Ok(Self {
            client,
            api_url,
            token,
        })
    }

    /// The normalized API address, used as the report's Foundation column
    pub fn api_address(&self) -> &str {
        &self.api_url
    }

    /// Build the full URL for an API path
    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_url, path)
    }

    /// Create a GET request builder with the bearer token attached
    pub(crate) fn get(&self, url: &str) -> reqwest::RequestBuilder {
        self.client
            .get(url)
            .header("Authorization", format!("Bearer {}", self.token))
    }

    /// Parse an API response, returning an error for non-success status codes
    pub(crate) async fn parse_api_response<T>(
        &self,
        response: reqwest::Response,
        error_context: &str,
    ) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        if !response.status().is_success() {
            return Err(CfError::Api {
                status: response.status().as_u16(),
                message: format!("Failed to fetch {}", error_context),
            });
        }
        Ok(response.json().await?)
    }
}

/// Build the shared reqwest client with pooled connection settings
fn build_http_client() -> Client {
    Client::builder()
        // Connection pool settings - reuse connections
        .pool_max_idle_per_host(20)
        .pool_idle_timeout(Duration::from_secs(90))
        // TCP keepalive to maintain connections
        .tcp_keepalive(Duration::from_secs(60))
        // Timeouts
        .connect_timeout(Duration::from_secs(10))
        .timeout(Duration::from_secs(30))
        .build()
        .unwrap_or_else(|_| Client::new())
}

/// Prepend https:// when the configured host carries no scheme, and drop
/// any trailing slash so paths can be appended verbatim.
fn normalize_host(host: &str) -> String {
    let trimmed = host.trim_end_matches('/');
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("https://{}", trimmed)
    }
}

/// Fetch `/v2/info` to learn the authorization endpoint
async fn fetch_info(client: &Client, api_url: &str) -> Result<Info> {
    let url = format!("{}{}", api_url, api::INFO);
    debug!("Fetching cloud controller info from: {}", url);

    let response = client
        .get(&url)
        .send()
        .await
        .map_err(|e| CfError::Auth(format!("could not reach {}: {}", url, e)))?;

    if !response.status().is_success() {
        return Err(CfError::Auth(format!(
            "info request to {} returned status {}",
            url,
            response.status().as_u16()
        )));
    }

    response
        .json()
        .await
        .map_err(|e| CfError::Auth(format!("could not parse info response: {}", e)))
}

/// Obtain a bearer token via the UAA password grant.
///
/// The token endpoint expects HTTP Basic auth with the fixed `cf:` client
/// identity and an empty secret.
async fn request_token(client: &Client, auth_endpoint: &str, endpoint: &Endpoint) -> Result<String> {
    let url = format!("{}{}", auth_endpoint.trim_end_matches('/'), api::TOKEN_PATH);
    debug!("Requesting token from: {}", url);

    let response = client
        .post(&url)
        .header("Authorization", format!("Basic {}", BASE64.encode(b"cf:")))
        .form(&[
            ("grant_type", "password"),
            ("username", endpoint.username.as_str()),
            ("password", endpoint.password.as_str()),
        ])
        .send()
        .await
        .map_err(|e| CfError::Auth(format!("could not reach {}: {}", url, e)))?;

    if !response.status().is_success() {
        return Err(CfError::Auth(format!(
            "token request for user '{}' returned status {}",
            endpoint.username,
            response.status().as_u16()
        )));
    }

    let grant: TokenResponse = response
        .json()
        .await
        .map_err(|e| CfError::Auth(format!("could not parse token response: {}", e)))?;

    Ok(grant.access_token)
}

#[cfg(test)]
impl CfClient {
    /// Create a client against a mock server, skipping the login handshake
    pub fn test_client(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            api_url: base_url.trim_end_matches('/').to_string(),
            token: "test-token".to_string(),
        }
    }
}
