//! HTTP implementation of [`UserSource`].

use std::time::Duration;

use anyhow::{Context, Result};
use park_core::{Directory, FetchError, UserSource};
use reqwest::Client;
use tracing::debug;

/// Where the directory lives unless overridden.
pub const DEFAULT_ENDPOINT: &str = "https://jsonplaceholder.typicode.com/users";

/// Connection settings for the directory endpoint.
#[derive(Debug, Clone)]
pub struct ApiConfig {
  pub endpoint: String,
  pub timeout:  Duration,
}

impl Default for ApiConfig {
  fn default() -> Self {
    Self {
      endpoint: DEFAULT_ENDPOINT.to_string(),
      timeout:  Duration::from_secs(30),
    }
  }
}

/// Async HTTP client for the user directory.
///
/// Cheap to clone — the inner [`reqwest::Client`] is `Arc`-based.
#[derive(Clone)]
pub struct ApiClient {
  client: Client,
  config: ApiConfig,
}

impl ApiClient {
  pub fn new(config: ApiConfig) -> Result<Self> {
    let client = Client::builder()
      .timeout(config.timeout)
      .build()
      .context("failed to build HTTP client")?;
    Ok(Self { client, config })
  }

  pub fn endpoint(&self) -> &str { &self.config.endpoint }
}

impl UserSource for ApiClient {
  /// `GET <endpoint>`
  async fn fetch_users(&self) -> Result<Directory, FetchError> {
    debug!(endpoint = %self.config.endpoint, "fetching users");
    let resp = self
      .client
      .get(&self.config.endpoint)
      .send()
      .await
      .map_err(|e| FetchError::Transport(e.to_string()))?;

    let status = resp.status();
    if !status.is_success() {
      return Err(FetchError::Status {
        status: status.as_u16(),
      });
    }

    let body = resp
      .text()
      .await
      .map_err(|e| FetchError::Transport(e.to_string()))?;
    Ok(serde_json::from_str(&body)?)
  }
}
