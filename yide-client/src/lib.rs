//! `RideService` over HTTP.
//!
//! Posts rides as JSON to `{base_url}/api/ride` with `reqwest`, which uses the
//! browser's `fetch` when built for WASM.

use log::warn;
use reqwest::Client;
use thiserror::Error;
use url::Url;
use yide_core::{RideService, RideSubmission, ServiceError};

/// Path of the ride-creation endpoint, relative to the site root.
pub const RIDE_PATH: &str = "/api/ride";

/// Backend used when nothing else is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:3000";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid API url: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("unsupported API url scheme: {0}")]
    UnsupportedScheme(String),
}

/// Where rides are posted.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct ServiceConfig {
    endpoint: Url,
}

impl ServiceConfig {
    /// Resolve the ride endpoint against `base_url` (scheme and host; any path
    /// on the base is replaced, as a root-relative `fetch` would).
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        let base = Url::parse(base_url.trim())?;
        if base.scheme() != "http" && base.scheme() != "https" {
            return Err(ConfigError::UnsupportedScheme(base.scheme().to_string()));
        }
        let endpoint = base.join(RIDE_PATH)?;
        Ok(Self { endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

/// Ride service backed by the `/api/ride` HTTP endpoint.
#[derive(Debug, Clone)]
pub struct HttpRideService {
    client: Client,
    config: ServiceConfig,
}

impl HttpRideService {
    pub fn new(config: ServiceConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }
}

impl RideService for HttpRideService {
    async fn create_ride(&self, ride: &RideSubmission) -> Result<serde_json::Value, ServiceError> {
        let response = self
            .client
            .post(self.config.endpoint().clone())
            .json(ride)
            .send()
            .await
            .map_err(|e| ServiceError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(
                "Bad response status from {}: {}",
                self.config.endpoint(),
                status
            );
            return Err(ServiceError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| ServiceError::Transport(e.to_string()))?;
        serde_json::from_str(&body).map_err(|e| {
            warn!("Response from {} is not JSON: {}", self.config.endpoint(), e);
            ServiceError::InvalidBody(e.to_string())
        })
    }
}
