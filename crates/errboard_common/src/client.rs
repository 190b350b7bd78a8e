//! Aggregation service client
//!
//! One `GET {base}/getErrorGroups` per call. No retry, no auth, no paging.

use crate::config::PanelConfig;
use crate::error::FetchError;
use crate::model::{decode_groups, ErrorGroup};
use async_trait::async_trait;
use tracing::{debug, warn};

/// Anything that can produce the current list of error groups
#[async_trait]
pub trait ErrorGroupSource: Send + Sync {
    async fn fetch_groups(&self) -> Result<Vec<ErrorGroup>, FetchError>;
}

/// reqwest-backed source talking to the aggregation service
pub struct HttpErrorGroupSource {
    http: reqwest::Client,
    groups_url: String,
}

impl HttpErrorGroupSource {
    /// Build a client from the panel configuration
    pub fn new(config: &PanelConfig) -> Result<Self, FetchError> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .user_agent(concat!("errboard/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| FetchError::Network(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            groups_url: config.groups_url(),
        })
    }

    pub fn groups_url(&self) -> &str {
        &self.groups_url
    }
}

#[async_trait]
impl ErrorGroupSource for HttpErrorGroupSource {
    async fn fetch_groups(&self) -> Result<Vec<ErrorGroup>, FetchError> {
        debug!("Fetching error groups from {}", self.groups_url);

        let response = self.http.get(&self.groups_url).send().await.map_err(|e| {
            warn!("Request to {} failed: {}", self.groups_url, e);
            FetchError::from(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!("{} answered HTTP {}", self.groups_url, status);
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response.bytes().await.map_err(|e| {
            warn!("Reading body from {} failed: {}", self.groups_url, e);
            FetchError::from(e)
        })?;

        let groups = decode_groups(&body).map_err(|e| {
            warn!("Undecodable response from {}: {}", self.groups_url, e);
            e
        })?;

        debug!("Received {} error groups", groups.len());
        Ok(groups)
    }
}
