//! Client side of the profiler's stats endpoint.
//!
//! The profiler serves its collected stats as one JSON object. Each top-level
//! key carries the payload of one profiling mode; an empty object means the
//! profiled program has not finished yet.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

pub use url::Url;

/// Path of the stats endpoint, relative to the page that serves the viewer.
pub const JSON_URI: &str = "profile";

/// Decoded stats object. Keys iterate in ascending lexicographic order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProfileData(BTreeMap<String, Value>);

impl ProfileData {
    pub fn new() -> Self {
        Self::default()
    }

    /// `true` once the server has at least one payload to show.
    pub fn is_ready(&self) -> bool {
        !self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(key, value)| (key.as_str(), value))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("invalid profile endpoint: {0}")]
    InvalidEndpoint(#[from] url::ParseError),
    #[error("profile request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("profile server answered with HTTP {status}")]
    Status { status: u16 },
}

/// Resolves the stats endpoint against the URL the viewer was served from.
pub fn endpoint_for(base: &str) -> Result<Url, FetchError> {
    let base = Url::parse(base)?;
    Ok(base.join(JSON_URI)?)
}

/// Thin wrapper around a shared `reqwest::Client` bound to one endpoint.
#[derive(Debug, Clone)]
pub struct ProfileClient {
    http: reqwest::Client,
    endpoint: Url,
}

impl ProfileClient {
    pub fn new(endpoint: Url) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint,
        }
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Issues one GET against the stats endpoint and decodes the body.
    pub async fn fetch(&self) -> Result<ProfileData, FetchError> {
        let response = self.http.get(self.endpoint.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }
        let data = response.json::<ProfileData>().await?;
        tracing::debug!(keys = data.len(), "received profile stats");
        Ok(data)
    }
}
