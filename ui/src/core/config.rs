//! Where the viewer looks for stats and how often it asks.

use api::{FetchError, Url};

use super::platform::{self, Platform};

/// Delay between two polls of the stats endpoint.
pub const POLL_INTERVAL_MS: u64 = 300;

/// Environment variable naming the profiler server for native builds.
pub const SERVER_ENV: &str = "VPROF_SERVER";

pub const DEFAULT_SERVER: &str = "http://localhost:8000/";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewerConfig {
    pub base_url: String,
    pub poll_interval_ms: u64,
}

impl ViewerConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            poll_interval_ms: POLL_INTERVAL_MS,
        }
    }

    /// Web builds poll the server that served the page; native builds read
    /// `VPROF_SERVER` and fall back to the profiler's default address.
    pub fn detect() -> Self {
        let base_url = match Platform::current() {
            Platform::Web => platform::page_url(),
            Platform::Desktop => std::env::var(SERVER_ENV)
                .ok()
                .filter(|value| !value.trim().is_empty())
                .map(|value| with_trailing_slash(value.trim())),
        };
        Self::new(base_url.unwrap_or_else(|| DEFAULT_SERVER.to_string()))
    }

    pub fn endpoint(&self) -> Result<Url, FetchError> {
        api::endpoint_for(&self.base_url)
    }
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self::new(DEFAULT_SERVER)
    }
}

/// `http://host:8000/run` must resolve `profile` below `run/`, not beside it.
fn with_trailing_slash(base: &str) -> String {
    if base.ends_with('/') {
        base.to_string()
    } else {
        format!("{base}/")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_local_profiler() {
        let config = ViewerConfig::default();
        assert_eq!(config.poll_interval_ms, 300);
        assert_eq!(
            config.endpoint().unwrap().as_str(),
            "http://localhost:8000/profile"
        );
    }

    #[test]
    fn server_paths_keep_their_prefix() {
        let config = ViewerConfig::new(with_trailing_slash("http://10.0.0.2:9000/run"));
        assert_eq!(
            config.endpoint().unwrap().as_str(),
            "http://10.0.0.2:9000/run/profile"
        );
    }

    #[test]
    fn bad_base_url_is_reported() {
        let config = ViewerConfig::new("localhost");
        assert!(config.endpoint().is_err());
    }
}
