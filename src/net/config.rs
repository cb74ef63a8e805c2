#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

/// Where the advisory service lives and how long we wait for it.
///
/// Provided via context at application start so no component hard-codes an
/// endpoint. The service itself is an external collaborator; only its base
/// address and our patience are configurable here.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_ms: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:5000".to_owned(),
            timeout_ms: 15_000,
        }
    }
}

impl ApiConfig {
    /// Join a path onto the base URL, tolerating trailing/leading slashes.
    pub fn url(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{base}/{path}")
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}
