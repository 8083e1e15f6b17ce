//! HTTP reachability probe

use std::time::Duration;

use application::ports::ConnectivityPort;
use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, instrument};

/// Default endpoint probed for connectivity
pub const DEFAULT_PROBE_URL: &str = "https://www.google.com";

/// Issues one GET against a fixed URL; any HTTP answer counts as reachable
#[derive(Debug, Clone)]
pub struct HttpConnectivityProbe {
    client: Client,
    url: String,
}

impl HttpConnectivityProbe {
    /// Probe the given URL
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            url: url.into(),
        }
    }

    /// The probed URL
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Default for HttpConnectivityProbe {
    fn default() -> Self {
        Self::new(DEFAULT_PROBE_URL)
    }
}

#[async_trait]
impl ConnectivityPort for HttpConnectivityProbe {
    #[instrument(skip(self), fields(url = %self.url))]
    async fn is_reachable(&self, timeout: Duration) -> bool {
        match self.client.get(&self.url).timeout(timeout).send().await {
            Ok(response) => {
                debug!(status = %response.status(), "Probe answered");
                true
            },
            Err(e) => {
                debug!(error = %e, "Probe failed");
                false
            },
        }
    }
}
