//! Connectivity probe port

use std::time::Duration;

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

/// Reachability check against a fixed, well-known endpoint
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ConnectivityPort: Send + Sync {
    /// Whether the endpoint answered within `timeout`
    async fn is_reachable(&self, timeout: Duration) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn _assert_object_safe(_: &dyn ConnectivityPort) {}

    #[tokio::test]
    async fn mock_reports_unreachable() {
        let mut mock = MockConnectivityPort::new();
        mock.expect_is_reachable()
            .withf(|timeout| *timeout == Duration::from_secs(10))
            .return_const(false);

        assert!(!mock.is_reachable(Duration::from_secs(10)).await);
    }
}
