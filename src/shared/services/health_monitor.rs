use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crate::shared::logging;
use crate::shared::services::api_client::ApiClient;
use crate::shared::utils::sleep;

/// Client-side view of the backend's liveness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectionStatus {
    #[default]
    Unknown,
    Connected,
    Disconnected,
}

impl ConnectionStatus {
    pub fn is_connected(self) -> bool {
        matches!(self, ConnectionStatus::Connected)
    }

    /// Text shown in the status badge.
    pub fn label(self) -> &'static str {
        match self {
            ConnectionStatus::Unknown => "checking...",
            ConnectionStatus::Connected => "connected",
            ConnectionStatus::Disconnected => "disconnected",
        }
    }
}

/// Periodic backend health poll with an explicit lifecycle.
///
/// Owned by the hook that starts it, stopped on unmount - never a bare
/// module-level timer, so tests can drive `probe` directly.
#[derive(Clone)]
pub struct HealthMonitor {
    client: ApiClient,
    interval: Duration,
    stopped: Arc<AtomicBool>,
}

impl HealthMonitor {
    pub fn new(client: ApiClient, interval: Duration) -> Self {
        Self {
            client,
            interval,
            stopped: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Run a single health check.
    pub async fn probe(&self) -> ConnectionStatus {
        let connected = self.client.check_health().await.is_ok();
        logging::log_health_probe(connected);
        if connected {
            ConnectionStatus::Connected
        } else {
            ConnectionStatus::Disconnected
        }
    }

    /// Poll until [`stop`](Self::stop) is called, reporting every result.
    pub async fn run(&self, mut on_status: impl FnMut(ConnectionStatus)) {
        while !self.is_stopped() {
            let status = self.probe().await;
            if self.is_stopped() {
                break;
            }
            on_status(status);
            sleep(self.interval).await;
        }
    }

    pub fn stop(&self) {
        self.stopped.store(true, Ordering::Relaxed);
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_labels() {
        assert_eq!(ConnectionStatus::Connected.label(), "connected");
        assert_eq!(ConnectionStatus::Disconnected.label(), "disconnected");
        assert!(ConnectionStatus::Connected.is_connected());
        assert!(!ConnectionStatus::Unknown.is_connected());
    }

    #[tokio::test]
    async fn test_probe_reports_disconnected_backend() {
        let monitor = HealthMonitor::new(
            ApiClient::new("http://127.0.0.1:9"),
            Duration::from_secs(30),
        );
        assert_eq!(monitor.probe().await, ConnectionStatus::Disconnected);
    }

    #[tokio::test]
    async fn test_stopped_monitor_does_not_poll() {
        let monitor = HealthMonitor::new(
            ApiClient::new("http://127.0.0.1:9"),
            Duration::from_secs(30),
        );
        monitor.stop();
        assert!(monitor.is_stopped());

        let mut reported = Vec::new();
        monitor.run(|status| reported.push(status)).await;
        assert!(reported.is_empty());
    }
}
