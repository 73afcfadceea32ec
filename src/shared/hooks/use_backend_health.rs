use std::time::Duration;

use dioxus::prelude::*;

use crate::shared::constants::HEALTH_POLL_INTERVAL_SECS;
use crate::shared::errors::{ApiError, ErrorKind};
use crate::shared::hooks::use_error_handler::ErrorHandler;
use crate::shared::services::{ApiClient, ConnectionStatus, HealthMonitor};

/// What a health status transition does to the connection banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BannerAction {
    Raise,
    Clear,
    Keep,
}

/// Losing the backend raises the banner once; regaining it clears the
/// banner. Repeated probes in the same state leave it alone.
fn banner_action(previous: ConnectionStatus, next: ConnectionStatus) -> BannerAction {
    match (previous, next) {
        (ConnectionStatus::Disconnected, ConnectionStatus::Disconnected) => BannerAction::Keep,
        (_, ConnectionStatus::Disconnected) => BannerAction::Raise,
        (ConnectionStatus::Disconnected, ConnectionStatus::Connected) => BannerAction::Clear,
        _ => BannerAction::Keep,
    }
}

fn apply_banner(errors: &mut ErrorHandler, previous: ConnectionStatus, next: ConnectionStatus) {
    match banner_action(previous, next) {
        BannerAction::Raise => {
            errors.handle_error(&ApiError::Network("backend health check failed".into()));
        }
        BannerAction::Clear => {
            // Only dismiss the banner we raised; an unrelated error from
            // another operation stays up.
            let is_connection_banner = errors
                .error
                .read()
                .as_ref()
                .is_some_and(|state| state.kind == ErrorKind::Network);
            if is_connection_banner {
                errors.clear_error();
            }
        }
        BannerAction::Keep => {}
    }
}

/// Backend liveness as seen by the UI, refreshed on a fixed cadence.
///
/// Status transitions drive the shared connection banner: going down
/// raises a retryable network error, coming back clears it.
#[derive(Clone)]
pub struct BackendHealth {
    pub status: Signal<ConnectionStatus>,
    errors: ErrorHandler,
    monitor: HealthMonitor,
}

impl BackendHealth {
    pub fn current(&self) -> ConnectionStatus {
        *self.status.read()
    }

    /// One immediate probe outside the poll cadence ("Try Again").
    pub async fn check_now(&mut self) {
        let previous = *self.status.read();
        let next = self.monitor.probe().await;
        self.status.set(next);
        apply_banner(&mut self.errors, previous, next);
    }
}

/// Hook owning the health monitor's lifecycle: the poll loop starts on
/// mount and the monitor is stopped when the component unmounts.
pub fn use_backend_health(client: &ApiClient, errors: ErrorHandler) -> BackendHealth {
    let mut status = use_signal(ConnectionStatus::default);
    let monitor = use_hook(|| {
        HealthMonitor::new(
            client.clone(),
            Duration::from_secs(HEALTH_POLL_INTERVAL_SECS),
        )
    });

    {
        let monitor = monitor.clone();
        let mut errors = errors;
        use_effect(move || {
            let monitor = monitor.clone();
            spawn(async move {
                monitor
                    .run(move |next| {
                        let previous = *status.read();
                        status.set(next);
                        apply_banner(&mut errors, previous, next);
                    })
                    .await;
            });
        });
    }

    {
        let monitor = monitor.clone();
        use_drop(move || monitor.stop());
    }

    BackendHealth {
        status,
        errors,
        monitor,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_losing_the_backend_raises_the_banner() {
        assert_eq!(
            banner_action(ConnectionStatus::Connected, ConnectionStatus::Disconnected),
            BannerAction::Raise
        );
        assert_eq!(
            banner_action(ConnectionStatus::Unknown, ConnectionStatus::Disconnected),
            BannerAction::Raise
        );
    }

    #[test]
    fn test_repeated_failures_do_not_re_raise() {
        assert_eq!(
            banner_action(ConnectionStatus::Disconnected, ConnectionStatus::Disconnected),
            BannerAction::Keep
        );
    }

    #[test]
    fn test_recovery_clears_the_banner() {
        assert_eq!(
            banner_action(ConnectionStatus::Disconnected, ConnectionStatus::Connected),
            BannerAction::Clear
        );
    }

    #[test]
    fn test_healthy_probes_leave_the_banner_alone() {
        assert_eq!(
            banner_action(ConnectionStatus::Unknown, ConnectionStatus::Connected),
            BannerAction::Keep
        );
        assert_eq!(
            banner_action(ConnectionStatus::Connected, ConnectionStatus::Connected),
            BannerAction::Keep
        );
    }

    #[test]
    fn test_connection_banner_is_retryable() {
        let err = ApiError::Network("backend health check failed".into());
        assert!(err.is_retryable());
        assert_eq!(err.kind(), ErrorKind::Network);
    }
}
