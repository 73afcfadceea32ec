// Shared services (HTTP access, health polling)

pub mod api_client;
pub mod health_monitor;

pub use api_client::ApiClient;
pub use health_monitor::{ConnectionStatus, HealthMonitor};
