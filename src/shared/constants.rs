// Application-wide constants

/// Backend origin used when no configuration overrides it.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

/// Maximum message length accepted by the input (inclusive).
pub const MAX_MESSAGE_LENGTH: usize = 4000;

/// Bounded retry attempts before surfacing a terminal error.
pub const MAX_RETRY_ATTEMPTS: u32 = 3;

/// Client-side deadline for a single HTTP request.
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Interval of the backend health poll.
pub const HEALTH_POLL_INTERVAL_SECS: u64 = 30;

/// Distance from the bottom (px) under which the view counts as "pinned"
/// for auto-scroll purposes.
pub const SCROLL_PIN_THRESHOLD_PX: u32 = 120;
