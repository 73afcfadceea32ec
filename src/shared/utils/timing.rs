use std::time::Duration;

/// Sleep that works on both targets: `gloo-timers` in the browser,
/// `tokio` natively (so paused-time tests stay deterministic).
#[cfg(target_arch = "wasm32")]
pub async fn sleep(duration: Duration) {
    gloo_timers::future::TimeoutFuture::new(duration.as_millis() as u32).await;
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep(duration: Duration) {
    tokio::time::sleep(duration).await;
}
