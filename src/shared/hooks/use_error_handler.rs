use std::future::Future;
use std::time::Duration;

use dioxus::prelude::*;

use crate::shared::constants::MAX_RETRY_ATTEMPTS;
use crate::shared::errors::{ApiError, ErrorKind};
use crate::shared::logging;
use crate::shared::utils::sleep;

/// Error surfaced to the banner, with the bounded-retry counter.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorState {
    pub message: String,
    pub kind: ErrorKind,
    pub retryable: bool,
    pub retry_count: u32,
}

impl ErrorState {
    pub fn from_api_error(err: &ApiError, retry_count: u32) -> Self {
        Self {
            message: err.user_message(),
            kind: err.kind(),
            retryable: err.is_retryable(),
            retry_count,
        }
    }
}

/// Where the recovery state machine currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RecoveryPhase {
    #[default]
    Idle,
    Failed,
    Retrying,
}

/// Delay before retry attempt `attempt` (0-based): 1s, 2s, 4s.
pub fn backoff_delay(attempt: u32) -> Duration {
    Duration::from_secs(1u64 << attempt)
}

/// Re-invoke `op` up to [`MAX_RETRY_ATTEMPTS`] times with exponential
/// backoff before each attempt. `on_attempt` observes every failure with
/// its 1-based attempt number. Exhaustion yields the terminal error with
/// no further backoff.
pub async fn run_with_retry<T, F, Fut>(
    mut op: F,
    mut on_attempt: impl FnMut(u32, &ApiError),
) -> Result<T, ApiError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, ApiError>>,
{
    for attempt in 0..MAX_RETRY_ATTEMPTS {
        let delay = backoff_delay(attempt);
        logging::log_retry_attempt(attempt + 1, delay.as_secs());
        sleep(delay).await;
        match op().await {
            Ok(value) => return Ok(value),
            Err(err) => on_attempt(attempt + 1, &err),
        }
    }
    logging::log_retry_exhausted(MAX_RETRY_ATTEMPTS);
    Err(ApiError::RetriesExhausted)
}

/// Shared error state machine: `{idle, error, retrying}`.
///
/// Every data-fetching hook funnels its failures through this so the
/// banner, the retry counter and the recovery phase stay consistent.
#[derive(Clone, Copy)]
pub struct ErrorHandler {
    pub error: Signal<Option<ErrorState>>,
    pub phase: Signal<RecoveryPhase>,
}

impl ErrorHandler {
    /// Classify a failure structurally and transition to `error`.
    pub fn handle_error(&mut self, err: &ApiError) {
        self.error.set(Some(ErrorState::from_api_error(err, 0)));
        self.phase.set(RecoveryPhase::Failed);
    }

    /// User-dismiss escape hatch: unconditionally back to idle.
    pub fn clear_error(&mut self) {
        self.error.set(None);
        self.phase.set(RecoveryPhase::Idle);
    }

    /// Any successful operation resets the retry counter to zero. The
    /// banner itself stays until dismissed or until a successful retry.
    pub fn note_success(&mut self) {
        let reset = self.error.read().as_ref().map(|state| ErrorState {
            retry_count: 0,
            ..state.clone()
        });
        if let Some(state) = reset {
            self.error.set(Some(state));
        }
        self.phase.set(RecoveryPhase::Idle);
    }

    /// Bounded retry of `op`. A success clears the error and returns the
    /// value; exhaustion surfaces the terminal "maximum retries" error.
    pub async fn retry<T, F, Fut>(&mut self, op: F) -> Option<T>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, ApiError>>,
    {
        self.phase.set(RecoveryPhase::Retrying);
        let mut this = *self;
        let result = run_with_retry(op, move |attempt, err| {
            this.error.set(Some(ErrorState::from_api_error(err, attempt)));
        })
        .await;

        match result {
            Ok(value) => {
                self.clear_error();
                Some(value)
            }
            Err(err) => {
                self.error
                    .set(Some(ErrorState::from_api_error(&err, MAX_RETRY_ATTEMPTS)));
                self.phase.set(RecoveryPhase::Failed);
                None
            }
        }
    }
}

/// Hook owning the shared error state.
pub fn use_error_handler() -> ErrorHandler {
    let error = use_signal(|| None::<ErrorState>);
    let phase = use_signal(RecoveryPhase::default);
    ErrorHandler { error, phase }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_backoff_sequence_is_1_2_4() {
        assert_eq!(backoff_delay(0), Duration::from_secs(1));
        assert_eq!(backoff_delay(1), Duration::from_secs(2));
        assert_eq!(backoff_delay(2), Duration::from_secs(4));
    }

    #[tokio::test(start_paused = true)]
    async fn test_exhaustion_after_three_attempts() {
        let calls = Arc::new(AtomicU32::new(0));
        let calls_in_op = calls.clone();
        let mut observed = Vec::new();

        let started = tokio::time::Instant::now();
        let result: Result<(), ApiError> = run_with_retry(
            move || {
                let calls = calls_in_op.clone();
                async move {
                    calls.fetch_add(1, Ordering::SeqCst);
                    Err(ApiError::Network("connection refused".into()))
                }
            },
            |attempt, _err| observed.push(attempt),
        )
        .await;

        assert_eq!(result.unwrap_err(), ApiError::RetriesExhausted);
        assert_eq!(calls.load(Ordering::SeqCst), 3);
        assert_eq!(observed, vec![1, 2, 3]);
        // 1s + 2s + 4s of backoff, nothing after the final failure
        assert_eq!(started.elapsed(), Duration::from_secs(7));
    }

    #[tokio::test(start_paused = true)]
    async fn test_success_on_second_attempt_stops_retrying() {
        let calls = Arc::new(AtomicU32::new(0));
        let calls_in_op = calls.clone();

        let started = tokio::time::Instant::now();
        let result = run_with_retry(
            move || {
                let calls = calls_in_op.clone();
                async move {
                    if calls.fetch_add(1, Ordering::SeqCst) == 0 {
                        Err(ApiError::Timeout(30))
                    } else {
                        Ok(42u32)
                    }
                }
            },
            |_, _| {},
        )
        .await;

        assert_eq!(result.unwrap(), 42);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert_eq!(started.elapsed(), Duration::from_secs(3));
    }

    #[test]
    fn test_error_state_carries_classification() {
        let state = ErrorState::from_api_error(&ApiError::Timeout(30), 2);
        assert_eq!(state.kind, ErrorKind::Timeout);
        assert!(state.retryable);
        assert_eq!(state.retry_count, 2);

        let terminal = ErrorState::from_api_error(&ApiError::RetriesExhausted, 3);
        assert!(!terminal.retryable);
        assert!(terminal.message.contains("Maximum retry attempts reached"));
    }
}
