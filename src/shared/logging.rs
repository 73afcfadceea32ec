//! Structured logging module for Oracle Chat
//!
//! Provides consistent, contextual logging across the application.
//! Uses structured fields so operations can be filtered in the subscriber.

/// Log categories for different operations
#[derive(Debug, Clone, Copy)]
pub enum LogOperation {
    HealthProbe,
    SessionList,
    SessionCreate,
    SessionSwitch,
    SessionUpdate,
    SessionDelete,
    MessageLoad,
    MessageSend,
    Retry,
}

impl LogOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogOperation::HealthProbe => "health_probe",
            LogOperation::SessionList => "session_list",
            LogOperation::SessionCreate => "session_create",
            LogOperation::SessionSwitch => "session_switch",
            LogOperation::SessionUpdate => "session_update",
            LogOperation::SessionDelete => "session_delete",
            LogOperation::MessageLoad => "message_load",
            LogOperation::MessageSend => "message_send",
            LogOperation::Retry => "retry",
        }
    }
}

/// Log a health probe result
pub fn log_health_probe(connected: bool) {
    tracing::debug!(
        operation = LogOperation::HealthProbe.as_str(),
        connected = connected,
        "Backend health probe completed"
    );
}

/// Log a loaded session list
pub fn log_session_list(count: usize) {
    tracing::info!(
        operation = LogOperation::SessionList.as_str(),
        session_count = count,
        "Sessions loaded"
    );
}

/// Log a session switch
pub fn log_session_switch(session_id: &str, cached: bool) {
    tracing::debug!(
        operation = LogOperation::SessionSwitch.as_str(),
        session_id = session_id,
        cached = cached,
        "Switched active session"
    );
}

/// Log the start of a message send
pub fn log_send_start(session_id: &str, content_len: usize) {
    tracing::debug!(
        operation = LogOperation::MessageSend.as_str(),
        session_id = session_id,
        content_len = content_len,
        "Sending message"
    );
}

/// Log a successful send
pub fn log_send_success(session_id: &str, message_count: usize) {
    tracing::info!(
        operation = LogOperation::MessageSend.as_str(),
        session_id = session_id,
        message_count = message_count,
        "Message sent and reconciled"
    );
}

/// Log a failed operation funneled into the error handler
pub fn log_operation_error(operation: LogOperation, error: &str) {
    tracing::error!(
        operation = operation.as_str(),
        error = error,
        "Operation failed"
    );
}

/// Log a retry attempt
pub fn log_retry_attempt(attempt: u32, delay_secs: u64) {
    tracing::warn!(
        operation = LogOperation::Retry.as_str(),
        attempt = attempt,
        delay_secs = delay_secs,
        "Retrying after backoff"
    );
}

/// Log retry exhaustion
pub fn log_retry_exhausted(attempts: u32) {
    tracing::error!(
        operation = LogOperation::Retry.as_str(),
        attempts = attempts,
        "Maximum retry attempts reached"
    );
}

/// Log a stale response that was discarded after a session switch
pub fn log_stale_response_discarded(session_id: &str) {
    tracing::debug!(
        operation = LogOperation::MessageLoad.as_str(),
        session_id = session_id,
        "Discarded response for a stale session"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_operation_as_str() {
        assert_eq!(LogOperation::HealthProbe.as_str(), "health_probe");
        assert_eq!(LogOperation::SessionList.as_str(), "session_list");
        assert_eq!(LogOperation::SessionSwitch.as_str(), "session_switch");
        assert_eq!(LogOperation::MessageLoad.as_str(), "message_load");
        assert_eq!(LogOperation::MessageSend.as_str(), "message_send");
        assert_eq!(LogOperation::Retry.as_str(), "retry");
    }
}
