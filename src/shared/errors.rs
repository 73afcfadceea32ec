use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Transport-level error returned by the API client.
///
/// The variant is derived structurally from what happened on the wire
/// (no response, aborted request, non-2xx status), never by sniffing
/// English text out of error messages.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a response (DNS, refused connection, CORS).
    #[error("network error: {0}")]
    Network(String),

    /// The request hit the client-side deadline.
    #[error("request timed out after {0}s")]
    Timeout(u64),

    /// The server answered with a non-2xx status.
    #[error("HTTP {status}: {detail}")]
    Http { status: u16, detail: String },

    /// Local input validation failed; no request was made.
    #[error("{0}")]
    Validation(String),

    /// The bounded retry mechanism gave up.
    #[error("maximum retry attempts reached")]
    RetriesExhausted,
}

/// Error taxonomy surfaced to the user (banner icon/title selection).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorKind {
    Error,
    Network,
    Timeout,
    Server,
    Validation,
}

impl ApiError {
    /// Classify into the user-facing taxonomy.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ApiError::Network(_) => ErrorKind::Network,
            ApiError::Timeout(_) => ErrorKind::Timeout,
            ApiError::Http { status, .. } if (400..500).contains(status) => ErrorKind::Validation,
            ApiError::Http { .. } => ErrorKind::Server,
            ApiError::Validation(_) => ErrorKind::Validation,
            ApiError::RetriesExhausted => ErrorKind::Error,
        }
    }

    /// Whether retrying the same operation can plausibly succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            ApiError::Network(_) | ApiError::Timeout(_) => true,
            ApiError::Http { status, .. } => *status == 429 || *status >= 500,
            ApiError::Validation(_) | ApiError::RetriesExhausted => false,
        }
    }

    /// Human-readable message shown in the error banner.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Network(_) => {
                "Network error - please check your connection and make sure the backend is running"
                    .to_string()
            }
            ApiError::Timeout(secs) => {
                format!("Request timed out after {secs}s - the backend may be overloaded")
            }
            ApiError::Http { status, detail } => match status {
                400 if !detail.is_empty() => detail.clone(),
                400 => "Invalid request - please check your input".to_string(),
                401 => "Authentication failed - please check the API configuration".to_string(),
                404 => "The requested resource was not found".to_string(),
                429 => "Too many requests - please wait a moment before trying again".to_string(),
                502 | 503 => "The AI service is temporarily unavailable - please try again shortly"
                    .to_string(),
                s if *s >= 500 => "Server error - something went wrong on our end".to_string(),
                _ if !detail.is_empty() => detail.clone(),
                s => format!("Request failed with status {s}"),
            },
            ApiError::Validation(message) => message.clone(),
            ApiError::RetriesExhausted => {
                "Maximum retry attempts reached - please reload the page and try again".to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn http(status: u16) -> ApiError {
        ApiError::Http {
            status,
            detail: String::new(),
        }
    }

    #[test]
    fn test_kind_classification() {
        assert_eq!(ApiError::Network("refused".into()).kind(), ErrorKind::Network);
        assert_eq!(ApiError::Timeout(30).kind(), ErrorKind::Timeout);
        assert_eq!(http(404).kind(), ErrorKind::Validation);
        assert_eq!(http(500).kind(), ErrorKind::Server);
        assert_eq!(http(503).kind(), ErrorKind::Server);
        assert_eq!(
            ApiError::Validation("too long".into()).kind(),
            ErrorKind::Validation
        );
        assert_eq!(ApiError::RetriesExhausted.kind(), ErrorKind::Error);
    }

    #[test]
    fn test_status_to_user_message() {
        assert!(http(401).user_message().contains("Authentication failed"));
        assert!(http(404).user_message().contains("not found"));
        assert!(http(429).user_message().contains("Too many requests"));
        assert!(http(502).user_message().contains("temporarily unavailable"));
        assert!(http(503).user_message().contains("temporarily unavailable"));
        assert!(http(500).user_message().contains("Server error"));
    }

    #[test]
    fn test_bad_request_prefers_server_detail() {
        let err = ApiError::Http {
            status: 400,
            detail: "title must not be empty".into(),
        };
        assert_eq!(err.user_message(), "title must not be empty");
        assert!(http(400).user_message().contains("Invalid request"));
    }

    #[test]
    fn test_retryable_statuses() {
        assert!(ApiError::Network("x".into()).is_retryable());
        assert!(ApiError::Timeout(30).is_retryable());
        assert!(http(429).is_retryable());
        assert!(http(500).is_retryable());
        assert!(http(503).is_retryable());
        assert!(!http(400).is_retryable());
        assert!(!http(404).is_retryable());
        assert!(!ApiError::Validation("x".into()).is_retryable());
    }
}
