use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A persisted conversation thread on the Oracle backend.
///
/// Exactly one session is "active" in UI state at a time (or none). The
/// backend bumps `message_count` and `updated_at` on every message send.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub message_count: usize,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub model_used: Option<String>,
    #[serde(default)]
    pub session_metadata: Option<serde_json::Value>,
}

/// Body for `POST /api/v1/sessions/`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateSessionRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_used: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_metadata: Option<serde_json::Value>,
}

impl CreateSessionRequest {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Default::default()
        }
    }
}

/// Body for `PUT /api/v1/sessions/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateSessionRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_skips_empty_fields() {
        let body = serde_json::to_value(CreateSessionRequest::titled("New chat")).unwrap();
        assert_eq!(body, serde_json::json!({ "title": "New chat" }));
    }

    #[test]
    fn test_session_tolerates_missing_optional_fields() {
        let session: Session = serde_json::from_value(serde_json::json!({
            "id": "s-1",
            "title": "First",
            "created_at": "2026-01-01T00:00:00Z",
            "updated_at": "2026-01-01T00:00:00Z"
        }))
        .unwrap();
        assert_eq!(session.message_count, 0);
        assert!(session.model_used.is_none());
    }
}
