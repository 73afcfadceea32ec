use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::session::Session;

/// Who produced a message. The backend uses `model` for some providers and
/// `assistant` for others; the client treats them identically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
    Model,
}

impl Role {
    pub fn is_user(self) -> bool {
        matches!(self, Role::User)
    }
}

/// Prefix used for optimistic client-side ids until the server assigns one.
pub const TEMP_ID_PREFIX: &str = "temp-";

/// A single message in a session, in insertion (chronological) order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: String,
    pub session_id: String,
    pub role: Role,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub message_metadata: Option<serde_json::Value>,
}

impl ChatMessage {
    /// Build an optimistic user message with a synthetic id. It is shown
    /// immediately and replaced by the server-assigned message after the
    /// round trip.
    pub fn optimistic_user(session_id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: format!("{}{}", TEMP_ID_PREFIX, Uuid::new_v4()),
            session_id: session_id.into(),
            role: Role::User,
            content: content.into(),
            timestamp: Utc::now(),
            message_metadata: None,
        }
    }

    /// True for messages that have not been confirmed by the server yet.
    pub fn is_temporary(&self) -> bool {
        self.id.starts_with(TEMP_ID_PREFIX)
    }
}

/// Body for `POST /api/v1/sessions/{id}/chat`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SendMessageRequest {
    pub role: Role,
    pub content: String,
}

impl SendMessageRequest {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// Response of `POST /api/v1/sessions/{id}/chat`: the canonical pair of
/// messages plus the refreshed session (message_count / updated_at bumped).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SendMessageResponse {
    pub user_message: ChatMessage,
    pub assistant_message: ChatMessage,
    pub session: Session,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Role::User).unwrap(), "\"user\"");
        assert_eq!(serde_json::to_string(&Role::Model).unwrap(), "\"model\"");
        assert_eq!(
            serde_json::from_str::<Role>("\"assistant\"").unwrap(),
            Role::Assistant
        );
    }

    #[test]
    fn test_optimistic_message_is_temporary() {
        let msg = ChatMessage::optimistic_user("s-1", "hello");
        assert!(msg.is_temporary());
        assert!(msg.id.starts_with(TEMP_ID_PREFIX));
        assert_eq!(msg.role, Role::User);
    }

    #[test]
    fn test_server_message_is_not_temporary() {
        let msg: ChatMessage = serde_json::from_value(serde_json::json!({
            "id": "m-42",
            "session_id": "s-1",
            "role": "assistant",
            "content": "Hello back",
            "timestamp": "2026-01-01T00:00:00Z"
        }))
        .unwrap();
        assert!(!msg.is_temporary());
    }
}
