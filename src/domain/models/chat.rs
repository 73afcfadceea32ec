use serde::{Deserialize, Serialize};

/// One prior turn in the format the legacy chat endpoint expects:
/// `role` is `"user"` or `"model"`, `parts` is the raw text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryTurn {
    pub role: String,
    pub parts: String,
}

impl HistoryTurn {
    pub fn user(parts: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            parts: parts.into(),
        }
    }

    pub fn model(parts: impl Into<String>) -> Self {
        Self {
            role: "model".to_string(),
            parts: parts.into(),
        }
    }
}

/// Body for the legacy single-turn endpoint `POST /api/v1/chat`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    pub history: Vec<HistoryTurn>,
}

impl ChatRequest {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            history: Vec::new(),
        }
    }

    pub fn with_history(mut self, history: Vec<HistoryTurn>) -> Self {
        self.history = history;
        self
    }
}

/// Response of the legacy chat endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
}

/// Body of `GET /health`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_request_with_empty_history() {
        let body = serde_json::to_value(ChatRequest::new("Hello, Oracle!")).unwrap();
        assert_eq!(
            body,
            serde_json::json!({ "message": "Hello, Oracle!", "history": [] })
        );
    }

    #[test]
    fn test_history_turn_roles() {
        assert_eq!(HistoryTurn::user("hi").role, "user");
        assert_eq!(HistoryTurn::model("hey").role, "model");
    }
}
