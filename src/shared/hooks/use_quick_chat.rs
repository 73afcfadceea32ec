use chrono::Utc;
use dioxus::prelude::*;
use uuid::Uuid;

use crate::domain::models::{ChatMessage, ChatRequest, HistoryTurn, Role};
use crate::shared::hooks::use_error_handler::ErrorHandler;
use crate::shared::hooks::use_session_chat::{remove_message, validate_content};
use crate::shared::logging::{self, LogOperation};
use crate::shared::services::ApiClient;

/// Session id used for the unpersisted quick-chat thread.
const QUICK_SESSION_ID: &str = "quick";

/// Build the ordered `{role, parts}` history the legacy endpoint expects
/// from prior turns. Assistant and model turns both map to `"model"`.
pub fn build_history(messages: &[ChatMessage]) -> Vec<HistoryTurn> {
    messages
        .iter()
        .map(|message| match message.role {
            Role::User => HistoryTurn::user(message.content.clone()),
            Role::Assistant | Role::Model => HistoryTurn::model(message.content.clone()),
        })
        .collect()
}

/// Single-turn chat over `POST /api/v1/chat`. Nothing is persisted; the
/// backend keeps context only through the history we send along.
#[derive(Clone)]
pub struct QuickChat {
    client: ApiClient,
    errors: ErrorHandler,
    pub messages: Signal<Vec<ChatMessage>>,
    pub sending: Signal<bool>,
}

impl QuickChat {
    /// Render the user bubble immediately, then append the assistant's
    /// reply once the call resolves.
    pub async fn send(&mut self, content: &str) {
        if *self.sending.read() {
            return;
        }
        if let Err(err) = validate_content(content) {
            self.errors.handle_error(&err);
            return;
        }

        let history = build_history(&self.messages.read());
        let request = ChatRequest::new(content).with_history(history);

        let temp = ChatMessage::optimistic_user(QUICK_SESSION_ID, content);
        let temp_id = temp.id.clone();
        self.messages.write().push(temp);
        self.sending.set(true);

        match self.client.send_chat(&request).await {
            Ok(response) => {
                self.messages.write().push(ChatMessage {
                    id: format!("local-{}", Uuid::new_v4()),
                    session_id: QUICK_SESSION_ID.to_string(),
                    role: Role::Model,
                    content: response.response,
                    timestamp: Utc::now(),
                    message_metadata: None,
                });
                self.errors.note_success();
            }
            Err(err) => {
                remove_message(&mut self.messages.write(), &temp_id);
                logging::log_operation_error(LogOperation::MessageSend, &err.to_string());
                self.errors.handle_error(&err);
            }
        }
        self.sending.set(false);
    }
}

/// Hook owning the quick-chat thread.
pub fn use_quick_chat(client: ApiClient, errors: ErrorHandler) -> QuickChat {
    let messages = use_signal(Vec::new);
    let sending = use_signal(|| false);
    QuickChat {
        client,
        errors,
        messages,
        sending,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(role: Role, content: &str) -> ChatMessage {
        ChatMessage {
            id: "m".to_string(),
            session_id: QUICK_SESSION_ID.to_string(),
            role,
            content: content.to_string(),
            timestamp: Utc::now(),
            message_metadata: None,
        }
    }

    #[test]
    fn test_history_maps_roles_and_preserves_order() {
        let turns = build_history(&[
            message(Role::User, "first"),
            message(Role::Assistant, "second"),
            message(Role::User, "third"),
            message(Role::Model, "fourth"),
        ]);

        let pairs: Vec<(&str, &str)> = turns
            .iter()
            .map(|t| (t.role.as_str(), t.parts.as_str()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("user", "first"),
                ("model", "second"),
                ("user", "third"),
                ("model", "fourth"),
            ]
        );
    }

    #[test]
    fn test_failed_send_removes_optimistic_bubble() {
        let temp = ChatMessage::optimistic_user(QUICK_SESSION_ID, "hello");
        let temp_id = temp.id.clone();
        let mut messages = vec![message(Role::Model, "welcome"), temp];

        remove_message(&mut messages, &temp_id);

        assert_eq!(messages.len(), 1);
        assert!(messages.iter().all(|m| !m.is_temporary()));
    }

    #[test]
    fn test_first_turn_sends_empty_history() {
        let request = ChatRequest::new("Hello, Oracle!").with_history(build_history(&[]));
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            serde_json::json!({ "message": "Hello, Oracle!", "history": [] })
        );
    }
}
