use dioxus::prelude::*;

use crate::domain::models::{ChatMessage, SendMessageRequest, SendMessageResponse, Session};
use crate::shared::constants::MAX_MESSAGE_LENGTH;
use crate::shared::errors::ApiError;
use crate::shared::hooks::use_error_handler::ErrorHandler;
use crate::shared::logging::{self, LogOperation};
use crate::shared::services::ApiClient;

/// Local input validation. Failing here means no network call is made.
pub fn validate_content(content: &str) -> Result<(), ApiError> {
    if content.trim().is_empty() {
        return Err(ApiError::Validation("Message content is required".into()));
    }
    if content.chars().count() > MAX_MESSAGE_LENGTH {
        return Err(ApiError::Validation(format!(
            "Message exceeds the {MAX_MESSAGE_LENGTH} character limit"
        )));
    }
    Ok(())
}

/// At most one send may be in flight per thread.
fn send_admitted(sending: bool) -> bool {
    !sending
}

/// A response is applied only when the generation it was issued under is
/// still current; session switches and resets bump the generation.
fn response_is_stale(issued: u64, current: u64) -> bool {
    issued != current
}

/// Swap the optimistic message for the server's canonical pair.
fn reconcile_sent(messages: &mut Vec<ChatMessage>, temp_id: &str, response: &SendMessageResponse) {
    messages.retain(|m| m.id != temp_id);
    messages.push(response.user_message.clone());
    messages.push(response.assistant_message.clone());
}

pub(crate) fn remove_message(messages: &mut Vec<ChatMessage>, id: &str) {
    messages.retain(|m| m.id != id);
}

/// Message history scoped to the active session: cached loads, optimistic
/// sends, and stale-response discarding across session switches.
#[derive(Clone)]
pub struct SessionChat {
    client: ApiClient,
    errors: ErrorHandler,
    pub messages: Signal<Vec<ChatMessage>>,
    pub sending: Signal<bool>,
    pub is_loading: Signal<bool>,
    loaded_session: Signal<Option<String>>,
    // Bumped on every load and session switch; responses carrying an older
    // generation are discarded instead of mutating state.
    generation: Signal<u64>,
}

impl SessionChat {
    fn bump_generation(&mut self) -> u64 {
        let next = *self.generation.read() + 1;
        self.generation.set(next);
        next
    }

    /// Clear everything tied to the previous session so stale data is
    /// never shown.
    pub fn reset(&mut self) {
        self.bump_generation();
        self.messages.set(Vec::new());
        self.loaded_session.set(None);
        self.sending.set(false);
        self.is_loading.set(false);
    }

    /// Switch the hook to another session, replacing the message list
    /// wholesale. A no-op when the session is already loaded.
    pub async fn switch_to(&mut self, session_id: &str) {
        if self.loaded_session.read().as_deref() == Some(session_id) {
            return;
        }
        self.messages.set(Vec::new());
        self.loaded_session.set(None);
        self.load_messages(session_id, true).await;
    }

    /// Fetch the session's history. Without `force` this is a no-op when
    /// the cache marker already points at `session_id`.
    pub async fn load_messages(&mut self, session_id: &str, force: bool) {
        if session_id.is_empty() {
            self.errors
                .handle_error(&ApiError::Validation("Session id is required".into()));
            return;
        }
        if !force && self.loaded_session.read().as_deref() == Some(session_id) {
            return;
        }

        let generation = self.bump_generation();
        self.is_loading.set(true);
        let result = self.client.get_session_messages(session_id).await;

        if response_is_stale(generation, *self.generation.read()) {
            logging::log_stale_response_discarded(session_id);
            return;
        }

        match result {
            Ok(history) => {
                self.messages.set(history);
                self.loaded_session.set(Some(session_id.to_string()));
                self.errors.note_success();
            }
            Err(err) => {
                logging::log_operation_error(LogOperation::MessageLoad, &err.to_string());
                self.errors.handle_error(&err);
            }
        }
        self.is_loading.set(false);
    }

    /// Optimistic send: append a temporary user message, call the send
    /// endpoint, then merge the returned canonical pair in its place (or
    /// roll the temporary message back on failure).
    ///
    /// Returns the refreshed session so the caller can absorb its
    /// message_count / updated_at bump.
    pub async fn send_message(
        &mut self,
        session_id: Option<&str>,
        content: &str,
    ) -> Option<Session> {
        if !send_admitted(*self.sending.read()) {
            return None;
        }
        let Some(session_id) = session_id else {
            self.errors.handle_error(&ApiError::Validation(
                "Select or create a session before sending".into(),
            ));
            return None;
        };
        if let Err(err) = validate_content(content) {
            self.errors.handle_error(&err);
            return None;
        }

        logging::log_send_start(session_id, content.chars().count());
        let temp = ChatMessage::optimistic_user(session_id, content);
        let temp_id = temp.id.clone();
        self.messages.write().push(temp);
        self.sending.set(true);
        let generation = *self.generation.read();

        let result = self
            .client
            .send_session_message(session_id, &SendMessageRequest::user(content))
            .await;

        if response_is_stale(generation, *self.generation.read()) {
            // The user switched away mid-flight; the reset already
            // discarded the optimistic message.
            logging::log_stale_response_discarded(session_id);
            self.sending.set(false);
            return None;
        }

        let outcome = match result {
            Ok(response) => {
                reconcile_sent(&mut self.messages.write(), &temp_id, &response);
                logging::log_send_success(session_id, response.session.message_count);
                self.errors.note_success();
                Some(response.session)
            }
            Err(err) => {
                remove_message(&mut self.messages.write(), &temp_id);
                logging::log_operation_error(LogOperation::MessageSend, &err.to_string());
                self.errors.handle_error(&err);
                None
            }
        };
        self.sending.set(false);
        outcome
    }
}

/// Hook owning the per-session message history.
pub fn use_session_chat(client: ApiClient, errors: ErrorHandler) -> SessionChat {
    let messages = use_signal(Vec::new);
    let sending = use_signal(|| false);
    let is_loading = use_signal(|| false);
    let loaded_session = use_signal(|| None::<String>);
    let generation = use_signal(|| 0u64);
    SessionChat {
        client,
        errors,
        messages,
        sending,
        is_loading,
        loaded_session,
        generation,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::Role;
    use chrono::Utc;

    fn server_message(id: &str, role: Role, content: &str) -> ChatMessage {
        ChatMessage {
            id: id.to_string(),
            session_id: "s-1".to_string(),
            role,
            content: content.to_string(),
            timestamp: Utc::now(),
            message_metadata: None,
        }
    }

    fn send_response() -> SendMessageResponse {
        SendMessageResponse {
            user_message: server_message("m-1", Role::User, "hello"),
            assistant_message: server_message("m-2", Role::Assistant, "hi there"),
            session: crate::domain::models::Session {
                id: "s-1".into(),
                title: "First".into(),
                message_count: 2,
                created_at: Utc::now(),
                updated_at: Utc::now(),
                model_used: None,
                session_metadata: None,
            },
        }
    }

    #[test]
    fn test_empty_and_whitespace_content_rejected() {
        assert!(matches!(
            validate_content(""),
            Err(ApiError::Validation(msg)) if msg.contains("required")
        ));
        assert!(validate_content("   \n\t ").is_err());
    }

    #[test]
    fn test_length_limit_is_inclusive() {
        let exactly_max = "a".repeat(MAX_MESSAGE_LENGTH);
        assert!(validate_content(&exactly_max).is_ok());

        let over = "a".repeat(MAX_MESSAGE_LENGTH + 1);
        assert!(matches!(
            validate_content(&over),
            Err(ApiError::Validation(msg)) if msg.contains("4000")
        ));
    }

    #[test]
    fn test_length_limit_counts_chars_not_bytes() {
        let multibyte = "é".repeat(MAX_MESSAGE_LENGTH);
        assert!(validate_content(&multibyte).is_ok());
    }

    #[test]
    fn test_reconcile_drops_temp_and_appends_canonical_pair() {
        let temp = ChatMessage::optimistic_user("s-1", "hello");
        let temp_id = temp.id.clone();
        let mut messages = vec![server_message("m-0", Role::Assistant, "welcome"), temp];

        reconcile_sent(&mut messages, &temp_id, &send_response());

        assert_eq!(messages.len(), 3);
        assert!(messages.iter().all(|m| !m.is_temporary()));
        assert_eq!(messages[1].id, "m-1");
        assert_eq!(messages[2].id, "m-2");
    }

    #[test]
    fn test_second_send_is_refused_while_one_is_in_flight() {
        assert!(send_admitted(false));
        assert!(!send_admitted(true));
    }

    #[test]
    fn test_response_from_a_previous_generation_is_discarded() {
        // A send issued under generation 1 resolves after a session
        // switch bumped the counter to 2: the response must not touch
        // the new session's list.
        assert!(response_is_stale(1, 2));
        assert!(!response_is_stale(2, 2));

        let issued = 1u64;
        let current = 2u64;
        let mut messages: Vec<ChatMessage> = Vec::new();
        if !response_is_stale(issued, current) {
            reconcile_sent(&mut messages, "temp-x", &send_response());
        }
        assert!(messages.is_empty());
    }

    #[test]
    fn test_failed_send_rolls_back_optimistic_message() {
        let temp = ChatMessage::optimistic_user("s-1", "hello");
        let temp_id = temp.id.clone();
        let mut messages = vec![server_message("m-0", Role::Assistant, "welcome"), temp];

        remove_message(&mut messages, &temp_id);

        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].id, "m-0");
    }
}
