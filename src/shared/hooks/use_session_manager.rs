use dioxus::prelude::*;

use crate::domain::models::{CreateSessionRequest, Session, UpdateSessionRequest};
use crate::shared::errors::ApiError;
use crate::shared::hooks::use_error_handler::ErrorHandler;
use crate::shared::logging::{self, LogOperation};
use crate::shared::services::ApiClient;

/// Active session after a load: keep the current one (refreshed from the
/// list), falling back to the first entry when there is none or when the
/// fetched list no longer contains it, e.g. after a deletion by another
/// client.
fn initial_active(sessions: &[Session], current: Option<Session>) -> Option<Session> {
    current
        .and_then(|active| sessions.iter().find(|s| s.id == active.id).cloned())
        .or_else(|| sessions.first().cloned())
}

/// Replace the list entry with the same id. Returns false when absent.
fn patch_in_place(sessions: &mut [Session], updated: &Session) -> bool {
    match sessions.iter_mut().find(|s| s.id == updated.id) {
        Some(slot) => {
            *slot = updated.clone();
            true
        }
        None => false,
    }
}

/// Active session after deleting `deleted_id` from a list that no longer
/// contains it: unrelated deletes keep the current session, deleting the
/// active one fails over to the first remaining (or none).
fn failover_active(
    remaining: &[Session],
    active: Option<Session>,
    deleted_id: &str,
) -> Option<Session> {
    match active {
        Some(session) if session.id == deleted_id => remaining.first().cloned(),
        other => other,
    }
}

/// CRUD over chat sessions plus the single "active session" slot.
#[derive(Clone)]
pub struct SessionManager {
    client: ApiClient,
    errors: ErrorHandler,
    pub sessions: Signal<Vec<Session>>,
    pub active_session: Signal<Option<Session>>,
    pub is_loading: Signal<bool>,
}

impl SessionManager {
    pub fn active_id(&self) -> Option<String> {
        self.active_session.read().as_ref().map(|s| s.id.clone())
    }

    /// Fetch all sessions; auto-select the first when none is active.
    pub async fn load_sessions(&mut self) {
        self.is_loading.set(true);
        match self.client.get_sessions().await {
            Ok(list) => {
                logging::log_session_list(list.len());
                let current = self.active_session.read().clone();
                self.active_session.set(initial_active(&list, current));
                self.sessions.set(list);
                self.errors.note_success();
            }
            Err(err) => {
                logging::log_operation_error(LogOperation::SessionList, &err.to_string());
                self.errors.handle_error(&err);
            }
        }
        self.is_loading.set(false);
    }

    /// "Try Again" path: reload the list through the bounded-retry
    /// mechanism.
    pub async fn reload_with_retry(&mut self) {
        let client = self.client.clone();
        if let Some(list) = self
            .errors
            .retry(move || {
                let client = client.clone();
                async move { client.get_sessions().await }
            })
            .await
        {
            logging::log_session_list(list.len());
            let current = self.active_session.read().clone();
            self.active_session.set(initial_active(&list, current));
            self.sessions.set(list);
        }
    }

    /// Create a session, insert it at the head of the list and make it
    /// active.
    pub async fn create_new_session(&mut self, request: CreateSessionRequest) -> Option<Session> {
        match self.client.create_session(&request).await {
            Ok(session) => {
                self.sessions.write().insert(0, session.clone());
                self.active_session.set(Some(session.clone()));
                self.errors.note_success();
                Some(session)
            }
            Err(err) => {
                logging::log_operation_error(LogOperation::SessionCreate, &err.to_string());
                self.errors.handle_error(&err);
                None
            }
        }
    }

    /// Make `session_id` active, reusing the cached list entry when
    /// present and fetching it otherwise.
    pub async fn switch_session(&mut self, session_id: &str) {
        if session_id.is_empty() {
            self.errors
                .handle_error(&ApiError::Validation("Session id is required".into()));
            return;
        }
        if self.active_id().as_deref() == Some(session_id) {
            return;
        }

        let cached = self
            .sessions
            .read()
            .iter()
            .find(|s| s.id == session_id)
            .cloned();
        logging::log_session_switch(session_id, cached.is_some());

        match cached {
            Some(session) => self.active_session.set(Some(session)),
            None => match self.client.get_session(session_id).await {
                Ok(session) => {
                    self.sessions.write().insert(0, session.clone());
                    self.active_session.set(Some(session));
                    self.errors.note_success();
                }
                Err(err) => {
                    logging::log_operation_error(LogOperation::SessionSwitch, &err.to_string());
                    self.errors.handle_error(&err);
                }
            },
        }
    }

    /// Patch a session in place; refresh the active copy when it is the
    /// target.
    pub async fn update_session_data(&mut self, session_id: &str, request: UpdateSessionRequest) {
        if session_id.is_empty() {
            self.errors
                .handle_error(&ApiError::Validation("Session id is required".into()));
            return;
        }
        if request.title.as_deref().is_none_or(|t| t.trim().is_empty()) {
            self.errors
                .handle_error(&ApiError::Validation("Session title is required".into()));
            return;
        }

        match self.client.update_session(session_id, &request).await {
            Ok(updated) => {
                patch_in_place(&mut self.sessions.write(), &updated);
                if self.active_id().as_deref() == Some(session_id) {
                    self.active_session.set(Some(updated));
                }
                self.errors.note_success();
            }
            Err(err) => {
                logging::log_operation_error(LogOperation::SessionUpdate, &err.to_string());
                self.errors.handle_error(&err);
            }
        }
    }

    /// Delete a session; if it was active, fail over to the next remaining
    /// session or to none.
    pub async fn delete_session_by_id(&mut self, session_id: &str) {
        if session_id.is_empty() {
            self.errors
                .handle_error(&ApiError::Validation("Session id is required".into()));
            return;
        }

        match self.client.delete_session(session_id).await {
            Ok(()) => {
                self.sessions.write().retain(|s| s.id != session_id);
                let remaining = self.sessions.read().clone();
                let active = self.active_session.read().clone();
                self.active_session
                    .set(failover_active(&remaining, active, session_id));
                self.errors.note_success();
            }
            Err(err) => {
                logging::log_operation_error(LogOperation::SessionDelete, &err.to_string());
                self.errors.handle_error(&err);
            }
        }
    }

    /// Absorb the authoritative session copy returned by a message send
    /// (message_count / updated_at bump).
    pub fn absorb_session(&mut self, updated: Session) {
        patch_in_place(&mut self.sessions.write(), &updated);
        if self.active_id().as_deref() == Some(updated.id.as_str()) {
            self.active_session.set(Some(updated));
        }
    }
}

/// Hook owning the session list and the active-session slot.
pub fn use_session_manager(client: ApiClient, errors: ErrorHandler) -> SessionManager {
    let sessions = use_signal(Vec::new);
    let active_session = use_signal(|| None::<Session>);
    let is_loading = use_signal(|| false);
    SessionManager {
        client,
        errors,
        sessions,
        active_session,
        is_loading,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn session(id: &str) -> Session {
        Session {
            id: id.to_string(),
            title: format!("Session {id}"),
            message_count: 0,
            created_at: Utc::now(),
            updated_at: Utc::now(),
            model_used: None,
            session_metadata: None,
        }
    }

    #[test]
    fn test_initial_active_prefers_current_session() {
        let list = vec![session("a"), session("b")];
        let kept = initial_active(&list, Some(session("b"))).unwrap();
        assert_eq!(kept.id, "b");
    }

    #[test]
    fn test_initial_active_auto_selects_first() {
        let list = vec![session("a"), session("b")];
        assert_eq!(initial_active(&list, None).unwrap().id, "a");
        assert!(initial_active(&[], None).is_none());
    }

    #[test]
    fn test_initial_active_drops_session_missing_from_fresh_list() {
        // The active session was deleted by another client: the fetched
        // list no longer contains it, so the first entry takes over.
        let list = vec![session("a"), session("b")];
        let next = initial_active(&list, Some(session("gone"))).unwrap();
        assert_eq!(next.id, "a");

        assert!(initial_active(&[], Some(session("gone"))).is_none());
    }

    #[test]
    fn test_initial_active_refreshes_kept_session_from_list() {
        let mut refreshed = session("b");
        refreshed.message_count = 7;
        let list = vec![session("a"), refreshed];

        let kept = initial_active(&list, Some(session("b"))).unwrap();
        assert_eq!(kept.message_count, 7);
    }

    #[test]
    fn test_patch_in_place_replaces_matching_entry() {
        let mut list = vec![session("a"), session("b")];
        let mut updated = session("b");
        updated.title = "Renamed".into();
        assert!(patch_in_place(&mut list, &updated));
        assert_eq!(list[1].title, "Renamed");
        assert!(!patch_in_place(&mut list, &session("missing")));
    }

    #[test]
    fn test_failover_to_next_remaining_session() {
        let remaining = vec![session("b"), session("c")];
        let next = failover_active(&remaining, Some(session("a")), "a").unwrap();
        assert_eq!(next.id, "b");
    }

    #[test]
    fn test_deleting_only_session_leaves_none_active() {
        assert!(failover_active(&[], Some(session("a")), "a").is_none());
    }

    #[test]
    fn test_deleting_inactive_session_keeps_active() {
        let remaining = vec![session("a"), session("c")];
        let kept = failover_active(&remaining, Some(session("c")), "b").unwrap();
        assert_eq!(kept.id, "c");
    }
}
