use dioxus::prelude::*;

use crate::app::components::{
    ChatMessages, ErrorBanner, MessageInput, SessionHeader, SessionSidebar,
};
use crate::config;
use crate::domain::models::{CreateSessionRequest, UpdateSessionRequest};
use crate::shared::hooks::{
    use_backend_health, use_error_handler, use_session_chat, use_session_manager,
};
use crate::shared::services::{ApiClient, ConnectionStatus};

/// Main page: session sidebar, message history and the composer, all
/// sharing one error handler and one API client.
#[component]
pub fn ChatPage() -> Element {
    let client = use_hook(|| ApiClient::new(config::api_base_url()));
    let errors = use_error_handler();
    let sessions = use_session_manager(client.clone(), errors);
    let chat = use_session_chat(client.clone(), errors);
    let health = use_backend_health(&client, errors);

    // Initial session list load
    {
        let sessions = sessions.clone();
        use_effect(move || {
            let mut sessions = sessions.clone();
            spawn(async move {
                sessions.load_sessions().await;
            });
        });
    }

    // Follow the active session: load its history, or clear the pane
    // when the last session is deleted.
    {
        let sessions = sessions.clone();
        let chat = chat.clone();
        use_effect(move || {
            let active = sessions.active_session.read().as_ref().map(|s| s.id.clone());
            let mut chat = chat.clone();
            spawn(async move {
                match active {
                    Some(id) => chat.switch_to(&id).await,
                    None => chat.reset(),
                }
            });
        });
    }

    let on_select = {
        let sessions = sessions.clone();
        move |session_id: String| {
            let mut sessions = sessions.clone();
            spawn(async move {
                sessions.switch_session(&session_id).await;
            });
        }
    };

    let on_create = {
        let sessions = sessions.clone();
        move |_| {
            let mut sessions = sessions.clone();
            spawn(async move {
                sessions
                    .create_new_session(CreateSessionRequest::titled("New chat"))
                    .await;
            });
        }
    };

    let on_delete = {
        let sessions = sessions.clone();
        move |session_id: String| {
            let mut sessions = sessions.clone();
            spawn(async move {
                sessions.delete_session_by_id(&session_id).await;
            });
        }
    };

    let on_rename = {
        let sessions = sessions.clone();
        move |title: String| {
            let mut sessions = sessions.clone();
            spawn(async move {
                let id = sessions.active_id();
                if let Some(id) = id {
                    sessions
                        .update_session_data(
                            &id,
                            UpdateSessionRequest { title: Some(title) },
                        )
                        .await;
                }
            });
        }
    };

    let on_send = {
        let sessions = sessions.clone();
        let chat = chat.clone();
        move |content: String| {
            let mut sessions = sessions.clone();
            let mut chat = chat.clone();
            spawn(async move {
                let active = sessions.active_id();
                if let Some(session) = chat.send_message(active.as_deref(), &content).await {
                    sessions.absorb_session(session);
                }
            });
        }
    };

    let on_retry = {
        let sessions = sessions.clone();
        let health = health.clone();
        move |_| {
            let mut sessions = sessions.clone();
            let mut health = health.clone();
            spawn(async move {
                sessions.reload_with_retry().await;
                health.check_now().await;
            });
        }
    };

    let on_dismiss = {
        let mut errors = errors;
        move |_| errors.clear_error()
    };

    let status = health.current();
    let active = sessions.active_session.read().clone();
    let active_id = active.as_ref().map(|s| s.id.clone());

    rsx! {
        div { class: "chat-page",
            SessionSidebar {
                sessions: sessions.sessions,
                active_id: active_id,
                is_loading: sessions.is_loading,
                on_select: on_select,
                on_create: on_create,
                on_delete: on_delete,
            }

            div { class: "chat-page__main",
                SessionHeader {
                    session: active.clone(),
                    status: status,
                    on_rename: on_rename,
                }

                ErrorBanner {
                    error: errors.error,
                    phase: errors.phase,
                    on_dismiss: on_dismiss,
                    on_retry: on_retry,
                }

                ChatMessages {
                    messages: chat.messages,
                    is_loading: chat.is_loading,
                    sending: chat.sending,
                }

                MessageInput {
                    sending: chat.sending,
                    disabled: active.is_none() || status == ConnectionStatus::Disconnected,
                    placeholder: "Ask the Oracle...",
                    on_send: on_send,
                }
            }
        }
    }
}
