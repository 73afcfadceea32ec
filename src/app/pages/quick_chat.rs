use dioxus::prelude::*;

use crate::app::components::{ChatMessages, ErrorBanner, MessageInput, StatusBadge};
use crate::config;
use crate::shared::hooks::{use_backend_health, use_error_handler, use_quick_chat};
use crate::shared::services::{ApiClient, ConnectionStatus};

/// Stateless chat page: one thread against the legacy endpoint, context
/// carried through the request history instead of a persisted session.
#[component]
pub fn QuickChatPage() -> Element {
    let client = use_hook(|| ApiClient::new(config::api_base_url()));
    let errors = use_error_handler();
    let quick = use_quick_chat(client.clone(), errors);
    let health = use_backend_health(&client, errors);
    let is_loading = use_signal(|| false);

    let on_send = {
        let quick = quick.clone();
        move |content: String| {
            let mut quick = quick.clone();
            spawn(async move {
                quick.send(&content).await;
            });
        }
    };

    let on_dismiss = {
        let mut errors = errors;
        move |_| errors.clear_error()
    };

    let on_retry = {
        let health = health.clone();
        let mut errors = errors;
        move |_| {
            let mut health = health.clone();
            spawn(async move {
                health.check_now().await;
            });
            errors.clear_error();
        }
    };

    let status = health.current();

    rsx! {
        div { class: "quick-chat-page",
            header { class: "quick-chat-page__header",
                span { class: "quick-chat-page__title", "Quick chat" }
                span { class: "quick-chat-page__hint", "Messages here are not saved" }
                StatusBadge { status }
            }

            ErrorBanner {
                error: errors.error,
                phase: errors.phase,
                on_dismiss: on_dismiss,
                on_retry: on_retry,
            }

            ChatMessages {
                messages: quick.messages,
                is_loading: is_loading,
                sending: quick.sending,
            }

            MessageInput {
                sending: quick.sending,
                disabled: status == ConnectionStatus::Disconnected,
                placeholder: "Ask the Oracle...",
                on_send: on_send,
            }
        }
    }
}
