use dioxus::prelude::*;

use crate::domain::models::ChatMessage;
use crate::shared::utils::render_markdown;

#[cfg(target_arch = "wasm32")]
use js_sys::eval as js_eval;

#[cfg(target_arch = "wasm32")]
use crate::shared::constants::SCROLL_PIN_THRESHOLD_PX;

/// Scrollable message list with auto-scroll pinned to the bottom.
///
/// The scroll only follows new messages while the user is already near
/// the bottom; scrolling up to read history disables it.
#[component]
pub fn ChatMessages(
    messages: Signal<Vec<ChatMessage>>,
    is_loading: Signal<bool>,
    sending: Signal<bool>,
) -> Element {
    use_effect(move || {
        let count = messages.read().len();
        if count > 0 {
            #[cfg(target_arch = "wasm32")]
            {
                let script = format!(
                    r#"
                    setTimeout(() => {{
                        const list = document.getElementById('chat-messages');
                        const end = document.getElementById('messages-end');
                        if (list && end) {{
                            const fromBottom = list.scrollHeight - list.scrollTop - list.clientHeight;
                            if (fromBottom < {SCROLL_PIN_THRESHOLD_PX}) {{
                                end.scrollIntoView({{ behavior: 'smooth' }});
                            }}
                        }}
                    }}, 100);
                "#
                );
                let _ = js_eval(&script);
            }
        }
    });

    rsx! {
        div { class: "chat-messages", id: "chat-messages",
            if *is_loading.read() {
                div { class: "chat-messages__loading", "Loading messages..." }
            } else if messages.read().is_empty() {
                EmptyState {}
            } else {
                for message in messages.read().iter() {
                    MessageItem { key: "{message.id}", message: message.clone() }
                }
                if *sending.read() {
                    TypingIndicator {}
                }
                div { id: "messages-end" }
            }
        }
    }
}

#[component]
fn EmptyState() -> Element {
    rsx! {
        div { class: "empty-state",
            div { class: "empty-state__icon", "🔮" }
            h2 { class: "empty-state__title", "Ask the Oracle" }
            p { class: "empty-state__description",
                "Send a message to start the conversation"
            }
        }
    }
}

#[component]
fn TypingIndicator() -> Element {
    rsx! {
        div { class: "message message--assistant message--typing",
            div { class: "message__content", "..." }
        }
    }
}

#[component]
fn MessageItem(message: ChatMessage) -> Element {
    let time_str = message.timestamp.format("%H:%M").to_string();

    if message.role.is_user() {
        let pending = if message.is_temporary() {
            " message--pending"
        } else {
            ""
        };
        rsx! {
            div { class: "message message--user{pending}",
                div { class: "message__content", "{message.content}" }
                span { class: "message__timestamp", "{time_str}" }
            }
        }
    } else {
        let html = render_markdown(&message.content);
        rsx! {
            div { class: "message message--assistant",
                div { class: "message__content", dangerous_inner_html: "{html}" }
                span { class: "message__timestamp", "{time_str}" }
            }
        }
    }
}
