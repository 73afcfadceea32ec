use dioxus::prelude::*;

use crate::domain::models::Session;
use crate::shared::services::ConnectionStatus;

/// Header over the message area: editable title, message count, model
/// name and the backend status badge.
#[component]
pub fn SessionHeader(
    session: Option<Session>,
    status: ConnectionStatus,
    on_rename: EventHandler<String>,
) -> Element {
    let mut editing = use_signal(|| false);
    let mut draft = use_signal(String::new);

    let Some(session) = session else {
        return rsx! {
            header { class: "session-header",
                span { class: "session-header__title session-header__title--empty",
                    "No session selected"
                }
                StatusBadge { status }
            }
        };
    };

    let title_for_edit = session.title.clone();
    let submit = move || {
        let title = draft.read().trim().to_string();
        editing.set(false);
        if !title.is_empty() {
            on_rename.call(title);
        }
    };
    let mut submit_on_enter = submit.clone();
    let mut submit_on_blur = submit;

    rsx! {
        header { class: "session-header",
            div { class: "session-header__main",
                if *editing.read() {
                    input {
                        class: "session-header__title-input",
                        value: "{draft}",
                        autofocus: true,
                        oninput: move |evt| draft.set(evt.value()),
                        onkeydown: move |evt| {
                            if evt.key() == Key::Enter {
                                submit_on_enter();
                            } else if evt.key() == Key::Escape {
                                editing.set(false);
                            }
                        },
                        onblur: move |_| submit_on_blur(),
                    }
                } else {
                    span {
                        class: "session-header__title",
                        title: "Click to rename",
                        onclick: move |_| {
                            draft.set(title_for_edit.clone());
                            editing.set(true);
                        },
                        "{session.title}"
                    }
                }
                div { class: "session-header__meta",
                    span { "{session.message_count} messages" }
                    if let Some(model) = session.model_used.as_ref() {
                        span { class: "session-header__model", "{model}" }
                    }
                }
            }
            StatusBadge { status }
        }
    }
}

/// Colored dot plus the health label ("checking..." until the first
/// probe resolves).
#[component]
pub fn StatusBadge(status: ConnectionStatus) -> Element {
    let status_class = match status {
        ConnectionStatus::Unknown => "status-badge--unknown",
        ConnectionStatus::Connected => "status-badge--connected",
        ConnectionStatus::Disconnected => "status-badge--disconnected",
    };

    rsx! {
        span { class: "status-badge {status_class}",
            span { class: "status-badge__dot" }
            "{status.label()}"
        }
    }
}
