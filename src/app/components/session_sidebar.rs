use dioxus::prelude::*;

use crate::domain::models::Session;

/// Sidebar listing all sessions, with creation and inline deletion.
#[component]
pub fn SessionSidebar(
    sessions: Signal<Vec<Session>>,
    active_id: Option<String>,
    is_loading: Signal<bool>,
    on_select: EventHandler<String>,
    on_create: EventHandler<()>,
    on_delete: EventHandler<String>,
) -> Element {
    rsx! {
        aside { class: "session-sidebar",
            div { class: "session-sidebar__header",
                span { class: "session-sidebar__title", "Sessions" }
                button {
                    class: "session-sidebar__new",
                    title: "New session",
                    onclick: move |_| on_create.call(()),
                    "+ New"
                }
            }

            div { class: "session-sidebar__list",
                if *is_loading.read() && sessions.read().is_empty() {
                    div { class: "session-sidebar__loading", "Loading sessions..." }
                } else if sessions.read().is_empty() {
                    div { class: "session-sidebar__empty",
                        div { class: "session-sidebar__empty-icon", "💬" }
                        div { "No sessions yet" }
                        div { class: "session-sidebar__empty-hint",
                            "Create one to start chatting"
                        }
                    }
                } else {
                    for session in sessions.read().iter() {
                        SessionItem {
                            key: "{session.id}",
                            session: session.clone(),
                            is_active: active_id.as_deref() == Some(session.id.as_str()),
                            on_select: on_select,
                            on_delete: on_delete,
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn SessionItem(
    session: Session,
    is_active: bool,
    on_select: EventHandler<String>,
    on_delete: EventHandler<String>,
) -> Element {
    let mut show_confirm = use_signal(|| false);

    let item_class = if is_active {
        "session-item session-item--active"
    } else {
        "session-item"
    };
    let time_str = session.updated_at.format("%b %-d, %H:%M").to_string();
    let id_for_select = session.id.clone();
    let id_for_delete = session.id.clone();

    rsx! {
        div {
            class: "{item_class}",
            onclick: move |_| on_select.call(id_for_select.clone()),

            div { class: "session-item__content",
                div { class: "session-item__title", "{session.title}" }
                div { class: "session-item__meta",
                    span { "{session.message_count} messages" }
                    span { class: "session-item__time", "{time_str}" }
                }
            }

            button {
                class: "session-item__delete",
                title: "Delete session",
                onclick: move |evt| {
                    evt.stop_propagation();
                    show_confirm.set(true);
                },
                "🗑️"
            }

            if *show_confirm.read() {
                div { class: "session-item__confirm",
                    span { "Delete?" }
                    button {
                        class: "session-item__confirm-btn session-item__confirm-btn--danger",
                        onclick: move |evt| {
                            evt.stop_propagation();
                            show_confirm.set(false);
                            on_delete.call(id_for_delete.clone());
                        },
                        "Yes"
                    }
                    button {
                        class: "session-item__confirm-btn",
                        onclick: move |evt| {
                            evt.stop_propagation();
                            show_confirm.set(false);
                        },
                        "No"
                    }
                }
            }
        }
    }
}
