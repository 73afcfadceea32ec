use dioxus::prelude::*;

use crate::shared::constants::MAX_RETRY_ATTEMPTS;
use crate::shared::errors::ErrorKind;
use crate::shared::hooks::{ErrorState, RecoveryPhase};

fn kind_icon(kind: ErrorKind) -> &'static str {
    match kind {
        ErrorKind::Network => "📡",
        ErrorKind::Timeout => "⏱️",
        ErrorKind::Server => "🔥",
        ErrorKind::Validation => "⚠️",
        ErrorKind::Error => "❌",
    }
}

fn kind_title(kind: ErrorKind) -> &'static str {
    match kind {
        ErrorKind::Network => "Connection problem",
        ErrorKind::Timeout => "Request timed out",
        ErrorKind::Server => "Server error",
        ErrorKind::Validation => "Invalid input",
        ErrorKind::Error => "Something went wrong",
    }
}

fn kind_suggestions(kind: ErrorKind) -> &'static [&'static str] {
    match kind {
        ErrorKind::Network => &[
            "Check that the backend is running",
            "Verify your network connection",
        ],
        ErrorKind::Timeout => &["The backend may be busy, try again in a moment"],
        ErrorKind::Server => &["This is usually transient, try again shortly"],
        ErrorKind::Validation => &["Adjust the highlighted input and resend"],
        ErrorKind::Error => &["Reload the page to start over"],
    }
}

/// Dismissible banner over the chat area. Retryable errors expose a
/// "Try Again" button driving the bounded-retry mechanism.
#[component]
pub fn ErrorBanner(
    error: Signal<Option<ErrorState>>,
    phase: Signal<RecoveryPhase>,
    on_dismiss: EventHandler<()>,
    on_retry: EventHandler<()>,
) -> Element {
    let Some(state) = error.read().clone() else {
        return rsx! {};
    };

    let retrying = *phase.read() == RecoveryPhase::Retrying;
    let icon = kind_icon(state.kind);
    let title = kind_title(state.kind);
    let kind_class = match state.kind {
        ErrorKind::Network => "error-banner--network",
        ErrorKind::Timeout => "error-banner--timeout",
        ErrorKind::Server => "error-banner--server",
        ErrorKind::Validation => "error-banner--validation",
        ErrorKind::Error => "error-banner--error",
    };

    rsx! {
        div { class: "error-banner {kind_class}",
            div { class: "error-banner__header",
                span { class: "error-banner__icon", "{icon}" }
                span { class: "error-banner__title", "{title}" }
                button {
                    class: "error-banner__dismiss",
                    title: "Dismiss",
                    onclick: move |_| on_dismiss.call(()),
                    "✕"
                }
            }
            p { class: "error-banner__message", "{state.message}" }
            ul { class: "error-banner__suggestions",
                for suggestion in kind_suggestions(state.kind) {
                    li { "{suggestion}" }
                }
            }
            div { class: "error-banner__footer",
                if state.retry_count > 0 {
                    span { class: "error-banner__count",
                        "Attempt {state.retry_count} of {MAX_RETRY_ATTEMPTS}"
                    }
                }
                if state.retryable {
                    button {
                        class: "error-banner__retry",
                        disabled: retrying,
                        onclick: move |_| on_retry.call(()),
                        if retrying { "Retrying..." } else { "Try Again" }
                    }
                }
            }
        }
    }
}
