use dioxus::prelude::*;
use keyboard_types::Modifiers;

use crate::shared::constants::MAX_MESSAGE_LENGTH;

/// Message composer. Enter sends, Shift+Enter inserts a newline.
///
/// The button stays disabled for empty input, over-limit input, while a
/// send is in flight and while the backend is unreachable.
#[component]
pub fn MessageInput(
    sending: Signal<bool>,
    disabled: bool,
    placeholder: String,
    on_send: EventHandler<String>,
) -> Element {
    let mut draft = use_signal(String::new);

    let char_count = draft.read().chars().count();
    let over_limit = char_count > MAX_MESSAGE_LENGTH;
    let can_send =
        !draft.read().trim().is_empty() && !over_limit && !*sending.read() && !disabled;

    let mut submit = move || {
        let content = draft.read().trim().to_string();
        if content.is_empty() || content.chars().count() > MAX_MESSAGE_LENGTH {
            return;
        }
        draft.set(String::new());
        on_send.call(content);
    };

    let handle_keydown = move |evt: Event<KeyboardData>| {
        if evt.key() == Key::Enter && !evt.modifiers().contains(Modifiers::SHIFT) {
            evt.prevent_default();
            if !*sending.read() && !disabled {
                submit();
            }
        }
    };

    let counter_class = if over_limit {
        "message-input__counter message-input__counter--over"
    } else {
        "message-input__counter"
    };

    rsx! {
        div { class: "message-input",
            textarea {
                class: "message-input__field",
                placeholder: "{placeholder}",
                value: "{draft}",
                rows: "3",
                disabled: *sending.read() || disabled,
                oninput: move |evt| draft.set(evt.value()),
                onkeydown: handle_keydown,
            }
            div { class: "message-input__side",
                span { class: "{counter_class}", "{char_count}/{MAX_MESSAGE_LENGTH}" }
                button {
                    class: "message-input__send",
                    disabled: !can_send,
                    onclick: move |_| submit(),
                    if *sending.read() { "Sending..." } else { "Send" }
                }
            }
            div { class: "message-input__hint",
                "Press Enter to send, Shift+Enter for new line"
            }
        }
    }
}
