use dioxus::document;
use dioxus::prelude::*;

use crate::app::layouts::AppNavbar;
use crate::app::pages::chat::ChatPage;
use crate::app::pages::quick_chat::QuickChatPage;

#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
    // Main session-based chat
    #[route("/")]
    Home {},

    // Stateless chat against the legacy endpoint
    #[route("/quick")]
    Quick {},
}

#[component]
pub fn App() -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: |_| rsx! {
                div { class: "fatal-error",
                    "Something went wrong - reload the page to continue"
                }
            },
            Router::<Route> {}
        }
    }
}

#[component]
fn Layout() -> Element {
    const MAIN_CSS: Asset = asset!("/assets/main.css");

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        div { class: "layout",
            AppNavbar {}
            main { class: "layout__main",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn Home() -> Element {
    rsx! {
        ChatPage {}
    }
}

#[component]
fn Quick() -> Element {
    rsx! {
        QuickChatPage {}
    }
}
