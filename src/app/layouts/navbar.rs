use dioxus::prelude::*;

use crate::app::pages::routes::Route;

/// Global navbar with the logo and page links.
#[component]
pub fn AppNavbar() -> Element {
    rsx! {
        nav { class: "navbar",
            Link {
                to: Route::Home {},
                class: "navbar__logo",
                "🔮 Oracle Chat"
            }
            div { class: "navbar__links",
                Link { to: Route::Home {}, class: "navbar__link", "Sessions" }
                Link { to: Route::Quick {}, class: "navbar__link", "Quick chat" }
            }
        }
    }
}
