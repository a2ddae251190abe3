use dioxus::launch;
use dioxus::prelude::*;
use dioxus_logger::tracing::Level;

use admin_ui::{ItemsAdmin, UsersAdmin, ADMIN_STYLES};

fn main() {
    // Initialize logging for WASM
    wasm_logger::init(wasm_logger::Config::default());
    dioxus_logger::init(Level::INFO).ok();

    launch(App);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tab {
    Items,
    Users,
}

#[component]
fn App() -> Element {
    let mut tab = use_signal(|| Tab::Items);
    let items_class = if tab() == Tab::Items { "btn tab-active" } else { "btn" };
    let users_class = if tab() == Tab::Users { "btn tab-active" } else { "btn" };

    rsx! {
        style { {ADMIN_STYLES} }

        div { class: "console",
            div { class: "tabs",
                button {
                    class: "{items_class}",
                    onclick: move |_| tab.set(Tab::Items),
                    "Items"
                }
                button {
                    class: "{users_class}",
                    onclick: move |_| tab.set(Tab::Users),
                    "Users"
                }
            }

            if tab() == Tab::Items {
                ItemsAdmin {}
            } else {
                UsersAdmin {}
            }
        }
    }
}
