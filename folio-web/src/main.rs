use dioxus::events::Key;
use dioxus::prelude::*;

// Module Declarations
mod blog_client;
mod components;
mod hooks;
mod interop;
mod pages;
mod types;

use hooks::{use_hash_sync, use_site_state};
use pages::Home;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let state = use_site_state();
    use_hash_sync(state);

    let mut key_state = state;

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        div {
            class: "app",
            tabindex: "0",
            autofocus: true,
            onkeydown: move |evt| {
                let step = match evt.key() {
                    Key::ArrowRight => key_state.router.read().next_section().map(str::to_string),
                    Key::ArrowLeft => key_state.router.read().prev_section().map(str::to_string),
                    _ => None,
                };
                if let Some(id) = step {
                    evt.prevent_default();
                    key_state.navigate(&id);
                }
            },

            Home {}
        }
    }
}
