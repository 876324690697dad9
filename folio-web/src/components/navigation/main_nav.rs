use dioxus::prelude::*;

use crate::hooks::SiteState;
use crate::types::NAV_ITEMS;

/// Top-level nav bar: one control per nav section, mirroring the active
/// section visually.
#[component]
pub fn MainNav() -> Element {
    rsx! {
        nav { class: "main-nav",
            for (id, label) in NAV_ITEMS {
                NavLink { id: id, label: label }
            }
        }
    }
}

#[component]
fn NavLink(id: &'static str, label: &'static str) -> Element {
    let mut state = use_context::<SiteState>();
    let active = state.router.read().is_active(id);

    rsx! {
        a {
            class: if active { "main-nav-link active" } else { "main-nav-link" },
            href: "#{id}",
            onclick: move |evt| {
                // The router writes the fragment itself.
                evt.prevent_default();
                state.navigate(id);
            },
            "{label}"
        }
    }
}
