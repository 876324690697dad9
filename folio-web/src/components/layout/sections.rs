use dioxus::prelude::*;

use crate::hooks::SiteState;

/// A top-level content region. The active class keeps exactly one of these
/// visible; the rest stay in the DOM, hidden by CSS.
#[component]
pub fn SectionView(id: &'static str, children: Element) -> Element {
    let state = use_context::<SiteState>();
    let active = state.router.read().is_active(id);

    rsx! {
        section {
            id: id,
            class: if active { "main-section active" } else { "main-section" },
            {children}
        }
    }
}

#[component]
pub fn AboutSection() -> Element {
    rsx! {
        SectionView { id: "about",
            h2 { "About" }
            p { class: "lede",
                "Software engineer. I build backend services for a living and "
                "tinker with embedded hardware for fun."
            }
            p {
                "This site is a small single-page affair: a few sections, a "
                "reading list, and an occasional blog post. Use the nav above "
                "or the arrow keys to move around."
            }
            ul { class: "contact-list",
                li { a { href: "mailto:hello@example.com", "hello@example.com" } }
                li { a { href: "https://github.com/example", "github.com/example" } }
            }
        }
    }
}

#[component]
pub fn BooksSection() -> Element {
    rsx! {
        SectionView { id: "books",
            h2 { "Books" }
            p { "Things I've read recently and would hand to a friend." }
            ul { class: "item-list",
                li {
                    strong { "The Soul of a New Machine" }
                    span { class: "item-meta", " — Tracy Kidder" }
                }
                li {
                    strong { "Working in Public" }
                    span { class: "item-meta", " — Nadia Eghbal" }
                }
                li {
                    strong { "A Philosophy of Software Design" }
                    span { class: "item-meta", " — John Ousterhout" }
                }
                li {
                    strong { "The Making of the Atomic Bomb" }
                    span { class: "item-meta", " — Richard Rhodes" }
                }
            }
        }
    }
}

#[component]
pub fn GearSection() -> Element {
    rsx! {
        SectionView { id: "gear",
            h2 { "Gear" }
            p { "The stuff on and around my desk." }
            ul { class: "item-list",
                li {
                    strong { "Keyboard" }
                    span { class: "item-meta", " — 60% board, lubed switches, no regrets" }
                }
                li {
                    strong { "Laptop" }
                    span { class: "item-meta", " — 14\", 32 GB, runs Linux" }
                }
                li {
                    strong { "Headphones" }
                    span { class: "item-meta", " — closed-back, for open-plan survival" }
                }
                li {
                    strong { "Soldering iron" }
                    span { class: "item-meta", " — temperature controlled, mostly idle" }
                }
            }
        }
    }
}
