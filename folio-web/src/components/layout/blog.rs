use dioxus::prelude::*;

use crate::components::layout::SectionView;
use crate::hooks::SiteState;
use crate::types::{post_index, BLOG_CONTENT_SECTION};

/// The blog index: links carry plain `#blog/<slug>` fragments, so clicking
/// one flows through the hashchange listener and into the post fetch. This
/// is also the section the router falls back to when a fetch fails.
#[component]
pub fn BlogSection() -> Element {
    rsx! {
        SectionView { id: "blog",
            h2 { "Blog" }
            ul { class: "post-list",
                for post in post_index() {
                    li {
                        a { href: "#blog/{post.slug}", "{post.title}" }
                        span { class: "post-date", "{post.date}" }
                    }
                }
            }
        }
    }
}

/// Container the fetched post markup is spliced into.
#[component]
pub fn BlogContentSection() -> Element {
    let state = use_context::<SiteState>();
    let html = state.post_html.read().clone().unwrap_or_default();

    rsx! {
        SectionView { id: BLOG_CONTENT_SECTION,
            a { class: "back-link", href: "#blog", "\u{2190} All posts" }
            article {
                class: "post-body",
                dangerous_inner_html: "{html}",
            }
        }
    }
}
