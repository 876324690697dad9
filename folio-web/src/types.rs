//! Page configuration and shared data types.

use folio_core::{SectionRouter, SectionSet};
use serde::{Deserialize, Serialize};

/// Nav sections in display order, with their nav control labels.
pub const NAV_ITEMS: [(&str, &str); 4] = [
    ("about", "About"),
    ("books", "Books"),
    ("gear", "Gear"),
    ("blog", "Blog"),
];

/// Section shown after a blog post fragment is spliced in.
pub const BLOG_CONTENT_SECTION: &str = "blog-content";

/// Section to fall back to when a blog post fails to load.
pub const BLOG_FALLBACK_SECTION: &str = "blog";

/// Element id holding the post body inside a fetched post document.
pub const POST_FRAGMENT_ID: &str = "post-content";

/// How long the error notice stays up.
pub const NOTICE_DURATION_MS: i32 = 4000;

/// The router for this page's canonical section set.
pub fn page_router() -> SectionRouter {
    let sections = SectionSet::new(NAV_ITEMS.map(|(id, _)| id), "about")
        .and_then(|s| s.with_synthetic(BLOG_CONTENT_SECTION))
        .expect("page section set is valid");
    SectionRouter::new(sections)
}

/// One entry in the blog index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostSummary {
    pub slug: String,
    pub title: String,
    pub date: String,
}

/// The posts listed on the blog section, newest first.
pub fn post_index() -> Vec<PostSummary> {
    [
        ("rust-on-the-frontend", "Rust on the frontend", "2026-05-14"),
        ("desk-setup-2026", "My desk setup, 2026 edition", "2026-02-03"),
        ("books-that-stuck", "Books that stuck with me", "2025-11-21"),
    ]
    .into_iter()
    .map(|(slug, title, date)| PostSummary {
        slug: slug.to_string(),
        title: title.to_string(),
        date: date.to_string(),
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_router_defaults_to_about() {
        let router = page_router();
        assert_eq!(router.active(), Some("about"));
        assert!(router.sections().contains(BLOG_CONTENT_SECTION));
    }

    #[test]
    fn test_every_nav_item_is_a_nav_stop() {
        let router = page_router();
        for (id, _) in NAV_ITEMS {
            assert!(router.sections().nav_position(id).is_some());
        }
    }
}
