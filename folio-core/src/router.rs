//! The section router
//!
//! One router instance is constructed per page, holding the page's
//! enumerated [`SectionSet`] and the currently active section id. Handlers
//! call into it and apply the returned [`RouteEffect`]; the router itself
//! touches neither the document nor the address bar.

use crate::route::{fragment_for, parse_fragment, RouteTarget};
use crate::section::SectionSet;

/// Side effect requested by a router transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteEffect {
    /// Nothing to do beyond the state change.
    None,
    /// Write this fragment (including the leading `#`) to the address bar.
    WriteRoute(String),
    /// Hand the named post to the blog fragment fetcher. The active section
    /// is left untouched until the fetch resolves; last write wins.
    FetchBlogPost(String),
}

/// Hash-routed section navigation state for one page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionRouter {
    sections: SectionSet,
    active: Option<String>,
}

impl SectionRouter {
    /// A fresh router starts on the set's default section, matching the
    /// section the markup declares active.
    pub fn new(sections: SectionSet) -> Self {
        let active = Some(sections.default_id().to_string());
        Self { sections, active }
    }

    pub fn sections(&self) -> &SectionSet {
        &self.sections
    }

    /// The currently active section id. `None` only after activating an
    /// unknown id, which clears every section.
    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active.as_deref() == Some(id)
    }

    /// Deactivate everything, then activate `id` if it is a known section.
    /// An unknown id leaves nothing active. Idempotent.
    pub fn activate(&mut self, id: &str) {
        if self.sections.contains(id) {
            self.active = Some(id.to_string());
        } else {
            log::debug!("activate: unknown section '{id}', clearing");
            self.active = None;
        }
    }

    /// Nav control click: activate `id` and mirror it into the address bar.
    /// The caller must have suppressed the control's default navigation.
    pub fn on_navigate(&mut self, id: &str) -> RouteEffect {
        self.activate(id);
        if self.is_active(id) {
            RouteEffect::WriteRoute(fragment_for(id))
        } else {
            RouteEffect::None
        }
    }

    /// Fragment changed by means other than [`Self::on_navigate`]
    /// (back/forward navigation, manual address edit). Activates a known
    /// section without writing the fragment back, so a write never feeds
    /// into another write. Unknown fragments leave the state as is.
    pub fn on_route_change(&mut self, fragment: &str) -> RouteEffect {
        match parse_fragment(fragment) {
            RouteTarget::Empty => RouteEffect::None,
            RouteTarget::BlogPost(post) => RouteEffect::FetchBlogPost(post),
            RouteTarget::Section(id) => {
                if self.sections.contains(&id) {
                    self.activate(&id);
                }
                RouteEffect::None
            }
        }
    }

    /// First ready state: dispatch whatever fragment the page was opened
    /// with. An empty or unknown fragment leaves the default section active.
    pub fn on_load(&mut self, fragment: &str) -> RouteEffect {
        self.on_route_change(fragment)
    }

    /// The nav section after the active one, for ArrowRight stepping.
    /// Saturates at the last stop; a non-nav active section has no next.
    pub fn next_section(&self) -> Option<&str> {
        let pos = self.sections.nav_position(self.active.as_deref()?)?;
        if pos + 1 < self.sections.nav_len() {
            self.sections.nav_ids().nth(pos + 1)
        } else {
            None
        }
    }

    /// The nav section before the active one, for ArrowLeft stepping.
    pub fn prev_section(&self) -> Option<&str> {
        let pos = self.sections.nav_position(self.active.as_deref()?)?;
        if pos > 0 {
            self.sections.nav_ids().nth(pos - 1)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn router() -> SectionRouter {
        let sections = SectionSet::new(["about", "books", "gear", "blog"], "about")
            .unwrap()
            .with_synthetic("blog-content")
            .unwrap();
        SectionRouter::new(sections)
    }

    #[test]
    fn test_default_active_on_construction() {
        assert_eq!(router().active(), Some("about"));
    }

    #[test]
    fn test_activate_known_id() {
        let mut r = router();
        r.activate("gear");
        assert_eq!(r.active(), Some("gear"));
        assert!(r.is_active("gear"));
        assert!(!r.is_active("about"));
    }

    #[test]
    fn test_activate_unknown_id_clears_all() {
        let mut r = router();
        r.activate("contact");
        assert_eq!(r.active(), None);
    }

    #[test]
    fn test_activate_is_idempotent() {
        let mut r = router();
        r.activate("books");
        let once = r.clone();
        r.activate("books");
        assert_eq!(r, once);
    }

    #[test]
    fn test_navigate_activates_and_writes_route() {
        let mut r = router();
        let effect = r.on_navigate("gear");
        assert_eq!(effect, RouteEffect::WriteRoute("#gear".to_string()));
        assert_eq!(r.active(), Some("gear"));
    }

    #[test]
    fn test_navigate_unknown_writes_nothing() {
        let mut r = router();
        let effect = r.on_navigate("contact");
        assert_eq!(effect, RouteEffect::None);
        assert_eq!(r.active(), None);
    }

    #[test]
    fn test_route_change_activates_without_write() {
        let mut r = router();
        let effect = r.on_route_change("#books");
        assert_eq!(effect, RouteEffect::None);
        assert_eq!(r.active(), Some("books"));
    }

    #[test]
    fn test_route_change_unknown_keeps_state() {
        let mut r = router();
        r.activate("gear");
        let effect = r.on_route_change("#contact");
        assert_eq!(effect, RouteEffect::None);
        assert_eq!(r.active(), Some("gear"));
    }

    #[test]
    fn test_route_change_blog_post_defers_to_fetcher() {
        let mut r = router();
        let effect = r.on_route_change("#blog/my-post");
        assert_eq!(effect, RouteEffect::FetchBlogPost("my-post".to_string()));
        // Active section is untouched until the fetch resolves.
        assert_eq!(r.active(), Some("about"));
    }

    #[test]
    fn test_load_with_empty_fragment_keeps_default() {
        let mut r = router();
        let effect = r.on_load("");
        assert_eq!(effect, RouteEffect::None);
        assert_eq!(r.active(), Some("about"));
    }

    #[test]
    fn test_load_with_known_fragment() {
        let mut r = router();
        r.on_load("#books");
        assert_eq!(r.active(), Some("books"));
    }

    #[test]
    fn test_arrow_stepping() {
        let mut r = router();
        assert_eq!(r.next_section(), Some("books"));
        assert_eq!(r.prev_section(), None);

        r.activate("blog");
        assert_eq!(r.next_section(), None);
        assert_eq!(r.prev_section(), Some("gear"));
    }

    #[test]
    fn test_stepping_from_synthetic_section_is_a_no_op() {
        let mut r = router();
        r.activate("blog-content");
        assert_eq!(r.next_section(), None);
        assert_eq!(r.prev_section(), None);
    }

    #[test]
    fn test_stepping_with_nothing_active() {
        let mut r = router();
        r.activate("contact");
        assert_eq!(r.next_section(), None);
        assert_eq!(r.prev_section(), None);
    }
}
