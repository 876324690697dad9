//! Canonical section sets
//!
//! Each page declares one enumerated set of section identifiers up front.
//! The router only ever activates identifiers from this set; anything else
//! is treated as "no match". This replaces the ad-hoc "query the document
//! for whatever carries the active class" approach with an explicit value
//! constructed once per page.

use crate::error::SectionError;

/// The ordered set of section identifiers for one page.
///
/// Nav sections are the ones reachable from a nav control and from arrow-key
/// stepping, in display order. Synthetic sections (e.g. the spliced blog
/// post view) are activatable but are not nav stops and carry no nav
/// control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionSet {
    nav: Vec<String>,
    synthetic: Vec<String>,
    default_id: String,
}

impl SectionSet {
    /// Build a set from nav section ids in display order plus the default
    /// section, i.e. the one the markup declares active on first paint.
    pub fn new<I, S>(nav_ids: I, default_id: impl Into<String>) -> Result<Self, SectionError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let nav: Vec<String> = nav_ids.into_iter().map(Into::into).collect();
        if nav.is_empty() {
            return Err(SectionError::EmptySet);
        }
        for (i, id) in nav.iter().enumerate() {
            if nav[..i].contains(id) {
                return Err(SectionError::DuplicateId(id.clone()));
            }
        }
        let default_id = default_id.into();
        if !nav.contains(&default_id) {
            return Err(SectionError::UnknownDefault(default_id));
        }
        Ok(Self {
            nav,
            synthetic: Vec::new(),
            default_id,
        })
    }

    /// Add a synthetic section id: activatable, but not a nav stop.
    pub fn with_synthetic(mut self, id: impl Into<String>) -> Result<Self, SectionError> {
        let id = id.into();
        if self.contains(&id) {
            return Err(SectionError::DuplicateId(id));
        }
        self.synthetic.push(id);
        Ok(self)
    }

    /// Whether `id` names a known section, nav or synthetic.
    pub fn contains(&self, id: &str) -> bool {
        self.nav.iter().any(|s| s == id) || self.synthetic.iter().any(|s| s == id)
    }

    /// Position of `id` within the nav stop order, if it is a nav section.
    pub fn nav_position(&self, id: &str) -> Option<usize> {
        self.nav.iter().position(|s| s == id)
    }

    /// Nav section ids in display order.
    pub fn nav_ids(&self) -> impl Iterator<Item = &str> {
        self.nav.iter().map(String::as_str)
    }

    pub fn nav_len(&self) -> usize {
        self.nav.len()
    }

    pub fn default_id(&self) -> &str {
        &self.default_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_set() {
        let set = SectionSet::new(["about", "books", "gear"], "about").unwrap();
        assert!(set.contains("books"));
        assert!(!set.contains("blog-content"));
        assert_eq!(set.default_id(), "about");
        assert_eq!(set.nav_position("gear"), Some(2));
        assert_eq!(set.nav_len(), 3);
    }

    #[test]
    fn test_empty_set_rejected() {
        let err = SectionSet::new(Vec::<String>::new(), "about").unwrap_err();
        assert_eq!(err, SectionError::EmptySet);
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let err = SectionSet::new(["about", "books", "about"], "about").unwrap_err();
        assert_eq!(err, SectionError::DuplicateId("about".to_string()));
    }

    #[test]
    fn test_default_must_be_member() {
        let err = SectionSet::new(["about", "books"], "gear").unwrap_err();
        assert_eq!(err, SectionError::UnknownDefault("gear".to_string()));
    }

    #[test]
    fn test_synthetic_is_known_but_not_a_nav_stop() {
        let set = SectionSet::new(["about", "blog"], "about")
            .unwrap()
            .with_synthetic("blog-content")
            .unwrap();
        assert!(set.contains("blog-content"));
        assert_eq!(set.nav_position("blog-content"), None);
        assert_eq!(set.nav_len(), 2);
    }

    #[test]
    fn test_synthetic_duplicate_rejected() {
        let err = SectionSet::new(["about"], "about")
            .unwrap()
            .with_synthetic("about")
            .unwrap_err();
        assert_eq!(err, SectionError::DuplicateId("about".to_string()));
    }
}
