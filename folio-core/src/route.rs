//! Address-bar fragment parsing
//!
//! The fragment is a string mirror of the active section id, written as
//! `#<sectionId>`. Blog posts use the compound form `#blog/<postName>`,
//! which never names a declared section directly and is delegated to the
//! blog fragment fetcher instead.

/// Fragment prefix that marks a blog post route, after the leading `#`.
pub const BLOG_ROUTE_PREFIX: &str = "blog/";

/// What a fragment string resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteTarget {
    /// No fragment (or a bare `#`).
    Empty,
    /// A plain section id. Not necessarily a known one.
    Section(String),
    /// A `blog/<postName>` compound route.
    BlogPost(String),
}

/// Parse a raw fragment as read from the address bar. A leading `#` is
/// accepted and stripped.
pub fn parse_fragment(raw: &str) -> RouteTarget {
    let fragment = raw.strip_prefix('#').unwrap_or(raw);
    if fragment.is_empty() {
        return RouteTarget::Empty;
    }
    if let Some(post) = fragment.strip_prefix(BLOG_ROUTE_PREFIX) {
        if !post.is_empty() {
            return RouteTarget::BlogPost(post.to_string());
        }
    }
    RouteTarget::Section(fragment.to_string())
}

/// The fragment to write for a section id.
pub fn fragment_for(section_id: &str) -> String {
    format!("#{section_id}")
}
