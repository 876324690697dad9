//! folio-core - section routing for a hash-routed single-page site
//!
//! The site is a set of top-level content sections with exactly one visible
//! at a time. This crate holds the routing state machine that keeps the
//! visible section and the address-bar fragment consistent in both
//! directions: a nav click activates a section and writes the fragment, and
//! a fragment change (back/forward, manual edit) activates the matching
//! section without writing the fragment again.
//!
//! ## Example
//! ```rust
//! use folio_core::{RouteEffect, SectionRouter, SectionSet};
//!
//! let sections = SectionSet::new(["about", "books", "gear"], "about").unwrap();
//! let mut router = SectionRouter::new(sections);
//!
//! assert_eq!(router.active(), Some("about"));
//!
//! // Nav click: activate and report the fragment to write.
//! let effect = router.on_navigate("gear");
//! assert_eq!(effect, RouteEffect::WriteRoute("#gear".to_string()));
//! assert_eq!(router.active(), Some("gear"));
//!
//! // Back button landed on "#books": activate, no fragment write.
//! let effect = router.on_route_change("#books");
//! assert_eq!(effect, RouteEffect::None);
//! assert_eq!(router.active(), Some("books"));
//! ```
//!
//! The router performs no I/O. Side effects (fragment writes, blog post
//! fetches) come back to the caller as [`RouteEffect`] values.

pub mod error;
pub mod route;
pub mod router;
pub mod section;

pub use error::SectionError;
pub use route::{fragment_for, parse_fragment, RouteTarget, BLOG_ROUTE_PREFIX};
pub use router::{RouteEffect, SectionRouter};
pub use section::SectionSet;
