use dioxus::document::eval;
use dioxus::prelude::*;
use folio_core::{RouteEffect, SectionRouter};

use crate::blog_client::BlogClient;
use crate::interop;
use crate::types::{page_router, BLOG_CONTENT_SECTION, BLOG_FALLBACK_SECTION};

/// Page-wide state: the section router plus the transient bits that hang
/// off it. Constructed once at the root and shared through context.
#[derive(Clone, Copy)]
pub struct SiteState {
    pub router: Signal<SectionRouter>,
    /// Pending transient notice, shown by the toast until it auto-dismisses.
    pub notice: Signal<Option<String>>,
    /// Markup of the currently spliced blog post.
    pub post_html: Signal<Option<String>>,
}

pub fn use_site_state() -> SiteState {
    let router = use_signal(page_router);
    let notice = use_signal(|| None);
    let post_html = use_signal(|| None);

    let state = SiteState {
        router,
        notice,
        post_html,
    };
    use_context_provider(|| state);
    state
}

impl SiteState {
    /// Nav control click: activate the section and mirror it into the
    /// address bar.
    pub fn navigate(&mut self, id: &str) {
        let effect = self.router.write().on_navigate(id);
        self.apply(effect);
    }

    /// Fragment changed behind our back (back/forward, manual edit, or a
    /// plain `#blog/...` link).
    pub fn route_changed(&mut self, fragment: &str) {
        let effect = self.router.write().on_route_change(fragment);
        self.apply(effect);
    }

    /// Dispatch the fragment the page was opened with.
    pub fn initial_route(&mut self, fragment: &str) {
        let effect = self.router.write().on_load(fragment);
        self.apply(effect);
    }

    fn apply(&mut self, effect: RouteEffect) {
        match effect {
            RouteEffect::None => {}
            RouteEffect::WriteRoute(fragment) => {
                interop::write_fragment(&fragment);
                eval("window.scrollTo({ top: 0, behavior: 'smooth' });");
            }
            RouteEffect::FetchBlogPost(slug) => {
                let mut state = *self;
                spawn(async move {
                    state.load_post(&slug).await;
                });
            }
        }
    }

    async fn load_post(&mut self, slug: &str) {
        match BlogClient::from_window().fetch_post(slug).await {
            Ok(html) => {
                self.post_html.set(Some(html));
                self.router.write().activate(BLOG_CONTENT_SECTION);
            }
            Err(err) => {
                web_sys::console::warn_1(
                    &format!("blog post '{slug}' failed to load: {err}").into(),
                );
                self.notice
                    .set(Some("Couldn't load that post. Please try again later.".to_string()));
                self.router.write().activate(BLOG_FALLBACK_SECTION);
            }
        }
    }
}
