//! Client for lazily loaded blog post fragments
//!
//! Posts live as standalone HTML documents next to the page. The client
//! fetches one, pulls the post body element out of it, and hands its inner
//! markup back for splicing into the blog container.

use crate::types::POST_FRAGMENT_ID;

/// Fetches blog post documents relative to a base URL.
pub struct BlogClient {
    base_url: String,
    client: reqwest::Client,
}

impl BlogClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::Client::new(),
        }
    }

    /// Client rooted at the page's own origin.
    pub fn from_window() -> Self {
        let origin = web_sys::window()
            .and_then(|w| w.location().origin().ok())
            .unwrap_or_default();
        Self::new(origin)
    }

    pub fn post_url(&self, slug: &str) -> String {
        format!("{}/posts/{}.html", self.base_url.trim_end_matches('/'), slug)
    }

    /// Fetch the post named by `slug` and return its body markup.
    pub async fn fetch_post(&self, slug: &str) -> Result<String, BlogError> {
        let response = self.client.get(self.post_url(slug)).send().await?;

        if !response.status().is_success() {
            return Err(BlogError::Status(response.status().as_u16()));
        }

        let document = response.text().await?;
        extract_post_fragment(&document)
            .ok_or_else(|| BlogError::MissingFragment(slug.to_string()))
    }
}

/// Inner markup of the post body element, if the document has one.
pub fn extract_post_fragment(document: &str) -> Option<String> {
    let parser = web_sys::DomParser::new().ok()?;
    let parsed = parser
        .parse_from_string(document, web_sys::SupportedType::TextHtml)
        .ok()?;
    let body = parsed.get_element_by_id(POST_FRAGMENT_ID)?;
    Some(body.inner_html())
}

#[derive(Debug, thiserror::Error)]
pub enum BlogError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Post request returned status {0}")]
    Status(u16),
    #[error("Post document for '{0}' has no post body element")]
    MissingFragment(String),
}
