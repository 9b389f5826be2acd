//! Testing utilities: mock transport and completion model.
//!
//! Both record every call so tests can assert on ordering and short-circuits
//! without touching the network.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::error::{Error, Result};
use crate::llm::CompletionModel;
use crate::transport::Transport;

/// Mock retailer transport with canned bodies keyed by URL.
///
/// Unknown URLs answer with a 404 status error.
///
/// # Example
///
/// ```rust
/// use partselect_tools::testing::MockTransport;
///
/// let transport = MockTransport::new()
///     .with_page("https://www.partselect.com/api/search/?searchterm=PS1", "<html></html>");
/// assert_eq!(transport.call_count(), 0);
/// ```
#[derive(Clone, Default)]
pub struct MockTransport {
    pages: Arc<RwLock<HashMap<String, String>>>,
    calls: Arc<RwLock<Vec<String>>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a canned body for a URL.
    pub fn add_page(&self, url: impl Into<String>, body: impl Into<String>) {
        let mut pages = self.pages.write().unwrap();
        pages.insert(url.into(), body.into());
    }

    /// Builder form of [`MockTransport::add_page`].
    pub fn with_page(self, url: impl Into<String>, body: impl Into<String>) -> Self {
        self.add_page(url, body);
        self
    }

    /// URLs requested so far, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.read().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.read().unwrap().len()
    }

    /// Number of requests whose URL contains `fragment`.
    pub fn calls_matching(&self, fragment: &str) -> usize {
        self.calls
            .read()
            .unwrap()
            .iter()
            .filter(|url| url.contains(fragment))
            .count()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn get(&self, url: &str) -> Result<String> {
        self.calls.write().unwrap().push(url.to_string());
        self.pages
            .read()
            .unwrap()
            .get(url)
            .cloned()
            .ok_or_else(|| Error::Status {
                status: 404,
                url: url.to_string(),
            })
    }
}

/// Record of a call made to [`MockCompletion`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionCall {
    pub system: String,
    pub user: String,
}

/// Mock completion model.
///
/// Answers with a canned reply per user message, falling back to a default.
/// With neither configured it fails like an unreachable API.
#[derive(Clone, Default)]
pub struct MockCompletion {
    replies: Arc<RwLock<HashMap<String, String>>>,
    default_reply: Option<String>,
    calls: Arc<RwLock<Vec<CompletionCall>>>,
}

impl MockCompletion {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reply to every message with `reply`.
    pub fn replying(reply: impl Into<String>) -> Self {
        Self {
            default_reply: Some(reply.into()),
            ..Default::default()
        }
    }

    /// Reply with `reply` when the user message equals `user`.
    pub fn with_reply(self, user: impl Into<String>, reply: impl Into<String>) -> Self {
        self.replies.write().unwrap().insert(user.into(), reply.into());
        self
    }

    pub fn calls(&self) -> Vec<CompletionCall> {
        self.calls.read().unwrap().clone()
    }
}

#[async_trait]
impl CompletionModel for MockCompletion {
    async fn complete(&self, system: &str, user: &str) -> Result<String> {
        self.calls.write().unwrap().push(CompletionCall {
            system: system.to_string(),
            user: user.to_string(),
        });

        self.replies
            .read()
            .unwrap()
            .get(user)
            .cloned()
            .or_else(|| self.default_reply.clone())
            .ok_or_else(|| Error::Completion("mock completion has no reply configured".into()))
    }
}

/// HTML for a search landing page with the given container attributes.
pub mod fixtures {
    /// Page whose primary container has `data-page-type`.
    pub fn page_of_type(page_type: &str) -> String {
        format!(
            r#"<html><body><div role="main" data-page-type="{page_type}"><p>content</p></div></body></html>"#
        )
    }

    pub fn part_page() -> String {
        page_of_type("PartDetail")
    }

    /// Model page with a title and first subheading.
    pub fn model_page(title: &str, subheading: &str) -> String {
        format!(
            r#"<html><body>
<div role="main" data-page-type="MegaModel">
  <h1 class="title-main mt-3 mb-4">{title}</h1>
  <h2>{subheading}</h2>
</div>
</body></html>"#
        )
    }

    /// Container present but without `data-page-type`.
    pub fn untyped_page() -> String {
        r#"<html><body><div role="main"><p>We couldn't find a match</p></div></body></html>"#
            .to_string()
    }

    /// No primary container at all.
    pub fn bare_page() -> String {
        "<html><body><p>Service unavailable</p></body></html>".to_string()
    }
}
