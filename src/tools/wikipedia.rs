//! Wikipedia summary lookup.
//!
//! Tries a direct title match against the REST summary endpoint first,
//! then falls back to a full-text search and retries the summary on the
//! top hit. Both misses yield a tagged "not found" string.

use crate::tools::registry::Tool;
use crate::types::ToolName;
use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;

const WIKI_TIMEOUT: Duration = Duration::from_secs(10);
const DEFAULT_API_BASE: &str = "https://en.wikipedia.org";

/// Encyclopedic summary lookup.
pub struct WikipediaTool {
    http: reqwest::Client,
    api_base: String,
}

impl Default for WikipediaTool {
    fn default() -> Self {
        Self::new()
    }
}

impl WikipediaTool {
    /// Tool against the live English Wikipedia.
    pub fn new() -> Self {
        Self::with_api_base(DEFAULT_API_BASE)
    }

    /// Tool against an alternate host, for tests.
    pub fn with_api_base(api_base: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_base: api_base.into().trim_end_matches('/').to_string(),
        }
    }

    /// Fetch the REST summary for a title slug, formatted for display.
    async fn summary(&self, slug: &str) -> Result<Option<String>, String> {
        let url = format!("{}/api/rest_v1/page/summary/{}", self.api_base, slug);
        let data: Value = self
            .http
            .get(url)
            .timeout(WIKI_TIMEOUT)
            .send()
            .await
            .map_err(|e| e.to_string())?
            .json()
            .await
            .map_err(|e| e.to_string())?;

        Ok(format_summary(&data))
    }

    /// Full-text search fallback; returns the top hit's title, if any.
    async fn search_top_title(&self, query: &str) -> Result<Option<String>, String> {
        let url = format!("{}/w/api.php", self.api_base);
        let data: Value = self
            .http
            .get(url)
            .query(&[
                ("action", "query"),
                ("format", "json"),
                ("list", "search"),
                ("srsearch", query),
            ])
            .timeout(WIKI_TIMEOUT)
            .send()
            .await
            .map_err(|e| e.to_string())?
            .json()
            .await
            .map_err(|e| e.to_string())?;

        Ok(data["query"]["search"]
            .get(0)
            .and_then(|hit| hit["title"].as_str())
            .map(String::from))
    }

    async fn lookup(&self, query: &str) -> Result<Option<String>, String> {
        let slug = query.trim().replace(' ', "_");
        if let Some(text) = self.summary(&slug).await? {
            return Ok(Some(text));
        }

        if let Some(title) = self.search_top_title(query).await? {
            return self.summary(&title.replace(' ', "_")).await;
        }

        Ok(None)
    }
}

#[async_trait]
impl Tool for WikipediaTool {
    fn name(&self) -> ToolName {
        ToolName::Wikipedia
    }

    async fn invoke(&self, query: &str) -> String {
        match self.lookup(query).await {
            Ok(Some(text)) => text,
            Ok(None) => format!(
                "[Wikipedia] No article found for '{}'. Try rephrasing or a more general topic.",
                query.trim()
            ),
            Err(e) => {
                tracing::warn!(error = %e, "Wikipedia lookup failed");
                format!("[Wikipedia] Error: {}", e)
            }
        }
    }
}

fn format_summary(data: &Value) -> Option<String> {
    let extract = data["extract"].as_str().filter(|s| !s.is_empty())?;
    let title = data["title"].as_str().unwrap_or_default();
    let page_url = data["content_urls"]["desktop"]["page"]
        .as_str()
        .unwrap_or_default();

    Some(format!(
        "**Wikipedia Summary for [{}]({})**\n\n{}",
        title, page_url, extract
    ))
}
