//! arXiv abstract lookup.
//!
//! Accepts either a bare identifier (`2310.01234`, optionally versioned)
//! or a query containing an `arxiv.org/abs/` URL, fetches the Atom entry
//! from the export API, and returns the title and abstract.

use crate::tools::registry::Tool;
use crate::types::ToolName;
use async_trait::async_trait;
use std::time::Duration;

const ARXIV_TIMEOUT: Duration = Duration::from_secs(15);
const DEFAULT_API_BASE: &str = "http://export.arxiv.org";

/// Paper abstract lookup against the arXiv export API.
pub struct ArxivTool {
    http: reqwest::Client,
    api_base: String,
}

impl Default for ArxivTool {
    fn default() -> Self {
        Self::new()
    }
}

impl ArxivTool {
    /// Tool against the live export API.
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

    async fn fetch_abstract(&self, id: &str) -> Result<Option<String>, String> {
        let url = format!("{}/api/query", self.api_base);
        let xml = self
            .http
            .get(url)
            .query(&[("id_list", id)])
            .timeout(ARXIV_TIMEOUT)
            .send()
            .await
            .map_err(|e| e.to_string())?
            .error_for_status()
            .map_err(|e| e.to_string())?
            .text()
            .await
            .map_err(|e| e.to_string())?;

        Ok(parse_entry(&xml))
    }
}

#[async_trait]
impl Tool for ArxivTool {
    fn name(&self) -> ToolName {
        ToolName::Arxiv
    }

    async fn invoke(&self, query: &str) -> String {
        let Some(id) = extract_arxiv_id(query) else {
            return "[arXiv] No valid arXiv identifier found in the query.".to_string();
        };

        tracing::debug!(id, "arXiv abstract request");
        match self.fetch_abstract(&id).await {
            Ok(Some(text)) => text,
            Ok(None) => format!("[arXiv] No abstract found for identifier '{}'.", id),
            Err(e) => {
                tracing::warn!(error = %e, "arXiv fetch failed");
                format!("[arXiv] Error: {}", e)
            }
        }
    }
}

/// Pull an arXiv identifier out of a free-text query.
///
/// An `arxiv.org/abs/` URL wins; otherwise the first whitespace token
/// shaped like a modern identifier (`NNNN.NNNNN`, optional `vN`) is taken.
pub fn extract_arxiv_id(query: &str) -> Option<String> {
    if let Some(rest) = query.split("arxiv.org/abs/").nth(1) {
        let token = rest
            .split_whitespace()
            .next()
            .unwrap_or_default()
            .trim_end_matches(['/', '.', ',', ')']);
        if !token.is_empty() {
            return Some(token.to_string());
        }
    }

    query
        .split_whitespace()
        .find(|token| looks_like_arxiv_id(token))
        .map(String::from)
}

fn looks_like_arxiv_id(token: &str) -> bool {
    let Some((prefix, rest)) = token.split_once('.') else {
        return false;
    };
    if prefix.len() != 4 || !prefix.chars().all(|c| c.is_ascii_digit()) {
        return false;
    }

    // Optional version suffix: 2310.01234v2
    let digits = match rest.split_once('v') {
        Some((number, version)) => {
            if version.is_empty() || !version.chars().all(|c| c.is_ascii_digit()) {
                return false;
            }
            number
        }
        None => rest,
    };

    (4..=5).contains(&digits.len()) && digits.chars().all(|c| c.is_ascii_digit())
}

/// Parse the first `<entry>` of an Atom response into display text.
fn parse_entry(xml: &str) -> Option<String> {
    let entry = extract_tag_text(xml, "entry")?;
    let title = normalize_whitespace(&extract_tag_text(&entry, "title")?);
    let summary = normalize_whitespace(&extract_tag_text(&entry, "summary")?);

    if title.is_empty() || summary.is_empty() {
        return None;
    }

    Some(format!("[arXiv]\nTitle: {}\n\nAbstract: {}", title, summary))
}

/// Extract the text between `<tag>` and `</tag>`, tolerating attributes
/// on the opening tag.
fn extract_tag_text(xml: &str, tag: &str) -> Option<String> {
    let open = format!("<{}", tag);
    let close = format!("</{}>", tag);

    let start = xml.find(&open)?;
    let body_start = start + xml[start..].find('>')? + 1;
    let end = body_start + xml[body_start..].find(&close)?;

    Some(xml[body_start..end].trim().to_string())
}

fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
