//! PDF and web page text extraction tools.
//!
//! Both tools scan the query's whitespace-delimited tokens for the first
//! URL-shaped one (`.pdf` suffix or `http` prefix), fetch it, and return
//! raw extracted text. The executor routes that text through the
//! summarizer, so these are the only tools whose output is not meant for
//! direct display.

use crate::tools::registry::Tool;
use crate::types::ToolName;
use async_trait::async_trait;
use std::time::Duration;

const FETCH_TIMEOUT: Duration = Duration::from_secs(15);

/// First token in the query satisfying the predicate.
fn find_url<F: Fn(&str) -> bool>(query: &str, predicate: F) -> Option<&str> {
    query.split_whitespace().find(|token| predicate(token))
}

// ============= PDF extraction =============

/// Text extraction from a PDF linked in the query.
pub struct PdfParseTool {
    http: reqwest::Client,
}

impl Default for PdfParseTool {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfParseTool {
    /// Tool with its own HTTP client.
    pub fn new() -> Self {
        Self {
            http: reqwest::Client::new(),
        }
    }

    async fn fetch_pdf_text(&self, url: &str) -> Result<String, String> {
        let bytes = self
            .http
            .get(url)
            .timeout(FETCH_TIMEOUT)
            .send()
            .await
            .map_err(|e| e.to_string())?
            .error_for_status()
            .map_err(|e| e.to_string())?
            .bytes()
            .await
            .map_err(|e| e.to_string())?;

        extract_pdf_text(&bytes)
    }
}

#[async_trait]
impl Tool for PdfParseTool {
    fn name(&self) -> ToolName {
        ToolName::PdfParse
    }

    async fn invoke(&self, query: &str) -> String {
        let Some(url) = find_url(query, |t| t.ends_with(".pdf")) else {
            return "[PDF] No PDF URL found in the query.".to_string();
        };

        tracing::debug!(url, "PDF extraction request");
        match self.fetch_pdf_text(url).await {
            Ok(text) => format!("[PDF Extract]\n{}", text),
            Err(e) => {
                tracing::warn!(url, error = %e, "PDF extraction failed");
                format!("[PDF] Error extracting '{}': {}", url, e)
            }
        }
    }
}

fn extract_pdf_text(bytes: &[u8]) -> Result<String, String> {
    let doc = lopdf::Document::load_mem(bytes).map_err(|e| format!("failed to load PDF: {}", e))?;

    let page_numbers: Vec<u32> = doc.get_pages().keys().copied().collect();
    let text = doc
        .extract_text(&page_numbers)
        .map_err(|e| format!("failed to extract text: {}", e))?;

    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err("no text content in PDF".to_string());
    }
    Ok(trimmed.to_string())
}

// ============= Web extraction =============

/// Text extraction from a web page linked in the query.
pub struct WebFetchTool {
    http: reqwest::Client,
}

impl Default for WebFetchTool {
    fn default() -> Self {
        Self::new()
    }
}

impl WebFetchTool {
    /// Tool with its own HTTP client.
    pub fn new() -> Self {
        Self {
            http: reqwest::Client::new(),
        }
    }

    async fn fetch_web_text(&self, url: &str) -> Result<String, String> {
        let html = self
            .http
            .get(url)
            .timeout(FETCH_TIMEOUT)
            .send()
            .await
            .map_err(|e| e.to_string())?
            .error_for_status()
            .map_err(|e| e.to_string())?
            .text()
            .await
            .map_err(|e| e.to_string())?;

        extract_web_text(&html)
    }
}

#[async_trait]
impl Tool for WebFetchTool {
    fn name(&self) -> ToolName {
        ToolName::WebFetch
    }

    async fn invoke(&self, query: &str) -> String {
        let Some(url) = find_url(query, |t| t.starts_with("http")) else {
            return "[Web] No URL found in the query.".to_string();
        };

        tracing::debug!(url, "web extraction request");
        match self.fetch_web_text(url).await {
            Ok(text) => format!("[Web Extract]\n{}", text),
            Err(e) => {
                tracing::warn!(url, error = %e, "web extraction failed");
                format!("[Web] Error extracting '{}': {}", url, e)
            }
        }
    }
}

/// Pull readable text out of an HTML document, content elements first.
fn extract_web_text(html: &str) -> Result<String, String> {
    let document = scraper::Html::parse_document(html);
    let selector = scraper::Selector::parse("p, h1, h2, h3, li")
        .map_err(|_| "invalid content selector".to_string())?;

    let mut blocks = Vec::new();
    for element in document.select(&selector) {
        let block = element.text().collect::<Vec<_>>().join(" ");
        let block = block.split_whitespace().collect::<Vec<_>>().join(" ");
        if !block.is_empty() {
            blocks.push(block);
        }
    }

    if blocks.is_empty() {
        // No content elements; fall back to the whole document's text.
        let fallback = document
            .root_element()
            .text()
            .collect::<Vec<_>>()
            .join(" ")
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ");
        if fallback.is_empty() {
            return Err("no text content in page".to_string());
        }
        return Ok(fallback);
    }

    Ok(blocks.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_url_pdf_suffix() {
        assert_eq!(
            find_url("read https://example.com/paper.pdf now", |t| t
                .ends_with(".pdf")),
            Some("https://example.com/paper.pdf")
        );
        assert_eq!(find_url("no links here", |t| t.ends_with(".pdf")), None);
    }

    #[test]
    fn test_find_url_takes_first_http_token() {
        assert_eq!(
            find_url("compare http://a.com and https://b.com", |t| t
                .starts_with("http")),
            Some("http://a.com")
        );
    }

    #[test]
    fn test_extract_web_text_prefers_content_elements() {
        let html = r#"<html><head><title>t</title><script>var x = 1;</script></head>
            <body><h1>Heading</h1><p>First   paragraph.</p><li>item</li></body></html>"#;
        let text = extract_web_text(html).unwrap();
        assert_eq!(text, "Heading\nFirst paragraph.\nitem");
    }

    #[test]
    fn test_extract_web_text_empty_page() {
        assert!(extract_web_text("<html><body></body></html>").is_err());
    }

    #[test]
    fn test_extract_pdf_text_rejects_garbage() {
        assert!(extract_pdf_text(b"not a pdf at all").is_err());
    }
}
