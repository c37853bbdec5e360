//! HTTP tool behavior against a local wiremock server.

use atlas::tools::arxiv::ArxivTool;
use atlas::tools::search::OpenDeepSearchTool;
use atlas::tools::wikipedia::WikipediaTool;
use atlas::tools::Tool;
use atlas::utils::config::SearchConfig;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_wikipedia_direct_title_hit() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/rest_v1/page/summary/Rust_(programming_language)"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "title": "Rust (programming language)",
            "extract": "Rust is a systems programming language.",
            "content_urls": {"desktop": {"page": "https://en.wikipedia.org/wiki/Rust"}}
        })))
        .mount(&server)
        .await;

    let tool = WikipediaTool::with_api_base(server.uri());
    let outcome = tool.invoke("Rust (programming language)").await;

    assert!(outcome.starts_with("**Wikipedia Summary for [Rust (programming language)]"));
    assert!(outcome.contains("Rust is a systems programming language."));
}

#[tokio::test]
async fn test_wikipedia_falls_back_to_search() {
    let server = MockServer::start().await;

    // Direct slug lookup misses.
    Mock::given(method("GET"))
        .and(path("/api/rest_v1/page/summary/rust_lang"))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_json(serde_json::json!({"title": "Not found", "type": "not_found"})),
        )
        .mount(&server)
        .await;

    // Full-text search produces a top hit.
    Mock::given(method("GET"))
        .and(path("/w/api.php"))
        .and(query_param("list", "search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "query": {"search": [{"title": "Rust (programming language)"}]}
        })))
        .mount(&server)
        .await;

    // Retried summary on the top hit succeeds.
    Mock::given(method("GET"))
        .and(path("/api/rest_v1/page/summary/Rust_(programming_language)"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "title": "Rust (programming language)",
            "extract": "Rust is a systems programming language.",
            "content_urls": {"desktop": {"page": "https://en.wikipedia.org/wiki/Rust"}}
        })))
        .mount(&server)
        .await;

    let tool = WikipediaTool::with_api_base(server.uri());
    let outcome = tool.invoke("rust lang").await;

    assert!(outcome.contains("Rust is a systems programming language."));
}

#[tokio::test]
async fn test_wikipedia_not_found_after_both_steps() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/rest_v1/page/summary/zzzz"))
        .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({})))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/w/api.php"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "query": {"search": []}
        })))
        .mount(&server)
        .await;

    let tool = WikipediaTool::with_api_base(server.uri());
    let outcome = tool.invoke("zzzz").await;

    assert!(outcome.starts_with("[Wikipedia] No article found for 'zzzz'"));
}

#[tokio::test]
async fn test_opendeepsearch_flattens_result_payload() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "result": "GPU prices fell 8% this quarter."
        })))
        .mount(&server)
        .await;

    let config = SearchConfig {
        api_url: Some(format!("{}/search", server.uri())),
        api_key: Some("k1".to_string()),
        serper_key: Some("k2".to_string()),
        openrouter_key: Some("k3".to_string()),
    };
    let tool = OpenDeepSearchTool::new(config);
    let outcome = tool.invoke("latest GPU price trends").await;

    assert_eq!(
        outcome,
        "[OpenDeepSearch Used]\nGPU prices fell 8% this quarter."
    );
}

#[tokio::test]
async fn test_opendeepsearch_server_error_is_tagged() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let config = SearchConfig {
        api_url: Some(format!("{}/search", server.uri())),
        api_key: Some("k1".to_string()),
        serper_key: Some("k2".to_string()),
        openrouter_key: Some("k3".to_string()),
    };
    let tool = OpenDeepSearchTool::new(config);
    let outcome = tool.invoke("query").await;

    assert!(outcome.starts_with("[OpenDeepSearch] Error:"));
}

#[tokio::test]
async fn test_arxiv_abstract_lookup() {
    let feed = r#"<?xml version="1.0" encoding="UTF-8"?>
<feed xmlns="http://www.w3.org/2005/Atom">
  <entry>
    <id>http://arxiv.org/abs/2310.01234v1</id>
    <title>Attention Is Not All You Need</title>
    <summary>We revisit the role of attention in deep sequence models.</summary>
  </entry>
</feed>"#;

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/query"))
        .and(query_param("id_list", "2310.01234"))
        .respond_with(ResponseTemplate::new(200).set_body_string(feed))
        .mount(&server)
        .await;

    let tool = ArxivTool::with_api_base(server.uri());
    let outcome = tool.invoke("2310.01234").await;

    assert!(outcome.starts_with("[arXiv]\nTitle: Attention Is Not All You Need"));
    assert!(outcome.contains("Abstract: We revisit the role of attention"));
}

#[tokio::test]
async fn test_arxiv_without_identifier_short_circuits() {
    // No server: the tool must not attempt any network call.
    let tool = ArxivTool::with_api_base("http://127.0.0.1:9");
    let outcome = tool.invoke("explain transformers to me").await;

    assert_eq!(outcome, "[arXiv] No valid arXiv identifier found in the query.");
}
