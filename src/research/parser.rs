//! Plan extraction from raw model text.
//!
//! Planning models are unreliable formatters: fenced code blocks, language
//! tags, and prose around the JSON are all common. Extraction is lenient on
//! that noise but strict on the final shape, because a malformed plan
//! cannot be safely partially executed.

use crate::types::{AppError, PlannedCall, Result, ToolPlan};

/// Parse and validate a tool plan from raw planner output.
///
/// Any failure is request-terminating and carries the offending raw text,
/// so the caller can surface it to the user verbatim.
pub fn parse_plan(raw: &str) -> Result<ToolPlan> {
    let span = extract_json_span(raw);

    let value: serde_json::Value = serde_json::from_str(span).map_err(|e| AppError::PlanParse {
        reason: format!("not valid JSON: {}", e),
        raw: raw.to_string(),
    })?;

    let items = value.as_array().ok_or_else(|| AppError::PlanParse {
        reason: "plan must be a JSON array".to_string(),
        raw: raw.to_string(),
    })?;

    if items.is_empty() {
        return Err(AppError::PlanParse {
            reason: "plan is empty".to_string(),
            raw: raw.to_string(),
        });
    }

    let mut plan = Vec::with_capacity(items.len());
    for item in items {
        let entry = item.as_object().ok_or_else(|| AppError::PlanParse {
            reason: "plan entries must be objects".to_string(),
            raw: raw.to_string(),
        })?;

        let tool = entry
            .get("tool")
            .and_then(|v| v.as_str())
            .filter(|s| !s.trim().is_empty())
            .ok_or_else(|| AppError::PlanParse {
                reason: "plan entry missing 'tool' field".to_string(),
                raw: raw.to_string(),
            })?;

        let prompt = entry
            .get("prompt")
            .and_then(|v| v.as_str())
            .unwrap_or_default();

        plan.push(PlannedCall {
            tool: tool.trim().to_string(),
            prompt: prompt.trim().to_string(),
        });
    }

    Ok(plan)
}

/// Strip formatting noise and locate the JSON-bearing span.
fn extract_json_span(raw: &str) -> &str {
    let mut text = raw.trim();

    // Fenced code block, optionally with a language tag after the opener.
    if let Some(stripped) = text.strip_prefix("```") {
        text = stripped;
        if let Some(end) = text.rfind("```") {
            text = &text[..end];
        }
        // Drop a language tag on the opening fence line.
        if let Some(newline) = text.find('\n') {
            let first_line = text[..newline].trim();
            if !first_line.is_empty() && first_line.chars().all(|c| c.is_ascii_alphanumeric()) {
                text = &text[newline + 1..];
            }
        }
        text = text.trim();
    }

    // Bare leading language tag without a fence.
    if let Some(stripped) = text.strip_prefix("json") {
        text = stripped.trim_start();
    }

    // First bracketed or braced span, matched greedily across newlines.
    for (open, close) in [('[', ']'), ('{', '}')] {
        if let Some(start) = text.find(open) {
            if let Some(end) = text.rfind(close) {
                if end > start {
                    return &text[start..=end];
                }
            }
        }
    }

    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const PLAN: &str = r#"[{"tool": "wikipedia", "prompt": "Rust language"}]"#;

    #[rstest]
    #[case::plain(PLAN.to_string())]
    #[case::fenced(format!("```\n{}\n```", PLAN))]
    #[case::fenced_with_tag(format!("```json\n{}\n```", PLAN))]
    #[case::bare_tag(format!("json\n{}", PLAN))]
    #[case::leading_prose(format!("Here is the plan:\n{}", PLAN))]
    #[case::trailing_prose(format!("{}\nLet me know if that works.", PLAN))]
    fn test_parse_recovers_embedded_plan(#[case] input: String) {
        let plan = parse_plan(&input).unwrap();
        assert_eq!(plan.len(), 1);
        assert_eq!(plan[0].tool, "wikipedia");
        assert_eq!(plan[0].prompt, "Rust language");
    }

    #[test]
    fn test_parse_multi_entry_order_preserved() {
        let raw = r#"[
            {"tool": "arxiv", "prompt": "2310.01234"},
            {"tool": "opendeepsearch", "prompt": "reviews"}
        ]"#;
        let plan = parse_plan(raw).unwrap();
        assert_eq!(plan.len(), 2);
        assert_eq!(plan[0].tool, "arxiv");
        assert_eq!(plan[1].tool, "opendeepsearch");
    }

    #[test]
    fn test_parse_unknown_tool_name_is_not_a_parse_error() {
        let plan = parse_plan(r#"[{"tool": "google", "prompt": "x"}]"#).unwrap();
        assert_eq!(plan[0].tool, "google");
    }

    #[test]
    fn test_parse_missing_prompt_defaults_empty() {
        let plan = parse_plan(r#"[{"tool": "wikipedia"}]"#).unwrap();
        assert!(plan[0].prompt.is_empty());
    }

    #[test]
    fn test_parse_plain_prose_fails_with_raw_attached() {
        let raw = "I think Wikipedia would be the best source for this.";
        match parse_plan(raw) {
            Err(AppError::PlanParse { raw: attached, .. }) => assert_eq!(attached, raw),
            other => panic!("expected PlanParse error, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_parse_empty_array_fails() {
        assert!(parse_plan("[]").is_err());
    }

    #[test]
    fn test_parse_object_instead_of_array_fails() {
        assert!(parse_plan(r#"{"tool": "wikipedia"}"#).is_err());
    }

    #[test]
    fn test_parse_entry_without_tool_key_fails() {
        assert!(parse_plan(r#"[{"prompt": "no tool here"}]"#).is_err());
    }

    #[test]
    fn test_parse_entry_with_blank_tool_fails() {
        assert!(parse_plan(r#"[{"tool": "  "}]"#).is_err());
    }
}
