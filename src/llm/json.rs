// src/llm/json.rs

use serde::Deserialize;

use crate::document::{Document, Highlight};
use crate::llm::error::LlmError;

pub const DRAFT_FALLBACK_TITLE: &str = "주요 성과";
pub const DRAFT_FALLBACK_SUBTITLE: &str = "세부 내용 검토 필요";

/// Pulls the JSON payload out of a model reply that may carry Markdown
/// fences or surrounding prose.
pub fn extract_json(text: &str) -> Option<String> {
    let trimmed = text.trim();

    // Strip a Markdown fence first (```json ... ``` or ``` ... ```).
    if let Some(rest) = trimmed.strip_prefix("```") {
        let body = rest.split_once('\n').map(|(_, b)| b).unwrap_or(rest);
        let body = body.rfind("```").map(|end| &body[..end]).unwrap_or(body);
        return Some(body.trim().to_string());
    }

    // Best effort: the widest '{' .. '}' window.
    let start = trimmed.find('{')?;
    let end = trimmed.rfind('}')?;
    if end <= start {
        return None;
    }
    Some(trimmed[start..=end].trim().to_string())
}

/// Strict parse of a whole translated letter. Every field must be present
/// with the right shape; a structurally degraded translation is rejected
/// rather than applied.
pub fn parse_document(text: &str) -> Result<Document, LlmError> {
    let json_str = extract_json(text).unwrap_or_else(|| text.trim().to_string());
    if json_str.is_empty() {
        return Err(LlmError::EmptyResponse);
    }
    serde_json::from_str::<Document>(&json_str).map_err(classify)
}

/// Lenient parse of a drafted highlight card: missing fields fall back to
/// fixed defaults, fields of the wrong type are rejected.
pub fn parse_highlight_draft(text: &str) -> Result<Highlight, LlmError> {
    let json_str = extract_json(text).unwrap_or_else(|| text.trim().to_string());
    if json_str.is_empty() {
        return Err(LlmError::EmptyResponse);
    }
    let dto = serde_json::from_str::<DraftDto>(&json_str).map_err(classify)?;
    Ok(dto.into_highlight())
}

fn classify(e: serde_json::Error) -> LlmError {
    use serde_json::error::Category;
    match e.classify() {
        Category::Data => LlmError::UnexpectedShape(e.to_string()),
        _ => LlmError::MalformedJson(e.to_string()),
    }
}

#[derive(Debug, Clone, Deserialize)]
struct DraftDto {
    title: Option<String>,
    subtitle: Option<String>,
    details: Option<Vec<String>>,
}

impl DraftDto {
    fn into_highlight(self) -> Highlight {
        Highlight {
            title: self
                .title
                .unwrap_or_else(|| DRAFT_FALLBACK_TITLE.to_string()),
            subtitle: self
                .subtitle
                .unwrap_or_else(|| DRAFT_FALLBACK_SUBTITLE.to_string()),
            details: self.details.unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::seed_document;

    #[test]
    fn extract_json_handles_fenced_blocks() {
        let body = "{\"a\":1}";
        let fenced = format!("```json\n{body}\n```\n");
        assert_eq!(extract_json(&fenced), Some(body.to_string()));

        let bare_fence = format!("```\n{body}\n```");
        assert_eq!(extract_json(&bare_fence), Some(body.to_string()));
    }

    #[test]
    fn extract_json_falls_back_to_brace_window() {
        let s = "Here is the data: {\"a\":1} hope it helps";
        assert_eq!(extract_json(s), Some("{\"a\":1}".to_string()));
    }

    #[test]
    fn extract_json_rejects_text_without_object() {
        assert_eq!(extract_json("no json here"), None);
        assert_eq!(extract_json("} backwards {"), None);
    }

    #[test]
    fn parse_document_round_trips_the_seed() {
        let seed = seed_document();
        let json = serde_json::to_string(&seed).unwrap();
        let parsed = parse_document(&json).unwrap();
        assert_eq!(parsed, seed);
    }

    #[test]
    fn parse_document_rejects_prose() {
        match parse_document("oops") {
            Err(LlmError::MalformedJson(_)) => {}
            other => panic!("expected MalformedJson, got {:?}", other),
        }
    }

    #[test]
    fn parse_document_rejects_missing_fields() {
        match parse_document("{\"date\": \"today\"}") {
            Err(LlmError::UnexpectedShape(_)) => {}
            other => panic!("expected UnexpectedShape, got {:?}", other),
        }
    }

    #[test]
    fn parse_document_rejects_empty_text() {
        match parse_document("   ") {
            Err(LlmError::EmptyResponse) => {}
            other => panic!("expected EmptyResponse, got {:?}", other),
        }
    }

    #[test]
    fn draft_missing_fields_fall_back_to_defaults() {
        let draft = parse_highlight_draft("{\"title\":\"X\"}").unwrap();
        assert_eq!(draft.title, "X");
        assert_eq!(draft.subtitle, DRAFT_FALLBACK_SUBTITLE);
        assert!(draft.details.is_empty());
    }

    #[test]
    fn draft_keeps_all_given_fields() {
        let json = "{\"title\":\"t\",\"subtitle\":\"s\",\"details\":[\"a\",\"b\"]}";
        let draft = parse_highlight_draft(json).unwrap();
        assert_eq!(draft.title, "t");
        assert_eq!(draft.subtitle, "s");
        assert_eq!(draft.details, vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn draft_with_wrong_field_type_is_rejected() {
        match parse_highlight_draft("{\"title\":\"X\",\"details\":\"not a list\"}") {
            Err(LlmError::UnexpectedShape(_)) => {}
            other => panic!("expected UnexpectedShape, got {:?}", other),
        }
    }

    #[test]
    fn draft_accepts_fenced_response() {
        let fenced = "```json\n{\"title\":\"T\",\"subtitle\":\"S\",\"details\":[]}\n```";
        let draft = parse_highlight_draft(fenced).unwrap();
        assert_eq!(draft.title, "T");
        assert_eq!(draft.subtitle, "S");
    }
}
