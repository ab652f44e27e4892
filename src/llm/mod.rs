// src/llm/mod.rs

pub mod error;
pub mod gemini;
pub mod json;

use crate::document::{Document, Highlight};
use crate::types::SegmentKeywords;

use error::LlmError;

#[derive(Debug, Clone)]
pub struct DraftRequest {
    pub quarter_title: String,
    pub keywords: SegmentKeywords,
}

/// The outbound AI boundary. Production uses [`gemini::GeminiClient`];
/// tests substitute a scripted double.
pub trait LetterAi: Send + Sync {
    fn translate_letter(&self, document: &Document) -> Result<Document, LlmError>;

    fn draft_highlight(&self, request: &DraftRequest) -> Result<Highlight, LlmError>;
}
