// src/llm/gemini.rs

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::Settings;
use crate::document::{Document, Highlight};
use crate::llm::error::LlmError;
use crate::llm::json;
use crate::llm::{DraftRequest, LetterAi};
use crate::types::Segment;

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
const DEFAULT_MODEL: &str = "gemini-3-flash-preview";
const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Substituted into the draft instruction when a segment's keyword input
/// is left empty.
pub fn keyword_fallback(segment: Segment) -> &'static str {
    match segment {
        Segment::BuildingMaterials => "건재부문 특이사항 없음",
        Segment::Coatings => "도료부문 특이사항 없음",
        Segment::Silicone => "실리콘부문 특이사항 없음",
    }
}

#[derive(Debug, Clone)]
pub struct GeminiClient {
    http: reqwest::blocking::Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl GeminiClient {
    pub fn from_settings(settings: &Settings) -> Result<Self, LlmError> {
        let api_key = settings
            .gemini_api_key
            .clone()
            .ok_or_else(|| LlmError::Transport("GEMINI_API_KEY is not set".to_string()))?;
        let base_url = settings
            .gemini_base_url
            .clone()
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let model = settings
            .gemini_model
            .clone()
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());
        let timeout_secs = settings.gemini_timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS);

        let http = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| LlmError::Transport(format!("failed to build http client: {e}")))?;

        Ok(Self {
            http,
            api_key,
            base_url,
            model,
        })
    }

    fn generate_content(&self, instruction: String) -> Result<String, LlmError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        );

        let req = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part { text: instruction }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json",
            },
        };

        let res = self
            .http
            .post(url)
            .header("x-goog-api-key", &self.api_key)
            .json(&req)
            .send()
            .map_err(|e| LlmError::Transport(e.to_string()))?;

        let status = res.status();
        let text = res
            .text()
            .map_err(|e| LlmError::Transport(format!("failed to read response body: {e}")))?;
        if !status.is_success() {
            return Err(LlmError::Http {
                status: status.as_u16(),
                body: text,
            });
        }

        let parsed = serde_json::from_str::<GenerateContentResponse>(&text)
            .map_err(|e| LlmError::UnexpectedShape(format!("response envelope: {e}")))?;

        let out = parsed.response_text();
        if out.trim().is_empty() {
            return Err(LlmError::EmptyResponse);
        }
        Ok(out)
    }

    fn translate_instruction(document_json: &str) -> String {
        let rules = [
            "Translate the following IR Letter JSON data from Korean to English.",
            "Maintain professional financial and Investor Relations terminology.",
            "Keep the structure of 'performanceHistory' and 'indicatorHistory' intact.",
            "Return ONLY the raw JSON object.",
        ]
        .join("\n");

        format!("{rules}\nData: {document_json}")
    }

    fn draft_instruction(request: &DraftRequest) -> String {
        let keyword_line = |segment: Segment| {
            let raw = request.keywords.get(segment).trim();
            let text = if raw.is_empty() {
                keyword_fallback(segment)
            } else {
                raw
            };
            format!("- {}: {}", segment.label(), text)
        };

        [
            "당신은 (주)KCC IR 담당자를 돕는 재무 커뮤니케이션 어시스턴트입니다.".to_string(),
            format!(
                "아래 사업부별 키워드를 바탕으로 '{}' 실적 하이라이트 카드 초안을 작성하세요.",
                request.quarter_title
            ),
            "사업부별 키워드:".to_string(),
            keyword_line(Segment::BuildingMaterials),
            keyword_line(Segment::Coatings),
            keyword_line(Segment::Silicone),
            "Return ONLY one raw JSON object, no surrounding prose, of the shape:".to_string(),
            "{\"title\": \"...\", \"subtitle\": \"...\", \"details\": [\"...\"]}".to_string(),
            "details에는 사업부별로 한 줄씩, 전문적인 IR 어조의 한국어 문장을 담으세요.".to_string(),
        ]
        .join("\n")
    }
}

impl LetterAi for GeminiClient {
    fn translate_letter(&self, document: &Document) -> Result<Document, LlmError> {
        let document_json = serde_json::to_string(document)
            .map_err(|e| LlmError::Transport(format!("request encode: {e}")))?;

        let text = self.generate_content(Self::translate_instruction(&document_json))?;
        json::parse_document(&text)
    }

    fn draft_highlight(&self, request: &DraftRequest) -> Result<Highlight, LlmError> {
        let text = self.generate_content(Self::draft_instruction(request))?;
        json::parse_highlight_draft(&text)
    }
}

#[derive(Debug, Clone, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Debug, Clone, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Part {
    #[serde(default)]
    text: String,
}

#[derive(Debug, Clone, Serialize)]
struct GenerationConfig {
    #[serde(rename = "responseMimeType")]
    response_mime_type: &'static str,
}

#[derive(Debug, Clone, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Clone, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
}

#[derive(Debug, Clone, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

impl GenerateContentResponse {
    fn response_text(&self) -> String {
        let mut out = String::new();
        for candidate in &self.candidates {
            let Some(content) = &candidate.content else {
                continue;
            };
            for part in &content.parts {
                if !out.is_empty() {
                    out.push('\n');
                }
                out.push_str(&part.text);
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SegmentKeywords;

    #[test]
    fn draft_instruction_substitutes_all_fallbacks_when_keywords_empty() {
        let request = DraftRequest {
            quarter_title: "2025년 3분기".to_string(),
            keywords: SegmentKeywords::default(),
        };

        let instruction = GeminiClient::draft_instruction(&request);
        for segment in Segment::ALL {
            assert!(
                instruction.contains(keyword_fallback(segment)),
                "missing fallback for {:?}",
                segment
            );
        }
        assert!(instruction.contains("2025년 3분기"));
    }

    #[test]
    fn draft_instruction_keeps_given_keywords() {
        let mut keywords = SegmentKeywords::default();
        keywords.set(Segment::Coatings, "선박용 도료 수주 호조".to_string());

        let request = DraftRequest {
            quarter_title: "2025년 3분기".to_string(),
            keywords,
        };

        let instruction = GeminiClient::draft_instruction(&request);
        assert!(instruction.contains("선박용 도료 수주 호조"));
        assert!(!instruction.contains(keyword_fallback(Segment::Coatings)));
        assert!(instruction.contains(keyword_fallback(Segment::BuildingMaterials)));
        assert!(instruction.contains(keyword_fallback(Segment::Silicone)));
    }

    #[test]
    fn translate_instruction_embeds_document_and_rules() {
        let instruction = GeminiClient::translate_instruction("{\"date\":\"d\"}");
        assert!(instruction.contains("Korean to English"));
        assert!(instruction.contains("'performanceHistory' and 'indicatorHistory'"));
        assert!(instruction.contains("Return ONLY the raw JSON object."));
        assert!(instruction.ends_with("Data: {\"date\":\"d\"}"));
    }

    #[test]
    fn response_text_joins_candidate_parts() {
        let res = GenerateContentResponse {
            candidates: vec![Candidate {
                content: Some(CandidateContent {
                    parts: vec![
                        Part {
                            text: "{\"a\":".to_string(),
                        },
                        Part {
                            text: "1}".to_string(),
                        },
                    ],
                }),
            }],
        };
        assert_eq!(res.response_text(), "{\"a\":\n1}");
    }

    #[test]
    fn response_without_candidates_reads_as_empty() {
        let res: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(res.response_text(), "");
    }
}
