//! Gemini client — the production `CvExtractor`.
//!
//! One opaque request/response unit per extraction: no retry, no streaming,
//! no partial recovery. An empty or unparseable response is a terminal
//! failure for the attempt.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::extraction::prompts::{text_prompt, EXTRACTION_PROMPT};
use crate::extraction::schema::response_schema;
use crate::extraction::{CvExtractor, ExtractError, ExtractionPayload};
use crate::models::profile::ProfileDocument;

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
/// The hosted model used for all extraction calls.
pub const MODEL: &str = "gemini-3-flash-preview";
/// Slightly above zero for more natural summarization in 'About'.
const TEMPERATURE: f64 = 0.2;
/// Thinking budget for deep multi-pass reading of the document.
const THINKING_BUDGET: u32 = 8192;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Part {
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    inline_data: Option<InlineData>,
}

impl Part {
    fn text(text: String) -> Self {
        Part {
            text: Some(text),
            inline_data: None,
        }
    }

    fn inline(mime_type: String, data: String) -> Self {
        Part {
            text: None,
            inline_data: Some(InlineData { mime_type, data }),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    mime_type: String,
    data: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: &'static str,
    response_schema: serde_json::Value,
    temperature: f64,
    thinking_config: ThinkingConfig,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ThinkingConfig {
    thinking_budget: u32,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

impl GenerateContentResponse {
    /// Concatenated text parts of the first candidate, or `None` when the
    /// model produced nothing usable.
    fn text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let joined: String = content
            .parts
            .iter()
            .filter_map(|p| p.text.as_deref())
            .collect();
        if joined.is_empty() {
            None
        } else {
            Some(joined)
        }
    }
}

#[derive(Debug, Deserialize)]
struct GeminiError {
    error: GeminiErrorBody,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorBody {
    message: String,
}

/// Builds the request parts for a payload. The text path carries the
/// instruction and the CV body as one part; the document path sends the
/// inline document first, then the instruction.
fn build_parts(payload: ExtractionPayload) -> Vec<Part> {
    match payload {
        ExtractionPayload::Text(cv_text) => vec![Part::text(text_prompt(&cv_text))],
        ExtractionPayload::Document {
            encoded_data,
            media_type,
        } => vec![
            Part::inline(media_type, encoded_data),
            Part::text(EXTRACTION_PROMPT.to_string()),
        ],
    }
}

/// Parses the model's JSON body into a normalized document. Serde fills
/// every omitted optional collection with an empty `Vec` here; nothing after
/// this point sees a partially-shaped document.
fn document_from_text(text: &str) -> Result<ProfileDocument, ExtractError> {
    serde_json::from_str(text).map_err(ExtractError::Parse)
}

pub struct GeminiExtractor {
    client: Client,
    api_key: String,
    base_url: String,
}

impl GeminiExtractor {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL.to_string())
    }

    /// Base URL override for tests and self-hosted gateways.
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(120))
                .build()
                .expect("Failed to build HTTP client"),
            api_key,
            base_url,
        }
    }
}

#[async_trait]
impl CvExtractor for GeminiExtractor {
    async fn extract(&self, payload: ExtractionPayload) -> Result<ProfileDocument, ExtractError> {
        let request_body = GenerateContentRequest {
            contents: vec![Content {
                parts: build_parts(payload),
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json",
                response_schema: response_schema(),
                temperature: TEMPERATURE,
                thinking_config: ThinkingConfig {
                    thinking_budget: THINKING_BUDGET,
                },
            },
        };

        let url = format!("{}/models/{}:generateContent", self.base_url, MODEL);
        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .header("content-type", "application/json")
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<GeminiError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(ExtractError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: GenerateContentResponse = response.json().await?;
        let text = parsed.text().ok_or(ExtractError::EmptyResponse)?;
        debug!("extraction call succeeded ({} bytes of JSON)", text.len());

        document_from_text(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_payload_builds_single_prompt_part() {
        let parts = build_parts(ExtractionPayload::Text("My CV body".to_string()));
        assert_eq!(parts.len(), 1);
        let text = parts[0].text.as_deref().unwrap();
        assert!(text.contains("senior executive recruiter"));
        assert!(text.ends_with("CV CONTENT:\nMy CV body"));
        assert!(parts[0].inline_data.is_none());
    }

    #[test]
    fn test_document_payload_sends_inline_data_then_prompt() {
        let parts = build_parts(ExtractionPayload::Document {
            encoded_data: "QUJD".to_string(),
            media_type: "application/pdf".to_string(),
        });
        assert_eq!(parts.len(), 2);
        let inline = parts[0].inline_data.as_ref().unwrap();
        assert_eq!(inline.mime_type, "application/pdf");
        assert_eq!(inline.data, "QUJD");
        assert_eq!(parts[1].text.as_deref(), Some(EXTRACTION_PROMPT));
    }

    #[test]
    fn test_response_text_concatenates_parts() {
        let response = GenerateContentResponse {
            candidates: vec![Candidate {
                content: Some(CandidateContent {
                    parts: vec![
                        CandidatePart {
                            text: Some("{\"a\":".to_string()),
                        },
                        CandidatePart {
                            text: Some("1}".to_string()),
                        },
                    ],
                }),
            }],
        };
        assert_eq!(response.text().as_deref(), Some("{\"a\":1}"));
    }

    #[test]
    fn test_empty_candidates_yield_no_text() {
        let response = GenerateContentResponse { candidates: vec![] };
        assert!(response.text().is_none());
    }

    #[test]
    fn test_document_from_text_normalizes_optional_collections() {
        let doc = document_from_text(
            r#"{
                "name": "Jane Doe",
                "headline": "Engineer",
                "about": "I ship.",
                "skills": ["Rust"],
                "experience": [],
                "education": []
            }"#,
        )
        .unwrap();
        assert_eq!(doc.name, "Jane Doe");
        assert!(doc.publications.is_empty());
        assert!(doc.patents.is_empty());
    }

    #[test]
    fn test_malformed_body_is_a_parse_error() {
        let err = document_from_text("not json at all").unwrap_err();
        assert!(matches!(err, ExtractError::Parse(_)));
    }
}
