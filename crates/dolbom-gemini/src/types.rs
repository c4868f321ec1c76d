// SPDX-FileCopyrightText: 2026 Dolbom Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Wire types for the Gemini `generateContent` endpoint.
//!
//! Request structs serialize to the camelCase keys the API expects
//! (`generationConfig` retains `response_mime_type` as-is, which the API
//! accepts alongside `responseMimeType`). Response structs keep every field
//! optional so unexpected payloads degrade to "no text" instead of a parse
//! failure.

use serde::{Deserialize, Serialize};

/// MIME type requested for model output. Both prompts demand raw JSON.
pub const JSON_MIME_TYPE: &str = "application/json";

/// Request body for `models/{model}:generateContent`.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    pub generation_config: GenerationConfig,
}

impl GenerateContentRequest {
    /// Build the three-turn priming conversation both generation paths use:
    /// the system prompt as a user turn, a canned model reply locking in the
    /// output format, then the real utterance.
    pub fn primed(system_prompt: &str, primer: &str, utterance: &str, temperature: f64) -> Self {
        Self {
            contents: vec![
                Content::user(system_prompt),
                Content::model(primer),
                Content::user(utterance),
            ],
            generation_config: GenerationConfig {
                temperature,
                response_mime_type: JSON_MIME_TYPE.to_string(),
            },
        }
    }
}

/// One conversation turn.
#[derive(Debug, Clone, Serialize)]
pub struct Content {
    pub role: String,
    pub parts: Vec<Part>,
}

impl Content {
    fn user(text: &str) -> Self {
        Self {
            role: "user".to_string(),
            parts: vec![Part {
                text: text.to_string(),
            }],
        }
    }

    fn model(text: &str) -> Self {
        Self {
            role: "model".to_string(),
            parts: vec![Part {
                text: text.to_string(),
            }],
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Part {
    pub text: String,
}

/// Sampling settings for a single request.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationConfig {
    pub temperature: f64,
    pub response_mime_type: String,
}

/// Response body for `models/{model}:generateContent`.
#[derive(Debug, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

impl GenerateContentResponse {
    /// Extract `candidates[0].content.parts[0].text`, treating an empty
    /// string the same as a missing one.
    pub fn into_first_text(self) -> Option<String> {
        let text = self
            .candidates
            .into_iter()
            .next()?
            .content?
            .parts
            .into_iter()
            .next()?
            .text?;
        if text.is_empty() { None } else { Some(text) }
    }
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    pub content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
pub struct CandidatePart {
    pub text: Option<String>,
}

/// Parsed wait-message payload the model returns for the provisional call.
#[derive(Debug, Deserialize)]
pub struct WaitText {
    pub wait_text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primed_request_wire_shape() {
        let request = GenerateContentRequest::primed("system", "primer", "질문", 0.7);
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "contents": [
                    { "role": "user", "parts": [{ "text": "system" }] },
                    { "role": "model", "parts": [{ "text": "primer" }] },
                    { "role": "user", "parts": [{ "text": "질문" }] }
                ],
                "generationConfig": {
                    "temperature": 0.7,
                    "response_mime_type": "application/json"
                }
            })
        );
    }

    #[test]
    fn first_text_extracts_nested_candidate() {
        let body = serde_json::json!({
            "candidates": [
                { "content": { "role": "model", "parts": [{ "text": "답변" }] } }
            ],
            "usageMetadata": { "totalTokenCount": 42 }
        });
        let response: GenerateContentResponse = serde_json::from_value(body).unwrap();
        assert_eq!(response.into_first_text().as_deref(), Some("답변"));
    }

    #[test]
    fn first_text_is_none_for_empty_candidates() {
        let response: GenerateContentResponse =
            serde_json::from_value(serde_json::json!({ "candidates": [] })).unwrap();
        assert!(response.into_first_text().is_none());
    }

    #[test]
    fn first_text_is_none_for_empty_string() {
        let body = serde_json::json!({
            "candidates": [{ "content": { "parts": [{ "text": "" }] } }]
        });
        let response: GenerateContentResponse = serde_json::from_value(body).unwrap();
        assert!(response.into_first_text().is_none());
    }

    #[test]
    fn missing_content_degrades_to_none() {
        let body = serde_json::json!({
            "candidates": [{ "finishReason": "SAFETY" }]
        });
        let response: GenerateContentResponse = serde_json::from_value(body).unwrap();
        assert!(response.into_first_text().is_none());
    }
}
