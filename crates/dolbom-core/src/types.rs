// SPDX-FileCopyrightText: 2026 Dolbom Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain types shared across the Dolbom relay.
//!
//! All state here lives for the duration of a single request/callback cycle.
//! Nothing is persisted.

use serde::{Deserialize, Serialize};

use crate::error::DolbomError;
use crate::messages;

/// A validated inbound unit of work: one user question plus the platform's
/// callback capability for delivering the eventual answer.
///
/// Immutable once constructed; passed by value through dispatch into the
/// asynchronous job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsultationRequest {
    /// The user's question. Never empty.
    pub utterance: String,
    /// Opaque callback URL supplied by the platform. Treated as a capability
    /// token; checked for presence only, never parsed.
    pub callback_url: String,
}

impl ConsultationRequest {
    /// Builds a request, rejecting missing or blank fields.
    pub fn new(
        utterance: impl Into<String>,
        callback_url: impl Into<String>,
    ) -> Result<Self, DolbomError> {
        let utterance = utterance.into();
        let callback_url = callback_url.into();

        if utterance.trim().is_empty() {
            return Err(DolbomError::InvalidRequest(
                "utterance is missing or empty".into(),
            ));
        }
        if callback_url.trim().is_empty() {
            return Err(DolbomError::InvalidRequest(
                "callbackUrl is missing or empty".into(),
            ));
        }

        Ok(Self {
            utterance,
            callback_url,
        })
    }
}

/// The serialized job payload submitted to the queue and later delivered to
/// the processing endpoint.
///
/// Wire keys are camelCase for compatibility with the queue-invoked endpoint.
/// Round-trips losslessly into a [`ConsultationRequest`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    #[serde(rename = "userInput")]
    pub user_input: String,
    #[serde(rename = "callbackUrl")]
    pub callback_url: String,
}

impl Job {
    /// Re-validates the payload into a [`ConsultationRequest`].
    ///
    /// The queue collaborator delivers at least once but is not trusted to
    /// deliver intact; the processor re-checks before doing any work.
    pub fn into_request(self) -> Result<ConsultationRequest, DolbomError> {
        ConsultationRequest::new(self.user_input, self.callback_url)
    }
}

impl From<ConsultationRequest> for Job {
    fn from(request: ConsultationRequest) -> Self {
        Self {
            user_input: request.utterance,
            callback_url: request.callback_url,
        }
    }
}

/// The parsed result of the main generation call.
///
/// Produced only by parsing the generation output as JSON; a parse failure is
/// a hard error for that call, never a partial value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuredAnswer {
    /// Main answer text, structured by the prompt into an introduction,
    /// titled body sections, and a trailing disclaimer.
    pub response_text: String,
    /// Up to two short follow-up questions. Fewer is a tolerated degraded
    /// case; rendering caps at two.
    #[serde(default)]
    pub follow_up_questions: Vec<String>,
}

/// Outcome of the best-effort provisional wait-message call.
///
/// Absence is not an error: any failure in the sub-call degrades to
/// [`WaitOutcome::Fallback`] and the fixed default text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WaitOutcome {
    /// The generation service produced a tailored wait message in budget.
    Generated(String),
    /// The sub-call failed or timed out; use the fixed default.
    Fallback,
}

impl WaitOutcome {
    /// The text to place in the synchronous ack.
    pub fn text(&self) -> &str {
        match self {
            WaitOutcome::Generated(text) => text,
            WaitOutcome::Fallback => messages::DEFAULT_WAIT_MESSAGE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn consultation_request_accepts_valid_input() {
        let req = ConsultationRequest::new("아기가 열이 나요", "https://example.com/cb").unwrap();
        assert_eq!(req.utterance, "아기가 열이 나요");
        assert_eq!(req.callback_url, "https://example.com/cb");
    }

    #[test]
    fn consultation_request_rejects_empty_utterance() {
        let err = ConsultationRequest::new("", "https://example.com/cb").unwrap_err();
        assert!(matches!(err, DolbomError::InvalidRequest(_)));
    }

    #[test]
    fn consultation_request_rejects_blank_callback_url() {
        let err = ConsultationRequest::new("질문", "   ").unwrap_err();
        assert!(matches!(err, DolbomError::InvalidRequest(_)));
    }

    #[test]
    fn job_uses_camel_case_wire_keys() {
        let job = Job {
            user_input: "질문".into(),
            callback_url: "https://example.com/cb".into(),
        };
        let value = serde_json::to_value(&job).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "userInput": "질문",
                "callbackUrl": "https://example.com/cb"
            })
        );
    }

    #[test]
    fn job_round_trips_through_request() {
        let request = ConsultationRequest::new("질문", "https://example.com/cb").unwrap();
        let job = Job::from(request.clone());
        assert_eq!(job.into_request().unwrap(), request);
    }

    #[test]
    fn job_with_empty_fields_fails_revalidation() {
        let job = Job {
            user_input: "".into(),
            callback_url: "https://example.com/cb".into(),
        };
        assert!(job.into_request().is_err());
    }

    #[test]
    fn structured_answer_parses_without_follow_ups() {
        let answer: StructuredAnswer =
            serde_json::from_str(r#"{"response_text": "답변입니다."}"#).unwrap();
        assert_eq!(answer.response_text, "답변입니다.");
        assert!(answer.follow_up_questions.is_empty());
    }

    #[test]
    fn structured_answer_requires_response_text() {
        let result = serde_json::from_str::<StructuredAnswer>(
            r#"{"follow_up_questions": ["하나", "둘"]}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn wait_outcome_fallback_uses_default_text() {
        assert_eq!(WaitOutcome::Fallback.text(), messages::DEFAULT_WAIT_MESSAGE);
        assert_eq!(
            WaitOutcome::Generated("확인하고 있어요.".into()).text(),
            "확인하고 있어요."
        );
    }
}
