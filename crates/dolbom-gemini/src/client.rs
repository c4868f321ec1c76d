// SPDX-FileCopyrightText: 2026 Dolbom Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP client for the Gemini `generateContent` API.
//!
//! Provides [`GeminiClient`] with two generation paths: the full structured
//! answer (slow, strict errors) and the provisional wait message (fast,
//! failures swallowed into [`WaitOutcome::Fallback`]). Each path runs under
//! its own wall-clock budget so a stalled API call can never blow the
//! platform's ack deadline or the queue's processing window.

use std::time::Duration;

use dolbom_config::GeminiConfig;
use dolbom_core::{DolbomError, StructuredAnswer, WaitOutcome};
use secrecy::{ExposeSecret, SecretString};
use tracing::{debug, warn};

use crate::prompt::{CONSULT_PRIMER, CONSULT_SYSTEM_PROMPT, WAIT_PRIMER, WAIT_SYSTEM_PROMPT};
use crate::types::{GenerateContentRequest, GenerateContentResponse, WaitText};

/// HTTP client for Gemini API communication.
///
/// Cheap to clone; the inner reqwest client shares its connection pool.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: reqwest::Client,
    api_key: SecretString,
    base_url: String,
    model: String,
    wait_timeout: Duration,
    answer_timeout: Duration,
    wait_temperature: f64,
    answer_temperature: f64,
}

impl GeminiClient {
    /// Creates a new Gemini API client from the given configuration.
    ///
    /// # API Key Resolution
    /// 1. `gemini.api_key` if set
    /// 2. `GEMINI_API_KEY` environment variable
    /// 3. Returns error if neither is available
    pub fn new(config: &GeminiConfig) -> Result<Self, DolbomError> {
        let api_key = resolve_api_key(&config.api_key)?;

        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| DolbomError::Internal(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            api_key: SecretString::from(api_key),
            base_url: config.api_base.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            wait_timeout: Duration::from_millis(config.wait_timeout_ms),
            answer_timeout: Duration::from_millis(config.answer_timeout_ms),
            wait_temperature: config.wait_temperature,
            answer_temperature: config.answer_temperature,
        })
    }

    /// Returns the model identifier requests are sent to.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Generates the full structured answer for an utterance.
    ///
    /// Returns [`DolbomError::GenerationTimeout`] when the call exceeds the
    /// answer budget, [`DolbomError::Generation`] for transport and API
    /// failures, and [`DolbomError::MalformedAnswer`] when the model output
    /// is not the expected JSON object.
    pub async fn generate_answer(&self, utterance: &str) -> Result<StructuredAnswer, DolbomError> {
        let request = GenerateContentRequest::primed(
            CONSULT_SYSTEM_PROMPT,
            CONSULT_PRIMER,
            utterance,
            self.answer_temperature,
        );

        let text = self.post_generate(&request, self.answer_timeout).await?;

        let answer: StructuredAnswer = serde_json::from_str(&text).map_err(|e| {
            DolbomError::MalformedAnswer(format!("model output is not a valid answer object: {e}"))
        })?;
        if answer.response_text.trim().is_empty() {
            return Err(DolbomError::MalformedAnswer(
                "model output has an empty response_text".to_string(),
            ));
        }

        debug!(
            follow_ups = answer.follow_up_questions.len(),
            "answer generated"
        );
        Ok(answer)
    }

    /// Generates the provisional wait message for an utterance.
    ///
    /// Never fails: any error on this path (timeout, transport, bad model
    /// output) downgrades to [`WaitOutcome::Fallback`] after a warning, so
    /// the sync ack always goes out on time.
    pub async fn generate_wait_message(&self, utterance: &str) -> WaitOutcome {
        match self.try_wait_message(utterance).await {
            Ok(text) => WaitOutcome::Generated(text),
            Err(error) => {
                warn!(error = %error, "wait message generation failed, using default");
                WaitOutcome::Fallback
            }
        }
    }

    async fn try_wait_message(&self, utterance: &str) -> Result<String, DolbomError> {
        let request = GenerateContentRequest::primed(
            WAIT_SYSTEM_PROMPT,
            WAIT_PRIMER,
            utterance,
            self.wait_temperature,
        );

        let text = self.post_generate(&request, self.wait_timeout).await?;

        let wait: WaitText = serde_json::from_str(&text).map_err(|e| {
            DolbomError::MalformedAnswer(format!("model output is not a valid wait object: {e}"))
        })?;
        if wait.wait_text.trim().is_empty() {
            return Err(DolbomError::MalformedAnswer(
                "model output has an empty wait_text".to_string(),
            ));
        }
        Ok(wait.wait_text)
    }

    /// Sends one `generateContent` request under the given budget and
    /// returns the first candidate's text.
    async fn post_generate(
        &self,
        request: &GenerateContentRequest,
        budget: Duration,
    ) -> Result<String, DolbomError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        );

        let call = async {
            let response = self
                .client
                .post(&url)
                .header("x-goog-api-key", self.api_key.expose_secret())
                .json(request)
                .send()
                .await
                .map_err(|e| DolbomError::Generation {
                    message: format!("HTTP request failed: {e}"),
                    source: Some(Box::new(e)),
                })?;

            let status = response.status();
            debug!(status = %status, "generateContent response received");

            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                return Err(DolbomError::Generation {
                    message: format!("Gemini API returned {status}: {body}"),
                    source: None,
                });
            }

            let body: GenerateContentResponse =
                response.json().await.map_err(|e| DolbomError::Generation {
                    message: format!("failed to parse API response: {e}"),
                    source: Some(Box::new(e)),
                })?;

            body.into_first_text().ok_or_else(|| DolbomError::Generation {
                message: "Gemini API returned an invalid or empty response".to_string(),
                source: None,
            })
        };

        match tokio::time::timeout(budget, call).await {
            Ok(result) => result,
            Err(_) => Err(DolbomError::GenerationTimeout { duration: budget }),
        }
    }
}

/// Resolves the Gemini API key following priority: config > environment.
fn resolve_api_key(config_key: &Option<String>) -> Result<String, DolbomError> {
    if let Some(key) = config_key
        && !key.is_empty()
    {
        return Ok(key.clone());
    }

    std::env::var("GEMINI_API_KEY").map_err(|_| {
        DolbomError::Config(
            "Gemini API key not found. Set gemini.api_key in config or GEMINI_API_KEY environment variable.".into(),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use dolbom_core::messages::DEFAULT_WAIT_MESSAGE;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_config(base_url: &str) -> GeminiConfig {
        GeminiConfig {
            api_key: Some("test-api-key".into()),
            api_base: base_url.to_string(),
            ..GeminiConfig::default()
        }
    }

    fn candidate_body(text: &str) -> serde_json::Value {
        serde_json::json!({
            "candidates": [
                { "content": { "role": "model", "parts": [{ "text": text }] } }
            ]
        })
    }

    #[tokio::test]
    async fn generate_answer_success() {
        let server = MockServer::start().await;

        let blob = serde_json::json!({
            "response_text": "수유 텀은 아기마다 달라요.",
            "follow_up_questions": ["신생아 수유 간격은?", "분유량 계산 방법"]
        })
        .to_string();

        Mock::given(method("POST"))
            .and(path("/v1beta/models/gemini-2.5-flash:generateContent"))
            .and(header("x-goog-api-key", "test-api-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(candidate_body(&blob)))
            .mount(&server)
            .await;

        let client = GeminiClient::new(&test_config(&server.uri())).unwrap();
        let answer = client.generate_answer("수유 텀이 궁금해요").await.unwrap();

        assert_eq!(answer.response_text, "수유 텀은 아기마다 달라요.");
        assert_eq!(
            answer.follow_up_questions,
            vec!["신생아 수유 간격은?", "분유량 계산 방법"]
        );
    }

    #[tokio::test]
    async fn generate_answer_rejects_non_json_output() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(candidate_body("그냥 일반 텍스트입니다")),
            )
            .mount(&server)
            .await;

        let client = GeminiClient::new(&test_config(&server.uri())).unwrap();
        let result = client.generate_answer("질문").await;

        assert!(matches!(
            result,
            Err(DolbomError::MalformedAnswer(_))
        ));
    }

    #[tokio::test]
    async fn generate_answer_times_out() {
        let server = MockServer::start().await;

        let blob = serde_json::json!({
            "response_text": "늦은 답변",
            "follow_up_questions": ["a", "b"]
        })
        .to_string();

        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(candidate_body(&blob))
                    .set_delay(Duration::from_millis(400)),
            )
            .mount(&server)
            .await;

        let mut config = test_config(&server.uri());
        config.answer_timeout_ms = 100;

        let client = GeminiClient::new(&config).unwrap();
        let result = client.generate_answer("질문").await;

        assert!(matches!(
            result,
            Err(DolbomError::GenerationTimeout { .. })
        ));
    }

    #[tokio::test]
    async fn generate_answer_surfaces_api_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(503).set_body_string("quota exceeded"))
            .mount(&server)
            .await;

        let client = GeminiClient::new(&test_config(&server.uri())).unwrap();
        let err = client.generate_answer("질문").await.unwrap_err();

        let msg = err.to_string();
        assert!(msg.contains("503"), "got: {msg}");
    }

    #[tokio::test]
    async fn generate_answer_errors_on_empty_candidates() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({ "candidates": [] })),
            )
            .mount(&server)
            .await;

        let client = GeminiClient::new(&test_config(&server.uri())).unwrap();
        let err = client.generate_answer("질문").await.unwrap_err();

        assert!(err.to_string().contains("invalid or empty"), "got: {err}");
    }

    #[tokio::test]
    async fn wait_message_success() {
        let server = MockServer::start().await;

        let blob = serde_json::json!({
            "wait_text": "아기 열 때문에 걱정되시는군요. 확인해볼게요. 💫"
        })
        .to_string();

        Mock::given(method("POST"))
            .and(path("/v1beta/models/gemini-2.5-flash:generateContent"))
            .respond_with(ResponseTemplate::new(200).set_body_json(candidate_body(&blob)))
            .mount(&server)
            .await;

        let client = GeminiClient::new(&test_config(&server.uri())).unwrap();
        let outcome = client.generate_wait_message("아기가 열이 나요").await;

        assert_eq!(
            outcome,
            WaitOutcome::Generated("아기 열 때문에 걱정되시는군요. 확인해볼게요. 💫".to_string())
        );
    }

    #[tokio::test]
    async fn wait_message_falls_back_on_api_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500).set_body_string("internal"))
            .mount(&server)
            .await;

        let client = GeminiClient::new(&test_config(&server.uri())).unwrap();
        let outcome = client.generate_wait_message("질문").await;

        assert_eq!(outcome, WaitOutcome::Fallback);
        assert_eq!(outcome.text(), DEFAULT_WAIT_MESSAGE);
    }

    #[tokio::test]
    async fn wait_message_falls_back_on_timeout() {
        let server = MockServer::start().await;

        let blob = serde_json::json!({ "wait_text": "늦은 대기 메시지" }).to_string();

        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(candidate_body(&blob))
                    .set_delay(Duration::from_millis(400)),
            )
            .mount(&server)
            .await;

        let mut config = test_config(&server.uri());
        config.wait_timeout_ms = 100;

        let client = GeminiClient::new(&config).unwrap();
        let outcome = client.generate_wait_message("질문").await;

        assert_eq!(outcome, WaitOutcome::Fallback);
    }

    #[tokio::test]
    async fn wait_message_falls_back_on_blank_text() {
        let server = MockServer::start().await;

        let blob = serde_json::json!({ "wait_text": "  " }).to_string();

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(candidate_body(&blob)))
            .mount(&server)
            .await;

        let client = GeminiClient::new(&test_config(&server.uri())).unwrap();
        let outcome = client.generate_wait_message("질문").await;

        assert_eq!(outcome, WaitOutcome::Fallback);
    }

    #[test]
    fn resolve_api_key_from_config() {
        let result = resolve_api_key(&Some("AIza-test-123".into()));
        assert!(result.is_ok());
        assert_eq!(result.unwrap(), "AIza-test-123");
    }
}
