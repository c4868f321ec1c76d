// SPDX-FileCopyrightText: 2026 Dolbom Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP request handlers for the relay endpoints.
//!
//! Handles POST /skill (platform intake), POST /api/process-job (queue
//! worker), GET /health.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, warn};

use dolbom_core::messages::{
    DISPATCH_FAILED_MESSAGE, GENERATION_FAILED_MESSAGE, INVALID_REQUEST_MESSAGE,
};
use dolbom_core::{ConsultationRequest, DolbomError, Job};
use dolbom_kakao::{CallbackWaitResponse, SkillResponse};

use crate::server::AppState;

/// Plain-text processor replies read by the queue, not by users.
const JOB_PROCESSED_TEXT: &str = "Job processed successfully.";
const JOB_FAILED_TEXT: &str = "Failed to process job.";
const JOB_INVALID_TEXT: &str = "Invalid request: userInput and callbackUrl are required.";

/// Inbound skill payload. Only the fields the relay needs are modeled;
/// everything else the platform sends rides along ignored. Fields stay
/// optional so missing ones produce the 400 envelope contract instead of a
/// deserialization rejection.
#[derive(Debug, Deserialize)]
pub struct SkillPayload {
    #[serde(default, rename = "userRequest")]
    pub user_request: Option<UserRequest>,
}

#[derive(Debug, Deserialize)]
pub struct UserRequest {
    #[serde(default)]
    pub utterance: Option<String>,
    #[serde(default, rename = "callbackUrl")]
    pub callback_url: Option<String>,
}

/// Job payload as delivered by the queue, same camelCase shape the intake
/// handler enqueued.
#[derive(Debug, Deserialize)]
pub struct JobPayload {
    #[serde(default, rename = "userInput")]
    pub user_input: Option<String>,
    #[serde(default, rename = "callbackUrl")]
    pub callback_url: Option<String>,
}

/// Response body for GET /health.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// POST /skill
///
/// Synchronous intake: validate, generate a provisional wait message within
/// its budget, hand the job to the dispatcher, and ack with the
/// callback-pending envelope. The real answer arrives later through the
/// platform's callback URL.
pub async fn post_skill(
    State(state): State<AppState>,
    Json(payload): Json<SkillPayload>,
) -> Response {
    let request_id = uuid::Uuid::new_v4();

    let request = match extract_request(payload) {
        Ok(request) => request,
        Err(error) => {
            warn!(request_id = %request_id, error = %error, "rejecting invalid skill payload");
            return (
                StatusCode::BAD_REQUEST,
                Json(SkillResponse::simple_text(INVALID_REQUEST_MESSAGE)),
            )
                .into_response();
        }
    };

    debug!(request_id = %request_id, utterance = %request.utterance, "utterance accepted");

    // Bounded; falls back to the fixed message rather than delaying the ack.
    let outcome = state.gemini.generate_wait_message(&request.utterance).await;

    let job = Job::from(request);
    if let Err(error) = state.dispatcher.submit(&job).await {
        error!(request_id = %request_id, error = %error, "failed to submit job");
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(SkillResponse::simple_text(DISPATCH_FAILED_MESSAGE)),
        )
            .into_response();
    }

    info!(request_id = %request_id, "job submitted, sending callback-pending ack");
    (
        StatusCode::OK,
        Json(CallbackWaitResponse::new(outcome.text())),
    )
        .into_response()
}

/// POST /api/process-job
///
/// Queue worker: generate the full answer and POST it to the callback URL.
/// Returns 200 only after successful delivery so the queue retries anything
/// else; generation failures still deliver the fixed apology best-effort.
pub async fn post_process_job(
    State(state): State<AppState>,
    Json(payload): Json<JobPayload>,
) -> Response {
    let job_id = uuid::Uuid::new_v4();

    let job = Job {
        user_input: payload.user_input.unwrap_or_default(),
        callback_url: payload.callback_url.unwrap_or_default(),
    };
    let request = match job.into_request() {
        Ok(request) => request,
        Err(error) => {
            error!(job_id = %job_id, error = %error, "invalid job payload");
            return (StatusCode::BAD_REQUEST, JOB_INVALID_TEXT).into_response();
        }
    };

    debug!(job_id = %job_id, utterance = %request.utterance, "processing job");

    match state.gemini.generate_answer(&request.utterance).await {
        Ok(answer) => {
            let response =
                SkillResponse::answer(&answer.response_text, &answer.follow_up_questions);
            match state.callback.deliver(&request.callback_url, &response).await {
                Ok(()) => {
                    info!(job_id = %job_id, "job processed and callback sent");
                    (StatusCode::OK, JOB_PROCESSED_TEXT).into_response()
                }
                Err(error) => {
                    error!(job_id = %job_id, error = %error, "failed to deliver answer callback");
                    (StatusCode::INTERNAL_SERVER_ERROR, JOB_FAILED_TEXT).into_response()
                }
            }
        }
        Err(error) => {
            error!(job_id = %job_id, error = %error, "answer generation failed");

            // Best effort: the user should see the apology instead of silence.
            let apology = SkillResponse::simple_text(GENERATION_FAILED_MESSAGE);
            if let Err(callback_error) =
                state.callback.deliver(&request.callback_url, &apology).await
            {
                error!(job_id = %job_id, error = %callback_error, "failed to deliver error callback");
            }

            (StatusCode::INTERNAL_SERVER_ERROR, JOB_FAILED_TEXT).into_response()
        }
    }
}

/// GET /health
///
/// Liveness endpoint for load balancers and uptime checks.
pub async fn get_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Pulls the utterance and callback URL out of the skill payload, rejecting
/// blank or missing values.
fn extract_request(payload: SkillPayload) -> Result<ConsultationRequest, DolbomError> {
    let user_request = payload
        .user_request
        .ok_or_else(|| DolbomError::InvalidRequest("userRequest is missing".to_string()))?;

    ConsultationRequest::new(
        user_request.utterance.unwrap_or_default(),
        user_request.callback_url.unwrap_or_default(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skill_payload_tolerates_extra_platform_fields() {
        let json = r#"{
            "intent": { "id": "intent-1", "name": "폴백 블록" },
            "userRequest": {
                "timezone": "Asia/Seoul",
                "utterance": "아기가 열이 나요",
                "callbackUrl": "https://bot-api.kakao.example/callback/abc",
                "user": { "id": "user-1", "type": "botUserKey" }
            },
            "bot": { "id": "bot-1", "name": "돌봄이" }
        }"#;
        let payload: SkillPayload = serde_json::from_str(json).unwrap();
        let request = extract_request(payload).unwrap();
        assert_eq!(request.utterance, "아기가 열이 나요");
        assert_eq!(
            request.callback_url,
            "https://bot-api.kakao.example/callback/abc"
        );
    }

    #[test]
    fn skill_payload_without_user_request_is_rejected() {
        let payload: SkillPayload = serde_json::from_str("{}").unwrap();
        let err = extract_request(payload).unwrap_err();
        assert!(matches!(err, DolbomError::InvalidRequest(_)));
    }

    #[test]
    fn skill_payload_with_blank_utterance_is_rejected() {
        let json = r#"{
            "userRequest": { "utterance": "   ", "callbackUrl": "https://cb.example" }
        }"#;
        let payload: SkillPayload = serde_json::from_str(json).unwrap();
        assert!(extract_request(payload).is_err());
    }

    #[test]
    fn job_payload_deserializes_camel_case() {
        let json = r#"{ "userInput": "질문", "callbackUrl": "https://cb.example" }"#;
        let payload: JobPayload = serde_json::from_str(json).unwrap();
        assert_eq!(payload.user_input.as_deref(), Some("질문"));
        assert_eq!(payload.callback_url.as_deref(), Some("https://cb.example"));
    }

    #[test]
    fn health_response_serializes() {
        let resp = HealthResponse {
            status: "ok".to_string(),
            version: "0.1.0".to_string(),
        };
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("\"status\":\"ok\""));
    }
}
