// SPDX-FileCopyrightText: 2026 Dolbom Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Delivery of final answers to platform callback URLs.
//!
//! The callback URL arrives with each utterance and is treated as opaque; it
//! is single-use and expires shortly after the ack, so a rejection from the
//! platform is an expected failure mode, not a bug.

use std::time::Duration;

use dolbom_core::DolbomError;
use dolbom_kakao::SkillResponse;
use tracing::debug;

/// Upper bound on one callback POST.
const CALLBACK_TIMEOUT: Duration = Duration::from_secs(10);

/// HTTP client that POSTs skill responses to callback URLs.
#[derive(Debug, Clone)]
pub struct CallbackClient {
    client: reqwest::Client,
}

impl CallbackClient {
    pub fn new() -> Result<Self, DolbomError> {
        let client = reqwest::Client::builder()
            .timeout(CALLBACK_TIMEOUT)
            .build()
            .map_err(|e| DolbomError::Internal(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { client })
    }

    /// POSTs the envelope to the callback URL, treating any non-2xx status
    /// as a delivery failure.
    pub async fn deliver(
        &self,
        callback_url: &str,
        response: &SkillResponse,
    ) -> Result<(), DolbomError> {
        let result = self
            .client
            .post(callback_url)
            .json(response)
            .send()
            .await
            .map_err(|e| DolbomError::CallbackDelivery {
                message: format!("callback request failed: {e}"),
                source: Some(Box::new(e)),
            })?;

        let status = result.status();
        if !status.is_success() {
            let body = result.text().await.unwrap_or_default();
            return Err(DolbomError::CallbackDelivery {
                message: format!("platform returned {status}: {body}"),
                source: None,
            });
        }

        debug!(status = %status, "callback delivered");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn deliver_posts_envelope() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/callback/abc"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let client = CallbackClient::new().unwrap();
        let response = SkillResponse::simple_text("최종 답변입니다.");
        client
            .deliver(&format!("{}/callback/abc", server.uri()), &response)
            .await
            .unwrap();

        let requests = server.received_requests().await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
        assert_eq!(body["version"], "2.0");
        assert_eq!(
            body["template"]["outputs"][0]["simpleText"]["text"],
            "최종 답변입니다."
        );
    }

    #[tokio::test]
    async fn deliver_fails_on_platform_rejection() {
        let server = MockServer::start().await;

        // Expired callback URLs get a 4xx from the platform.
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(410).set_body_string("callback expired"))
            .mount(&server)
            .await;

        let client = CallbackClient::new().unwrap();
        let response = SkillResponse::simple_text("늦은 답변");
        let err = client
            .deliver(&server.uri(), &response)
            .await
            .unwrap_err();

        assert!(matches!(err, DolbomError::CallbackDelivery { .. }));
        assert!(err.to_string().contains("410"), "got: {err}");
    }

    #[tokio::test]
    async fn deliver_fails_on_unreachable_host() {
        let client = CallbackClient::new().unwrap();
        let response = SkillResponse::simple_text("답변");
        let err = client
            .deliver("http://127.0.0.1:9/callback", &response)
            .await
            .unwrap_err();

        assert!(matches!(err, DolbomError::CallbackDelivery { .. }));
    }
}
