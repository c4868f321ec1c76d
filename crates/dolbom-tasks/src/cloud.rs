// SPDX-FileCopyrightText: 2026 Dolbom Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Cloud Tasks dispatch backend.
//!
//! Enqueues each accepted job as an HTTP task via the Cloud Tasks REST API.
//! The queue then POSTs the job to the processor endpoint with managed
//! retries, which is what gives the relay its at-least-once delivery.

use std::collections::BTreeMap;

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use dolbom_config::TasksConfig;
use dolbom_core::{DolbomError, Job, TaskDispatcher};
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use tracing::debug;

/// Dispatcher that enqueues jobs through a Cloud Tasks queue.
#[derive(Debug)]
pub struct CloudTasksDispatcher {
    client: reqwest::Client,
    /// Full `tasks` collection URL of the configured queue.
    queue_url: String,
    /// Processor endpoint the queue POSTs each job to.
    target_url: String,
    auth_token: Option<SecretString>,
}

impl CloudTasksDispatcher {
    /// Creates a dispatcher for the queue named in `config`, targeting the
    /// given processor URL.
    pub fn new(config: &TasksConfig, target_url: String) -> Result<Self, DolbomError> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(10))
            .build()
            .map_err(|e| DolbomError::Internal(format!("failed to build HTTP client: {e}")))?;

        let queue_url = format!(
            "{}/v2/projects/{}/locations/{}/queues/{}/tasks",
            config.api_base.trim_end_matches('/'),
            config.project,
            config.location,
            config.queue,
        );

        Ok(Self {
            client,
            queue_url,
            target_url,
            auth_token: config.auth_token.clone().map(SecretString::from),
        })
    }
}

#[async_trait]
impl TaskDispatcher for CloudTasksDispatcher {
    async fn submit(&self, job: &Job) -> Result<(), DolbomError> {
        let payload = serde_json::to_vec(job).map_err(|e| DolbomError::Dispatch {
            message: format!("failed to serialize job: {e}"),
            source: Some(Box::new(e)),
        })?;

        let request = CreateTaskRequest {
            task: Task {
                http_request: TaskHttpRequest {
                    http_method: "POST".to_string(),
                    url: self.target_url.clone(),
                    headers: BTreeMap::from([(
                        "Content-Type".to_string(),
                        "application/json".to_string(),
                    )]),
                    body: STANDARD.encode(&payload),
                },
            },
        };

        let mut req = self.client.post(&self.queue_url).json(&request);
        if let Some(token) = &self.auth_token {
            req = req.bearer_auth(token.expose_secret());
        }

        let response = req.send().await.map_err(|e| DolbomError::Dispatch {
            message: format!("Cloud Tasks request failed: {e}"),
            source: Some(Box::new(e)),
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(DolbomError::Dispatch {
                message: format!("Cloud Tasks API returned {status}: {body}"),
                source: None,
            });
        }

        debug!(target_url = %self.target_url, "job enqueued to Cloud Tasks");
        Ok(())
    }
}

/// Body of `POST .../queues/{queue}/tasks`.
#[derive(Debug, Serialize)]
struct CreateTaskRequest {
    task: Task,
}

#[derive(Debug, Serialize)]
struct Task {
    #[serde(rename = "httpRequest")]
    http_request: TaskHttpRequest,
}

#[derive(Debug, Serialize)]
struct TaskHttpRequest {
    #[serde(rename = "httpMethod")]
    http_method: String,
    url: String,
    headers: BTreeMap<String, String>,
    /// Base64 of the job JSON, per the API's `bytes` encoding.
    body: String,
}
