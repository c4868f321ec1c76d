// SPDX-FileCopyrightText: 2026 Dolbom Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Direct HTTP dispatch backend.
//!
//! Posts each accepted job straight to the processor endpoint from a spawned
//! task, with no queue in between. Meant for local development and
//! single-instance deployments; there are no retries, so a lost job stays
//! lost. Production setups should prefer the cloud-tasks backend.

use std::time::Duration;

use async_trait::async_trait;
use dolbom_core::{DolbomError, Job, TaskDispatcher};
use tracing::{debug, warn};

/// Upper bound on one processor round trip. Generous enough to cover answer
/// generation plus callback delivery.
const DELIVERY_TIMEOUT: Duration = Duration::from_secs(60);

/// Dispatcher that POSTs jobs directly to the processor endpoint.
#[derive(Debug)]
pub struct HttpDispatcher {
    client: reqwest::Client,
    target_url: String,
}

impl HttpDispatcher {
    pub fn new(target_url: String) -> Result<Self, DolbomError> {
        let client = reqwest::Client::builder()
            .timeout(DELIVERY_TIMEOUT)
            .build()
            .map_err(|e| DolbomError::Internal(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { client, target_url })
    }
}

#[async_trait]
impl TaskDispatcher for HttpDispatcher {
    /// Accepts the job and returns immediately; the POST runs in a spawned
    /// task so the synchronous ack never waits on answer generation.
    async fn submit(&self, job: &Job) -> Result<(), DolbomError> {
        let client = self.client.clone();
        let url = self.target_url.clone();
        let job = job.clone();

        tokio::spawn(async move {
            match client.post(&url).json(&job).send().await {
                Ok(response) if response.status().is_success() => {
                    debug!(status = %response.status(), "job delivered to processor");
                }
                Ok(response) => {
                    warn!(status = %response.status(), "processor rejected job");
                }
                Err(error) => {
                    warn!(error = %error, "failed to deliver job to processor");
                }
            }
        });

        Ok(())
    }
}
