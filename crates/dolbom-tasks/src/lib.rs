// SPDX-FileCopyrightText: 2026 Dolbom Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Task dispatch backends for the Dolbom webhook relay.
//!
//! A [`TaskDispatcher`] carries accepted jobs from the intake handler to the
//! processor endpoint. Two backends exist, selected by `tasks.backend`:
//!
//! - `cloud-tasks`: enqueues through a Cloud Tasks queue, which retries
//!   delivery until the processor acknowledges.
//! - `http`: fire-and-forget POST straight at the processor, for local
//!   development and single-instance setups.

pub mod cloud;
pub mod direct;

use std::sync::Arc;

use dolbom_config::TasksConfig;
use dolbom_core::{DolbomError, TaskDispatcher};

pub use cloud::CloudTasksDispatcher;
pub use direct::HttpDispatcher;

/// Builds the dispatcher named by `config.backend`, targeting the given
/// processor URL.
pub fn build_dispatcher(
    config: &TasksConfig,
    target_url: String,
) -> Result<Arc<dyn TaskDispatcher>, DolbomError> {
    match config.backend.as_str() {
        "cloud-tasks" => Ok(Arc::new(CloudTasksDispatcher::new(config, target_url)?)),
        "http" => Ok(Arc::new(HttpDispatcher::new(target_url)?)),
        other => Err(DolbomError::Config(format!(
            "unknown tasks.backend `{other}`"
        ))),
    }
}
