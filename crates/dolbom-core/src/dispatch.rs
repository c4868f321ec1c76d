// SPDX-FileCopyrightText: 2026 Dolbom Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The task-queue capability.

use async_trait::async_trait;

use crate::error::DolbomError;
use crate::types::Job;

/// Injectable capability over the task-queue collaborator.
///
/// Implementations construct the queue-native task description and ask the
/// collaborator to enqueue it, single-shot. Retries, if any, belong to the
/// queue itself; delivery semantics (at-least-once for managed queues) are
/// inherited by the processing endpoint, which must tolerate repeated
/// invocation for the same job.
#[async_trait]
pub trait TaskDispatcher: Send + Sync + std::fmt::Debug {
    /// Submits the job for asynchronous processing.
    ///
    /// The job must reach the processing endpoint byte-identical; dispatchers
    /// never mutate it. Any transport or auth failure from the collaborator
    /// surfaces as [`DolbomError::Dispatch`].
    async fn submit(&self, job: &Job) -> Result<(), DolbomError>;
}
