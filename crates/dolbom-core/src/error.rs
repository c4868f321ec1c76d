// SPDX-FileCopyrightText: 2026 Dolbom Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Dolbom webhook relay.

use thiserror::Error;

/// The primary error type used across all Dolbom crates.
#[derive(Debug, Error)]
pub enum DolbomError {
    /// Configuration errors (missing required fields, invalid values).
    #[error("configuration error: {0}")]
    Config(String),

    /// The inbound payload is missing required fields or has empty values.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Job submission to the task queue failed (transport or auth).
    #[error("dispatch error: {message}")]
    Dispatch {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The generation service returned an error or an unusable response.
    #[error("generation error: {message}")]
    Generation {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The generation call exceeded its timeout budget.
    #[error("generation timed out after {duration:?}")]
    GenerationTimeout { duration: std::time::Duration },

    /// The generation output could not be parsed into a structured answer.
    #[error("malformed answer: {0}")]
    MalformedAnswer(String),

    /// Delivery to the conversation's callback URL failed.
    #[error("callback delivery failed: {message}")]
    CallbackDelivery {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}
