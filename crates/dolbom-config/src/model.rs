// SPDX-FileCopyrightText: 2026 Dolbom Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for the Dolbom webhook relay.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup, providing actionable error messages.

use serde::{Deserialize, Serialize};

/// Top-level Dolbom configuration.
///
/// Loaded from TOML files following XDG hierarchy, with environment variable
/// overrides. All sections are optional and default to sensible values.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct DolbomConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,

    /// Gemini API settings for answer and wait-message generation.
    #[serde(default)]
    pub gemini: GeminiConfig,

    /// Task queue settings for deferred job processing.
    #[serde(default)]
    pub tasks: TasksConfig,
}

impl DolbomConfig {
    /// Returns a copy with secret values masked, suitable for display.
    pub fn redacted(&self) -> Self {
        let mut config = self.clone();
        if config.gemini.api_key.is_some() {
            config.gemini.api_key = Some("[redacted]".to_string());
        }
        if config.tasks.auth_token.is_some() {
            config.tasks.auth_token = Some("[redacted]".to_string());
        }
        config
    }
}

/// HTTP server configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    /// Address to bind the server to.
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Externally reachable base URL of this server, e.g.
    /// `https://relay.example.com`. Required when the cloud-tasks backend
    /// must route jobs back through the public internet. When unset, job
    /// targets fall back to the loopback address.
    #[serde(default)]
    pub public_base_url: Option<String>,

    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            public_base_url: None,
            log_level: default_log_level(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Gemini API configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct GeminiConfig {
    /// Gemini API key. `None` requires the `GEMINI_API_KEY` environment variable.
    #[serde(default)]
    pub api_key: Option<String>,

    /// Base URL of the Gemini API.
    #[serde(default = "default_api_base")]
    pub api_base: String,

    /// Model to use for both answer and wait-message generation.
    #[serde(default = "default_model")]
    pub model: String,

    /// Budget in milliseconds for the provisional wait message. Must stay
    /// well under the chat platform's ack deadline.
    #[serde(default = "default_wait_timeout_ms")]
    pub wait_timeout_ms: u64,

    /// Budget in milliseconds for full answer generation.
    #[serde(default = "default_answer_timeout_ms")]
    pub answer_timeout_ms: u64,

    /// Sampling temperature for wait-message generation.
    #[serde(default = "default_wait_temperature")]
    pub wait_temperature: f64,

    /// Sampling temperature for answer generation.
    #[serde(default = "default_answer_temperature")]
    pub answer_temperature: f64,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_base: default_api_base(),
            model: default_model(),
            wait_timeout_ms: default_wait_timeout_ms(),
            answer_timeout_ms: default_answer_timeout_ms(),
            wait_temperature: default_wait_temperature(),
            answer_temperature: default_answer_temperature(),
        }
    }
}

fn default_api_base() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}

fn default_model() -> String {
    "gemini-2.5-flash".to_string()
}

fn default_wait_timeout_ms() -> u64 {
    3500
}

fn default_answer_timeout_ms() -> u64 {
    25_000
}

fn default_wait_temperature() -> f64 {
    0.5
}

fn default_answer_temperature() -> f64 {
    0.7
}

/// Task queue configuration.
///
/// Selects how accepted jobs reach the processor endpoint: `"cloud-tasks"`
/// enqueues through a Google Cloud Tasks queue, `"http"` posts directly to
/// the processor without an intermediary queue.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct TasksConfig {
    /// Dispatch backend: "cloud-tasks" or "http".
    #[serde(default = "default_backend")]
    pub backend: String,

    /// Base URL of the Cloud Tasks API.
    #[serde(default = "default_tasks_api_base")]
    pub api_base: String,

    /// Google Cloud project ID owning the queue.
    #[serde(default)]
    pub project: String,

    /// Location of the queue, e.g. "asia-northeast3".
    #[serde(default)]
    pub location: String,

    /// Name of the queue.
    #[serde(default)]
    pub queue: String,

    /// OAuth bearer token for the Cloud Tasks API. `None` sends no
    /// Authorization header, which only works against local emulators.
    #[serde(default)]
    pub auth_token: Option<String>,
}

impl Default for TasksConfig {
    fn default() -> Self {
        Self {
            backend: default_backend(),
            api_base: default_tasks_api_base(),
            project: String::new(),
            location: String::new(),
            queue: String::new(),
            auth_token: None,
        }
    }
}

fn default_backend() -> String {
    "http".to_string()
}

fn default_tasks_api_base() -> String {
    "https://cloudtasks.googleapis.com".to_string()
}
