// SPDX-FileCopyrightText: 2026 Dolbom Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Validates semantic constraints that cannot be expressed via serde
//! attributes, such as valid bind addresses, known backend names, and
//! sane generation budgets.

use crate::diagnostic::ConfigError;
use crate::model::DolbomConfig;

/// Dispatch backends accepted in `tasks.backend`.
const VALID_BACKENDS: &[&str] = &["cloud-tasks", "http"];

/// Validate a deserialized configuration for semantic correctness.
///
/// Returns `Ok(())` if all validations pass, or `Err(Vec<ConfigError>)` with
/// all collected validation errors (does not fail fast).
pub fn validate_config(config: &DolbomConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    // Validate host is not empty
    if config.server.host.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "server.host must not be empty".to_string(),
        });
    }

    // Validate host looks like a valid IP or hostname
    if !config.server.host.trim().is_empty() {
        let addr = config.server.host.trim();
        // Accept valid IPv4, IPv6, or hostname patterns
        let is_valid_ip = addr.parse::<std::net::IpAddr>().is_ok();
        let is_valid_hostname = addr
            .chars()
            .all(|c| c.is_alphanumeric() || c == '.' || c == '-' || c == ':');
        if !is_valid_ip && !is_valid_hostname {
            errors.push(ConfigError::Validation {
                message: format!("server.host `{addr}` is not a valid IP address or hostname"),
            });
        }
    }

    // Validate public_base_url carries a scheme if set
    if let Some(url) = &config.server.public_base_url
        && !url.trim().is_empty()
        && !url.starts_with("http://")
        && !url.starts_with("https://")
    {
        errors.push(ConfigError::Validation {
            message: format!("server.public_base_url `{url}` must start with http:// or https://"),
        });
    }

    // Validate Gemini endpoint settings
    if config.gemini.api_base.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "gemini.api_base must not be empty".to_string(),
        });
    }

    if config.gemini.model.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "gemini.model must not be empty".to_string(),
        });
    }

    // Validate generation budgets are positive
    if config.gemini.wait_timeout_ms == 0 {
        errors.push(ConfigError::Validation {
            message: "gemini.wait_timeout_ms must be positive".to_string(),
        });
    }

    if config.gemini.answer_timeout_ms == 0 {
        errors.push(ConfigError::Validation {
            message: "gemini.answer_timeout_ms must be positive".to_string(),
        });
    }

    // Validate temperatures are in the API-accepted range
    for (key, value) in [
        ("gemini.wait_temperature", config.gemini.wait_temperature),
        ("gemini.answer_temperature", config.gemini.answer_temperature),
    ] {
        if !(0.0..=2.0).contains(&value) {
            errors.push(ConfigError::Validation {
                message: format!("{key} must be between 0.0 and 2.0, got {value}"),
            });
        }
    }

    // Validate the dispatch backend is a known name
    if !VALID_BACKENDS.contains(&config.tasks.backend.as_str()) {
        errors.push(ConfigError::Validation {
            message: format!(
                "tasks.backend `{}` is not recognized (valid backends: {})",
                config.tasks.backend,
                VALID_BACKENDS.join(", ")
            ),
        });
    }

    // The cloud-tasks backend needs a fully specified queue and a publicly
    // reachable URL for the processor endpoint.
    if config.tasks.backend == "cloud-tasks" {
        for (key, value) in [
            ("tasks.project", &config.tasks.project),
            ("tasks.location", &config.tasks.location),
            ("tasks.queue", &config.tasks.queue),
        ] {
            if value.trim().is_empty() {
                errors.push(ConfigError::Validation {
                    message: format!("{key} must be set when tasks.backend is cloud-tasks"),
                });
            }
        }

        if config.tasks.api_base.trim().is_empty() {
            errors.push(ConfigError::Validation {
                message: "tasks.api_base must not be empty".to_string(),
            });
        }

        let has_public_url = config
            .server
            .public_base_url
            .as_deref()
            .is_some_and(|url| !url.trim().is_empty());
        if !has_public_url {
            errors.push(ConfigError::Validation {
                message: "server.public_base_url must be set when tasks.backend is cloud-tasks"
                    .to_string(),
            });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
