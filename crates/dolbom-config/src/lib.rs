// SPDX-FileCopyrightText: 2026 Dolbom Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration system for the Dolbom webhook relay.
//!
//! Provides TOML configuration parsing with strict validation (`deny_unknown_fields`),
//! XDG file hierarchy lookup, environment variable overrides, and Elm-style diagnostic
//! error rendering with typo suggestions.
//!
//! # Usage
//!
//! ```no_run
//! use dolbom_config::load_and_validate;
//!
//! let config = load_and_validate().expect("config errors");
//! println!("Listening on port {}", config.server.port);
//! ```

pub mod diagnostic;
pub mod loader;
pub mod model;
pub mod validation;

pub use diagnostic::{render_errors, ConfigError};
pub use loader::{load_config, load_config_from_path, load_config_from_str};
pub use model::{DolbomConfig, GeminiConfig, ServerConfig, TasksConfig};

/// Load configuration from the XDG hierarchy and validate it.
///
/// This is the high-level entry point that:
/// 1. Loads config from TOML files + env vars via Figment
/// 2. On success: runs post-deserialization validation
/// 3. On Figment error: converts to rich miette diagnostics with typo suggestions
///
/// Returns either a valid `DolbomConfig` or a list of diagnostic errors.
pub fn load_and_validate() -> Result<DolbomConfig, Vec<ConfigError>> {
    match loader::load_config() {
        Ok(config) => {
            validation::validate_config(&config)?;
            Ok(config)
        }
        Err(err) => Err(diagnostic::figment_to_config_errors(err)),
    }
}

/// Load configuration from a specific file path and validate it.
///
/// Used when the config file location is given explicitly, e.g. via `--config`.
pub fn load_and_validate_from_path(
    path: &std::path::Path,
) -> Result<DolbomConfig, Vec<ConfigError>> {
    match loader::load_config_from_path(path) {
        Ok(config) => {
            validation::validate_config(&config)?;
            Ok(config)
        }
        Err(err) => Err(diagnostic::figment_to_config_errors(err)),
    }
}

/// Load configuration from a specific TOML string and validate it.
///
/// Useful for testing and explicit configuration.
pub fn load_and_validate_str(toml_content: &str) -> Result<DolbomConfig, Vec<ConfigError>> {
    match loader::load_config_from_str(toml_content) {
        Ok(config) => {
            validation::validate_config(&config)?;
            Ok(config)
        }
        Err(err) => Err(diagnostic::figment_to_config_errors(err)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_yields_defaults() {
        let config = load_and_validate_str("").unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.tasks.backend, "http");
    }

    #[test]
    fn sections_override_defaults() {
        let config = load_and_validate_str(
            r#"
[server]
port = 9090
public_base_url = "https://relay.example.com"

[gemini]
api_key = "test-key"
wait_timeout_ms = 2500

[tasks]
backend = "cloud-tasks"
project = "dolbom-prod"
location = "asia-northeast3"
queue = "consult-jobs"
auth_token = "ya29.token"
"#,
        )
        .unwrap();
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.gemini.wait_timeout_ms, 2500);
        assert_eq!(config.tasks.backend, "cloud-tasks");
        assert_eq!(config.tasks.queue, "consult-jobs");
    }

    #[test]
    fn unknown_key_is_rejected_with_diagnostics() {
        let errors = load_and_validate_str("[server]\nprot = 9090\n").unwrap_err();
        assert!(errors
            .iter()
            .any(|e| matches!(e, ConfigError::UnknownKey { key, .. } if key == "prot")));
    }

    #[test]
    fn validation_errors_surface_through_entry_point() {
        let errors = load_and_validate_str("[tasks]\nbackend = \"rabbitmq\"\n").unwrap_err();
        assert!(errors
            .iter()
            .any(|e| matches!(e, ConfigError::Validation { message } if message.contains("backend"))));
    }

    #[test]
    fn load_from_path_reads_file() {
        use std::io::Write as _;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dolbom.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "[server]\nport = 3000").unwrap();

        let config = load_and_validate_from_path(&path).unwrap();
        assert_eq!(config.server.port, 3000);
    }
}
