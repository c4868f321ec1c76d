// SPDX-FileCopyrightText: 2026 Dolbom Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `dolbom config` subcommand implementations.
//!
//! `show` prints the effective merged configuration with secrets masked.
//! `init` writes a commented starter file to the user config directory.

use dolbom_config::DolbomConfig;
use dolbom_core::DolbomError;

/// Starter configuration written by `dolbom config init`. Every key is
/// commented out so the file documents the defaults without pinning them.
const CONFIG_TEMPLATE: &str = r#"# Dolbom relay configuration.
#
# Values omitted here fall back to built-in defaults. Every key can also be
# set through the environment as DOLBOM_<SECTION>_<KEY>, for example
# DOLBOM_SERVER_PORT=9090.

[server]
# host = "0.0.0.0"
# port = 8080
# Externally reachable base URL of this service. Required for the
# cloud-tasks backend so the queue can call /api/process-job.
# public_base_url = "https://relay.example.com"
# log_level = "info"

[gemini]
# Prefer the GEMINI_API_KEY environment variable over storing the key here.
# api_key = ""
# model = "gemini-2.5-flash"
# wait_timeout_ms = 3500
# answer_timeout_ms = 25000

[tasks]
# Dispatch backend: "http" posts jobs straight to this server's processor
# endpoint, "cloud-tasks" enqueues them through a Google Cloud Tasks queue.
# backend = "http"
# Cloud Tasks queue coordinates, used when backend = "cloud-tasks".
# project = "my-gcp-project"
# location = "asia-northeast3"
# queue = "consult-jobs"
# auth_token = ""
"#;

/// Runs `dolbom config show`.
pub fn run_config_show(config: &DolbomConfig) -> Result<(), DolbomError> {
    let rendered = toml::to_string_pretty(&config.redacted())
        .map_err(|e| DolbomError::Internal(format!("failed to render config: {e}")))?;
    print!("{rendered}");
    Ok(())
}

/// Runs `dolbom config init`.
pub fn run_config_init(force: bool) -> Result<(), DolbomError> {
    let Some(config_dir) = dirs::config_dir() else {
        return Err(DolbomError::Internal(
            "could not determine the user config directory".to_string(),
        ));
    };
    let dir = config_dir.join("dolbom");
    let path = dir.join("dolbom.toml");

    if path.exists() && !force {
        return Err(DolbomError::Config(format!(
            "{} already exists (pass --force to overwrite)",
            path.display()
        )));
    }

    std::fs::create_dir_all(&dir)
        .map_err(|e| DolbomError::Internal(format!("failed to create {}: {e}", dir.display())))?;
    std::fs::write(&path, CONFIG_TEMPLATE)
        .map_err(|e| DolbomError::Internal(format!("failed to write {}: {e}", path.display())))?;

    println!("wrote {}", path.display());
    Ok(())
}
