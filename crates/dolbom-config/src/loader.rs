// SPDX-FileCopyrightText: 2026 Dolbom Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./dolbom.toml` > `~/.config/dolbom/dolbom.toml` > `/etc/dolbom/dolbom.toml`
//! with environment variable overrides via `DOLBOM_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use tracing::debug;

use crate::model::DolbomConfig;

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/dolbom/dolbom.toml` (system-wide)
/// 3. `~/.config/dolbom/dolbom.toml` (user XDG config)
/// 4. `./dolbom.toml` (local directory)
/// 5. `DOLBOM_*` environment variables
pub fn load_config() -> Result<DolbomConfig, figment::Error> {
    let user_config = dirs::config_dir()
        .map(|d| d.join("dolbom/dolbom.toml"))
        .unwrap_or_default();
    debug!(
        user_config = %user_config.display(),
        "loading config from the XDG hierarchy"
    );

    Figment::new()
        .merge(Serialized::defaults(DolbomConfig::default()))
        .merge(Toml::file("/etc/dolbom/dolbom.toml"))
        .merge(Toml::file(user_config))
        .merge(Toml::file("dolbom.toml"))
        .merge(env_provider())
        .extract()
}

/// Load configuration from a TOML string only (no XDG lookup, no env vars).
///
/// Used for testing and explicit config content.
pub fn load_config_from_str(toml_content: &str) -> Result<DolbomConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(DolbomConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<DolbomConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(DolbomConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Create the environment variable provider using explicit `map()` for section-to-dot mapping.
///
/// CRITICAL: Uses `Env::map()` NOT `Env::split("_")` to avoid ambiguity with
/// underscore-containing key names. For example, `DOLBOM_GEMINI_API_KEY` must
/// map to `gemini.api_key`, not `gemini.api.key`.
fn env_provider() -> Env {
    Env::prefixed("DOLBOM_").map(|key| {
        // `key` is the lowercased env var name with prefix stripped.
        // Example: DOLBOM_GEMINI_API_KEY -> "gemini_api_key"
        let key_str = key.as_str();
        let mapped = key_str
            .replacen("server_", "server.", 1)
            .replacen("gemini_", "gemini.", 1)
            .replacen("tasks_", "tasks.", 1);
        mapped.into()
    })
}
