// SPDX-FileCopyrightText: 2026 Dolbom Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `dolbom serve` command implementation.
//!
//! Wires the Gemini client, task dispatcher, and callback client into the
//! relay server, then runs it until a shutdown signal arrives.

use dolbom_config::DolbomConfig;
use dolbom_core::DolbomError;
use dolbom_gemini::GeminiClient;
use dolbom_server::{start_server, AppState, CallbackClient};
use dolbom_tasks::build_dispatcher;
use tracing::{error, info};

use crate::shutdown;

/// Runs the `dolbom serve` command.
pub async fn run_serve(config: DolbomConfig) -> Result<(), DolbomError> {
    init_tracing(&config.server.log_level);

    info!(version = env!("CARGO_PKG_VERSION"), "starting dolbom serve");

    let gemini = GeminiClient::new(&config.gemini).map_err(|e| {
        error!(error = %e, "failed to initialize Gemini client");
        eprintln!(
            "error: Gemini API key required. Set gemini.api_key in config or the \
             GEMINI_API_KEY environment variable."
        );
        e
    })?;
    info!(model = gemini.model(), "gemini client ready");

    let processor_url = processor_url(&config);
    let dispatcher = build_dispatcher(&config.tasks, processor_url.clone())?;
    info!(
        backend = config.tasks.backend.as_str(),
        target = processor_url.as_str(),
        "task dispatcher ready"
    );

    let callback = CallbackClient::new()?;

    let state = AppState {
        gemini,
        dispatcher,
        callback,
    };

    let cancel = shutdown::install_signal_handler();
    start_server(&config.server.host, config.server.port, state, cancel).await?;

    info!("dolbom serve shutdown complete");
    Ok(())
}

/// Resolves the absolute URL the dispatch backend posts jobs to.
///
/// Cloud Tasks reaches the processor over the public internet, so the
/// configured public base URL wins when present. The loopback fallback only
/// suits the in-process http backend.
fn processor_url(config: &DolbomConfig) -> String {
    match &config.server.public_base_url {
        Some(base) => format!("{}/api/process-job", base.trim_end_matches('/')),
        None => format!("http://127.0.0.1:{}/api/process-job", config.server.port),
    }
}

/// Initializes the tracing subscriber with the given log level.
fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "dolbom={lvl},dolbom_config={lvl},dolbom_gemini={lvl},dolbom_tasks={lvl},dolbom_server={lvl},tower_http={lvl},warn",
            lvl = log_level
        ))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_names(false)
        .init();
}
