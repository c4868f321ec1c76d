// SPDX-FileCopyrightText: 2026 Dolbom Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Relay HTTP server built on axum.
//!
//! Sets up routes, middleware, and shared state for the two relay endpoints
//! plus the health check.

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use dolbom_core::{DolbomError, TaskDispatcher};
use dolbom_gemini::GeminiClient;
use tokio_util::sync::CancellationToken;
use tower_http::trace::TraceLayer;

use crate::callback::CallbackClient;
use crate::handlers;

/// Shared state for axum request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Gemini client used for both wait-message and answer generation.
    pub gemini: GeminiClient,
    /// Backend carrying accepted jobs to the processor endpoint.
    pub dispatcher: Arc<dyn TaskDispatcher>,
    /// Client delivering final answers to platform callback URLs.
    pub callback: CallbackClient,
}

/// Builds the relay router:
/// - POST /skill (platform intake)
/// - POST /api/process-job (queue worker)
/// - GET /health
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/skill", post(handlers::post_skill))
        .route("/api/process-job", post(handlers::post_process_job))
        .route("/health", get(handlers::get_health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the relay HTTP server.
///
/// Binds to `host:port` and serves until the shutdown token fires, then
/// finishes in-flight requests and returns.
pub async fn start_server(
    host: &str,
    port: u16,
    state: AppState,
    shutdown: CancellationToken,
) -> Result<(), DolbomError> {
    let app = build_router(state);

    let addr = format!("{host}:{port}");
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| DolbomError::Internal(format!("failed to bind relay to {addr}: {e}")))?;

    tracing::info!("Relay server listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(async move { shutdown.cancelled().await })
        .await
        .map_err(|e| DolbomError::Internal(format!("relay server error: {e}")))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use dolbom_config::GeminiConfig;
    use dolbom_core::Job;

    #[derive(Debug)]
    struct NoopDispatcher;

    #[async_trait]
    impl TaskDispatcher for NoopDispatcher {
        async fn submit(&self, _job: &Job) -> Result<(), DolbomError> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn router_builds_from_cloned_state() {
        let config = GeminiConfig {
            api_key: Some("test-key".into()),
            ..GeminiConfig::default()
        };
        let state = AppState {
            gemini: GeminiClient::new(&config).unwrap(),
            dispatcher: Arc::new(NoopDispatcher),
            callback: CallbackClient::new().unwrap(),
        };
        let _router = build_router(state.clone());
        let _router_again = build_router(state);
    }
}
