//! Axum router assembly.

use axum::Router;
use axum::middleware;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use assethub_app::ports::AssetRepository;

use crate::correlation;
use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Nests API routes under `/api`. Includes a [`TraceLayer`] that logs each
/// HTTP request/response using the `tracing` ecosystem, wrapped by the
/// correlation-id middleware so every log line carries the request's id.
pub fn build<R>(state: AppState<R>) -> Router
where
    R: AssetRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .nest("/api", crate::api::routes())
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(correlation::propagate))
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
