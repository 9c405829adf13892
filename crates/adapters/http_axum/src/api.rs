//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod assets;

use axum::Router;
use axum::routing::get;

use assethub_app::ports::AssetRepository;

use crate::state::AppState;

/// Build the `/api` sub-router.
pub fn routes<R>() -> Router<AppState<R>>
where
    R: AssetRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/assets", get(assets::list::<R>).post(assets::create::<R>))
        .route("/assets/{id}", get(assets::get::<R>))
}
