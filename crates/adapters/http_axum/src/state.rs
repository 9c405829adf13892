//! Shared application state for axum handlers.

use std::sync::Arc;

use assethub_app::ports::AssetRepository;
use assethub_app::services::asset_service::AssetService;

/// Application state shared across all axum handlers.
///
/// Generic over the repository type to avoid dynamic dispatch.
/// `Clone` is implemented manually so the repository itself does not need
/// to be `Clone`; only the `Arc` wrapper is cloned.
pub struct AppState<R> {
    /// Asset intake and lookup service.
    pub asset_service: Arc<AssetService<R>>,
}

impl<R> Clone for AppState<R> {
    fn clone(&self) -> Self {
        Self {
            asset_service: Arc::clone(&self.asset_service),
        }
    }
}

impl<R> AppState<R>
where
    R: AssetRepository + Send + Sync + 'static,
{
    /// Create a new application state from a service instance.
    pub fn new(asset_service: AssetService<R>) -> Self {
        Self {
            asset_service: Arc::new(asset_service),
        }
    }
}
