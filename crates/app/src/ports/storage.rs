//! Storage port: repository trait for persisting registered assets.

use std::future::Future;

use assethub_domain::asset::RegisteredAsset;
use assethub_domain::error::AssetHubError;
use assethub_domain::id::AssetId;

/// Repository for persisting and querying [`RegisteredAsset`]s.
///
/// Implementations must store each record in isolation: two concurrent
/// `create` calls never overwrite one another.
pub trait AssetRepository {
    /// Persist a newly registered asset.
    fn create(
        &self,
        asset: RegisteredAsset,
    ) -> impl Future<Output = Result<RegisteredAsset, AssetHubError>> + Send;

    /// Get an asset by its unique identifier.
    fn get_by_id(
        &self,
        id: AssetId,
    ) -> impl Future<Output = Result<Option<RegisteredAsset>, AssetHubError>> + Send;

    /// Get every stored asset, ordered newest-first.
    fn get_all(&self) -> impl Future<Output = Result<Vec<RegisteredAsset>, AssetHubError>> + Send;
}

impl<T: AssetRepository + Send + Sync> AssetRepository for std::sync::Arc<T> {
    fn create(
        &self,
        asset: RegisteredAsset,
    ) -> impl Future<Output = Result<RegisteredAsset, AssetHubError>> + Send {
        (**self).create(asset)
    }

    fn get_by_id(
        &self,
        id: AssetId,
    ) -> impl Future<Output = Result<Option<RegisteredAsset>, AssetHubError>> + Send {
        (**self).get_by_id(id)
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<RegisteredAsset>, AssetHubError>> + Send {
        (**self).get_all()
    }
}
