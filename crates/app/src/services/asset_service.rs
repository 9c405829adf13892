//! Asset service: intake and registration use-cases.

use assethub_domain::asset::{Asset, AssetSubmission, RegisteredAsset};
use assethub_domain::error::{AssetHubError, NotFoundError, ValidationErrors};
use assethub_domain::id::AssetId;
use assethub_domain::time;

use crate::ports::AssetRepository;

/// How many validation errors a submission may carry and still be registered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidationPolicy {
    pub max_tolerated_errors: usize,
}

impl ValidationPolicy {
    /// Reject any submission with at least one error.
    pub const STRICT: Self = Self {
        max_tolerated_errors: 0,
    };

    #[must_use]
    pub fn tolerates(&self, errors: &ValidationErrors) -> bool {
        errors.len() <= self.max_tolerated_errors
    }
}

/// Application service for registering and reading assets.
pub struct AssetService<R> {
    repo: R,
    policy: ValidationPolicy,
}

impl<R: AssetRepository> AssetService<R> {
    /// Create a new service backed by the given repository, rejecting any
    /// submission that fails validation.
    pub fn new(repo: R) -> Self {
        Self {
            repo,
            policy: ValidationPolicy::STRICT,
        }
    }

    /// Replace the validation policy.
    #[must_use]
    pub fn with_policy(mut self, policy: ValidationPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// The policy applied by [`submit`](Self::submit).
    pub fn policy(&self) -> ValidationPolicy {
        self.policy
    }

    /// Validate a raw submission and register it when the policy allows.
    ///
    /// # Errors
    ///
    /// Returns [`AssetHubError::Validation`] carrying every rule violation
    /// when there are more than the policy tolerates, or a storage error
    /// propagated from the repository.
    #[tracing::instrument(skip(self, submission))]
    pub async fn submit(
        &self,
        submission: AssetSubmission,
    ) -> Result<RegisteredAsset, AssetHubError> {
        let errors = submission.validate();
        if !self.policy.tolerates(&errors) {
            tracing::debug!(count = errors.len(), %errors, "asset submission rejected");
            return Err(errors.into());
        }
        if !errors.is_empty() {
            tracing::warn!(count = errors.len(), %errors, "registering asset despite validation errors");
        }
        self.register_asset(submission.into_asset()).await
    }

    /// Stamp an asset with a fresh id and creation time, then store it.
    ///
    /// No rule is checked here; callers go through [`submit`](Self::submit)
    /// for validation.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self, asset), fields(asset_type = %asset.asset_type))]
    pub async fn register_asset(&self, asset: Asset) -> Result<RegisteredAsset, AssetHubError> {
        let registered = RegisteredAsset::stamp(asset, time::now());
        let stored = self.repo.create(registered).await?;
        tracing::info!(asset_id = %stored.id, "asset registered");
        Ok(stored)
    }

    /// Look up an asset by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`AssetHubError::NotFound`] when no asset with `id` exists,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn get_asset(&self, id: AssetId) -> Result<RegisteredAsset, AssetHubError> {
        self.repo.get_by_id(id).await?.ok_or_else(|| {
            NotFoundError {
                entity: "Asset",
                id: id.to_string(),
            }
            .into()
        })
    }

    /// List all registered assets, newest first.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_assets(&self) -> Result<Vec<RegisteredAsset>, AssetHubError> {
        self.repo.get_all().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assethub_domain::error::ValidationError;
    use std::collections::HashMap;
    use std::future::Future;
    use std::sync::Mutex;

    #[derive(Default)]
    struct InMemoryAssetRepo {
        store: Mutex<HashMap<AssetId, RegisteredAsset>>,
    }

    impl AssetRepository for InMemoryAssetRepo {
        fn create(
            &self,
            asset: RegisteredAsset,
        ) -> impl Future<Output = Result<RegisteredAsset, AssetHubError>> + Send {
            let mut store = self.store.lock().unwrap();
            store.insert(asset.id, asset.clone());
            async { Ok(asset) }
        }

        fn get_by_id(
            &self,
            id: AssetId,
        ) -> impl Future<Output = Result<Option<RegisteredAsset>, AssetHubError>> + Send {
            let store = self.store.lock().unwrap();
            let result = store.get(&id).cloned();
            async { Ok(result) }
        }

        fn get_all(
            &self,
        ) -> impl Future<Output = Result<Vec<RegisteredAsset>, AssetHubError>> + Send {
            let store = self.store.lock().unwrap();
            let mut result: Vec<RegisteredAsset> = store.values().cloned().collect();
            result.sort_by(|a, b| b.created_at.cmp(&a.created_at));
            async { Ok(result) }
        }
    }

    struct FailingAssetRepo;

    impl AssetRepository for FailingAssetRepo {
        async fn create(&self, _asset: RegisteredAsset) -> Result<RegisteredAsset, AssetHubError> {
            Err(AssetHubError::Storage("connection refused".into()))
        }

        async fn get_by_id(&self, _id: AssetId) -> Result<Option<RegisteredAsset>, AssetHubError> {
            Err(AssetHubError::Storage("connection refused".into()))
        }

        async fn get_all(&self) -> Result<Vec<RegisteredAsset>, AssetHubError> {
            Err(AssetHubError::Storage("connection refused".into()))
        }
    }

    fn make_service() -> AssetService<InMemoryAssetRepo> {
        AssetService::new(InMemoryAssetRepo::default())
    }

    fn laptop_submission() -> AssetSubmission {
        AssetSubmission {
            asset_name: Some("ThinkPad X1".to_string()),
            asset_type: Some("laptop".to_string()),
            serial_number: Some("SN-0042".to_string()),
            purchase_date: Some("2024-03-01".to_string()),
            asset_status: Some("in_use".to_string()),
            assigned_to: Some("alice".to_string()),
            department: Some("engineering".to_string()),
        }
    }

    #[tokio::test]
    async fn should_register_asset_when_submission_valid() {
        let svc = make_service();
        let submission = laptop_submission();

        let registered = svc.submit(submission.clone()).await.unwrap();

        assert_eq!(registered.asset, submission.into_asset());
        let fetched = svc.get_asset(registered.id).await.unwrap();
        assert_eq!(fetched, registered);
    }

    #[tokio::test]
    async fn should_reject_submission_when_type_missing() {
        let svc = make_service();
        let mut submission = laptop_submission();
        submission.asset_type = None;

        let result = svc.submit(submission).await;

        match result {
            Err(AssetHubError::Validation(errors)) => {
                assert_eq!(errors.len(), 1);
                assert!(errors.contains(ValidationError::MissingAssetType));
            }
            other => panic!("expected Validation, got {other:?}"),
        }
        assert!(svc.list_assets().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_carry_every_error_when_rejecting() {
        let svc = make_service();
        let submission = AssetSubmission {
            asset_name: Some("<bad>".to_string()),
            ..AssetSubmission::default()
        };

        let Err(AssetHubError::Validation(errors)) = svc.submit(submission).await else {
            panic!("expected Validation");
        };
        assert_eq!(
            errors.to_string(),
            "Invalid Asset Name., Asset Type is required."
        );
    }

    #[tokio::test]
    async fn should_register_despite_errors_when_policy_tolerates_them() {
        let svc = make_service().with_policy(ValidationPolicy {
            max_tolerated_errors: 1,
        });
        let mut submission = laptop_submission();
        submission.asset_type = None;

        let registered = svc.submit(submission).await.unwrap();
        assert_eq!(registered.asset.asset_type, "");
    }

    #[tokio::test]
    async fn should_reject_when_errors_exceed_tolerance() {
        let svc = make_service().with_policy(ValidationPolicy {
            max_tolerated_errors: 1,
        });
        let submission = AssetSubmission {
            asset_name: Some("bad;name".to_string()),
            ..AssetSubmission::default()
        };

        let result = svc.submit(submission).await;
        assert!(matches!(result, Err(AssetHubError::Validation(_))));
    }

    #[tokio::test]
    async fn should_stamp_distinct_ids_for_identical_assets() {
        let svc = make_service();
        let a = svc.submit(laptop_submission()).await.unwrap();
        let b = svc.submit(laptop_submission()).await.unwrap();

        assert_ne!(a.id, b.id);
        assert_eq!(svc.list_assets().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn should_return_not_found_when_asset_missing() {
        let svc = make_service();
        let result = svc.get_asset(AssetId::new()).await;
        assert!(matches!(result, Err(AssetHubError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_propagate_storage_error_when_repository_fails() {
        let svc = AssetService::new(FailingAssetRepo);
        let result = svc.submit(laptop_submission()).await;
        assert!(matches!(result, Err(AssetHubError::Storage(_))));
    }

    #[test]
    fn should_default_to_strict_policy() {
        let svc = make_service();
        assert_eq!(svc.policy(), ValidationPolicy::STRICT);
        assert!(!ValidationPolicy::STRICT.tolerates(&ValidationError::MissingAssetType.into()));
        assert!(ValidationPolicy::STRICT.tolerates(&ValidationErrors::default()));
    }
}
