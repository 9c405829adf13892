//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`AssetHubError`] via `#[from]`.

use std::fmt;

/// Top-level error returned by domain and application operations.
#[derive(Debug, thiserror::Error)]
pub enum AssetHubError {
    /// The submission failed one or more validation rules.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),

    /// A lookup by id found nothing.
    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    /// The datastore failed.
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// A single rule violation. `Display` yields the caller-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Invalid Asset Name.")]
    InvalidAssetName,

    #[error("Asset Type is required.")]
    MissingAssetType,
}

/// Every rule violation found in a single submission, in rule order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(Vec<ValidationError>);

impl ValidationErrors {
    #[must_use]
    pub fn new(errors: Vec<ValidationError>) -> Self {
        Self(errors)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn contains(&self, error: ValidationError) -> bool {
        self.0.contains(&error)
    }

    /// Caller-facing messages, one per violation.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.0.iter().map(ToString::to_string).collect()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.messages().join(", "))
    }
}

impl std::error::Error for ValidationErrors {}

impl From<ValidationError> for ValidationErrors {
    fn from(err: ValidationError) -> Self {
        Self(vec![err])
    }
}

impl From<ValidationError> for AssetHubError {
    fn from(err: ValidationError) -> Self {
        Self::Validation(err.into())
    }
}

/// Returned when a record with the requested id does not exist.
#[derive(Debug, thiserror::Error)]
#[error("{entity} {id} not found")]
pub struct NotFoundError {
    pub entity: &'static str,
    pub id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_render_rule_messages_verbatim() {
        assert_eq!(
            ValidationError::MissingAssetType.to_string(),
            "Asset Type is required."
        );
        assert_eq!(
            ValidationError::InvalidAssetName.to_string(),
            "Invalid Asset Name."
        );
    }

    #[test]
    fn should_join_messages_with_comma() {
        let errors = ValidationErrors::new(vec![
            ValidationError::InvalidAssetName,
            ValidationError::MissingAssetType,
        ]);
        assert_eq!(
            errors.to_string(),
            "Invalid Asset Name., Asset Type is required."
        );
    }

    #[test]
    fn should_convert_single_error_into_domain_error() {
        let err: AssetHubError = ValidationError::MissingAssetType.into();
        match err {
            AssetHubError::Validation(errors) => {
                assert_eq!(errors.len(), 1);
                assert!(errors.contains(ValidationError::MissingAssetType));
            }
            other => panic!("expected Validation, got {other:?}"),
        }
    }

    #[test]
    fn should_format_not_found_with_entity_and_id() {
        let err = NotFoundError {
            entity: "Asset",
            id: "abc".to_string(),
        };
        assert_eq!(err.to_string(), "Asset abc not found");
    }
}
