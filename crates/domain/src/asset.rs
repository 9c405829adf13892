//! Asset: a piece of equipment tracked by the registry.
//!
//! Three shapes exist:
//! - [`AssetSubmission`]: the raw request shape, every field optional.
//! - [`Asset`]: the record handed to the registrar.
//! - [`RegisteredAsset`]: the stored form, stamped with an id and a
//!   creation time.

use std::fmt;

use serde::de::value::MapAccessDeserializer;
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{AssetHubError, ValidationErrors};
use crate::id::AssetId;
use crate::time::Timestamp;
use crate::validation;

/// An asset as submitted by a client.
///
/// Missing and `null` fields both deserialize to `None`. Fields not listed
/// here are ignored. Only a JSON object is accepted: arrays, scalars and
/// `null` are rejected before any field is read.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(remote = "Self", default)]
pub struct AssetSubmission {
    pub asset_name: Option<String>,
    pub asset_type: Option<String>,
    pub serial_number: Option<String>,
    pub purchase_date: Option<String>,
    pub asset_status: Option<String>,
    pub assigned_to: Option<String>,
    pub department: Option<String>,
}

impl AssetSubmission {
    /// Run every validation rule against this submission.
    #[must_use]
    pub fn validate(&self) -> ValidationErrors {
        ValidationErrors::new(validation::validate_submission(self))
    }

    /// Convert into an [`Asset`] without checking any rule.
    ///
    /// Absent text fields become empty strings.
    #[must_use]
    pub fn into_asset(self) -> Asset {
        Asset {
            asset_name: self.asset_name.unwrap_or_default(),
            asset_type: self.asset_type.unwrap_or_default(),
            serial_number: self.serial_number.unwrap_or_default(),
            purchase_date: self.purchase_date.unwrap_or_default(),
            asset_status: self.asset_status.unwrap_or_default(),
            assigned_to: self.assigned_to,
            department: self.department.unwrap_or_default(),
        }
    }
}

impl<'de> Deserialize<'de> for AssetSubmission {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(SubmissionVisitor)
    }
}

/// Accepts maps only, so positional (array) input never fills fields.
struct SubmissionVisitor;

impl<'de> Visitor<'de> for SubmissionVisitor {
    type Value = AssetSubmission;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a JSON object")
    }

    fn visit_map<A>(self, map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        AssetSubmission::deserialize(MapAccessDeserializer::new(map))
    }
}

/// The record handed to the registrar.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Asset {
    pub asset_name: String,
    pub asset_type: String,
    pub serial_number: String,
    pub purchase_date: String,
    pub asset_status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<String>,
    pub department: String,
}

impl Asset {
    /// Create a builder for constructing an [`Asset`].
    #[must_use]
    pub fn builder() -> AssetBuilder {
        AssetBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`AssetHubError::Validation`] listing every rule that failed.
    pub fn validate(&self) -> Result<(), AssetHubError> {
        let errors = validation::validate_fields(
            Some(self.asset_name.as_str()),
            Some(self.asset_type.as_str()),
        );
        if errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors::new(errors).into())
        }
    }
}

/// Step-by-step builder for [`Asset`].
#[derive(Debug, Default)]
pub struct AssetBuilder {
    inner: Asset,
}

impl AssetBuilder {
    #[must_use]
    pub fn asset_name(mut self, value: impl Into<String>) -> Self {
        self.inner.asset_name = value.into();
        self
    }

    #[must_use]
    pub fn asset_type(mut self, value: impl Into<String>) -> Self {
        self.inner.asset_type = value.into();
        self
    }

    #[must_use]
    pub fn serial_number(mut self, value: impl Into<String>) -> Self {
        self.inner.serial_number = value.into();
        self
    }

    #[must_use]
    pub fn purchase_date(mut self, value: impl Into<String>) -> Self {
        self.inner.purchase_date = value.into();
        self
    }

    #[must_use]
    pub fn asset_status(mut self, value: impl Into<String>) -> Self {
        self.inner.asset_status = value.into();
        self
    }

    #[must_use]
    pub fn assigned_to(mut self, value: impl Into<String>) -> Self {
        self.inner.assigned_to = Some(value.into());
        self
    }

    #[must_use]
    pub fn department(mut self, value: impl Into<String>) -> Self {
        self.inner.department = value.into();
        self
    }

    /// Consume the builder, validate, and return an [`Asset`].
    ///
    /// # Errors
    ///
    /// Returns [`AssetHubError::Validation`] if `asset_type` is missing or
    /// `asset_name` is malformed.
    pub fn build(self) -> Result<Asset, AssetHubError> {
        self.inner.validate()?;
        Ok(self.inner)
    }
}

/// An asset after registration.
///
/// Serializes as the flat asset fields plus `id` and `created_at`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisteredAsset {
    pub id: AssetId,
    #[serde(flatten)]
    pub asset: Asset,
    pub created_at: Timestamp,
}

impl RegisteredAsset {
    /// Stamp `asset` with a fresh id and the given creation time.
    #[must_use]
    pub fn stamp(asset: Asset, created_at: Timestamp) -> Self {
        Self {
            id: AssetId::new(),
            asset,
            created_at,
        }
    }
}
