//! Field checks applied to asset submissions.
//!
//! The rules are intentionally shallow: an empty result does not mean the
//! record is well-formed, only that no rule fired. Every check is a single
//! bounded scan over its input.

use crate::asset::AssetSubmission;
use crate::error::ValidationError;

/// Longest accepted asset name, in characters.
pub const MAX_ASSET_NAME_LEN: usize = 128;

/// Punctuation accepted in asset names besides alphanumerics and spaces.
const NAME_PUNCTUATION: &[char] = &['-', '_', '.', '/', '#', '(', ')'];

/// Validate a raw submission.
///
/// Absent fields and empty strings are treated alike.
#[must_use]
pub fn validate_submission(submission: &AssetSubmission) -> Vec<ValidationError> {
    validate_fields(
        submission.asset_name.as_deref(),
        submission.asset_type.as_deref(),
    )
}

/// Validate the fields that carry rules, reporting the name check first.
#[must_use]
pub fn validate_fields(asset_name: Option<&str>, asset_type: Option<&str>) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if asset_name.is_some_and(|name| !name.is_empty() && is_malformed_name(name)) {
        errors.push(ValidationError::InvalidAssetName);
    }

    if asset_type.is_none_or(str::is_empty) {
        errors.push(ValidationError::MissingAssetType);
    }

    errors
}

/// A name is malformed when it is too long, blank, or holds a character
/// outside the allow-list. Stops at the first offending character.
fn is_malformed_name(name: &str) -> bool {
    if name.len() > MAX_ASSET_NAME_LEN * 4 {
        return true;
    }

    let mut count = 0;
    let mut blank = true;
    for ch in name.chars() {
        count += 1;
        if count > MAX_ASSET_NAME_LEN || !is_allowed_name_char(ch) {
            return true;
        }
        if ch != ' ' {
            blank = false;
        }
    }
    blank
}

fn is_allowed_name_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == ' ' || NAME_PUNCTUATION.contains(&ch)
}
