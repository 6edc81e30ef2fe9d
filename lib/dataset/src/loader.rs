//! Profile batch loading and validation.
//!
//! The similarity engine assumes every profile in a batch declares the same
//! non-empty trait-name set; this module enforces that contract before the
//! engine is invoked.

use std::fs;
use std::path::Path;

use thiserror::Error;
use traitsim_core::Profile;

pub type Result<T> = std::result::Result<T, DatasetError>;

#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("Profile batch cannot be empty")]
    EmptyBatch,

    #[error("Duplicate profile id: {0}")]
    DuplicateId(String),

    #[error("Profile '{0}' declares no traits")]
    EmptyTraitSet(String),

    #[error("Profile '{id}' does not share the batch trait set")]
    TraitSetMismatch { id: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Load and validate a profile batch from a JSON file.
///
/// Expects a JSON array of `{"id", "name", "scores"}` records.
pub fn load_profiles(path: impl AsRef<Path>) -> Result<Vec<Profile>> {
    let contents = fs::read_to_string(path)?;
    profiles_from_json(&contents)
}

/// Parse and validate a profile batch from a JSON string.
pub fn profiles_from_json(json: &str) -> Result<Vec<Profile>> {
    let profiles: Vec<Profile> = serde_json::from_str(json)?;
    validate_batch(&profiles)?;
    Ok(profiles)
}

/// Validate a profile batch for use with the similarity engine.
///
/// Checks that the batch is non-empty, ids are unique, and every profile
/// declares exactly the same non-empty trait-name set as the first one. A
/// mismatch is a data-integrity defect in the input, reported immediately
/// rather than computed around.
pub fn validate_batch(profiles: &[Profile]) -> Result<()> {
    let first = profiles.first().ok_or(DatasetError::EmptyBatch)?;
    if first.scores.is_empty() {
        return Err(DatasetError::EmptyTraitSet(first.id.clone()));
    }

    let mut seen = std::collections::HashSet::with_capacity(profiles.len());
    for profile in profiles {
        if !seen.insert(profile.id.as_str()) {
            return Err(DatasetError::DuplicateId(profile.id.clone()));
        }
        if profile.scores.is_empty() {
            return Err(DatasetError::EmptyTraitSet(profile.id.clone()));
        }
        if !first.shares_trait_set(profile) {
            return Err(DatasetError::TraitSetMismatch {
                id: profile.id.clone(),
            });
        }
    }
    Ok(())
}
