use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// An entity's named vector of trait scores.
///
/// A profile is constructed once from static configuration and is read-only
/// for the lifetime of an analysis run. Trait values are conventionally
/// normalized to `[0, 1]`, but the metric does not require that range.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Profile {
    /// Unique entity identifier.
    pub id: String,
    /// Human-readable display name.
    pub name: String,
    /// Trait name to score.
    pub scores: AHashMap<String, f64>,
}

impl Profile {
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        scores: impl IntoIterator<Item = (String, f64)>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            scores: scores.into_iter().collect(),
        }
    }

    /// Number of traits in this profile.
    #[inline]
    #[must_use]
    pub fn dim(&self) -> usize {
        self.scores.len()
    }

    #[inline]
    #[must_use]
    pub fn score(&self, trait_name: &str) -> Option<f64> {
        self.scores.get(trait_name).copied()
    }

    /// Trait names in a deterministic (sorted) order.
    ///
    /// All metric computations iterate traits in this order, so results do
    /// not depend on hash-map iteration order.
    #[must_use]
    pub fn sorted_trait_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.scores.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Whether `other` declares exactly the same trait-name set.
    #[must_use]
    pub fn shares_trait_set(&self, other: &Profile) -> bool {
        self.scores.len() == other.scores.len()
            && self.scores.keys().all(|k| other.scores.contains_key(k))
    }
}
