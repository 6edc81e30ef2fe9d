//! Pairwise similarity matrix construction.

use crate::error::{Error, Result};
use crate::metric::{pair_similarity, SELF_SIMILARITY};
use crate::profile::Profile;
use ahash::AHashMap;

/// Complete table of blended similarity scores, as percentages `0–100`, for
/// every ordered pair of entities.
///
/// Entities keep the order they were supplied in; that input order is the
/// tie-break order for every ranking derived from the matrix. Diagonal
/// entries are pinned to [`SELF_SIMILARITY`]. Off-diagonal entries are
/// computed once per unordered pair and mirrored, so
/// `matrix[i][j] == matrix[j][i]` holds bit-exactly.
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarityMatrix {
    ids: Vec<String>,
    names: Vec<String>,
    index: AHashMap<String, usize>,
    cells: Vec<Vec<f64>>,
}

impl SimilarityMatrix {
    /// Build the full matrix for a batch of profiles.
    ///
    /// Requires at least one profile with a unique id; a single profile
    /// yields a 1×1 matrix holding `100.0`. Any pairwise error (zero
    /// magnitude, trait-set mismatch) aborts the whole build — a degenerate
    /// profile indicates bad input data, never a value to substitute.
    pub fn build(profiles: &[Profile]) -> Result<Self> {
        if profiles.is_empty() {
            return Err(Error::EmptyBatch);
        }

        let mut index = AHashMap::with_capacity(profiles.len());
        for (i, profile) in profiles.iter().enumerate() {
            if index.insert(profile.id.clone(), i).is_some() {
                return Err(Error::DuplicateId(profile.id.clone()));
            }
        }

        let n = profiles.len();
        let mut cells = vec![vec![0.0; n]; n];
        for (i, row) in cells.iter_mut().enumerate() {
            row[i] = SELF_SIMILARITY;
        }

        for i in 0..n {
            for j in (i + 1)..n {
                let score = pair_similarity(&profiles[i], &profiles[j])?;
                let pct = score.blended * 100.0;
                cells[i][j] = pct;
                cells[j][i] = pct;
            }
        }

        Ok(Self {
            ids: profiles.iter().map(|p| p.id.clone()).collect(),
            names: profiles.iter().map(|p| p.name.clone()).collect(),
            index,
            cells,
        })
    }

    /// Number of entities on each axis.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Entity ids in input order.
    #[inline]
    #[must_use]
    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    /// Display names in input order.
    #[inline]
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Position of an entity in the input order.
    #[inline]
    #[must_use]
    pub fn position(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    /// Blended score (percentage) for an ordered pair of entity ids.
    pub fn score(&self, a: &str, b: &str) -> Result<f64> {
        let i = self
            .position(a)
            .ok_or_else(|| Error::UnknownEntity(a.to_string()))?;
        let j = self
            .position(b)
            .ok_or_else(|| Error::UnknownEntity(b.to_string()))?;
        Ok(self.cells[i][j])
    }

    /// Score by input-order positions. Panics on out-of-range positions.
    #[inline]
    #[must_use]
    pub fn score_at(&self, i: usize, j: usize) -> f64 {
        self.cells[i][j]
    }
}
