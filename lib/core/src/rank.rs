//! Rankings derived from a similarity matrix.
//!
//! All rankings are read-only views: pure functions of the matrix with no
//! retained state, safe to call repeatedly and in any order. Ties break by
//! original input order so results are reproducible across runs.

use crate::error::{Error, Result};
use crate::matrix::SimilarityMatrix;

/// One counterpart entity with its blended score (percentage).
#[derive(Debug, Clone, PartialEq)]
pub struct NeighborScore {
    pub id: String,
    pub name: String,
    pub score: f64,
}

/// Nearest and farthest counterpart for one entity.
#[derive(Debug, Clone, PartialEq)]
pub struct Neighbors {
    pub nearest: NeighborScore,
    pub farthest: NeighborScore,
}

/// One unordered entity pair with its blended score (percentage).
#[derive(Debug, Clone, PartialEq)]
pub struct RankedPair {
    pub left_id: String,
    pub left_name: String,
    pub right_id: String,
    pub right_name: String,
    pub score: f64,
}

impl SimilarityMatrix {
    /// Nearest and farthest counterpart for `id`, excluding the self-entry.
    ///
    /// Requires at least 2 entities in the matrix. On a tie the entity that
    /// appears first in input order wins.
    pub fn neighbors(&self, id: &str) -> Result<Neighbors> {
        let row = self
            .position(id)
            .ok_or_else(|| Error::UnknownEntity(id.to_string()))?;
        if self.len() < 2 {
            return Err(Error::InsufficientEntities { found: self.len() });
        }

        let mut nearest: Option<(usize, f64)> = None;
        let mut farthest: Option<(usize, f64)> = None;
        for j in 0..self.len() {
            if j == row {
                continue;
            }
            let score = self.score_at(row, j);
            if nearest.map_or(true, |(_, best)| score > best) {
                nearest = Some((j, score));
            }
            if farthest.map_or(true, |(_, worst)| score < worst) {
                farthest = Some((j, score));
            }
        }

        // len() >= 2, so both are set.
        let (ni, ns) = nearest.ok_or(Error::InsufficientEntities { found: self.len() })?;
        let (fi, fs) = farthest.ok_or(Error::InsufficientEntities { found: self.len() })?;
        Ok(Neighbors {
            nearest: self.neighbor_at(ni, ns),
            farthest: self.neighbor_at(fi, fs),
        })
    }

    /// Every unordered pair of distinct entities, each exactly once, sorted
    /// by descending score.
    ///
    /// Pairs are enumerated `i < j` in input order, and the sort is stable,
    /// so equal scores keep that enumeration order.
    #[must_use]
    pub fn rank_pairs(&self) -> Vec<RankedPair> {
        let n = self.len();
        let mut pairs = Vec::with_capacity(n * n.saturating_sub(1) / 2);
        for i in 0..n {
            for j in (i + 1)..n {
                pairs.push(RankedPair {
                    left_id: self.ids()[i].clone(),
                    left_name: self.names()[i].clone(),
                    right_id: self.ids()[j].clone(),
                    right_name: self.names()[j].clone(),
                    score: self.score_at(i, j),
                });
            }
        }

        pairs.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        pairs
    }

    fn neighbor_at(&self, position: usize, score: f64) -> NeighborScore {
        NeighborScore {
            id: self.ids()[position].clone(),
            name: self.names()[position].clone(),
            score,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metric::pair_similarity;
    use crate::profile::Profile;

    fn five_traits(id: &str, values: [f64; 5]) -> Profile {
        Profile::new(
            id,
            id.to_uppercase(),
            [
                ("trust".to_string(), values[0]),
                ("lawfulness".to_string(), values[1]),
                ("pace".to_string(), values[2]),
                ("extraversion".to_string(), values[3]),
                ("idealism".to_string(), values[4]),
            ],
        )
    }

    fn sample_batch() -> Vec<Profile> {
        vec![
            five_traits("a", [0.8, 0.85, 0.9, 0.85, 0.9]),
            five_traits("b", [0.7, 0.8, 0.85, 0.8, 0.85]),
            five_traits("c", [0.15, 0.25, 0.5, 0.25, 0.1]),
        ]
    }

    #[test]
    fn test_neighbors_excludes_self() {
        let matrix = SimilarityMatrix::build(&sample_batch()).unwrap();
        let neighbors = matrix.neighbors("a").unwrap();
        assert_ne!(neighbors.nearest.id, "a");
        assert_ne!(neighbors.farthest.id, "a");
        assert_eq!(neighbors.nearest.id, "b");
        assert_eq!(neighbors.farthest.id, "c");
        assert!(neighbors.nearest.score > neighbors.farthest.score);
    }

    #[test]
    fn test_neighbors_requires_two_entities() {
        let matrix = SimilarityMatrix::build(&[five_traits("solo", [0.5; 5])]).unwrap();
        assert_eq!(
            matrix.neighbors("solo"),
            Err(Error::InsufficientEntities { found: 1 })
        );
    }

    #[test]
    fn test_neighbors_unknown_entity() {
        let matrix = SimilarityMatrix::build(&sample_batch()).unwrap();
        assert_eq!(
            matrix.neighbors("nobody"),
            Err(Error::UnknownEntity("nobody".to_string()))
        );
    }

    #[test]
    fn test_neighbors_agree_with_direct_pairwise() {
        let batch = sample_batch();
        let matrix = SimilarityMatrix::build(&batch).unwrap();
        let neighbors = matrix.neighbors(&batch[0].id).unwrap();

        // Recompute against each counterpart directly from the metric.
        let mut best: Option<(&Profile, f64)> = None;
        for other in &batch[1..] {
            let blended = pair_similarity(&batch[0], other).unwrap().blended * 100.0;
            if best.map_or(true, |(_, s)| blended > s) {
                best = Some((other, blended));
            }
        }
        let (direct_nearest, direct_score) = best.unwrap();
        assert_eq!(neighbors.nearest.id, direct_nearest.id);
        assert!((neighbors.nearest.score - direct_score).abs() < 1e-12);
    }

    #[test]
    fn test_neighbor_ties_break_by_input_order() {
        // b and c are identical, both equidistant from a.
        let batch = vec![
            five_traits("a", [0.8, 0.85, 0.9, 0.85, 0.9]),
            five_traits("b", [0.4, 0.5, 0.75, 0.6, 0.5]),
            five_traits("c", [0.4, 0.5, 0.75, 0.6, 0.5]),
        ];
        let matrix = SimilarityMatrix::build(&batch).unwrap();
        let neighbors = matrix.neighbors("a").unwrap();
        assert_eq!(neighbors.nearest.id, "b");
        assert_eq!(neighbors.farthest.id, "b");
    }

    #[test]
    fn test_rank_pairs_completeness() {
        let matrix = SimilarityMatrix::build(&sample_batch()).unwrap();
        let pairs = matrix.rank_pairs();
        assert_eq!(pairs.len(), 3); // n(n-1)/2 for n = 3

        let mut seen: Vec<(String, String)> = pairs
            .iter()
            .map(|p| (p.left_id.clone(), p.right_id.clone()))
            .collect();
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), 3, "each unordered pair exactly once");
    }

    #[test]
    fn test_rank_pairs_sorted_non_increasing() {
        let matrix = SimilarityMatrix::build(&sample_batch()).unwrap();
        let pairs = matrix.rank_pairs();
        for window in pairs.windows(2) {
            assert!(window[0].score >= window[1].score);
        }
    }

    #[test]
    fn test_rank_pairs_restartable() {
        let matrix = SimilarityMatrix::build(&sample_batch()).unwrap();
        assert_eq!(matrix.rank_pairs(), matrix.rank_pairs());
    }

    #[test]
    fn test_rank_pairs_ties_keep_enumeration_order() {
        // Two identical profiles twice over: (a,b) and (c,d) tie at 100,
        // and all cross pairs tie with each other.
        let batch = vec![
            five_traits("a", [0.9, 0.9, 0.9, 0.9, 0.9]),
            five_traits("b", [0.9, 0.9, 0.9, 0.9, 0.9]),
            five_traits("c", [0.2, 0.3, 0.4, 0.3, 0.2]),
            five_traits("d", [0.2, 0.3, 0.4, 0.3, 0.2]),
        ];
        let matrix = SimilarityMatrix::build(&batch).unwrap();
        let pairs = matrix.rank_pairs();
        assert_eq!(pairs.len(), 6);

        // The two identical pairs tie for first; (a,b) enumerates earlier.
        assert_eq!((pairs[0].left_id.as_str(), pairs[0].right_id.as_str()), ("a", "b"));
        assert_eq!((pairs[1].left_id.as_str(), pairs[1].right_id.as_str()), ("c", "d"));
    }
}
