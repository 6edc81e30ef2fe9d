//! The blended similarity metric.
//!
//! Combines cosine similarity (proportional trait balance, direction) with a
//! trait-count-normalized Euclidean similarity (absolute closeness,
//! magnitude). The blend is direction-dominant: profiles represent relative
//! trait emphasis more than absolute intensity.

use crate::error::{Error, Result};
use crate::profile::Profile;
use serde::Serialize;

/// Weight of cosine similarity in the blended score.
pub const COSINE_WEIGHT: f64 = 0.7;

/// Weight of Euclidean similarity in the blended score.
pub const EUCLIDEAN_WEIGHT: f64 = 0.3;

/// Self-similarity, as a percentage. Fixed by convention rather than
/// computed: the metric is degenerate for zero-magnitude vectors and the
/// diagonal is defined as maximal.
pub const SELF_SIMILARITY: f64 = 100.0;

/// Similarity between one ordered pair of profiles.
///
/// Symmetric component-wise: `pair_similarity(a, b)` equals
/// `pair_similarity(b, a)` exactly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SimilarityScore {
    /// dot(A,B) / (‖A‖·‖B‖), in `[0, 1]` for non-negative inputs.
    pub cosine: f64,
    /// 1 − (Euclidean distance / sqrt(trait count)), in `[0, 1]` for
    /// inputs in `[0, 1]`.
    pub euclidean: f64,
    /// 0.7·cosine + 0.3·euclidean.
    pub blended: f64,
}

/// Compute the blended similarity between two profiles.
///
/// Both profiles must declare exactly the same non-empty trait-name set;
/// anything else is a data-integrity defect surfaced as
/// [`Error::TraitSetMismatch`] rather than computed over the intersection.
/// An all-zero profile makes cosine similarity undefined and is reported as
/// [`Error::UndefinedMetric`] naming the offending profile; callers decide
/// whether to skip the entity or abort the batch.
///
/// Pure function of its two inputs. Traits are folded in sorted-name order,
/// so repeated calls are bit-identical.
pub fn pair_similarity(a: &Profile, b: &Profile) -> Result<SimilarityScore> {
    if a.scores.is_empty() || !a.shares_trait_set(b) {
        return Err(Error::TraitSetMismatch {
            left: a.id.clone(),
            right: b.id.clone(),
        });
    }

    let traits = a.sorted_trait_names();

    let (dot, mag_a_sq, mag_b_sq, diff_sq) = traits.iter().fold(
        (0.0f64, 0.0f64, 0.0f64, 0.0f64),
        |(dot, mag_a, mag_b, diff), name| {
            // Lookups cannot fail: the trait sets were just checked.
            let sa = a.scores[*name];
            let sb = b.scores[*name];
            let d = sa - sb;
            (dot + sa * sb, mag_a + sa * sa, mag_b + sb * sb, diff + d * d)
        },
    );

    if mag_a_sq == 0.0 {
        return Err(Error::UndefinedMetric(a.id.clone()));
    }
    if mag_b_sq == 0.0 {
        return Err(Error::UndefinedMetric(b.id.clone()));
    }

    let cosine = dot / (mag_a_sq.sqrt() * mag_b_sq.sqrt());
    let euclidean = 1.0 - diff_sq.sqrt() / (traits.len() as f64).sqrt();
    let blended = COSINE_WEIGHT * cosine + EUCLIDEAN_WEIGHT * euclidean;

    Ok(SimilarityScore {
        cosine,
        euclidean,
        blended,
    })
}
