//! # traitsim Core
//!
//! Core library for traitsim: a blended similarity engine for trait
//! profiles.
//!
//! This crate provides the fundamental data structures and algorithms:
//!
//! - [`Profile`] - An entity's named vector of trait scores
//! - [`pair_similarity`] - The blended cosine/Euclidean metric
//! - [`SimilarityMatrix`] - Complete pairwise score table
//! - [`Neighbors`] / [`RankedPair`] - Rankings derived from the matrix
//!
//! ## Example
//!
//! ```rust
//! use traitsim_core::{Profile, SimilarityMatrix};
//!
//! let profiles = vec![
//!     Profile::new("judy", "Judy", [
//!         ("trust".to_string(), 0.80),
//!         ("pace".to_string(), 0.90),
//!     ]),
//!     Profile::new("nick", "Nick", [
//!         ("trust".to_string(), 0.40),
//!         ("pace".to_string(), 0.75),
//!     ]),
//! ];
//!
//! let matrix = SimilarityMatrix::build(&profiles).unwrap();
//! assert_eq!(matrix.score("judy", "judy").unwrap(), 100.0);
//!
//! let neighbors = matrix.neighbors("judy").unwrap();
//! assert_eq!(neighbors.nearest.id, "nick");
//! ```
//!
//! The engine is stateless: every operation is a pure function of its
//! explicit inputs, so concurrent runs over independent inputs need no
//! locking discipline.

pub mod error;
pub mod matrix;
pub mod metric;
pub mod profile;
pub mod rank;

pub use error::{Error, Result};
pub use matrix::SimilarityMatrix;
pub use metric::{
    pair_similarity, SimilarityScore, COSINE_WEIGHT, EUCLIDEAN_WEIGHT, SELF_SIMILARITY,
};
pub use profile::Profile;
pub use rank::{NeighborScore, Neighbors, RankedPair};
