//! # traitsim
//!
//! Blended similarity analysis for trait profiles.
//!
//! traitsim scores every pair of entities in a batch with a blended metric
//! (0.7 × cosine similarity + 0.3 × trait-count-normalized Euclidean
//! similarity), builds the full pairwise matrix, and derives nearest /
//! farthest neighbors and a global pair ranking from it.
//!
//! ## Quick Start
//!
//! ### As a CLI
//!
//! ```bash
//! cargo install traitsim
//! traitsim --top 5                       # bundled demo batch
//! traitsim --profiles my_profiles.json   # your own batch
//! ```
//!
//! ### As a Library
//!
//! ```rust
//! use traitsim::prelude::*;
//!
//! let profiles = demo_profiles().unwrap();
//! let matrix = SimilarityMatrix::build(&profiles).unwrap();
//!
//! let neighbors = matrix.neighbors("judy_hopps").unwrap();
//! println!("closest to Judy: {}", neighbors.nearest.name);
//!
//! for pair in matrix.rank_pairs().iter().take(5) {
//!     println!("{} <-> {}: {:.1}%", pair.left_name, pair.right_name, pair.score);
//! }
//! ```
//!
//! ## Crate Structure
//!
//! traitsim is composed of several crates:
//!
//! - `traitsim-core` - Profiles, the blended metric, the similarity matrix, rankings
//! - `traitsim-dataset` - JSON batch loading, validation, and the bundled demo batch
//! - `traitsim-report` - Plain-text report rendering

// Re-export core types
pub use traitsim_core::{
    pair_similarity, Error, NeighborScore, Neighbors, Profile, RankedPair, Result,
    SimilarityMatrix, SimilarityScore, COSINE_WEIGHT, EUCLIDEAN_WEIGHT, SELF_SIMILARITY,
};

// Re-export dataset loading
pub use traitsim_dataset::{
    demo_profiles, load_profiles, profiles_from_json, validate_batch, DatasetError,
};

// Re-export report rendering
pub use traitsim_report::{render_matrix, render_neighbors, render_pair_rankings};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        demo_profiles, load_profiles, pair_similarity, profiles_from_json, render_matrix,
        render_neighbors, render_pair_rankings, validate_batch, DatasetError, Error,
        NeighborScore, Neighbors, Profile, RankedPair, Result, SimilarityMatrix,
        SimilarityScore,
    };
}
