//! # traitsim Report
//!
//! Text rendering for traitsim similarity analyses: the percentage matrix
//! table, per-entity nearest/farthest summaries, and the global pair
//! ranking. Everything here is presentation; all scoring lives in
//! `traitsim-core`.

pub mod render;

pub use render::{render_matrix, render_neighbors, render_pair_rankings};
