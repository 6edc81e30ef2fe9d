//! Plain-text rendering of similarity analyses.
//!
//! Produces the three report sections consumed from the matrix: the
//! percentage table itself, the per-entity nearest/farthest summary, and
//! the global pair ranking. Output is plain text for terminals and logs.

use traitsim_core::{Result, SimilarityMatrix};

const NAME_WIDTH: usize = 18;
const CELL_WIDTH: usize = 10;

/// Render the full similarity matrix as a fixed-width percentage table.
///
/// One row and column per entity in input order, scores with one decimal
/// place, diagonal at 100.0.
#[must_use]
pub fn render_matrix(matrix: &SimilarityMatrix) -> String {
    let mut out = String::new();

    out.push_str(&format!("{:<width$}", "entity", width = NAME_WIDTH));
    for name in matrix.names() {
        out.push_str(&format!(
            "{:>width$}",
            truncate(name, CELL_WIDTH - 1),
            width = CELL_WIDTH
        ));
    }
    out.push('\n');
    out.push_str(&"-".repeat(NAME_WIDTH + CELL_WIDTH * matrix.len()));
    out.push('\n');

    for i in 0..matrix.len() {
        out.push_str(&format!(
            "{:<width$}",
            truncate(&matrix.names()[i], NAME_WIDTH - 1),
            width = NAME_WIDTH
        ));
        for j in 0..matrix.len() {
            out.push_str(&format!(
                "{:>width$.1}",
                matrix.score_at(i, j),
                width = CELL_WIDTH
            ));
        }
        out.push('\n');
    }

    out
}

/// Render each entity's nearest and farthest counterpart.
///
/// Fails like [`SimilarityMatrix::neighbors`] does when the matrix holds
/// fewer than 2 entities.
pub fn render_neighbors(matrix: &SimilarityMatrix) -> Result<String> {
    let mut out = String::new();

    for (id, name) in matrix.ids().iter().zip(matrix.names()) {
        let neighbors = matrix.neighbors(id)?;
        out.push_str(&format!("{}\n", name));
        out.push_str(&format!(
            "  most similar:  {} ({:.1}%)\n",
            neighbors.nearest.name, neighbors.nearest.score
        ));
        out.push_str(&format!(
            "  least similar: {} ({:.1}%)\n",
            neighbors.farthest.name, neighbors.farthest.score
        ));
    }

    Ok(out)
}

/// Render the top-N most similar and bottom-N least similar pairs.
///
/// `top_n` is clamped to the number of unordered pairs.
#[must_use]
pub fn render_pair_rankings(matrix: &SimilarityMatrix, top_n: usize) -> String {
    let pairs = matrix.rank_pairs();
    let n = top_n.min(pairs.len());
    let mut out = String::new();

    out.push_str(&format!("Top {} most similar pairs:\n", n));
    for (rank, pair) in pairs.iter().take(n).enumerate() {
        out.push_str(&format!(
            "{}. {} <-> {}: {:.1}%\n",
            rank + 1,
            pair.left_name,
            pair.right_name,
            pair.score
        ));
    }

    out.push_str(&format!("\nTop {} least similar pairs:\n", n));
    for (rank, pair) in pairs.iter().rev().take(n).enumerate() {
        out.push_str(&format!(
            "{}. {} <-> {}: {:.1}%\n",
            rank + 1,
            pair.left_name,
            pair.right_name,
            pair.score
        ));
    }

    out
}

fn truncate(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
