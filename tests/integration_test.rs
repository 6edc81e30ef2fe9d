// Integration tests for traitsim
use traitsim_core::{pair_similarity, SimilarityMatrix};
use traitsim_dataset::{demo_profiles, profiles_from_json};
use traitsim_report::{render_matrix, render_neighbors, render_pair_rankings};

#[test]
fn test_demo_batch_end_to_end() {
    let profiles = demo_profiles().unwrap();
    let matrix = SimilarityMatrix::build(&profiles).unwrap();

    assert_eq!(matrix.len(), 8);

    // Diagonal pinned, everything else symmetric and in range.
    for a in matrix.ids().to_vec() {
        assert_eq!(matrix.score(&a, &a).unwrap(), 100.0);
        for b in matrix.ids().to_vec() {
            let ab = matrix.score(&a, &b).unwrap();
            let ba = matrix.score(&b, &a).unwrap();
            assert_eq!(ab, ba);
            assert!((0.0..=100.0).contains(&ab));
        }
    }
}

#[test]
fn test_demo_rankings_are_complete() {
    let profiles = demo_profiles().unwrap();
    let matrix = SimilarityMatrix::build(&profiles).unwrap();

    let pairs = matrix.rank_pairs();
    assert_eq!(pairs.len(), 8 * 7 / 2);
    for window in pairs.windows(2) {
        assert!(window[0].score >= window[1].score);
    }

    for id in matrix.ids() {
        let neighbors = matrix.neighbors(id).unwrap();
        assert_ne!(&neighbors.nearest.id, id);
        assert_ne!(&neighbors.farthest.id, id);
        assert!(neighbors.nearest.score >= neighbors.farthest.score);
    }
}

#[test]
fn test_matrix_matches_pairwise_metric() {
    let profiles = demo_profiles().unwrap();
    let matrix = SimilarityMatrix::build(&profiles).unwrap();

    for a in &profiles {
        for b in &profiles {
            if a.id == b.id {
                continue;
            }
            let direct = pair_similarity(a, b).unwrap().blended * 100.0;
            assert_eq!(matrix.score(&a.id, &b.id).unwrap(), direct);
        }
    }
}

#[test]
fn test_json_batch_to_report() {
    let json = r#"[
        {"id": "a", "name": "Alpha", "scores": {"trust": 0.9, "pace": 0.8}},
        {"id": "b", "name": "Beta", "scores": {"trust": 0.85, "pace": 0.8}},
        {"id": "c", "name": "Gamma", "scores": {"trust": 0.1, "pace": 0.2}}
    ]"#;
    let profiles = profiles_from_json(json).unwrap();
    let matrix = SimilarityMatrix::build(&profiles).unwrap();

    // Alpha's nearest neighbor is the near-identical Beta.
    let neighbors = matrix.neighbors("a").unwrap();
    assert_eq!(neighbors.nearest.id, "b");
    assert_eq!(neighbors.farthest.id, "c");

    let table = render_matrix(&matrix);
    assert!(table.contains("Alpha"));

    let summary = render_neighbors(&matrix).unwrap();
    assert!(summary.contains("most similar:  Beta"));

    let rankings = render_pair_rankings(&matrix, 2);
    assert!(rankings.contains("Top 2 most similar pairs:"));
}

#[test]
fn test_library_facade_reexports() {
    use traitsim::prelude::*;

    let profiles = vec![
        Profile::new(
            "x",
            "X",
            [("trust".to_string(), 0.8), ("pace".to_string(), 0.9)],
        ),
        Profile::new(
            "y",
            "Y",
            [("trust".to_string(), 0.2), ("pace".to_string(), 0.3)],
        ),
    ];
    let matrix = SimilarityMatrix::build(&profiles).unwrap();
    assert_eq!(matrix.neighbors("x").unwrap().nearest.id, "y");
}
