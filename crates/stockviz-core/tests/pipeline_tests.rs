//! File-to-scene tests for the core pipeline

use pretty_assertions::assert_eq;
use std::io::Write;
use stockviz_core::{
    load_embeddings, DimensionReducer, EmbeddingMatrix, Pca, Scene, StockvizError,
};
use tempfile::NamedTempFile;

/// Helper to write an embedding file
fn embedding_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

const FOUR_STOCKS: &str = "AAA 1.0 2.0 3.0 4.0\n\
                           BBB 4.0 3.0 2.0 1.0\n\
                           CCC 2.0 2.0 2.0 2.0\n\
                           DDD 0.0 1.0 0.0 1.0\n";

#[test]
fn test_four_stocks_end_to_end() {
    let file = embedding_file(FOUR_STOCKS);

    let set = load_embeddings(file.path()).unwrap();
    assert_eq!(set.len(), 4);
    assert!(set.iter().all(|r| r.vector.len() == 4));

    let matrix = EmbeddingMatrix::from_set(set).unwrap();
    let projection = Pca::new().reduce(&matrix).unwrap();
    assert_eq!(projection.len(), 4);

    let mut mean = [0.0f64; 3];
    for p in &projection.points {
        for axis in 0..3 {
            mean[axis] += p.coordinates[axis] / 4.0;
        }
    }
    for axis in mean {
        assert!(axis.abs() < 1e-9, "coordinate mean should be ~0, got {}", axis);
    }

    let scene = Scene::from_points(&projection.points);
    assert_eq!(scene.labels(), vec!["AAA", "BBB", "CCC", "DDD"]);
}

#[test]
fn test_one_record_per_non_empty_line() {
    let file = embedding_file("X1 0.1 0.2 0.3 0.4 0.5\n\n   \nX2 1 2 3 4 5\nX3 -1 -2 -3 -4 -5\n");
    let set = load_embeddings(file.path()).unwrap();
    assert_eq!(set.identifiers(), vec!["X1", "X2", "X3"]);
    assert!(set.iter().all(|r| r.vector.len() == 5));
}

#[test]
fn test_malformed_line_stops_before_reduction() {
    let file = embedding_file("AAA 1.0 2.0 3.0\nEEE 1.0 foo 3.0\nCCC 1.0 1.0 1.0\n");
    let err = load_embeddings(file.path()).unwrap_err();
    match err {
        StockvizError::Parse { line, token, .. } => {
            assert_eq!(line, 2);
            assert_eq!(token, "foo");
        }
        other => panic!("expected parse error, got {:?}", other),
    }
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope.txt");
    let err = load_embeddings(&path).unwrap_err();
    assert!(matches!(err, StockvizError::FileNotFound { .. }));
}

#[test]
fn test_ragged_file_fails_at_matrix() {
    let file = embedding_file("A 1 2 3 4\nB 1 2 3\nC 1 2 3 4\n");
    let set = load_embeddings(file.path()).unwrap();
    let err = EmbeddingMatrix::from_set(set).unwrap_err();
    assert!(matches!(
        err,
        StockvizError::DimensionMismatch {
            line: 2,
            expected: 4,
            found: 3
        }
    ));
}

#[test]
fn test_two_records_insufficient() {
    let file = embedding_file("A 1 2 3 4\nB 4 3 2 1\n");
    let set = load_embeddings(file.path()).unwrap();
    let err = EmbeddingMatrix::from_set(set).unwrap_err();
    assert!(matches!(err, StockvizError::InsufficientData { found: 2, .. }));
}

#[test]
fn test_duplicate_identifiers_stay_independent() {
    let file = embedding_file("DUP 1 0 0\nDUP 0 1 0\nDUP 0 0 1\nONE 1 1 1\n");
    let set = load_embeddings(file.path()).unwrap();
    let matrix = EmbeddingMatrix::from_set(set).unwrap();
    let projection = Pca::new().reduce(&matrix).unwrap();
    let ids: Vec<&str> = projection
        .points
        .iter()
        .map(|p| p.identifier.as_str())
        .collect();
    assert_eq!(ids, vec!["DUP", "DUP", "DUP", "ONE"]);
}

#[test]
fn test_high_dimensional_embeddings() {
    // More dimensions than records, like real word2vec-style output
    let mut contents = String::new();
    for i in 0..6 {
        contents.push_str(&format!("S{}", i));
        for j in 0..50 {
            let v = ((i * 7 + j * 3) % 11) as f64 / 10.0 - 0.5;
            contents.push_str(&format!(" {:.3}", v));
        }
        contents.push('\n');
    }
    let file = embedding_file(&contents);

    let matrix = EmbeddingMatrix::from_set(load_embeddings(file.path()).unwrap()).unwrap();
    assert_eq!(matrix.dimensions(), 50);

    let projection = Pca::new().reduce(&matrix).unwrap();
    assert_eq!(projection.len(), 6);
    assert!(projection
        .points
        .iter()
        .all(|p| p.coordinates.iter().all(|c| c.is_finite())));
}
