//! Tests for the record layout.
//!
//! ## Test Organization
//!
//! 1. **Construction** - Flat buffers, rows, and the errors they raise
//! 2. **Record Views** - Target and feature blocks
//! 3. **Iteration** - Record ranges and target extraction

use knn_rs::prelude::*;

fn sample_rows() -> Vec<[f64; 5]> {
    vec![
        [1.0, 2.0, 3.0, 0.0, 0.5],
        [4.0, 5.0, 6.0, 1.0, 1.5],
        [7.0, 8.0, 9.0, 2.0, 2.5],
    ]
}

// ============================================================================
// Construction Tests
// ============================================================================

#[test]
fn test_dataset_from_flat_buffer() {
    let values = vec![1.0, 2.0, 3.0, 10.0, 4.0, 5.0, 6.0, 20.0];
    let data = Dataset::new(values, 4).unwrap();

    assert_eq!(data.len(), 2);
    assert!(!data.is_empty());
    assert_eq!(data.n_cols(), 4);
    assert_eq!(data.n_features(), 1);
}

#[test]
fn test_dataset_from_rows_matches_flat() {
    let rows = sample_rows();
    let from_rows = Dataset::from_rows(&rows).unwrap();

    let flat: Vec<f64> = rows.iter().flatten().copied().collect();
    let from_flat = Dataset::new(flat, 5).unwrap();

    assert_eq!(from_rows, from_flat);
}

#[test]
fn test_dataset_rejects_empty_input() {
    let rows: Vec<Vec<f64>> = Vec::new();
    assert_eq!(Dataset::from_rows(&rows), Err(KnnError::EmptyInput));
    assert_eq!(Dataset::<f64>::new(Vec::new(), 4), Err(KnnError::EmptyInput));
}

#[test]
fn test_dataset_rejects_too_few_columns() {
    let rows = vec![[1.0, 2.0, 3.0]];
    assert_eq!(
        Dataset::from_rows(&rows),
        Err(KnnError::TooFewColumns { got: 3, min: 4 })
    );
    assert_eq!(
        Dataset::new(vec![1.0, 2.0], 2),
        Err(KnnError::TooFewColumns { got: 2, min: 4 })
    );
}

#[test]
fn test_dataset_rejects_ragged_rows() {
    let rows = vec![vec![1.0, 2.0, 3.0, 4.0], vec![1.0, 2.0, 3.0, 4.0, 5.0]];
    assert_eq!(
        Dataset::from_rows(&rows),
        Err(KnnError::RaggedRows {
            row: 1,
            got: 5,
            expected: 4
        })
    );

    // Flat buffer whose length is not a multiple of the width
    let err = Dataset::new(vec![0.0; 9], 4).unwrap_err();
    assert!(matches!(err, KnnError::RaggedRows { row: 2, .. }));
}

#[test]
fn test_dataset_rejects_non_finite_values() {
    let rows = vec![[1.0, 2.0, 3.0, 4.0], [1.0, f64::NAN, 3.0, 4.0]];
    let err = Dataset::from_rows(&rows).unwrap_err();
    assert!(matches!(err, KnnError::InvalidNumericValue(_)));

    let rows = vec![[1.0, 2.0, 3.0, f64::INFINITY]];
    let err = Dataset::from_rows(&rows).unwrap_err();
    assert!(matches!(err, KnnError::InvalidNumericValue(_)));
}

#[test]
fn test_dataset_supports_f32() {
    let rows = vec![[1.0f32, 2.0, 3.0, 4.0], [5.0, 6.0, 7.0, 8.0]];
    let data = Dataset::from_rows(&rows).unwrap();
    assert_eq!(data.len(), 2);
    assert_eq!(data.record(1).features(), &[8.0f32]);
}

// ============================================================================
// Record View Tests
// ============================================================================

#[test]
fn test_record_blocks() {
    let data = Dataset::from_rows(&sample_rows()).unwrap();
    let r = data.record(1);

    assert_eq!(r.fields(), &[4.0, 5.0, 6.0, 1.0, 1.5]);
    assert_eq!(r.targets(), &[4.0, 5.0, 6.0]);
    assert_eq!(r.features(), &[1.0, 1.5]);
    assert_eq!(r.target_vector(), [4.0, 5.0, 6.0]);
    assert_eq!(r.as_ref(), r.fields());
}

#[test]
fn test_record_wraps_raw_slice() {
    let raw = [0.1, 0.2, 0.3, 9.0];
    let r = Record::new(&raw).unwrap();
    assert_eq!(r.targets(), &[0.1, 0.2, 0.3]);
    assert_eq!(r.features(), &[9.0]);
}

#[test]
fn test_record_rejects_short_row() {
    let targets_only = [9.0, 9.0, 9.0];
    assert_eq!(
        Record::new(&targets_only),
        Err(KnnError::TooFewColumns { got: 3, min: 4 })
    );

    let empty: [f64; 0] = [];
    assert_eq!(
        Record::new(&empty),
        Err(KnnError::TooFewColumns { got: 0, min: 4 })
    );
}

// ============================================================================
// Iteration Tests
// ============================================================================

#[test]
fn test_records_in_dataset_order() {
    let data = Dataset::from_rows(&sample_rows()).unwrap();
    let firsts: Vec<f64> = data.records().map(|r| r.targets()[0]).collect();
    assert_eq!(firsts, vec![1.0, 4.0, 7.0]);
    assert_eq!(data.records().len(), 3);
}

#[test]
fn test_records_in_range() {
    let data = Dataset::from_rows(&sample_rows()).unwrap();

    let middle: Vec<_> = data.records_in(1..3).map(|r| r.targets()[0]).collect();
    assert_eq!(middle, vec![4.0, 7.0]);

    assert_eq!(data.records_in(2..2).len(), 0);
    assert_eq!(data.rows(0..1), &[1.0, 2.0, 3.0, 0.0, 0.5]);
}

#[test]
fn test_dataset_targets() {
    let data = Dataset::from_rows(&sample_rows()).unwrap();
    assert_eq!(
        data.targets(),
        vec![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]
    );
}

#[test]
fn test_dataset_into_parts() {
    let data = Dataset::from_rows(&sample_rows()).unwrap();
    let flat = data.as_slice().to_vec();
    let (values, n_cols) = data.into_parts();
    assert_eq!(values, flat);
    assert_eq!(n_cols, 5);
}
