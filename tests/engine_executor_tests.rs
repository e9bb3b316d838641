//! Tests for sweep execution and the score table.
//!
//! ## Test Organization
//!
//! 1. **Table Layout** - Axes, lookups, panels, and series
//! 2. **Consistency** - Table slots equal the single-step pipeline
//! 3. **Degenerate Scores** - NaN slots are reported
//! 4. **Rendering** - Textual panels
//! 5. **Parallel Execution** - Identical results to the sequential run
//! 6. **Error Propagation** - The first failing combination aborts the sweep

use approx::assert_relative_eq;
use knn_rs::prelude::*;
use rand::prelude::*;
use rand_distr::Normal;

fn noisy_dataset(n: usize, seed: u64) -> Dataset<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let noise = Normal::new(0.0, 0.3).unwrap();

    let rows: Vec<[f64; 5]> = (0..n)
        .map(|i| {
            let a = i as f64 / n as f64;
            let b = ((i * 7) % n) as f64 / n as f64;
            [
                a + b + noise.sample(&mut rng),
                a - b + noise.sample(&mut rng),
                a * b + noise.sample(&mut rng),
                a,
                b,
            ]
        })
        .collect();
    Dataset::from_rows(&rows).unwrap()
}

// ============================================================================
// Table Layout Tests
// ============================================================================

#[test]
fn test_sweep_table_axes() {
    let data = noisy_dataset(20, 1);
    let table = Knn::new()
        .neighbours(&[1, 3, 5])
        .hold_outs(&[1, 4])
        .build()
        .unwrap()
        .run(&data)
        .unwrap();

    assert_eq!(table.ks(), &[1, 3, 5]);
    assert_eq!(table.hold_outs(), &[1, 4]);
    assert_eq!(table.n_records(), 20);
    assert_eq!(table.labels(), ["Total", "Cd", "Pb"]);
    assert_eq!(table.iter().count(), 6);
}

#[test]
fn test_sweep_table_lookup_and_panels() {
    let data = noisy_dataset(20, 2);
    let table = Knn::new()
        .neighbours(&[2, 4])
        .hold_outs(&[1, 3])
        .build()
        .unwrap()
        .run(&data)
        .unwrap();

    assert!(table.get(3, 1).is_none());
    assert!(table.get(2, 2).is_none());
    assert!(table.panel(2).is_none());
    assert!(table.series(1, TARGETS).is_none());

    let panel = table.panel(3).unwrap();
    for (c, series) in panel.iter().enumerate() {
        assert_eq!(series.len(), 2);
        assert_eq!(series[1], table.get(4, 3).unwrap()[c]);
        assert_eq!(&table.series(3, c).unwrap(), series);
    }
}

#[test]
fn test_sweep_iter_order_is_hold_out_major() {
    let data = noisy_dataset(15, 3);
    let table = Knn::new()
        .neighbours(&[1, 2, 3])
        .hold_outs(&[4, 1])
        .build()
        .unwrap()
        .run(&data)
        .unwrap();

    let axes: Vec<(usize, usize)> = table.iter().map(|(k, h, _)| (k, h)).collect();
    assert_eq!(
        axes,
        vec![(1, 4), (2, 4), (3, 4), (1, 1), (2, 1), (3, 1)]
    );
}

// ============================================================================
// Consistency Tests
// ============================================================================

#[test]
fn test_sweep_slots_match_single_steps() {
    let data = noisy_dataset(24, 4);
    let sweep = Knn::new()
        .neighbours(&[1, 2, 5, 10])
        .hold_outs(&[1, 4])
        .build()
        .unwrap();
    let table = sweep.run(&data).unwrap();

    for (k, h, scores) in table.iter() {
        let preds = sweep.cross_validate(&data, k, h).unwrap();
        let expected = sweep.score(&data, &preds).unwrap();
        for c in 0..TARGETS {
            assert_relative_eq!(scores[c], expected[c]);
        }

        let direct = c_index(&data.targets(), &validate(&data, k, h).unwrap()).unwrap();
        assert_eq!(scores, direct);
    }
}

#[test]
fn test_sweep_is_deterministic() {
    let data = noisy_dataset(18, 5);
    let sweep = Knn::new().neighbours(&[1, 3]).build().unwrap();
    assert_eq!(sweep.run(&data).unwrap(), sweep.run(&data).unwrap());
}

#[test]
fn test_sweep_respects_metric_and_weighting() {
    let data = noisy_dataset(20, 6);
    let sweep = Knn::new()
        .neighbours(&[3])
        .hold_outs(&[1])
        .distance_metric(Manhattan)
        .weighting(InverseDistance)
        .build()
        .unwrap();
    let table = sweep.run(&data).unwrap();

    let preds = CrossValidator::new(3, 1)
        .metric(Manhattan)
        .weighting(InverseDistance)
        .validate(&data)
        .unwrap();
    let expected = c_index(&data.targets(), &preds).unwrap();
    assert_eq!(table.get(3, 1).unwrap(), expected);
}

#[test]
fn test_sweep_predict() {
    let rows = vec![
        [1.0, 1.0, 1.0, 0.0],
        [3.0, 3.0, 3.0, 1.0],
        [9.0, 9.0, 9.0, 10.0],
    ];
    let data = Dataset::from_rows(&rows).unwrap();
    let sweep = Knn::new().build().unwrap();

    let query = [0.0, 0.0, 0.0, 0.4];
    let query = Record::new(&query).unwrap();
    assert_eq!(sweep.predict(&data, query, 2).unwrap(), [2.0, 2.0, 2.0]);

    let exact = [0.0, 0.0, 0.0, 10.0];
    let exact = Record::new(&exact).unwrap();
    assert_eq!(sweep.predict(&data, exact, 3).unwrap(), [9.0, 9.0, 9.0]);
}

// ============================================================================
// Degenerate Score Tests
// ============================================================================

#[test]
fn test_sweep_reports_degenerate_dimension() {
    // The Cd target is constant: no comparable pairs
    let rows: Vec<[f64; 4]> = (0..8)
        .map(|i| [i as f64, 1.0, (i % 3) as f64, i as f64])
        .collect();
    let data = Dataset::from_rows(&rows).unwrap();

    let table = Knn::new()
        .neighbours(&[1, 2])
        .hold_outs(&[1])
        .build()
        .unwrap()
        .run(&data)
        .unwrap();

    let degenerate = table.degenerate();
    assert_eq!(
        degenerate,
        vec![
            DegenerateScore {
                k: 1,
                hold_out: 1,
                dimension: 1
            },
            DegenerateScore {
                k: 2,
                hold_out: 1,
                dimension: 1
            },
        ]
    );
    let scores = table.get(1, 1).unwrap();
    assert!(scores[1].is_nan());
    assert!(scores[0].is_finite());
}

// ============================================================================
// Rendering Tests
// ============================================================================

#[test]
fn test_sweep_display_panels() {
    let data = noisy_dataset(12, 7);
    let table = Knn::new()
        .neighbours(&[1, 2])
        .build()
        .unwrap()
        .run(&data)
        .unwrap();

    let text = format!("{}", table);
    assert!(text.contains("Summary:"));
    assert!(text.contains("Records: 12"));
    assert!(text.contains("1-leave out cross-validation:"));
    assert!(text.contains("4-leave out cross-validation:"));
    assert!(text.contains("Total"));
    assert!(text.contains("Cd"));
    assert!(text.contains("Pb"));
}

#[test]
fn test_sweep_custom_labels() {
    let data = noisy_dataset(12, 8);
    let table = Knn::new()
        .neighbours(&[1])
        .hold_outs(&[1])
        .target_labels(["Zn", "Cu", "Ni"])
        .build()
        .unwrap()
        .run(&data)
        .unwrap();

    assert_eq!(table.labels(), ["Zn", "Cu", "Ni"]);
    let text = table.to_string();
    assert!(text.contains("Zn"));
    assert!(!text.contains("Total"));
}

// ============================================================================
// Parallel Execution Tests
// ============================================================================

#[test]
fn test_parallel_flag_matches_sequential() {
    // Without the `parallel` feature the flag falls back to sequential
    let data = noisy_dataset(30, 9);
    let sequential = Knn::new().parallel(false).build().unwrap().run(&data).unwrap();
    let parallel = Knn::new().parallel(true).build().unwrap().run(&data).unwrap();

    for ((k1, h1, a), (k2, h2, b)) in sequential.iter().zip(parallel.iter()) {
        assert_eq!((k1, h1), (k2, h2));
        for c in 0..TARGETS {
            assert!(a[c] == b[c] || (a[c].is_nan() && b[c].is_nan()));
        }
    }
}

// ============================================================================
// Error Propagation Tests
// ============================================================================

#[test]
fn test_sweep_hold_out_covering_dataset_fails() {
    let data = noisy_dataset(4, 10);
    let result = Knn::new()
        .neighbours(&[1])
        .hold_outs(&[1, 4])
        .build()
        .unwrap()
        .run(&data);
    assert_eq!(result, Err(KnnError::EmptyNeighbourhood));
}

#[test]
fn test_sweep_k_larger_than_dataset_succeeds() {
    let data = noisy_dataset(6, 11);
    let table = Knn::new()
        .neighbours(&[30])
        .hold_outs(&[1])
        .build()
        .unwrap()
        .run(&data)
        .unwrap();
    assert_eq!(table.ks(), &[30]);
}

#[test]
fn test_sweep_accepts_huge_k() {
    let data = noisy_dataset(8, 12);
    let sweep = Knn::new()
        .neighbours(&[2, usize::MAX])
        .build()
        .unwrap();
    let table = sweep.run(&data).unwrap();

    // Every training record is used, exactly as with k = n - 1
    let all = sweep.cross_validate(&data, 7, 1).unwrap();
    let expected = sweep.score(&data, &all).unwrap();
    assert_eq!(table.get(usize::MAX, 1).unwrap(), expected);

    let query = Record::new(data.record(0).fields()).unwrap();
    assert!(sweep.predict(&data, query, usize::MAX).is_ok());
}

#[test]
fn test_predict_rejects_query_of_wrong_width() {
    let data = noisy_dataset(6, 13);
    let sweep = Knn::new().build().unwrap();

    let narrow = [0.0, 0.0, 0.0, 0.5];
    assert_eq!(
        sweep.predict(&data, Record::new(&narrow).unwrap(), 1),
        Err(KnnError::WidthMismatch {
            expected: 5,
            got: 4
        })
    );
}
