//! Property checks for CRS conversion and the transpose product on random input.

use approx::assert_relative_eq;
use math_audio_sparse::{
    CrsMatrix, DenseMatrix, DenseSource, SparseError, Vector, ZERO_EPSILON, atmux,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Random matrix mixing exact zeros, near-zeros, and ordinary values
fn noisy_matrix(rng: &mut StdRng, rows: usize, cols: usize) -> DenseMatrix {
    let mut dense = DenseMatrix::new(rows, cols).unwrap();
    for r in 0..rows {
        for c in 0..cols {
            let v = match rng.random_range(0..4) {
                0 => 0.0,
                1 => rng.random_range(-1e-9..1e-9),
                _ => rng.random_range(-50.0..50.0),
            };
            dense.set(r, c, v);
        }
    }
    dense
}

fn assert_invariants(crs: &CrsMatrix) {
    let rows = crs.num_rows();
    let ptrs = crs.row_ptrs();
    assert_eq!(ptrs.len(), rows + 1);
    assert_eq!(ptrs[0], 0);
    assert_eq!(ptrs[rows], crs.nnz());
    assert!(ptrs.windows(2).all(|w| w[0] <= w[1]));
    for r in 0..rows {
        let cols = &crs.col_indices()[crs.row_range(r)];
        assert!(cols.windows(2).all(|w| w[0] < w[1]), "row {r} unsorted");
        assert!(cols.iter().all(|&c| c < crs.num_cols()));
    }
    assert!(crs.num_rows() * crs.num_cols() >= crs.nnz());
    crs.validate().unwrap();
}

#[test]
fn lookup_matches_thresholded_source() {
    let mut rng = StdRng::seed_from_u64(2024);
    for &(rows, cols) in &[(1, 1), (1, 7), (7, 1), (5, 9), (23, 17)] {
        let dense = noisy_matrix(&mut rng, rows, cols);
        let crs = CrsMatrix::from_dense(&dense).unwrap();
        assert_invariants(&crs);

        for r in 0..rows {
            for c in 0..cols {
                let src = dense.get(r, c);
                let expected = if src.abs() > ZERO_EPSILON { src } else { 0.0 };
                assert_eq!(crs.get(r, c), expected, "mismatch at ({r}, {c})");
            }
        }
    }
}

#[test]
fn dense_roundtrip_is_exact_after_threshold() {
    let mut rng = StdRng::seed_from_u64(99);
    let dense = noisy_matrix(&mut rng, 12, 8);
    let crs = CrsMatrix::from_dense(&dense).unwrap();
    let back = crs.to_dense().unwrap();

    for r in 0..dense.rows() {
        for c in 0..dense.cols() {
            let src = dense.value(r, c);
            let expected = if src.abs() > ZERO_EPSILON { src } else { 0.0 };
            assert_eq!(back.get(r, c), expected);
        }
    }

    // Converting the reconstruction again yields the same structure.
    assert_eq!(CrsMatrix::from_dense(&back).unwrap(), crs);
}

#[test]
fn atmux_equals_dense_transpose_product() {
    let mut rng = StdRng::seed_from_u64(5);
    let (rows, cols) = (31, 19);
    let mut dense = DenseMatrix::new(rows, cols).unwrap();
    dense.fill_random_sparse(&mut rng, 0.66);
    let crs = CrsMatrix::from_dense(&dense).unwrap();

    let mut x = Vector::new(rows).unwrap();
    x.fill_random(&mut rng);

    let y = crs.matvec_transpose(&x).unwrap();
    let expected = dense.as_array().t().dot(x.as_array());
    for c in 0..cols {
        assert_relative_eq!(y.get(c), expected[c], max_relative = 1e-12);
    }
}

#[test]
fn atmux_overwrites_previous_output() {
    let dense = ndarray::array![[2.0, 0.0], [0.0, 0.0]];
    let crs = CrsMatrix::from_dense(&dense).unwrap();
    let mut y = [100.0, -100.0];
    atmux(&crs, &[3.0, 4.0], &mut y);
    assert_eq!(y, [6.0, 0.0]);
    atmux(&crs, &[3.0, 4.0], &mut y);
    assert_eq!(y, [6.0, 0.0]);
}

#[test]
fn capacity_is_never_silently_truncated() {
    let err = math_audio_sparse::CrsBuilder::new(3, 3, 10).unwrap_err();
    assert!(matches!(err, SparseError::CapacityExceeded { nnz: 10, .. }));
}

#[test]
fn absent_matrix_drop_is_noop() {
    let maybe: Option<CrsMatrix> = None;
    drop(maybe);
    let present = Some(CrsMatrix::from_dense(&ndarray::array![[1.0]]).unwrap());
    drop(present);
}
