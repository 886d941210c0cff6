//! End-to-end checks of the benchmark workflows, minus the command line.

use approx::assert_relative_eq;
use math_audio_kernels::{
    BenchReport, Charge, Plane, SweepConfig, charge_count, coulomb, integrate_pi, matmul, run_sweep,
    time_iterations,
};
use math_audio_sparse::{CrsMatrix, DenseMatrix, Vector, atmux, atmux_parallel};
use rand::SeedableRng;
use rand::rngs::StdRng;

#[test]
fn atmux_checksum_equals_weighted_row_sums() {
    let n = 300;
    let mut rng = StdRng::seed_from_u64(1234);
    let mut x = Vector::new(n).unwrap();
    x.fill_random(&mut rng);
    let mut dense = DenseMatrix::new(n, n).unwrap();
    dense.fill_random_sparse(&mut rng, 0.66);
    let crs = CrsMatrix::from_dense(&dense).unwrap();

    let mut y = Vector::new(n).unwrap();
    let secs = time_iterations(10, || atmux_parallel(&crs, x.as_slice(), y.as_slice_mut()));
    assert!(secs >= 0.0);

    // Σ_j (Aᵀx)_j = Σ_i x_i · Σ_j A_ij
    let expected: f64 = (0..n)
        .map(|i| x.get(i) * dense.as_array().row(i).sum())
        .sum();
    assert_eq!(y.checksum(), expected);

    let mut y_seq = vec![0.0; n];
    atmux(&crs, x.as_slice(), &mut y_seq);
    assert_eq!(y.as_slice(), &y_seq[..]);
}

#[test]
fn atmux_density_tracks_sparsity() {
    let mut rng = StdRng::seed_from_u64(8);
    let mut dense = DenseMatrix::new(200, 200).unwrap();
    dense.fill_random_sparse(&mut rng, 0.66);
    let crs = CrsMatrix::from_dense(&dense).unwrap();
    assert!((crs.density() - 0.34).abs() < 0.02, "density {}", crs.density());
}

#[test]
fn matmul_checksum_matches_row_and_column_sums() {
    let n = 40;
    let mut rng = StdRng::seed_from_u64(77);
    let mut a = DenseMatrix::new(n, n).unwrap();
    let mut b = DenseMatrix::new(n, n).unwrap();
    a.fill_random(&mut rng);
    b.fill_random(&mut rng);

    let c = matmul(&a, &b).unwrap();
    // Σ_ij C_ij = Σ_k (Σ_i A_ik)(Σ_j B_kj)
    let expected: f64 = (0..n)
        .map(|k| a.as_array().column(k).sum() * b.as_array().row(k).sum())
        .sum();
    assert_eq!(c.checksum(), expected);
}

#[test]
fn coulomb_driver_workflow() {
    let n = 6;
    let density = 0.1;
    let num_charges = charge_count(n, density);
    assert_eq!(num_charges, 4);

    let mut packed = Vector::new(4 * num_charges).unwrap();
    packed.fill_random(&mut StdRng::seed_from_u64(3));
    // Lift every charge off the plane so no distance is zero.
    let charges: Vec<Charge> = Charge::from_packed(packed.as_slice())
        .into_iter()
        .map(|c| Charge { z: c.z + 0.5, ..c })
        .collect();

    let mut grid = DenseMatrix::new(n, n).unwrap();
    coulomb(&charges, &Plane::square(n as f64), &mut grid);
    assert!(grid.checksum().is_finite());

    let total_q: f64 = charges.iter().map(|c| c.q).sum();
    if total_q > 0.0 {
        assert!(grid.checksum() > 0.0);
    }
}

#[test]
fn pi_report_workflow() {
    let result = integrate_pi(1_000_000).unwrap();
    let report = BenchReport::new("pi", 0.5)
        .float("result", result, 8)
        .sci("error", (result - std::f64::consts::PI).abs(), 1);

    let text = report.to_text();
    assert!(text.starts_with("time (s)= 0.500000\nresult\t= 3.14159"));
    assert!(text.contains("error\t= "));

    let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
    assert_relative_eq!(json["result"].as_f64().unwrap(), std::f64::consts::PI, epsilon = 1e-8);
}

#[test]
fn haccmk_sweep_is_deterministic() {
    let config = SweepConfig {
        n_start: 400,
        n_end: 460,
        ..SweepConfig::default()
    };
    let first = run_sweep(&config);
    let second = run_sweep(&config);
    assert_eq!(first.steps, 3);
    assert_eq!(first.validation, second.validation);
    assert!(first.validation.is_finite());
}
