//! End-to-end tests of the public factorization API
//!
//! With pivoting disabled the factors are checked against the input through
//! `L * U = A`; with pivoting enabled the outputs are checked against known values.

use approx::assert_abs_diff_eq;
use math_audio_lu::{
    ColumnMatrix, FactorizationConfig, LuError, Phase, PhaseTimer, RunConfig, factorize,
    factorize_in_place,
};
use ndarray::{Array2, array};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Split the combined factors into unit lower `L` and upper `U`
fn split_factors(lu: &ColumnMatrix) -> (Array2<f64>, Array2<f64>) {
    let n = lu.dim();
    let combined = lu.to_array();
    let lower = Array2::from_shape_fn((n, n), |(i, j)| match i.cmp(&j) {
        std::cmp::Ordering::Greater => combined[[i, j]],
        std::cmp::Ordering::Equal => 1.0,
        std::cmp::Ordering::Less => 0.0,
    });
    let upper = Array2::from_shape_fn((n, n), |(i, j)| if i <= j { combined[[i, j]] } else { 0.0 });
    (lower, upper)
}

fn assert_matrix_close(a: &Array2<f64>, b: &Array2<f64>, epsilon: f64) {
    assert_eq!(a.dim(), b.dim());
    for (x, y) in a.iter().zip(b.iter()) {
        assert_abs_diff_eq!(x, y, epsilon = epsilon);
    }
}

#[test]
fn test_documented_two_by_two() {
    let matrix = ColumnMatrix::from_columns(vec![vec![4.0, 6.0], vec![3.0, 3.0]]).unwrap();
    let lu = factorize(matrix, &FactorizationConfig::default()).unwrap();

    assert_eq!(lu.column(0), &[3.0, 1.0]);
    assert_eq!(lu.column(1), &[4.0, 2.0]);
    assert_eq!(lu.to_string(), "3.000000 4.000000 \n1.000000 2.000000 \n");
}

#[test]
fn test_lu_reconstructs_input_without_pivoting() {
    let a = array![
        [4.0, 1.0, 0.0, 2.0],
        [1.0, 3.0, 1.0, 0.0],
        [0.0, 1.0, 2.0, 1.0],
        [2.0, 0.0, 1.0, 5.0],
    ];
    let mut lu = ColumnMatrix::from_array(&a).unwrap();
    let config = FactorizationConfig::default().with_pivoting(false);
    let report = factorize_in_place(&mut lu, &config, &mut ()).unwrap();
    assert_eq!(report.elimination_steps, 3);

    let (lower, upper) = split_factors(&lu);
    assert_matrix_close(&lower.dot(&upper), &a, 1e-12);
}

#[test]
fn test_random_diagonally_dominant_with_pivoting() {
    // every column peaks on the diagonal, so the pivoting pass never swaps
    let n = 12;
    let mut rng = StdRng::seed_from_u64(42);
    let mut matrix = ColumnMatrix::random(n, 2.0, &mut rng);
    for k in 0..n {
        matrix.set(k, k, 2.0 * n as f64);
    }
    let a = matrix.to_array();

    let report = factorize_in_place(&mut matrix, &FactorizationConfig::default(), &mut ()).unwrap();
    assert_eq!(report.swaps(), 0);
    assert_eq!(report.pivots, (0..n).collect::<Vec<_>>());

    let (lower, upper) = split_factors(&matrix);
    assert_matrix_close(&lower.dot(&upper), &a, 1e-10);
}

#[test]
fn test_pivoting_and_plain_agree_when_no_swap() {
    let columns = vec![vec![5.0, 1.0, 2.0], vec![1.0, 6.0, 1.0], vec![0.5, 2.0, 7.0]];
    let pivoted = factorize(
        ColumnMatrix::from_columns(columns.clone()).unwrap(),
        &FactorizationConfig::default(),
    )
    .unwrap();
    let plain = factorize(
        ColumnMatrix::from_columns(columns).unwrap(),
        &FactorizationConfig::default().with_pivoting(false),
    )
    .unwrap();
    assert_eq!(pivoted, plain);
}

#[test]
fn test_single_entry_matrix() {
    let matrix = ColumnMatrix::from_columns(vec![vec![0.25]]).unwrap();
    let mut timer = PhaseTimer::new();
    let mut lu = matrix.clone();
    let report = factorize_in_place(&mut lu, &FactorizationConfig::default(), &mut timer).unwrap();

    assert_eq!(report.elimination_steps, 0);
    assert_eq!(lu, matrix);
    assert!(timer.duration(Phase::Pivoting).is_some());
    assert!(timer.duration(Phase::Elimination).is_some());
}

#[test]
fn test_zero_column_is_singular() {
    let matrix = ColumnMatrix::from_columns(vec![
        vec![0.0, 0.0, 0.0],
        vec![1.0, 2.0, 3.0],
        vec![4.0, 5.0, 6.0],
    ])
    .unwrap();
    let err = factorize(matrix, &FactorizationConfig::default()).unwrap_err();
    assert_eq!(
        err,
        LuError::SingularMatrix {
            pivot: 0,
            magnitude: 0.0
        }
    );
}

#[test]
fn test_singular_keeps_earlier_swaps() {
    // k = 0 swaps columns 0 and 2, then column 1 is zero from row 1 on
    let mut matrix = ColumnMatrix::from_columns(vec![
        vec![1.0, 0.0, 3.0],
        vec![2.0, 0.0, 0.0],
        vec![1.0, 1.0, 1.0],
    ])
    .unwrap();
    let mut timer = PhaseTimer::new();
    let err = factorize_in_place(&mut matrix, &FactorizationConfig::default(), &mut timer)
        .unwrap_err();

    assert!(matches!(err, LuError::SingularMatrix { pivot: 1, .. }));
    assert_eq!(matrix.column(0), &[1.0, 1.0, 1.0]);
    assert_eq!(matrix.column(1), &[2.0, 0.0, 0.0]);
    assert_eq!(matrix.column(2), &[1.0, 0.0, 3.0]);
    assert!(timer.pivoting.is_none());
    assert!(timer.elimination.is_none());
}

#[test]
fn test_text_round_trip_through_factorization() {
    let text = "2 1\n4 5\n";
    let matrix = ColumnMatrix::parse_rows(text).unwrap();
    assert_eq!(matrix.column(0), &[2.0, 4.0]);

    let lu = factorize(matrix, &FactorizationConfig::default().with_pivoting(false)).unwrap();
    // 4 / 2 = 2, then 5 - 1 * 2
    assert_eq!(lu.render(1), "2.0 1.0 \n2.0 3.0 \n");
}

#[test]
fn test_run_config_file_round_trip() {
    let mut config = RunConfig::default();
    config.matrix.size = 8;
    config.matrix.seed = Some(3);
    config.factorization = config.factorization.with_epsilon(1e-12);
    config.output.precision = 3;

    let path = std::env::temp_dir().join(format!("colgauss-config-{}.json", std::process::id()));
    config.to_file(&path).unwrap();
    let loaded = RunConfig::from_file(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(loaded, config);
}

#[test]
fn test_run_config_rejects_invalid_file() {
    let path = std::env::temp_dir().join(format!("colgauss-bad-{}.json", std::process::id()));
    std::fs::write(&path, r#"{"matrix": {"size": 0}}"#).unwrap();
    let result = RunConfig::from_file(&path);
    std::fs::remove_file(&path).ok();

    assert!(result.is_err());
}
