//! Column-wise elimination kernels
//!
//! One elimination step for pivot index `k` first turns the sub-diagonal part of
//! column `k` into multipliers, then subtracts multiples of that column from every
//! later column. Row `k` is read but never written, so the `factor` for each later
//! column is taken from data no step of this `k` has touched.

use crate::matrix::ColumnMatrix;

/// Divide rows `[k + 1, n)` of `column` by its entry at row `k`
pub fn normalize_pivot_column(column: &mut [f64], k: usize) {
    let pivot = column[k];
    for value in column[k + 1..].iter_mut() {
        *value /= pivot;
    }
}

/// `target[i] -= factor * multipliers[i]` for every row `i` in `[k + 1, n)`,
/// with `factor = target[k]`
pub fn reduce_column(target: &mut [f64], multipliers: &[f64], k: usize) {
    let factor = target[k];
    for (value, &multiplier) in target[k + 1..].iter_mut().zip(&multipliers[k + 1..]) {
        *value -= factor * multiplier;
    }
}

/// Reduce every column after `k` using the already normalized column `k`
pub fn reduce_trailing_columns(matrix: &mut ColumnMatrix, k: usize) {
    let (pivot_column, trailing) = matrix.pivot_and_trailing_mut(k);
    for column in trailing {
        reduce_column(column, pivot_column, k);
    }
}

/// Normalize column `k` and reduce the trailing columns against it
///
/// Valid for `k < n - 1`. The pivot at `(k, k)` is assumed to have been
/// validated beforehand; this step has no failure path.
pub fn elimination_step(matrix: &mut ColumnMatrix, k: usize) {
    normalize_pivot_column(matrix.column_mut(k), k);
    reduce_trailing_columns(matrix, k);
}
