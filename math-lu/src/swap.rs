//! Exchange of column suffixes during the pivoting pass

use crate::matrix::ColumnMatrix;

/// Swap rows `[k, n)` of column `k` with the same rows of column `pivot_row`
///
/// Rows above `k` stay in place. Does nothing when `pivot_row == k`.
pub fn swap_column_suffix(matrix: &mut ColumnMatrix, k: usize, pivot_row: usize) {
    if pivot_row == k {
        return;
    }

    let (pivot_column, other_column) = matrix.columns_mut(k, pivot_row);
    pivot_column[k..].swap_with_slice(&mut other_column[k..]);
}
