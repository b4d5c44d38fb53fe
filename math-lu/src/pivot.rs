//! Pivot selection within one column
//!
//! The magnitude used for comparisons is the absolute value, except that values
//! in `[-epsilon, 0)` keep their sign. Such values compare below every
//! non-negative candidate and never pass the singularity check, which only
//! matters for entries that are already numerically zero.

/// Absolute value with an epsilon-tolerant sign branch
///
/// Returns `value` unchanged when `value >= -epsilon`, otherwise `-value`.
#[inline]
pub fn signed_magnitude(value: f64, epsilon: f64) -> f64 {
    if value >= -epsilon { value } else { -value }
}

/// Row index in `[start, column.len())` holding the largest magnitude
///
/// Ties resolve to the lowest index: a candidate replaces the current best only
/// when it is strictly greater. The column is never modified.
///
/// # Panics
///
/// Panics if `start >= column.len()`.
pub fn select_pivot(column: &[f64], start: usize, epsilon: f64) -> usize {
    let mut best_row = start;
    let mut best = signed_magnitude(column[start], epsilon);

    for (offset, &value) in column[start..].iter().enumerate() {
        let magnitude = signed_magnitude(value, epsilon);
        if magnitude > best {
            best = magnitude;
            best_row = start + offset;
        }
    }

    best_row
}
