//! In-place LU factorization by column-wise Gaussian elimination
//!
//! The factorization runs as two separate passes over the matrix:
//!
//! 1. **Pivoting pass**: for every pivot index `k = 0..n`, pick the row of
//!    largest magnitude in column `k` at or below row `k`, reject the matrix as
//!    singular if that magnitude does not exceed `epsilon`, then swap the row
//!    suffix `[k, n)` of column `k` with the same suffix of the column named by
//!    the pivot row.
//! 2. **Elimination pass**: for every `k = 0..n - 1`, normalize column `k` and
//!    reduce the later columns.
//!
//! All pivot decisions are made before any subtraction happens, so they are
//! taken against permuted but never reduced values. This differs from textbook
//! partial pivoting, where each pivot is chosen from the partially eliminated
//! trailing block, and is kept as is.
//!
//! On success the matrix holds the elimination multipliers below the diagonal
//! and the reduced values on and above it. A singular pivot aborts the call;
//! swaps already performed are not rolled back.

use crate::elimination::elimination_step;
use crate::error::LuError;
use crate::hooks::{Phase, PhaseHooks};
use crate::matrix::ColumnMatrix;
use crate::pivot::{select_pivot, signed_magnitude};
use crate::swap::swap_column_suffix;
use serde::{Deserialize, Serialize};

/// Default singularity tolerance
pub const DEFAULT_EPSILON: f64 = 1e-15;

/// Factorization options
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FactorizationConfig {
    /// Run the pivoting pass; when false elimination works on the matrix as given
    #[serde(default = "default_do_pivoting")]
    pub do_pivoting: bool,
    /// A pivot whose magnitude is at most this value marks the matrix singular
    #[serde(default = "default_epsilon")]
    pub epsilon: f64,
}

fn default_do_pivoting() -> bool {
    true
}

fn default_epsilon() -> f64 {
    DEFAULT_EPSILON
}

impl Default for FactorizationConfig {
    fn default() -> Self {
        Self {
            do_pivoting: default_do_pivoting(),
            epsilon: default_epsilon(),
        }
    }
}

impl FactorizationConfig {
    pub fn with_pivoting(mut self, do_pivoting: bool) -> Self {
        self.do_pivoting = do_pivoting;
        self
    }

    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }
}

/// Progress of one factorization call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FactorizationState {
    Initializing,
    PivotingPass,
    EliminationPass,
    Singular,
    Completed,
}

/// What a successful factorization did
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FactorizationReport {
    /// Pivot row chosen for each `k`, empty when pivoting is disabled
    pub pivots: Vec<usize>,
    /// Number of elimination steps performed (`n - 1`)
    pub elimination_steps: usize,
}

impl FactorizationReport {
    /// Number of pivot indices whose pivot row differed from `k`
    pub fn swaps(&self) -> usize {
        self.pivots
            .iter()
            .enumerate()
            .filter(|&(k, &row)| k != row)
            .count()
    }
}

/// Select and apply a pivot for every `k`, stopping at the first singular one
///
/// Returns the pivot row chosen for each `k`. On error the swaps made for
/// earlier pivot indices remain in the matrix.
pub fn pivoting_pass(matrix: &mut ColumnMatrix, epsilon: f64) -> Result<Vec<usize>, LuError> {
    let n = matrix.dim();
    let mut pivots = Vec::with_capacity(n);

    for k in 0..n {
        let pivot_row = select_pivot(matrix.column(k), k, epsilon);
        let magnitude = signed_magnitude(matrix.get(k, pivot_row), epsilon);

        if magnitude <= epsilon {
            log::error!(
                "singular matrix: pivot {} (row {}) has magnitude {:e} <= {:e}",
                k,
                pivot_row,
                magnitude,
                epsilon
            );
            return Err(LuError::SingularMatrix {
                pivot: k,
                magnitude,
            });
        }

        log::trace!("pivot {}: row {} (magnitude {:e})", k, pivot_row, magnitude);
        swap_column_suffix(matrix, k, pivot_row);
        pivots.push(pivot_row);
    }

    Ok(pivots)
}

/// Run the elimination step for `k = 0..n - 1` and return the step count
pub fn elimination_pass(matrix: &mut ColumnMatrix) -> usize {
    let steps = matrix.dim().saturating_sub(1);
    for k in 0..steps {
        elimination_step(matrix, k);
    }
    steps
}

fn transition(state: &mut FactorizationState, next: FactorizationState) {
    log::debug!("LU factorization: {:?} -> {:?}", state, next);
    *state = next;
}

/// Factorize `matrix` in place, reporting phase boundaries to `hooks`
pub fn factorize_in_place<H: PhaseHooks + ?Sized>(
    matrix: &mut ColumnMatrix,
    config: &FactorizationConfig,
    hooks: &mut H,
) -> Result<FactorizationReport, LuError> {
    let mut state = FactorizationState::Initializing;
    let mut report = FactorizationReport::default();

    if config.do_pivoting {
        transition(&mut state, FactorizationState::PivotingPass);
        hooks.phase_started(Phase::Pivoting);
        match pivoting_pass(matrix, config.epsilon) {
            Ok(pivots) => report.pivots = pivots,
            Err(err) => {
                transition(&mut state, FactorizationState::Singular);
                return Err(err);
            }
        }
        hooks.phase_finished(Phase::Pivoting);
    }

    transition(&mut state, FactorizationState::EliminationPass);
    hooks.phase_started(Phase::Elimination);
    report.elimination_steps = elimination_pass(matrix);
    hooks.phase_finished(Phase::Elimination);

    transition(&mut state, FactorizationState::Completed);
    Ok(report)
}

/// Factorize `matrix` and hand it back, without instrumentation
pub fn factorize(
    mut matrix: ColumnMatrix,
    config: &FactorizationConfig,
) -> Result<ColumnMatrix, LuError> {
    factorize_in_place(&mut matrix, config, &mut ())?;
    Ok(matrix)
}
