//! Dense in-place LU factorization by column-wise Gaussian elimination
//!
//! This crate factorizes a square real matrix stored column-major, keeping both
//! factors in the input buffer: elimination multipliers below the diagonal and
//! the reduced values on and above it.
//!
//! # Features
//!
//! - **Column storage**: [`ColumnMatrix`] hands out each column as a contiguous slice
//! - **Partial pivoting**: a full pivoting pass runs before any elimination
//! - **Singularity detection**: pivots at or below a configurable epsilon abort with [`LuError::SingularMatrix`]
//! - **Instrumentation**: optional [`PhaseHooks`] at the two phase boundaries, [`PhaseTimer`] for timing
//!
//! # Example
//!
//! ```
//! use math_audio_lu::{ColumnMatrix, FactorizationConfig, factorize};
//!
//! let matrix = ColumnMatrix::from_columns(vec![vec![4.0, 6.0], vec![3.0, 3.0]]).unwrap();
//! let lu = factorize(matrix, &FactorizationConfig::default()).unwrap();
//!
//! assert_eq!(lu.column(0), &[3.0, 1.0]);
//! assert_eq!(lu.column(1), &[4.0, 2.0]);
//! ```

pub mod config;
pub mod elimination;
pub mod error;
pub mod factorize;
pub mod hooks;
pub mod matrix;
pub mod pivot;
pub mod swap;

mod proptests;

// Re-export main types
pub use config::{MatrixConfig, OutputConfig, RunConfig};
pub use error::LuError;
pub use hooks::{Phase, PhaseHooks, PhaseTimer};
pub use matrix::ColumnMatrix;

// Re-export the factorization entry points and its building blocks
pub use elimination::{elimination_step, normalize_pivot_column, reduce_trailing_columns};
pub use factorize::{
    DEFAULT_EPSILON, FactorizationConfig, FactorizationReport, FactorizationState,
    elimination_pass, factorize, factorize_in_place, pivoting_pass,
};
pub use pivot::{select_pivot, signed_magnitude};
pub use swap::swap_column_suffix;
