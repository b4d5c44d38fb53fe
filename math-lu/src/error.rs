//! Error type for matrix construction and factorization

use thiserror::Error;

/// Errors that can occur while building a matrix or factorizing it
///
/// Only [`LuError::SingularMatrix`] is produced by the factorization itself;
/// the other variants come from the [`ColumnMatrix`](crate::ColumnMatrix)
/// constructors and the text parser.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LuError {
    #[error("singular matrix: pivot {pivot} has magnitude {magnitude:e}")]
    SingularMatrix { pivot: usize, magnitude: f64 },
    #[error("Matrix dimensions mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },
    #[error("Matrix must have at least one row and one column")]
    EmptyMatrix,
    #[error("Failed to parse matrix at line {line}: {message}")]
    Parse { line: usize, message: String },
}

impl LuError {
    /// True for the singular-pivot failure of the factorization
    pub fn is_singular(&self) -> bool {
        matches!(self, LuError::SingularMatrix { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_singular_message() {
        let err = LuError::SingularMatrix {
            pivot: 3,
            magnitude: 0.0,
        };
        assert!(err.is_singular());
        assert!(err.to_string().starts_with("singular matrix"));
        assert!(err.to_string().contains("pivot 3"));
    }

    #[test]
    fn test_other_errors_are_not_singular() {
        let err = LuError::DimensionMismatch {
            expected: 3,
            got: 2,
        };
        assert!(!err.is_singular());
        assert_eq!(
            err.to_string(),
            "Matrix dimensions mismatch: expected 3, got 2"
        );
        assert!(!LuError::EmptyMatrix.is_singular());
    }
}
