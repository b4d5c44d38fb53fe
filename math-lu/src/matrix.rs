//! Dense square matrix in column-major storage
//!
//! [`ColumnMatrix`] owns one flat buffer of `n * n` values. Column `j` is the
//! contiguous run `data[j * n..(j + 1) * n]`, so every column can be handed out
//! as an independent slice and the elimination kernels never need strides.
//!
//! Indexing is always `(column, row)`. The textual form printed by
//! [`Display`](std::fmt::Display) is the transpose of the storage: printed row
//! `i` lists the entries `(column j, row i)` for `j = 0..n`.

use crate::error::LuError;
use ndarray::Array2;
use rand::Rng;
use std::fmt;
use std::slice::ChunksExactMut;

/// Exclusively owned `n x n` matrix of `f64`, stored column by column
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnMatrix {
    n: usize,
    data: Vec<f64>,
}

impl ColumnMatrix {
    /// Create an `n x n` matrix filled with zeros
    ///
    /// # Panics
    ///
    /// Panics if `n == 0`.
    pub fn zeros(n: usize) -> Self {
        assert!(n > 0, "matrix dimension must be positive");
        Self {
            n,
            data: vec![0.0; n * n],
        }
    }

    /// Create the `n x n` identity matrix
    pub fn identity(n: usize) -> Self {
        let mut matrix = Self::zeros(n);
        for k in 0..n {
            matrix.set(k, k, 1.0);
        }
        matrix
    }

    /// Build a matrix from its storage columns
    ///
    /// `columns[j][i]` becomes the entry at `(column j, row i)`.
    pub fn from_columns(columns: Vec<Vec<f64>>) -> Result<Self, LuError> {
        let n = columns.len();
        if n == 0 {
            return Err(LuError::EmptyMatrix);
        }

        let mut data = Vec::with_capacity(n * n);
        for column in columns {
            if column.len() != n {
                return Err(LuError::DimensionMismatch {
                    expected: n,
                    got: column.len(),
                });
            }
            data.extend(column);
        }

        Ok(Self { n, data })
    }

    /// Build a matrix from rows in printed orientation
    ///
    /// `rows[i][j]` becomes the entry at `(column j, row i)`, which is the
    /// inverse of the [`Display`](std::fmt::Display) output.
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self, LuError> {
        let n = rows.len();
        if n == 0 {
            return Err(LuError::EmptyMatrix);
        }

        let mut matrix = Self::zeros(n);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != n {
                return Err(LuError::DimensionMismatch {
                    expected: n,
                    got: row.len(),
                });
            }
            for (j, &value) in row.iter().enumerate() {
                matrix.set(j, i, value);
            }
        }

        Ok(matrix)
    }

    /// Build a matrix from an ndarray `Array2`
    ///
    /// Element `a[[i, j]]` (row `i`, column `j`) is stored at `(column j, row i)`.
    pub fn from_array(a: &Array2<f64>) -> Result<Self, LuError> {
        let (rows, cols) = a.dim();
        if rows == 0 {
            return Err(LuError::EmptyMatrix);
        }
        if rows != cols {
            return Err(LuError::DimensionMismatch {
                expected: rows,
                got: cols,
            });
        }

        let mut matrix = Self::zeros(rows);
        for ((i, j), &value) in a.indexed_iter() {
            matrix.set(j, i, value);
        }

        Ok(matrix)
    }

    /// Convert to an ndarray `Array2`, the inverse of [`ColumnMatrix::from_array`]
    pub fn to_array(&self) -> Array2<f64> {
        Array2::from_shape_fn((self.n, self.n), |(i, j)| self.get(j, i))
    }

    /// Fill an `n x n` matrix with values drawn uniformly from `[0, max_value]`
    ///
    /// Values are generated in storage order, column after column.
    pub fn random<R: Rng + ?Sized>(n: usize, max_value: f64, rng: &mut R) -> Self {
        let mut matrix = Self::zeros(n);
        for value in matrix.data.iter_mut() {
            *value = rng.random::<f64>() * max_value;
        }
        matrix
    }

    /// Parse whitespace-separated rows in printed orientation
    ///
    /// Blank lines are skipped. Every row must hold as many values as there are rows.
    pub fn parse_rows(text: &str) -> Result<Self, LuError> {
        let mut rows: Vec<Vec<f64>> = Vec::new();

        for (index, line) in text.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let row = line
                .split_whitespace()
                .map(|token| {
                    token.parse::<f64>().map_err(|e| LuError::Parse {
                        line: index + 1,
                        message: format!("invalid value '{}': {}", token, e),
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;

            if let Some(first) = rows.first() {
                if first.len() != row.len() {
                    return Err(LuError::Parse {
                        line: index + 1,
                        message: format!("expected {} values, found {}", first.len(), row.len()),
                    });
                }
            }
            rows.push(row);
        }

        if let Some(first) = rows.first() {
            if first.len() != rows.len() {
                return Err(LuError::DimensionMismatch {
                    expected: first.len(),
                    got: rows.len(),
                });
            }
        }

        Self::from_rows(&rows)
    }

    /// Matrix dimension `n`
    pub fn dim(&self) -> usize {
        self.n
    }

    /// Entry at `(column, row)`
    #[inline]
    pub fn get(&self, column: usize, row: usize) -> f64 {
        self.data[column * self.n + row]
    }

    /// Overwrite the entry at `(column, row)`
    #[inline]
    pub fn set(&mut self, column: usize, row: usize, value: f64) {
        self.data[column * self.n + row] = value;
    }

    /// Read view of column `j`
    #[inline]
    pub fn column(&self, j: usize) -> &[f64] {
        &self.data[j * self.n..(j + 1) * self.n]
    }

    /// Write view of column `j`
    #[inline]
    pub fn column_mut(&mut self, j: usize) -> &mut [f64] {
        let n = self.n;
        &mut self.data[j * n..(j + 1) * n]
    }

    /// Simultaneous write views of two distinct columns, in argument order
    ///
    /// # Panics
    ///
    /// Panics if `a == b`.
    pub fn columns_mut(&mut self, a: usize, b: usize) -> (&mut [f64], &mut [f64]) {
        assert_ne!(a, b, "columns_mut needs two distinct columns");
        let n = self.n;
        let (low, high) = (a.min(b), a.max(b));
        let (head, tail) = self.data.split_at_mut(high * n);
        let low_column = &mut head[low * n..(low + 1) * n];
        let high_column = &mut tail[..n];
        if a < b {
            (low_column, high_column)
        } else {
            (high_column, low_column)
        }
    }

    /// Column `k` together with every column after it
    ///
    /// The trailing columns are yielded in order `k + 1, k + 2, ..., n - 1`.
    pub fn pivot_and_trailing_mut(&mut self, k: usize) -> (&mut [f64], ChunksExactMut<'_, f64>) {
        let n = self.n;
        let (head, tail) = self.data.split_at_mut((k + 1) * n);
        (&mut head[k * n..], tail.chunks_exact_mut(n))
    }

    /// Underlying column-major buffer
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Consume the matrix and return its storage columns
    pub fn into_columns(self) -> Vec<Vec<f64>> {
        self.data.chunks_exact(self.n).map(<[f64]>::to_vec).collect()
    }

    /// Render in printed orientation with `precision` decimals
    pub fn render(&self, precision: usize) -> String {
        format!("{:.*}", precision, self)
    }
}

impl fmt::Display for ColumnMatrix {
    /// One printed row per storage row; entries are followed by a single space.
    /// Precision defaults to 6 decimals, override with `{:.3}` and friends.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(6);
        for i in 0..self.n {
            for j in 0..self.n {
                write!(f, "{:.*} ", precision, self.get(j, i))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
