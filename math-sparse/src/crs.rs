//! Compressed Row Storage (CRS) matrix format
//!
//! CRS format stores:
//! - `values`: Non-zero entries in row-major order
//! - `col_indices`: Column index for each value, ascending within a row
//! - `row_ptrs`: Index into values/col_indices where each row starts
//!
//! Storage is sized exactly once, from the non-zero count, and never grows.

use crate::dense::{DenseMatrix, DenseSource};
use crate::error::{Result, SparseError, try_zeroed};
use std::fmt;
use std::ops::Range;

/// Magnitude at or below which a dense entry is treated as zero.
pub const ZERO_EPSILON: f64 = 1e-9;

/// Compressed Row Storage matrix of `f64`
///
/// Immutable once built. Invariants:
/// - `row_ptrs[0] == 0` and `row_ptrs[num_rows] == nnz`
/// - `row_ptrs` is non-decreasing
/// - column indices are strictly increasing within each row
/// - `num_rows * num_cols >= nnz`
#[derive(Debug, Clone, PartialEq)]
pub struct CrsMatrix {
    num_rows: usize,
    num_cols: usize,
    values: Vec<f64>,
    col_indices: Vec<usize>,
    row_ptrs: Vec<usize>,
}

/// Reject zero dimensions and non-zero counts the matrix cannot hold.
fn check_shape(rows: usize, cols: usize, nnz: usize) -> Result<()> {
    if rows < 1 || cols < 1 {
        return Err(SparseError::InvalidDimensions { rows, cols });
    }
    // An overflowing product is larger than any nnz we could be given.
    if rows.checked_mul(cols).is_some_and(|capacity| capacity < nnz) {
        return Err(SparseError::CapacityExceeded { rows, cols, nnz });
    }
    Ok(())
}

impl CrsMatrix {
    /// Create a CRS matrix from raw components, checking every invariant.
    pub fn from_raw_parts(
        num_rows: usize,
        num_cols: usize,
        row_ptrs: Vec<usize>,
        col_indices: Vec<usize>,
        values: Vec<f64>,
    ) -> Result<Self> {
        let matrix = Self {
            num_rows,
            num_cols,
            values,
            col_indices,
            row_ptrs,
        };
        matrix.validate()?;
        Ok(matrix)
    }

    /// Create a CRS matrix from a dense source
    ///
    /// Stores entries with `|v| > ZERO_EPSILON`. The source is scanned twice:
    /// once to count non-zeros, once to fill the exactly-sized storage.
    pub fn from_dense<D: DenseSource + ?Sized>(dense: &D) -> Result<Self> {
        let rows = dense.rows();
        let cols = dense.cols();

        let mut nnz = 0usize;
        for row in 0..rows {
            for col in 0..cols {
                if dense.value(row, col).abs() > ZERO_EPSILON {
                    nnz += 1;
                }
            }
        }

        let mut builder = CrsBuilder::new(rows, cols, nnz)?;
        for row in 0..rows {
            for col in 0..cols {
                let value = dense.value(row, col);
                if value.abs() > ZERO_EPSILON {
                    builder.push(col, value)?;
                }
            }
            builder.end_row()?;
        }
        let matrix = builder.finish()?;

        log::debug!(
            "CRS conversion: {}x{} matrix, {} non-zeros ({:.1}% dense)",
            rows,
            cols,
            nnz,
            100.0 * matrix.density()
        );
        Ok(matrix)
    }

    /// Number of rows
    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    /// Number of columns
    pub fn num_cols(&self) -> usize {
        self.num_cols
    }

    /// Number of stored entries
    pub fn nnz(&self) -> usize {
        self.values.len()
    }

    /// Fraction of entries that are stored
    pub fn density(&self) -> f64 {
        self.nnz() as f64 / (self.num_rows as f64 * self.num_cols as f64)
    }

    /// Stored values in row-major order
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Column index of each stored value
    pub fn col_indices(&self) -> &[usize] {
        &self.col_indices
    }

    /// Row start offsets, `num_rows + 1` long
    pub fn row_ptrs(&self) -> &[usize] {
        &self.row_ptrs
    }

    /// Get the range of indices in values/col_indices for a given row
    pub fn row_range(&self, row: usize) -> Range<usize> {
        self.row_ptrs[row]..self.row_ptrs[row + 1]
    }

    /// Get the (col, value) pairs for a row
    pub fn row_entries(&self, row: usize) -> impl Iterator<Item = (usize, f64)> + '_ {
        let range = self.row_range(row);
        self.col_indices[range.clone()]
            .iter()
            .copied()
            .zip(self.values[range].iter().copied())
    }

    /// Get element at (row, col), returns 0 if not stored
    ///
    /// The scan stops at the first stored column past `col`.
    ///
    /// # Panics
    ///
    /// Panics if `row >= num_rows` or `col >= num_cols`.
    pub fn get(&self, row: usize, col: usize) -> f64 {
        assert!(
            row < self.num_rows && col < self.num_cols,
            "index ({row}, {col}) out of bounds for {}x{} CRS matrix",
            self.num_rows,
            self.num_cols
        );
        for idx in self.row_range(row) {
            let stored = self.col_indices[idx];
            if stored > col {
                break;
            }
            if stored == col {
                return self.values[idx];
            }
        }
        0.0
    }

    /// Expand to a dense matrix by looking up every position.
    pub fn to_dense(&self) -> Result<DenseMatrix> {
        let mut dense = DenseMatrix::new(self.num_rows, self.num_cols)?;
        for row in 0..self.num_rows {
            for col in 0..self.num_cols {
                dense.set(row, col, self.get(row, col));
            }
        }
        Ok(dense)
    }

    /// Check every structural invariant.
    pub fn validate(&self) -> Result<()> {
        let nnz = self.values.len();
        check_shape(self.num_rows, self.num_cols, nnz)?;

        let invalid = |reason: String| Err(SparseError::InvalidStructure { reason });

        if self.col_indices.len() != nnz {
            return invalid(format!(
                "col_indices has {} entries, values has {}",
                self.col_indices.len(),
                nnz
            ));
        }
        if self.row_ptrs.len() != self.num_rows + 1 {
            return invalid(format!(
                "row_ptrs has {} entries, expected {}",
                self.row_ptrs.len(),
                self.num_rows + 1
            ));
        }
        if self.row_ptrs[0] != 0 {
            return invalid(format!("row_ptrs[0] is {}, expected 0", self.row_ptrs[0]));
        }
        if self.row_ptrs[self.num_rows] != nnz {
            return invalid(format!(
                "row_ptrs[{}] is {}, expected nnz = {}",
                self.num_rows, self.row_ptrs[self.num_rows], nnz
            ));
        }
        if let Some(row) = self.row_ptrs.windows(2).position(|w| w[0] > w[1]) {
            return invalid(format!("row_ptrs decreases at row {row}"));
        }
        for row in 0..self.num_rows {
            let cols = &self.col_indices[self.row_range(row)];
            if let Some(&col) = cols.iter().find(|&&c| c >= self.num_cols) {
                return invalid(format!(
                    "column {col} in row {row} is out of range for {} columns",
                    self.num_cols
                ));
            }
            if cols.windows(2).any(|w| w[0] >= w[1]) {
                return invalid(format!("columns of row {row} are not strictly increasing"));
            }
        }
        Ok(())
    }

    /// Display adapter printing the three backing arrays.
    pub fn raw(&self) -> CrsRaw<'_> {
        CrsRaw(self)
    }
}

/// Prints the matrix as a dense grid.
impl fmt::Display for CrsMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.num_rows {
            write!(f, "{}[ ", if row == 0 { '[' } else { ' ' })?;
            for col in 0..self.num_cols {
                write!(f, "{:5.1} ", self.get(row, col))?;
            }
            writeln!(f, "]{}", if row + 1 == self.num_rows { ']' } else { ' ' })?;
        }
        Ok(())
    }
}

/// Raw CRS dump returned by [`CrsMatrix::raw`].
pub struct CrsRaw<'a>(&'a CrsMatrix);

fn write_seq<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    label: &str,
    items: &[T],
    fmt_item: impl Fn(&T) -> String,
) -> fmt::Result {
    write!(f, "  {label}[{:2}] = {{", items.len())?;
    let last = items.len().saturating_sub(1);
    for (i, item) in items.iter().enumerate() {
        write!(f, "{}{}", fmt_item(item), if i == last { ' ' } else { ',' })?;
    }
    writeln!(f, "}}")
}

impl fmt::Display for CrsRaw<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let m = self.0;
        writeln!(f, "CrsMatrix: {} x {}", m.num_rows, m.num_cols)?;
        write_seq(f, "values     ", &m.values, |v| format!("{v:5.1}"))?;
        write_seq(f, "col_indices", &m.col_indices, |c| format!("{c:5}"))?;
        write_seq(f, "row_ptrs   ", &m.row_ptrs, |r| format!("{r:5}"))
    }
}

/// Fills a CRS matrix whose storage was sized up front.
///
/// `new` allocates exactly `nnz` values and column indices; entries are then
/// pushed row by row in ascending column order. Pushing past `nnz`, out of
/// order, or finishing with unused slots is an error.
#[derive(Debug)]
pub struct CrsBuilder {
    num_rows: usize,
    num_cols: usize,
    values: Vec<f64>,
    col_indices: Vec<usize>,
    row_ptrs: Vec<usize>,
    pos: usize,
    current_row: usize,
}

impl CrsBuilder {
    /// Allocate storage for a `rows x cols` matrix holding `nnz` entries.
    pub fn new(rows: usize, cols: usize, nnz: usize) -> Result<Self> {
        check_shape(rows, cols, nnz)?;
        // Buffers allocated before a failure are dropped on return.
        let values = try_zeroed("values", nnz)?;
        let col_indices = try_zeroed("col_indices", nnz)?;
        let row_ptrs = try_zeroed("row_ptrs", rows + 1)?;
        Ok(Self {
            num_rows: rows,
            num_cols: cols,
            values,
            col_indices,
            row_ptrs,
            pos: 0,
            current_row: 0,
        })
    }

    /// Declared number of stored entries
    pub fn capacity(&self) -> usize {
        self.values.len()
    }

    /// Append an entry to the current row.
    pub fn push(&mut self, col: usize, value: f64) -> Result<()> {
        let invalid = |reason: String| Err(SparseError::InvalidStructure { reason });

        if self.current_row >= self.num_rows {
            return invalid(format!("all {} rows already ended", self.num_rows));
        }
        if self.pos >= self.values.len() {
            return invalid(format!(
                "more than {} entries pushed",
                self.values.len()
            ));
        }
        if col >= self.num_cols {
            return invalid(format!(
                "column {col} out of range for {} columns",
                self.num_cols
            ));
        }
        let row_start = self.row_ptrs[self.current_row];
        if self.pos > row_start && self.col_indices[self.pos - 1] >= col {
            return invalid(format!(
                "column {col} pushed after column {} in row {}",
                self.col_indices[self.pos - 1],
                self.current_row
            ));
        }

        self.values[self.pos] = value;
        self.col_indices[self.pos] = col;
        self.pos += 1;
        Ok(())
    }

    /// Close the current row and start the next one.
    pub fn end_row(&mut self) -> Result<()> {
        if self.current_row >= self.num_rows {
            return Err(SparseError::InvalidStructure {
                reason: format!("all {} rows already ended", self.num_rows),
            });
        }
        self.current_row += 1;
        self.row_ptrs[self.current_row] = self.pos;
        Ok(())
    }

    /// Finish building and return the CRS matrix
    ///
    /// Rows that were never ended are left empty.
    pub fn finish(mut self) -> Result<CrsMatrix> {
        if self.pos != self.values.len() {
            return Err(SparseError::InvalidStructure {
                reason: format!(
                    "{} of {} declared entries filled",
                    self.pos,
                    self.values.len()
                ),
            });
        }
        while self.current_row < self.num_rows {
            self.current_row += 1;
            self.row_ptrs[self.current_row] = self.pos;
        }

        Ok(CrsMatrix {
            num_rows: self.num_rows,
            num_cols: self.num_cols,
            values: self.values,
            col_indices: self.col_indices,
            row_ptrs: self.row_ptrs,
        })
    }
}
