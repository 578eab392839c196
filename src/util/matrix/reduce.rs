/* ************************************************************************ **
** This file is part of hgmatch, and is licensed under EITHER the MIT       **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Reductions and queries.

use crate::{AsMatrixRef, MatrixRef, Scalar};
use crate::errors::{MatrixError, Result, check_len};
use ::std::convert::TryFrom;

/// Which index a reduction runs over.
///
/// The legacy integer encoding (see [`Axis::from_dim`]) numbers dimensions from 1,
/// so that `1` collapses the rows and `2` collapses the columns.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Collapse the rows; one result per column. (`dim = 1`)
    ReduceOverRows,
    /// Collapse the columns; one result per row. (`dim = 2`)
    ReduceOverColumns,
}

impl Axis {
    pub fn from_dim(dim: i32) -> Result<Axis> {
        match dim {
            1 => Ok(Axis::ReduceOverRows),
            2 => Ok(Axis::ReduceOverColumns),
            _ => Err(MatrixError::InvalidAxis(dim)),
        }
    }

    pub fn dim(self) -> i32 {
        match self {
            Axis::ReduceOverRows => 1,
            Axis::ReduceOverColumns => 2,
        }
    }
}

impl TryFrom<i32> for Axis {
    type Error = MatrixError;

    fn try_from(dim: i32) -> Result<Axis> { Axis::from_dim(dim) }
}

// NaN in `x` replaces the running maximum; NaN in `m` is replaced by the next element.
#[inline(always)]
fn max_step<T: Scalar>(m: T, x: T) -> T {
    if m > x { m } else { x }
}

pub fn max_of_array<T: Scalar>(array: &[T]) -> Result<T> {
    let (&first, rest) = array.split_first().ok_or(MatrixError::EmptyInput)?;
    Ok(rest.iter().fold(first, |m, &x| max_step(m, x)))
}

/// Maximum along one axis of a matrix, written to `out`.
///
/// ```text
///       1 2 3
///   A = 4 5 6      ReduceOverRows    => [7 8 9]
///       7 8 9      ReduceOverColumns => [3 6 9]
/// ```
///
/// `out` must have one element per column (`ReduceOverRows`) or per row
/// (`ReduceOverColumns`).
pub fn max_of_matrix<T: Scalar>(
    matrix: &impl AsMatrixRef<T>,
    axis: Axis,
    out: &mut [T],
) -> Result<()> {
    let matrix = matrix.as_matrix_ref();
    let (rows, cols) = matrix.dims();
    match axis {
        Axis::ReduceOverRows => {
            check_len(out.len(), cols)?;
            if rows == 0 && cols > 0 {
                return Err(MatrixError::EmptyInput);
            }

            let mut row_iter = matrix.rows();
            if let Some(first) = row_iter.next() {
                out.copy_from_slice(first);
            }
            for row in row_iter {
                for (m, &x) in out.iter_mut().zip(row) {
                    *m = max_step(*m, x);
                }
            }
        },
        Axis::ReduceOverColumns => {
            check_len(out.len(), rows)?;
            if cols == 0 && rows > 0 {
                return Err(MatrixError::EmptyInput);
            }

            for (m, row) in out.iter_mut().zip(matrix.rows()) {
                *m = max_of_array(row)?;
            }
        },
    }
    Ok(())
}

fn square<T>(matrix: &MatrixRef<'_, T>) -> Result<usize> {
    match matrix.dims() {
        (rows, cols) if rows == cols => Ok(rows),
        (rows, cols) => Err(MatrixError::NotSquare { rows, cols }),
    }
}

/// Exact test for `M[i][j] == M[j][i]`.
///
/// A `NaN` anywhere (including the diagonal) makes the matrix asymmetric.
pub fn is_symmetric<T: Scalar>(matrix: &impl AsMatrixRef<T>) -> Result<bool> {
    let matrix = matrix.as_matrix_ref();
    let n = square(&matrix)?;
    Ok((0..n).all(|i| (0..=i).all(|j| matrix[(i, j)] == matrix[(j, i)])))
}

/// Tests `|M[i][j] - M[j][i]| <= eps`.
///
/// A `NaN` or infinite element makes the matrix asymmetric, since the difference
/// with its mirror (even on the diagonal) is then `NaN` or infinite.
pub fn is_symmetric_eps<T: Scalar>(matrix: &impl AsMatrixRef<T>, eps: T) -> Result<bool> {
    let matrix = matrix.as_matrix_ref();
    let n = square(&matrix)?;
    Ok((0..n).all(|i| (0..=i).all(|j| (matrix[(i, j)] - matrix[(j, i)]).abs() <= eps)))
}

/// Lowest index holding `value`, by exact `==`.
///
/// Values that are mathematically equal but were reached by different
/// floating point computations can differ in the last bits, and won't match.
/// `NaN` never matches.
pub fn index_of_element<T: Scalar>(array: &[T], value: T) -> Option<usize> {
    array.iter().position(|&x| x == value)
}

/// [`index_of_element`], with `-1` meaning "absent".
pub fn index_of_element_legacy<T: Scalar>(array: &[T], value: T) -> isize {
    index_of_element(array, value).map_or(-1, |i| i as isize)
}

/// Copies a row into `out`.
///
/// **`row_number` is 1-indexed**: row 1 is the first row.
pub fn get_row<T: Copy>(
    matrix: &impl AsMatrixRef<T>,
    row_number: usize,
    out: &mut [T],
) -> Result<()> {
    let matrix = matrix.as_matrix_ref();
    let (rows, cols) = matrix.dims();
    if row_number == 0 || row_number > rows {
        return Err(MatrixError::IndexOutOfRange { index: row_number, len: rows });
    }
    check_len(out.len(), cols)?;

    out.copy_from_slice(matrix.row(row_number - 1));
    Ok(())
}

/// Copies a column into `out`.
///
/// **`col_number` is 1-indexed**: column 1 is the first column.
pub fn get_col<T: Copy>(
    matrix: &impl AsMatrixRef<T>,
    col_number: usize,
    out: &mut [T],
) -> Result<()> {
    let matrix = matrix.as_matrix_ref();
    let (rows, cols) = matrix.dims();
    if col_number == 0 || col_number > cols {
        return Err(MatrixError::IndexOutOfRange { index: col_number, len: cols });
    }
    check_len(out.len(), rows)?;

    for (dest, row) in out.iter_mut().zip(matrix.rows()) {
        *dest = row[col_number - 1];
    }
    Ok(())
}
