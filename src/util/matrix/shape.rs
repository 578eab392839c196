/* ************************************************************************ **
** This file is part of hgmatch, and is licensed under EITHER the MIT       **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Fills and shape transforms.

use crate::{AsMatrixRef, AsMatrixMut, Scalar};
use crate::errors::{MatrixError, Result, check_dims};

/// Writes the `cols x rows` transpose of `input` into `out`.
///
/// There is no in-place variant; `out` must be a separate buffer.
pub fn transpose<T: Copy>(
    input: &impl AsMatrixRef<T>,
    out: &mut impl AsMatrixMut<T>,
) -> Result<()> {
    let input = input.as_matrix_ref();
    let mut out = out.as_matrix_mut();
    let (rows, cols) = input.dims();
    check_dims(out.dims(), (cols, rows))?;

    for (r, row) in input.rows().enumerate() {
        for (c, &x) in row.iter().enumerate() {
            out[(c, r)] = x;
        }
    }
    Ok(())
}

pub fn fill<T: Clone>(out: &mut impl AsMatrixMut<T>, value: T) {
    for x in out.as_matrix_mut().as_mut_slice() {
        *x = value.clone();
    }
}

pub fn zeros<T: Scalar>(out: &mut impl AsMatrixMut<T>) { fill(out, T::zero()) }
pub fn ones<T: Scalar>(out: &mut impl AsMatrixMut<T>) { fill(out, T::one()) }

/// Tiles `input` `m` times vertically and `n` times horizontally.
///
/// `out` must be `(rows * m) x (cols * n)`, and receives
/// `out[i][j] = input[i % rows][j % cols]`.
pub fn repmat<T: Copy>(
    input: &impl AsMatrixRef<T>,
    (m, n): (usize, usize),
    out: &mut impl AsMatrixMut<T>,
) -> Result<()> {
    let input = input.as_matrix_ref();
    let mut out = out.as_matrix_mut();
    let (rows, cols) = input.dims();
    let tiled = match (rows.checked_mul(m), cols.checked_mul(n)) {
        (Some(out_rows), Some(out_cols)) => (out_rows, out_cols),
        _ => return Err(MatrixError::ShapeMismatch {
            expected: (rows.saturating_mul(m), cols.saturating_mul(n)),
            actual: out.dims(),
        }),
    };
    check_dims(out.dims(), tiled)?;
    trace!("repmat {}x{} by ({}, {})", rows, cols, m, n);

    // (an empty input gives an empty output, so the modulos below never see zero)
    let (out_rows, out_cols) = out.dims();
    for i in 0..out_rows {
        let src = input.row(i % rows);
        for j in 0..out_cols {
            out[(i, j)] = src[j % cols];
        }
    }
    Ok(())
}

/// Rearranges the elements of `input` into the shape of `out`.
///
/// Both matrices are traversed in **column-major** order: the `k`th element
/// read walking down the columns of `input` is stored at the `k`th position
/// walking down the columns of `out`. The storage of both is still row-major.
///
/// ```text
///  input (2x3)       out (3x2)
///   1 2 3             1 5
///   4 5 6             4 3
///                     2 6
/// ```
///
/// Fails with [`MatrixError::ShapeMismatch`] (leaving `out` untouched) when the
/// element counts differ.
pub fn reshape<T: Copy>(
    input: &impl AsMatrixRef<T>,
    out: &mut impl AsMatrixMut<T>,
) -> Result<()> {
    let input = input.as_matrix_ref();
    let mut out = out.as_matrix_mut();
    let (in_rows, in_cols) = input.dims();
    let (out_rows, out_cols) = out.dims();

    // a view's size always fits in its buffer, so this cannot overflow
    if input.size() != out.size() {
        warn!(
            "cannot reshape {}x{} into {}x{}: the number of elements must agree",
            in_rows, in_cols, out_rows, out_cols,
        );
        return Err(MatrixError::ShapeMismatch {
            expected: (in_rows, in_cols),
            actual: (out_rows, out_cols),
        });
    }

    let column_major = (0..in_cols).flat_map(|c| (0..in_rows).map(move |r| (r, c)));
    for (k, index) in column_major.enumerate() {
        out[(k % out_rows, k / out_rows)] = input[index];
    }
    Ok(())
}
