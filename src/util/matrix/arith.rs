/* ************************************************************************ **
** This file is part of hgmatch, and is licensed under EITHER the MIT       **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Elementwise arithmetic.
//!
//! Every operand must have the same shape as `out`; there is no broadcasting.
//! Shapes are checked before anything is written.

use crate::{AsMatrixRef, AsMatrixMut, MatrixRef, MatrixMut, Scalar};
use crate::errors::{Result, check_dims};

pub fn mat_add<T: Scalar>(
    a: &impl AsMatrixRef<T>,
    b: &impl AsMatrixRef<T>,
    out: &mut impl AsMatrixMut<T>,
) -> Result<()> {
    zip_with(a.as_matrix_ref(), b.as_matrix_ref(), out.as_matrix_mut(), |x, y| x + y)
}

pub fn mat_sub<T: Scalar>(
    a: &impl AsMatrixRef<T>,
    b: &impl AsMatrixRef<T>,
    out: &mut impl AsMatrixMut<T>,
) -> Result<()> {
    zip_with(a.as_matrix_ref(), b.as_matrix_ref(), out.as_matrix_mut(), |x, y| x - y)
}

/// Elementwise `a / b`.
///
/// Zero divisors are not an error; they produce `inf`, `-inf` or `NaN`.
pub fn mat_div<T: Scalar>(
    a: &impl AsMatrixRef<T>,
    b: &impl AsMatrixRef<T>,
    out: &mut impl AsMatrixMut<T>,
) -> Result<()> {
    zip_with(a.as_matrix_ref(), b.as_matrix_ref(), out.as_matrix_mut(), |x, y| x / y)
}

pub fn mat_times_scalar<T: Scalar>(
    a: &impl AsMatrixRef<T>,
    scalar: T,
    out: &mut impl AsMatrixMut<T>,
) -> Result<()> {
    map(a.as_matrix_ref(), out.as_matrix_mut(), |x| x * scalar)
}

pub fn mat_plus_scalar<T: Scalar>(
    a: &impl AsMatrixRef<T>,
    scalar: T,
    out: &mut impl AsMatrixMut<T>,
) -> Result<()> {
    map(a.as_matrix_ref(), out.as_matrix_mut(), |x| x + scalar)
}

fn map<T: Scalar>(
    a: MatrixRef<'_, T>,
    mut out: MatrixMut<'_, T>,
    f: impl Fn(T) -> T,
) -> Result<()> {
    check_dims(out.dims(), a.dims())?;
    for (dest, &x) in out.as_mut_slice().iter_mut().zip(a.as_slice()) {
        *dest = f(x);
    }
    Ok(())
}

fn zip_with<T: Scalar>(
    a: MatrixRef<'_, T>,
    b: MatrixRef<'_, T>,
    mut out: MatrixMut<'_, T>,
    f: impl Fn(T, T) -> T,
) -> Result<()> {
    check_dims(b.dims(), a.dims())?;
    check_dims(out.dims(), a.dims())?;
    for ((dest, &x), &y) in out.as_mut_slice().iter_mut().zip(a.as_slice()).zip(b.as_slice()) {
        *dest = f(x, y);
    }
    Ok(())
}
