/* ************************************************************************ **
** This file is part of hgmatch, and is licensed under EITHER the MIT       **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use crate::{AsMatrixRef, Matrix, MatrixRef_};
use ::hgmatch_assert_close::{CheckClose, CheckCloseError, Tolerances};

// Shapes must match exactly; only the elements are compared approximately.

impl<T, Vs, Ws> CheckClose<MatrixRef_<T, Ws>> for MatrixRef_<T, Vs>
where
    T: CheckClose,
    Vs: AsRef<[T]>,
    Ws: AsRef<[T]>,
{
    fn check_close(&self, other: &MatrixRef_<T, Ws>, tol: Tolerances) -> Result<(), CheckCloseError> {
        assert_eq!(self.dims(), other.dims(), "shape mismatch in check_close");
        self.as_slice().check_close(other.as_slice(), tol)
    }
}

impl<T: CheckClose> CheckClose for Matrix<T> {
    fn check_close(&self, other: &Self, tol: Tolerances) -> Result<(), CheckCloseError>
    { self.as_matrix_ref().check_close(&other.as_matrix_ref(), tol) }
}

#[cfg(test)]
mod tests {
    use crate::{AsMatrixRef, Matrix, MatrixRef};

    #[test]
    fn close_matrices() {
        let a = Matrix::from([[1.0, 2.0], [3.0, 4.0]]);
        let b = Matrix::from([[1.0, 2.0 + 1e-12], [3.0, 4.0]]);
        assert_close!(abs=1e-10, &a, &b);

        let buf = [1.0, 2.0, 3.0, 4.0];
        assert_close!(abs=1e-10, a.as_matrix_ref(), MatrixRef::new((2, 2), &buf[..]).unwrap());
    }

    #[test]
    #[should_panic(expected = "shape mismatch")]
    fn shapes_must_agree() {
        let a = Matrix::from([[1.0, 2.0, 3.0, 4.0]]);
        let b = Matrix::from([[1.0, 2.0], [3.0, 4.0]]);
        assert_close!(a, b);
    }
}
