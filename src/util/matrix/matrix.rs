/* ************************************************************************ **
** This file is part of hgmatch, and is licensed under EITHER the MIT       **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use crate::errors::{MatrixError, Result};
use ::std::ops::{Index, IndexMut};
use ::std::marker::PhantomData;

/// Owned matrix type with C layout.
///
/// None of the operations in this crate create one of these; it exists for
/// callers who want somewhere to keep their data. Everything that accepts a
/// matrix accepts either this or a borrowed view.
// please resist the urge to go n-dimensional
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T = f64> {
    // c-contiguous, row-contiguous data
    data: Vec<T>,
    // invariant: rows * cols == data.len()
    rows: usize,
    cols: usize,
}

/// A `rows x cols` row-major view of the first `rows * cols` elements of a slice.
///
/// Use the aliases [`MatrixRef`] and [`MatrixMut`].
#[derive(Debug)]
pub struct MatrixRef_<T, Vs> {
    // invariant: slice.len() >= dims.0 * dims.1
    slice: Vs,
    dims: (usize, usize),
    _dummy: PhantomData<T>, // constrain some impls
}
pub type MatrixRef<'a, T = f64> = MatrixRef_<T, &'a [T]>;
pub type MatrixMut<'a, T = f64> = MatrixRef_<T, &'a mut [T]>;

pub trait AsMatrixRef<T> {
    fn as_matrix_ref(&self) -> MatrixRef<'_, T>;
}
pub trait AsMatrixMut<T>: AsMatrixRef<T> {
    fn as_matrix_mut(&mut self) -> MatrixMut<'_, T>;
}

impl<'a, T> Clone for MatrixRef<'a, T> {
    fn clone(&self) -> Self { *self }
}
impl<'a, T> Copy for MatrixRef<'a, T> {}

impl<T, Vs: AsRef<[T]>> MatrixRef_<T, Vs> {
    /// View a caller-owned buffer as a `rows x cols` row-major matrix.
    ///
    /// The buffer may be longer than `rows * cols`; the excess is not part of the view.
    /// If `rows * cols` overflows, the error reports `needed` as `usize::MAX`.
    pub fn new((rows, cols): (usize, usize), slice: Vs) -> Result<Self> {
        let len = slice.as_ref().len();
        match rows.checked_mul(cols) {
            Some(needed) if needed <= len => {},
            needed => {
                let needed = needed.unwrap_or(usize::MAX);
                return Err(MatrixError::BufferTooSmall { needed, len });
            },
        }
        Ok(MatrixRef_ { slice, dims: (rows, cols), _dummy: PhantomData })
    }

    pub fn dims(&self) -> (usize, usize) { self.dims }
    pub fn num_rows(&self) -> usize { self.dims.0 }
    pub fn num_cols(&self) -> usize { self.dims.1 }
    pub fn is_square(&self) -> bool { self.dims.0 == self.dims.1 }
    pub fn size(&self) -> usize { self.dims.0 * self.dims.1 }

    /// The `rows * cols` elements in row-major order.
    pub fn as_slice(&self) -> &[T] { &self.slice.as_ref()[..self.size()] }

    /// Row `r`, zero-indexed.
    ///
    /// # Panics
    ///
    /// Panics if `r >= self.num_rows()`.
    pub fn row(&self, r: usize) -> &[T] {
        assert!(r < self.num_rows(), "row {} out of bounds for {} rows", r, self.num_rows());
        let cols = self.num_cols();
        &self.slice.as_ref()[r * cols..(r + 1) * cols]
    }

    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[T]> + '_ {
        (0..self.num_rows()).map(move |r| self.row(r))
    }

    pub fn get(&self, index: (usize, usize)) -> Result<&T> {
        let offset = self.checked_offset(index)?;
        Ok(&self.slice.as_ref()[offset])
    }

    fn checked_offset(&self, (r, c): (usize, usize)) -> Result<usize> {
        let (rows, cols) = self.dims;
        if r >= rows {
            return Err(MatrixError::IndexOutOfRange { index: r, len: rows });
        }
        if c >= cols {
            return Err(MatrixError::IndexOutOfRange { index: c, len: cols });
        }
        Ok(r * cols + c)
    }

    #[inline(always)]
    fn offset(&self, (r, c): (usize, usize)) -> usize {
        let (rows, cols) = self.dims;
        assert!(r < rows && c < cols, "index ({}, {}) out of bounds for {}x{} matrix", r, c, rows, cols);
        r * cols + c
    }
}

impl<T, Vs: AsRef<[T]> + AsMut<[T]>> MatrixRef_<T, Vs> {
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        let size = self.size();
        &mut self.slice.as_mut()[..size]
    }

    pub fn get_mut(&mut self, index: (usize, usize)) -> Result<&mut T> {
        let offset = self.checked_offset(index)?;
        Ok(&mut self.slice.as_mut()[offset])
    }
}

impl<T, Vs: AsRef<[T]>> AsMatrixRef<T> for MatrixRef_<T, Vs> {
    fn as_matrix_ref(&self) -> MatrixRef<'_, T> {
        MatrixRef_ { slice: self.as_slice(), dims: self.dims, _dummy: PhantomData }
    }
}
impl<T, Vs: AsRef<[T]> + AsMut<[T]>> AsMatrixMut<T> for MatrixRef_<T, Vs> {
    fn as_matrix_mut(&mut self) -> MatrixMut<'_, T> {
        let dims = self.dims;
        MatrixRef_ { slice: self.as_mut_slice(), dims, _dummy: PhantomData }
    }
}

impl<T, Vs: AsRef<[T]>> Index<(usize, usize)> for MatrixRef_<T, Vs> {
    type Output = T;

    #[inline(always)] // inlining should often remove bounds checks
    fn index(&self, index: (usize, usize)) -> &Self::Output
    { &self.slice.as_ref()[self.offset(index)] }
}

impl<T, Vs: AsRef<[T]> + AsMut<[T]>> IndexMut<(usize, usize)> for MatrixRef_<T, Vs> {
    #[inline(always)]
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Self::Output {
        let offset = self.offset(index);
        &mut self.slice.as_mut()[offset]
    }
}

impl<T> Matrix<T> {
    /// # Panics
    ///
    /// Panics if `data.len() != rows * cols`.
    pub fn from_row_major_data((rows, cols): (usize, usize), data: Vec<T>) -> Self
    {
        assert_eq!(Some(data.len()), rows.checked_mul(cols));
        Matrix { data, rows, cols }
    }

    pub fn into_row_major_data(self) -> Vec<T> { self.data }
    pub fn row_major_data(&self) -> &[T] { &self.data }
    pub fn row_major_data_mut(&mut self) -> &mut [T] { &mut self.data }

    pub fn dims(&self) -> (usize, usize) { (self.rows, self.cols) }
    pub fn num_rows(&self) -> usize { self.rows }
    pub fn num_cols(&self) -> usize { self.cols }
}

impl<T: Clone> Matrix<T> {
    /// # Panics
    ///
    /// Panics if `rows * cols` overflows.
    pub fn new_filled((rows, cols): (usize, usize), fill: &T) -> Self {
        let len = rows.checked_mul(cols)
            .unwrap_or_else(|| panic!("{}x{} matrix is too large", rows, cols));
        Matrix { data: vec![fill.clone(); len], rows, cols }
    }
}

impl<T, const R: usize, const C: usize> From<[[T; C]; R]> for Matrix<T> {
    fn from(rows: [[T; C]; R]) -> Self {
        let data = IntoIterator::into_iter(rows).flat_map(IntoIterator::into_iter).collect();
        Matrix { data, rows: R, cols: C }
    }
}

impl<T> AsMatrixRef<T> for Matrix<T> {
    fn as_matrix_ref(&self) -> MatrixRef<'_, T> {
        MatrixRef_ { slice: &self.data, dims: (self.rows, self.cols), _dummy: PhantomData }
    }
}
impl<T> AsMatrixMut<T> for Matrix<T> {
    fn as_matrix_mut(&mut self) -> MatrixMut<'_, T> {
        MatrixRef_ { slice: &mut self.data, dims: (self.rows, self.cols), _dummy: PhantomData }
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    #[inline(always)]
    fn index(&self, (r, c): (usize, usize)) -> &Self::Output {
        assert!(r < self.rows && c < self.cols, "index ({}, {}) out of bounds for {}x{} matrix", r, c, self.rows, self.cols);
        &self.data[r * self.cols + c]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    #[inline(always)]
    fn index_mut(&mut self, (r, c): (usize, usize)) -> &mut Self::Output {
        assert!(r < self.rows && c < self.cols, "index ({}, {}) out of bounds for {}x{} matrix", r, c, self.rows, self.cols);
        &mut self.data[r * self.cols + c]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_of_longer_buffer() {
        let buf = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 99.0];
        let m = MatrixRef::new((2, 3), &buf[..]).unwrap();
        assert_eq!(m.as_slice(), &buf[..6]);
        assert_eq!(m[(1, 0)], 4.0);
        assert_eq!(m.row(1), &[4.0, 5.0, 6.0]);
        assert_eq!(m.rows().count(), 2);
    }

    #[test]
    fn buffer_too_small() {
        let buf = [0.0; 5];
        assert_eq!(
            MatrixRef::new((2, 3), &buf[..]).unwrap_err(),
            MatrixError::BufferTooSmall { needed: 6, len: 5 },
        );
    }

    #[test]
    fn overflowing_dims() {
        let huge = usize::MAX / 2 + 1;
        assert_eq!(
            MatrixRef::<f64>::new((huge, 2), &[][..]).unwrap_err(),
            MatrixError::BufferTooSmall { needed: usize::MAX, len: 0 },
        );
        assert_eq!(
            MatrixRef::new((2, huge), &[1.0; 4][..]).unwrap_err(),
            MatrixError::BufferTooSmall { needed: usize::MAX, len: 4 },
        );
    }

    #[test]
    #[should_panic(expected = "too large")]
    fn new_filled_overflow() {
        let _ = Matrix::new_filled((usize::MAX, 2), &0u8);
    }

    #[test]
    fn checked_access() {
        let mut buf = [1.0, 2.0, 3.0, 4.0];
        let mut m = MatrixMut::new((2, 2), &mut buf[..]).unwrap();
        *m.get_mut((0, 1)).unwrap() = 7.0;
        m[(1, 1)] = 8.0;
        assert_eq!(m.get((0, 1)), Ok(&7.0));
        assert_eq!(m.get((2, 0)), Err(MatrixError::IndexOutOfRange { index: 2, len: 2 }));
        assert_eq!(m.get((0, 5)), Err(MatrixError::IndexOutOfRange { index: 5, len: 2 }));
        assert_eq!(buf, [1.0, 7.0, 3.0, 8.0]);
    }

    #[test]
    #[should_panic]
    fn index_checks_columns() {
        // offset 2 is in bounds of the buffer, but (0, 2) is not in the matrix
        let m = Matrix::from([[1.0, 2.0], [3.0, 4.0]]);
        let _x: f64 = m.as_matrix_ref()[(0, 2)];
    }

    #[test]
    fn zero_width_rows() {
        let m = MatrixRef::<f64>::new((3, 0), &[][..]).unwrap();
        assert_eq!(m.rows().count(), 3);
        assert!(m.rows().all(|row| row.is_empty()));
    }

    #[test]
    fn from_nested_array() {
        let m = Matrix::from([[1, 2, 3], [4, 5, 6]]);
        assert_eq!(m.dims(), (2, 3));
        assert_eq!(m.row_major_data(), &[1, 2, 3, 4, 5, 6]);
        assert_eq!(m[(1, 2)], 6);
    }
}
