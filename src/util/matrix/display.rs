/* ************************************************************************ **
** This file is part of hgmatch, and is licensed under EITHER the MIT       **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Human-readable matrix output.
//!
//! The default format writes each element with two decimal places followed by
//! a space, ends every row with a newline, and finishes with one blank line:
//!
//! ```text
//! 1.00 2.00 \n
//! 3.00 4.00 \n
//! \n
//! ```
//!
//! `NaN` is written as `nan` and infinities as `inf`/`-inf`, the way `printf("%.2f ")` spells them.

use crate::{AsMatrixRef, Matrix, MatrixRef, MatrixRef_, Scalar};
use ::std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PrintSettings {
    /// Digits after the decimal point.
    pub precision: usize,
}

impl Default for PrintSettings {
    fn default() -> Self { PrintSettings { precision: 2 } }
}

/// `Display` adapter for a matrix with non-default [`PrintSettings`].
#[derive(Debug, Copy, Clone)]
pub struct MatrixDisplay<'a, T> {
    matrix: MatrixRef<'a, T>,
    settings: PrintSettings,
}

impl<'a, T> MatrixDisplay<'a, T> {
    pub fn new(matrix: MatrixRef<'a, T>, settings: PrintSettings) -> Self
    { MatrixDisplay { matrix, settings } }
}

impl<'a, T: Scalar> fmt::Display for MatrixDisplay<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let precision = self.settings.precision;
        for row in self.matrix.rows() {
            for &x in row {
                match x.is_nan() {
                    true => write!(f, "nan ")?,
                    false => write!(f, "{:.*} ", precision, x)?,
                }
            }
            writeln!(f)?;
        }
        writeln!(f)
    }
}

impl<T: Scalar, Vs: AsRef<[T]>> fmt::Display for MatrixRef_<T, Vs> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result
    { MatrixDisplay::new(self.as_matrix_ref(), PrintSettings::default()).fmt(f) }
}

impl<T: Scalar> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result
    { MatrixDisplay::new(self.as_matrix_ref(), PrintSettings::default()).fmt(f) }
}

/// Writes the matrix to stdout in the default format.
pub fn print_matrix<T: Scalar>(matrix: &impl AsMatrixRef<T>) {
    print!("{}", matrix.as_matrix_ref());
}

/// Emits the matrix as a single log record, preceded by `label`.
pub fn log_matrix<T: Scalar>(level: ::log::Level, label: &str, matrix: &impl AsMatrixRef<T>) {
    if log_enabled!(level) {
        log!(level, "{}:\n{}", label, matrix.as_matrix_ref());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_format() {
        let m = Matrix::from([[1.0, -2.5], [12.345678, 40.0]]);
        assert_eq!(m.to_string(), "1.00 -2.50 \n12.35 40.00 \n\n");
        assert_eq!(m.as_matrix_ref().to_string(), m.to_string());
    }

    #[test]
    fn custom_precision() {
        let m = Matrix::from([[0.25f32, 1.0]]);
        let settings = PrintSettings { precision: 0 };
        assert_eq!(MatrixDisplay::new(m.as_matrix_ref(), settings).to_string(), "0 1 \n\n");
        let settings = PrintSettings { precision: 4 };
        assert_eq!(MatrixDisplay::new(m.as_matrix_ref(), settings).to_string(), "0.2500 1.0000 \n\n");
    }

    #[test]
    fn degenerate_shapes() {
        let m = Matrix::<f64>::from_row_major_data((2, 0), vec![]);
        assert_eq!(m.to_string(), "\n\n\n");
        let m = Matrix::<f64>::from_row_major_data((0, 2), vec![]);
        assert_eq!(m.to_string(), "\n");
    }

    #[test]
    fn non_finite_values_are_spelled_like_printf() {
        let m = Matrix::from([[::std::f64::NAN, 0.25, ::std::f64::INFINITY, ::std::f64::NEG_INFINITY]]);
        assert_eq!(m.to_string(), "nan 0.25 inf -inf \n\n");

        let m = Matrix::from([[-::std::f32::NAN]]);
        let settings = PrintSettings { precision: 4 };
        assert_eq!(MatrixDisplay::new(m.as_matrix_ref(), settings).to_string(), "nan \n\n");
    }
}
