/* ************************************************************************ **
** This file is part of hgmatch, and is licensed under EITHER the MIT       **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

/// Violated preconditions of the matrix operations.
///
/// Every operation checks its preconditions before writing anything,
/// so an output buffer is left untouched whenever one of these is returned.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum MatrixError {
    #[error("shape mismatch: expected {}x{}, got {}x{}", .expected.0, .expected.1, .actual.0, .actual.1)]
    ShapeMismatch {
        expected: (usize, usize),
        actual: (usize, usize),
    },

    #[error("index {index} is out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("invalid axis {0} (expected 1 or 2)")]
    InvalidAxis(i32),

    #[error("matrix is not square ({rows}x{cols})")]
    NotSquare { rows: usize, cols: usize },

    #[error("buffer of length {len} cannot hold {needed} elements")]
    BufferTooSmall { needed: usize, len: usize },

    #[error("cannot reduce over an empty sequence")]
    EmptyInput,
}

pub type Result<T> = ::std::result::Result<T, MatrixError>;

pub(crate) fn check_dims(actual: (usize, usize), expected: (usize, usize)) -> Result<()> {
    match actual == expected {
        true => Ok(()),
        false => Err(MatrixError::ShapeMismatch { expected, actual }),
    }
}

/// Vectors are checked as `1 x len` matrices.
pub(crate) fn check_len(actual: usize, expected: usize) -> Result<()> {
    check_dims((1, actual), (1, expected))
}
