/* ************************************************************************ **
** This file is part of hgmatch, and is licensed under EITHER the MIT       **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Dense, row-major matrix utilities used by hypergraph matching.
//!
//! Matrices are plain contiguous buffers owned by the caller; a
//! [`MatrixRef`] or [`MatrixMut`] pairs one with its dimensions. Operations
//! write into caller-provided outputs and never allocate.
//!
//! Two conventions here are easy to trip over:
//!
//! * [`get_row`] and [`get_col`] take **1-indexed** row/column numbers,
//!   whereas element access through `Index` is 0-indexed.
//! * [`reshape`] traverses both matrices in column-major order.

#[macro_use]
extern crate log;
#[cfg_attr(test, macro_use)]
extern crate hgmatch_assert_close;

pub use crate::errors::{MatrixError, Result};
pub use crate::scalar::Scalar;
pub use crate::matrix::{Matrix, MatrixRef_, MatrixRef, MatrixMut};
pub use crate::matrix::{AsMatrixRef, AsMatrixMut};

pub use crate::shape::{transpose, fill, zeros, ones, repmat, reshape};
pub use crate::arith::{mat_add, mat_sub, mat_div, mat_times_scalar, mat_plus_scalar};
pub use crate::reduce::{Axis, max_of_array, max_of_matrix};
pub use crate::reduce::{is_symmetric, is_symmetric_eps};
pub use crate::reduce::{index_of_element, index_of_element_legacy, get_row, get_col};
pub use crate::display::{PrintSettings, MatrixDisplay, print_matrix, log_matrix};

mod errors;
mod scalar;
mod matrix;
mod shape;
mod arith;
mod reduce;
mod display;
mod close;
