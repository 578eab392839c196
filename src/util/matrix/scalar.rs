/* ************************************************************************ **
** This file is part of hgmatch, and is licensed under EITHER the MIT       **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use ::std::fmt;

/// Element type of the arithmetic and reduction ops.
///
/// You get `f32` and `f64`. Integers are deliberately left out since
/// elementwise division is defined by IEEE-754 semantics (`x / 0.0` is
/// `inf` or `NaN`, never an error).
///
/// This trait is sealed to avoid accidental commitments.
pub trait Scalar
    : ::num_traits::Float
    + fmt::Display
    + fmt::Debug
    + Send + Sync + 'static
    + private::Sealed
{ }

impl Scalar for f32 { }
impl Scalar for f64 { }

mod private {
    pub trait Sealed { }
    impl Sealed for f32 { }
    impl Sealed for f64 { }
}
