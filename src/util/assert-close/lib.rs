/* ************************************************************************ **
** This file is part of hgmatch, and is licensed under EITHER the MIT       **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Approximate comparisons for floats and containers of floats.
//!
//! Both `f32` and `f64` are compared after widening to `f64`, so a single
//! set of [`Tolerances`] serves both.

use std::fmt;

pub const DEFAULT_NONZERO_TOL: f64 = 1e-9;

#[macro_export]
macro_rules! assert_close {
    ($($t:tt)*) => {$crate::assert_close_impl!{@parsing [$($t)*] [[@rel $crate::DEFAULT_NONZERO_TOL] [@abs 0.0]]}};
}

#[macro_export]
macro_rules! debug_assert_close {
    ($($t:tt)*) => {{
        #[cfg(debug_assertions)] {
            $crate::assert_close!{$($t)*}
        }
    }};
}

#[doc(hidden)]
#[macro_export]
macro_rules! assert_close_impl {
    (@parsing [rel=$tol:expr, $($rest:tt)*] [$($assignment:tt)*]) => {
        $crate::assert_close_impl!(@parsing [$($rest)*] [$($assignment)* [@rel $tol]]);
    };
    (@parsing [abs=$tol:expr, $($rest:tt)*] [$($assignment:tt)*]) => {
        $crate::assert_close_impl!(@parsing [$($rest)*] [$($assignment)* [@abs $tol]]);
    };
    (@parsing [$a:expr, $b:expr $(,)*] $assignments:tt) => {
        $crate::assert_close_impl!(@expand $assignments [@comp $a, $b] [@fmt "not nearly equal!"])
    };
    (@parsing [$a:expr, $b:expr, $($fmt:tt)+] $assignments:tt) => {
        $crate::assert_close_impl!(@expand $assignments [@comp $a, $b] [@fmt $($fmt)+])
    };
    (@expand [$($assignment:tt)*] [@comp $a:expr, $b:expr] [@fmt $($fmt:tt)+] ) => {
        #[allow(unused_mut)]
        #[allow(unused_assignments)]
        {
            let a = $a;
            let b = $b;

            let mut abs: f64;
            let mut rel: f64;
            $(
                $crate::assert_close_impl!{@stmt::assign [abs, rel] $assignment}
            )*

            if let Err(e) = $crate::CheckClose::check_close(&a, &b, $crate::Tolerances { abs, rel }) {
                panic!(
                "{} (tolerances: rel={}, abs={})\n left: {:?}\nright: {:?}\n{}",
                 format!($($fmt)*), rel, abs, a, b, e);
            }
        }
    };
    (@stmt::assign [$abs:ident, $rel:ident] [@abs $tol:expr]) => { $abs = $tol; };
    (@stmt::assign [$abs:ident, $rel:ident] [@rel $tol:expr]) => { $rel = $tol; };
}

/// Python's `math.isclose`, except that `abs` defaults to zero at the macro level.
#[inline]
pub fn is_close(a: f64, b: f64, Tolerances { abs, rel }: Tolerances) -> bool {
    assert!(rel >= 0.0);
    assert!(abs >= 0.0);

    // infinities of same sign
    if a == b { return true; }

    // infinities of opposite sign; avoid an infinite relative tolerance
    if a.is_infinite() || b.is_infinite() { return false; }

    // general values and NaN
    (a - b).abs() <= abs.max(rel * a.abs()).max(rel * b.abs())
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Tolerances {
    pub abs: f64,
    pub rel: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CheckCloseError {
    /// Position of the failing element within the innermost container, if any.
    pub index: Option<usize>,
    pub values: (f64, f64),
    pub tol: Tolerances,
}

impl CheckCloseError {
    fn at_index(self, index: usize) -> Self {
        CheckCloseError { index: Some(self.index.unwrap_or(index)), ..self }
    }
}

impl fmt::Display for CheckCloseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "failed")?;
        if let Some(index) = self.index {
            write!(f, " at index {}", index)?;
        }
        let (ref left, ref right) = self.values;
        write!(f, ":
  left: {:?}
 right: {:?}
   tol: {:?}", left, right, self.tol)
    }
}

impl std::error::Error for CheckCloseError {}

pub trait CheckClose<Rhs: ?Sized = Self> {
    /// Test that all values of self and other are close.
    fn check_close(&self, other: &Rhs, tol: Tolerances) -> Result<(), CheckCloseError>;
}

macro_rules! impl_float {
    ($($F:ty)*) => {$(
        impl CheckClose for $F {
            #[inline]
            fn check_close(&self, other: &Self, tol: Tolerances) -> Result<(), CheckCloseError> {
                let values = (f64::from(*self), f64::from(*other));
                match is_close(values.0, values.1, tol) {
                    true => Ok(()),
                    false => Err(CheckCloseError { index: None, values, tol }),
                }
            }
        }
    )*};
}

impl_float!{ f32 f64 }

impl<'a, T: ?Sized + CheckClose> CheckClose for &'a T {
    fn check_close(&self, other: &Self, tol: Tolerances) -> Result<(), CheckCloseError>
    { CheckClose::check_close(*self, *other, tol) }
}

impl<T: CheckClose> CheckClose for [T] {
    fn check_close(&self, other: &Self, tol: Tolerances) -> Result<(), CheckCloseError>
    {
        assert_eq!(self.len(), other.len(), "length mismatch in check_close");
        for (index, (a, b)) in self.iter().zip(other).enumerate() {
            a.check_close(b, tol).map_err(|e| e.at_index(index))?;
        }
        Ok(())
    }
}

impl<T: CheckClose> CheckClose for Vec<T> {
    fn check_close(&self, other: &Self, tol: Tolerances) -> Result<(), CheckCloseError>
    { self[..].check_close(&other[..], tol) }
}

impl<T: CheckClose> CheckClose<[T]> for Vec<T> {
    fn check_close(&self, other: &[T], tol: Tolerances) -> Result<(), CheckCloseError>
    { self[..].check_close(other, tol) }
}

impl<T: CheckClose> CheckClose<Vec<T>> for [T] {
    fn check_close(&self, other: &Vec<T>, tol: Tolerances) -> Result<(), CheckCloseError>
    { self.check_close(&other[..], tol) }
}

impl<T: CheckClose, const N: usize> CheckClose for [T; N] {
    fn check_close(&self, other: &Self, tol: Tolerances) -> Result<(), CheckCloseError>
    { self[..].check_close(&other[..], tol) }
}

impl<T: CheckClose, const N: usize> CheckClose<[T; N]> for Vec<T> {
    fn check_close(&self, other: &[T; N], tol: Tolerances) -> Result<(), CheckCloseError>
    { self[..].check_close(&other[..], tol) }
}

#[cfg(test)]
#[deny(unused)]
mod tests {
    use super::*;

    #[test]
    fn macro_output_can_compile() {
        assert_close!(1.0, 1.0);
        assert_close!(abs=1e-8, 1.0, 1.0);
        assert_close!(rel=1e-8, abs=1e-8, 1.0, 1.0);
        assert_close!(1.0, 1.0,);
        assert_close!(abs=1e-8, 1.0f32, 1.0f32,);
        assert_close!(rel=1e-8, abs=1e-8, 1.0, 1.0, "{}", "message");
    }

    #[test]
    fn containers() {
        assert_close!(abs=1e-6, vec![1.0f32, 2.0], [1.0f32, 2.0 + 1e-7]);
        assert_close!(abs=1e-12, [[1.0, 2.0], [3.0, 4.0]], [[1.0, 2.0], [3.0, 4.0]]);
    }

    #[test]
    fn error_reports_index() {
        let tol = Tolerances { abs: 1e-3, rel: 0.0 };
        let err = [1.0f64, 2.0, 3.0].check_close(&[1.0, 2.5, 3.0], tol).unwrap_err();
        assert_eq!(err.index, Some(1));
        assert_eq!(err.values, (2.0, 2.5));
        assert!(err.to_string().starts_with("failed at index 1:"));

        let err = 1.0f64.check_close(&2.0, tol).unwrap_err();
        assert_eq!(err.index, None);
        assert!(err.to_string().starts_with("failed:"));
    }

    #[test]
    fn infinities_and_nan() {
        let tol = Tolerances { abs: 1.0, rel: 1.0 };
        assert!(is_close(::std::f64::INFINITY, ::std::f64::INFINITY, tol));
        assert!(!is_close(::std::f64::INFINITY, ::std::f64::NEG_INFINITY, tol));
        assert!(!is_close(::std::f64::NAN, ::std::f64::NAN, tol));
    }

    #[test]
    #[should_panic]
    fn not_close() {
        assert_close!(abs=0.0, rel=0.0, 1.0, 1.1);
    }

    #[test]
    #[cfg_attr(debug_assertions, should_panic)]
    fn debug_not_close() {
        debug_assert_close!(abs=0.0, rel=0.0, 1.0, 1.1);
    }
}
