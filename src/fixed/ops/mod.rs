use super::*;

use core::ops::{Add, Mul, Neg, Sub};

use crate::Result;

/// Addition and subtraction (both use the same alignment and growth rules).
mod add;

/// Multiplication.
mod mul;

/// Negation.
mod neg;

/// Helper macro for implementing operators for all combinations of value and reference. Since
/// any operation may fail (a result that does not fit, an unsigned result going negative), the
/// `Output` is a [`Result`], and there are no `*Assign` variants.
macro_rules! mk_ops {
  ($ty:ident, $trait:ident, $name:ident, $method:ident) => {
    impl<const SIGNED: bool>
    $trait<$ty<SIGNED>> for $ty<SIGNED> {
      type Output = $crate::Result<$ty<SIGNED>>;

      #[inline]
      fn $name(self, rhs: Self) -> Self::Output { self.$method(rhs) }
    }

    impl<const SIGNED: bool>
    $trait<&$ty<SIGNED>> for $ty<SIGNED> {
      type Output = $crate::Result<$ty<SIGNED>>;

      #[inline]
      fn $name(self, rhs: &Self) -> Self::Output { self.$method(rhs) }
    }

    impl<const SIGNED: bool>
    $trait<$ty<SIGNED>> for &$ty<SIGNED> {
      type Output = $crate::Result<$ty<SIGNED>>;

      #[inline]
      fn $name(self, rhs: $ty<SIGNED>) -> Self::Output { self.$method(rhs) }
    }

    impl<const SIGNED: bool>
    $trait<&$ty<SIGNED>> for &$ty<SIGNED> {
      type Output = $crate::Result<$ty<SIGNED>>;

      #[inline]
      fn $name(self, rhs: &$ty<SIGNED>) -> Self::Output { self.$method(rhs) }
    }
  }
}

pub(crate) use mk_ops;

mk_ops!{Fixed, Add, add, try_add}
mk_ops!{Fixed, Sub, sub, try_sub}
mk_ops!{Fixed, Mul, mul, try_mul}

impl<const SIGNED: bool> Neg for Fixed<SIGNED> {
  type Output = Result<Fixed<SIGNED>>;

  #[inline]
  fn neg(self) -> Self::Output { self.try_neg() }
}

impl<const SIGNED: bool> Neg for &Fixed<SIGNED> {
  type Output = Result<Fixed<SIGNED>>;

  #[inline]
  fn neg(self) -> Self::Output { self.try_neg() }
}
