use super::*;

use core::cmp::Ordering;

use crate::{Result, rational};

impl<const SIGNED: bool> Fixed<SIGNED> {
  /// Compare `self` against `rhs`, according to `self`'s scaling policy: on a common scale
  /// (i.e. by represented quantity) under [`Scaling::Internal`], by raw payload under
  /// [`Scaling::External`].
  ///
  /// Fails only if `rhs` cannot be built into a value (e.g. a raw integer, which has no
  /// integer bit count to go with it).
  pub fn cmp_with(&self, rhs: impl Into<Operand>) -> Result<Ordering> {
    let rhs = Self::coerce(rhs.into(), None, None)?;
    Ok(match self.scaling {
      Scaling::Internal => self.to_rational().cmp(&rational::scaled(&rhs.raw, rhs.frac_bits())),
      Scaling::External => self.raw.cmp(&rhs.raw),
    })
  }

  pub fn is_lt(&self, rhs: impl Into<Operand>) -> Result<bool> {
    self.cmp_with(rhs).map(Ordering::is_lt)
  }

  pub fn is_gt(&self, rhs: impl Into<Operand>) -> Result<bool> {
    self.cmp_with(rhs).map(Ordering::is_gt)
  }

  pub fn is_eq(&self, rhs: impl Into<Operand>) -> Result<bool> {
    self.cmp_with(rhs).map(Ordering::is_eq)
  }
}

// The trait impls can't fail or consult a policy, so they always compare exact quantities:
// `1.5` on 4 bits equals `1.5` on 40 bits.

impl<const S: bool, const T: bool> PartialEq<Fixed<T>> for Fixed<S> {
  fn eq(&self, other: &Fixed<T>) -> bool {
    self.to_rational() == other.to_rational()
  }
}

impl<const SIGNED: bool> Eq for Fixed<SIGNED> {}

impl<const S: bool, const T: bool> PartialOrd<Fixed<T>> for Fixed<S> {
  fn partial_cmp(&self, other: &Fixed<T>) -> Option<Ordering> {
    Some(self.to_rational().cmp(&other.to_rational()))
  }
}

impl<const SIGNED: bool> Ord for Fixed<SIGNED> {
  fn cmp(&self, other: &Self) -> Ordering {
    self.to_rational().cmp(&other.to_rational())
  }
}
