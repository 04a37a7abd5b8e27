use super::*;

use crate::Error;
use crate::fixed::format::check_int_bits;

impl<const SIGNED: bool> Fixed<SIGNED> {
  /// `-self`, one bit wider (and with one more integer bit) so that negating the most negative
  /// value still fits. Unsigned values cannot be negated.
  ///
  /// ```
  /// # use ap_fixed::{ApFixed, ApUfixed};
  /// let a = ApFixed::from_raw(-8, 4, 4).unwrap();
  /// let b = a.try_neg().unwrap();
  /// assert_eq!((b.value(), b.width(), b.int_bits()), (8., 5, 5));
  /// assert!(ApUfixed::from_raw(1, 4, 4).unwrap().try_neg().is_err());
  /// ```
  pub fn try_neg(&self) -> Result<Self> {
    if !SIGNED {
      return Err(Error::NotNegatable("unsigned"))
    }
    log::trace!("neg on {}[{}]", self.width, self.int_bits);
    Self::assemble(
      -&self.raw,
      i64::from(self.width) + 1,
      check_int_bits(i64::from(self.int_bits) + 1)?,
      self.scaling,
    )
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{ApFixed, ApUfixed, ErrorKind};
  use proptest::prelude::*;

  #[test]
  fn keeps_scale() {
    let a = ApFixed::new(-1.25, Format::new(4, 2)).unwrap();
    let b = a.try_neg().unwrap();
    assert_eq!((b.width(), b.int_bits(), b.frac_bits()), (5, 3, 2));
    assert_eq!(b.value(), 1.25);
  }

  #[test]
  fn unsigned() {
    for a in ApUfixed::cases_exhaustive(4, 2) {
      assert_eq!(a.try_neg().unwrap_err().kind(), ErrorKind::CapabilityViolation);
    }
  }

  #[test]
  fn int_bits_overflow() {
    let a = ApFixed::from_raw(-3, 8, i32::MAX).unwrap();
    assert_eq!(a.try_neg().unwrap_err().kind(), ErrorKind::ShapeViolation);
  }

  proptest!{
    #![proptest_config(ProptestConfig::with_cases(crate::PROPTEST_CASES))]

    #[test]
    fn involution(a in ApFixed::cases_proptest(100)) {
      let b = a.try_neg().unwrap().try_neg().unwrap();
      prop_assert_eq!(b.raw(), a.raw());
      prop_assert_eq!(b.width(), a.width() + 2);
      prop_assert_eq!(b.to_rational(), a.to_rational());
    }
  }
}
