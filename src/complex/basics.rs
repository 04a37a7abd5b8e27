use super::*;

use num::complex::Complex64;

use crate::{Error, Result};

impl<const SIGNED: bool> FixedComplex<SIGNED> {
  /// Whether the parts of values of this type are signed (i.e. parameter `SIGNED`).
  pub const SIGNED: bool = SIGNED;

  /// Pair up `re` and `im`, moving both onto the union of their formats: as many integer bits
  /// as the one with the most, and as many fractional bits as the one with the most. Parts are
  /// only ever padded here, so their values never change.
  pub(crate) fn synced(re: Fixed<SIGNED>, im: Fixed<SIGNED>) -> Result<Self> {
    let int_bits = re.int_bits().max(im.int_bits());
    let frac_bits = re.frac_bits().max(im.frac_bits());
    let align = |x: Fixed<SIGNED>| -> Result<Fixed<SIGNED>> {
      let lsbs = frac_bits - x.frac_bits();
      let lsbs = u32::try_from(lsbs).map_err(|_| Error::InvalidWidth(i64::from(x.width()) + lsbs))?;
      x.pad(lsbs, true)?.pad(int_bits.abs_diff(x.int_bits()), false)
    };
    let (re, im) = (align(re)?, align(im)?);
    debug_assert_eq!((re.width(), re.int_bits()), (im.width(), im.int_bits()));
    Ok(Self { re, im })
  }

  /// Rebrand a value as `FixedComplex<TO>`; see [`Fixed::retag`].
  pub(crate) fn retag<const TO: bool>(self) -> FixedComplex<TO> {
    FixedComplex { re: self.re.retag(), im: self.im.retag() }
  }

  /// The real part.
  pub fn real(&self) -> &Fixed<SIGNED> {
    &self.re
  }

  /// The imaginary part.
  pub fn imag(&self) -> &Fixed<SIGNED> {
    &self.im
  }

  /// Width of each part.
  pub fn width(&self) -> u32 {
    self.re.width()
  }

  /// Integer bits of each part.
  pub fn int_bits(&self) -> i32 {
    self.re.int_bits()
  }

  /// Fractional bits of each part.
  pub fn frac_bits(&self) -> i64 {
    self.re.frac_bits()
  }

  pub fn is_signed(&self) -> bool {
    SIGNED
  }

  /// The represented quantity, each part rounded to the nearest `f64`.
  pub fn value(&self) -> Complex64 {
    Complex64::new(self.re.value(), self.im.value())
  }

  /// The Euclidean norm `√(re² + im²)` of [`Self::value`], computed in floating point. For the
  /// bit-accurate (squared) magnitude, see [`Self::magnitude`].
  pub fn norm(&self) -> f64 {
    self.value().norm()
  }
}

impl<const SIGNED: bool> From<&FixedComplex<SIGNED>> for Complex64 {
  fn from(value: &FixedComplex<SIGNED>) -> Self {
    value.value()
  }
}
