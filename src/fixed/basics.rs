use super::*;

use super::format::check_width;
use crate::{Error, Result, rational};

use malachite::rational::Rational;
use malachite::base::num::arithmetic::traits::PowerOf2;
use malachite::base::num::logic::traits::SignificantBits;

impl<const SIGNED: bool> Fixed<SIGNED> {
  /// Whether values of this type are signed (i.e. parameter `SIGNED`).
  pub const SIGNED: bool = SIGNED;

  /// The largest raw payload representable on `width` bits: `2^(W - S) - 1`.
  pub(crate) fn max_raw_for(width: u32) -> Integer {
    Integer::power_of_2(u64::from(width - u32::from(SIGNED))) - Integer::from(1)
  }

  /// The smallest raw payload representable on `width` bits: `-2^(W - 1)` if signed, else 0.
  pub(crate) fn min_raw_for(width: u32) -> Integer {
    if SIGNED {
      -Integer::power_of_2(u64::from(width - 1))
    } else {
      Integer::from(0)
    }
  }

  /// Check that `raw` fits on `width` bits with this signedness. Counts bits rather than
  /// comparing against the bounds, which would have to be built first.
  pub(crate) fn validate(raw: &Integer, width: u32) -> Result<()> {
    let needed = if *raw < Integer::from(0) {
      // A negative payload needs as many bits as its ones' complement, plus the sign.
      (!raw).significant_bits() + 1
    } else {
      raw.significant_bits() + u64::from(SIGNED)
    };
    if needed > u64::from(width) || (!SIGNED && *raw < Integer::from(0)) {
      return Err(Error::OutOfRange { raw: raw.clone(), width, signed: SIGNED })
    }
    Ok(())
  }

  /// The one place where values come into existence: every constructor and operator ends here,
  /// after computing a width (which may turn out to be unusable) and a payload (which may turn
  /// out not to fit).
  pub(crate) fn assemble(raw: Integer, width: i64, int_bits: i32, scaling: Scaling) -> Result<Self> {
    let width = check_width(width)?;
    Self::validate(&raw, width)?;
    Ok(Self { raw, width, int_bits, scaling })
  }

  /// A zero of the given shape.
  pub(crate) fn zero(width: u32, int_bits: i32, scaling: Scaling) -> Self {
    Self { raw: Integer::from(0), width, int_bits, scaling }
  }

  /// Rebrand a value as `Fixed<TO>`. Only sound when `TO == SIGNED`, which is what lets generic
  /// code hand a `Fixed<SIGNED>` to places expecting a concrete `Fixed<true>` or `Fixed<false>`.
  pub(crate) fn retag<const TO: bool>(self) -> Fixed<TO> {
    debug_assert_eq!(SIGNED, TO);
    let Self { raw, width, int_bits, scaling } = self;
    Fixed { raw, width, int_bits, scaling }
  }

  pub(crate) fn parts(&self) -> Parts {
    Parts { raw: self.raw.clone(), width: self.width, int_bits: self.int_bits }
  }

  pub(crate) fn into_parts(self) -> Parts {
    Parts { raw: self.raw, width: self.width, int_bits: self.int_bits }
  }

  /// The raw two's complement payload.
  pub fn raw(&self) -> &Integer {
    &self.raw
  }

  /// Total number of bits, `W`.
  pub fn width(&self) -> u32 {
    self.width
  }

  /// Number of bits above the binary point, `I`.
  pub fn int_bits(&self) -> i32 {
    self.int_bits
  }

  /// Number of bits below the binary point, `Q = W - I`.
  pub fn frac_bits(&self) -> i64 {
    i64::from(self.width) - i64::from(self.int_bits)
  }

  pub fn is_signed(&self) -> bool {
    SIGNED
  }

  pub fn scaling(&self) -> Scaling {
    self.scaling
  }

  /// The largest raw payload representable by this value's width.
  pub fn max_raw(&self) -> Integer {
    Self::max_raw_for(self.width)
  }

  /// The smallest raw payload representable by this value's width.
  pub fn min_raw(&self) -> Integer {
    Self::min_raw_for(self.width)
  }

  /// The exact represented quantity, `raw × 2^-Q`.
  pub fn to_rational(&self) -> Rational {
    rational::scaled(&self.raw, self.frac_bits())
  }

  /// The represented quantity, rounded to the nearest `f64`.
  pub fn value(&self) -> f64 {
    rational::to_f64(self.to_rational())
  }

  /// The quantum of this format, `2^-Q`: the difference between two consecutive values.
  pub fn precision(&self) -> f64 {
    rational::to_f64(Rational::power_of_2(-self.frac_bits()))
  }

  /// The largest representable value in this format.
  pub fn max_value(&self) -> f64 {
    rational::to_f64(rational::scaled(&self.max_raw(), self.frac_bits()))
  }

  /// The smallest representable value in this format.
  pub fn min_value(&self) -> f64 {
    rational::to_f64(rational::scaled(&self.min_raw(), self.frac_bits()))
  }

  /// Replace the raw payload, keeping the format. Fails, leaving `self` untouched, if `raw` does
  /// not fit.
  pub fn set_raw(&mut self, raw: impl Into<Integer>) -> Result<()> {
    let raw = raw.into();
    Self::validate(&raw, self.width)?;
    self.raw = raw;
    Ok(())
  }

  /// As [`Self::set_raw`], but returns a new value instead.
  pub fn with_raw(&self, raw: impl Into<Integer>) -> Result<Self> {
    let mut this = self.clone();
    this.set_raw(raw)?;
    Ok(this)
  }

  /// Re-quantize `value` onto this format (truncating toward zero) and store it.
  pub fn set_value(&mut self, value: f64) -> Result<()> {
    let raw = rational::quantize(value, self.frac_bits())?;
    self.set_raw(raw)
  }
}

impl<const SIGNED: bool> From<&Fixed<SIGNED>> for f64 {
  fn from(value: &Fixed<SIGNED>) -> Self {
    value.value()
  }
}

impl<const SIGNED: bool> From<&Fixed<SIGNED>> for Integer {
  fn from(value: &Fixed<SIGNED>) -> Self {
    value.raw.clone()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{ApFixed, ApUfixed, ErrorKind};

  #[test]
  fn bounds() {
    assert_eq!(ApFixed::max_raw_for(8), Integer::from(127));
    assert_eq!(ApFixed::min_raw_for(8), Integer::from(-128));
    assert_eq!(ApUfixed::max_raw_for(8), Integer::from(255));
    assert_eq!(ApUfixed::min_raw_for(8), Integer::from(0));

    assert_eq!(ApFixed::max_raw_for(1), Integer::from(0));
    assert_eq!(ApFixed::min_raw_for(1), Integer::from(-1));
    assert_eq!(ApUfixed::max_raw_for(1), Integer::from(1));

    assert_eq!(ApFixed::max_raw_for(100), Integer::power_of_2(99) - Integer::from(1));
  }

  #[test]
  fn validate() {
    assert!(ApFixed::validate(&Integer::from(7), 4).is_ok());
    assert!(ApFixed::validate(&Integer::from(-8), 4).is_ok());
    assert_eq!(
      ApFixed::validate(&Integer::from(8), 4),
      Err(Error::OutOfRange { raw: Integer::from(8), width: 4, signed: true }),
    );
    assert!(ApFixed::validate(&Integer::from(-9), 4).is_err());
    assert!(ApUfixed::validate(&Integer::from(15), 4).is_ok());
    assert!(ApUfixed::validate(&Integer::from(16), 4).is_err());
    assert!(ApUfixed::validate(&Integer::from(-1), 4).is_err());
    assert!(ApFixed::validate(&Integer::from(-1), u32::MAX).is_ok());

    for width in 1 ..= 11 {
      for raw in -1100 ..= 1100 {
        let raw = Integer::from(raw);
        let signed = raw >= ApFixed::min_raw_for(width) && raw <= ApFixed::max_raw_for(width);
        assert_eq!(ApFixed::validate(&raw, width).is_ok(), signed, "{raw} on {width}");
        let unsigned = raw >= ApUfixed::min_raw_for(width) && raw <= ApUfixed::max_raw_for(width);
        assert_eq!(ApUfixed::validate(&raw, width).is_ok(), unsigned, "{raw} on {width}");
      }
    }
  }

  #[test]
  fn derived() {
    let a = ApFixed::from_raw(-6, 8, 5).unwrap();
    assert_eq!(a.frac_bits(), 3);
    assert_eq!(a.value(), -0.75);
    assert_eq!(a.precision(), 0.125);
    assert_eq!(a.max_value(), 127. / 8.);
    assert_eq!(a.min_value(), -16.);
    assert_eq!(f64::from(&a), -0.75);
    assert_eq!(Integer::from(&a), Integer::from(-6));

    let b = ApUfixed::from_raw(3, 4, 6).unwrap();
    assert_eq!(b.frac_bits(), -2);
    assert_eq!(b.value(), 12.);
    assert_eq!(b.precision(), 4.);
    assert_eq!(b.max_value(), 60.);
    assert_eq!(b.min_value(), 0.);

    // Q can exceed the range of the integer bit count.
    let c = ApFixed::from_raw(1, 8, i32::MIN).unwrap();
    assert_eq!(c.frac_bits(), 8 + (1 << 31));
  }

  #[test]
  fn set_raw() {
    let mut a = ApFixed::from_raw(0, 4, 2).unwrap();
    a.set_raw(-8).unwrap();
    assert_eq!(a.raw(), &Integer::from(-8));
    let err = a.set_raw(8).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::RangeViolation);
    assert_eq!(a.raw(), &Integer::from(-8));

    let b = a.with_raw(3).unwrap();
    assert_eq!((b.raw(), a.raw()), (&Integer::from(3), &Integer::from(-8)));
  }

  #[test]
  fn set_value() {
    let mut a = ApFixed::from_raw(0, 8, 4).unwrap();
    a.set_value(-2.3).unwrap();
    // -2.3 × 16 = -36.8, truncated toward zero
    assert_eq!(a.raw(), &Integer::from(-36));
    assert!(a.set_value(9.).is_err());
    assert_eq!(a.set_value(f64::NAN).unwrap_err().kind(), ErrorKind::UnsupportedSource);
    assert_eq!(a.raw(), &Integer::from(-36));
  }
}
