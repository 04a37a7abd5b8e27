use crate::{Error, Result};

/// How arithmetic aligns operands with different numbers of fractional bits.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Scaling {
  /// Raw payloads are shifted onto the fractional grid of the result before being combined.
  #[default]
  Internal,
  /// Raw payloads are combined as they are; the caller guarantees they are already aligned.
  External,
}

/// The requested shape of a value: total width, integer bits, and scaling policy.
///
/// Fields left as `None` are derived from the source (see [`Fixed::new`](super::Fixed::new)).
///
/// ```
/// # use ap_fixed::{Format, Scaling};
/// let q4_4 = Format::new(8, 4);
/// let auto_int = Format::AUTO.width(24);
/// let aligned = Format::new(16, 8).scaling(Scaling::External);
/// # let _ = (q4_4, auto_int, aligned);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Format {
  pub width: Option<u32>,
  pub int_bits: Option<i32>,
  pub scaling: Scaling,
}

impl Format {
  /// Everything derived from the source, internal scaling.
  pub const AUTO: Self = Self { width: None, int_bits: None, scaling: Scaling::Internal };

  /// A fully pinned format of `width` bits, `int_bits` of which are above the binary point.
  pub const fn new(width: u32, int_bits: i32) -> Self {
    Self { width: Some(width), int_bits: Some(int_bits), scaling: Scaling::Internal }
  }

  pub const fn width(self, width: u32) -> Self {
    Self { width: Some(width), ..self }
  }

  pub const fn int_bits(self, int_bits: i32) -> Self {
    Self { int_bits: Some(int_bits), ..self }
  }

  pub const fn scaling(self, scaling: Scaling) -> Self {
    Self { scaling, ..self }
  }

  /// A format with optional overrides, as taken by the bit-constrained operators.
  pub(crate) const fn pinned(width: Option<u32>, int_bits: Option<i32>) -> Self {
    Self { width, int_bits, scaling: Scaling::Internal }
  }
}

/// The number of integer bits needed to hold the integer part of `value`, plus a sign bit if
/// `signed`: `⌊log2(|v| + (v == 0))⌋ + 1 + signed`.
pub(crate) fn estimate_int_bits(value: f64, signed: bool) -> i32 {
  let magnitude = value.abs() + if value == 0. {1.} else {0.};
  magnitude.log2().floor() as i32 + 1 + i32::from(signed)
}

/// The width used when only the integer bits are known: at least 32 bits, and at least 16
/// fractional bits.
pub(crate) fn default_width(int_bits: i32) -> i64 {
  (i64::from(int_bits) + 16).max(32)
}

/// Check that a computed number of integer bits fits an `i32`.
pub(crate) fn check_int_bits(int_bits: i64) -> Result<i32> {
  i32::try_from(int_bits).map_err(|_| Error::InvalidIntBits(int_bits))
}

/// Check that a computed width is a usable one.
pub(crate) fn check_width(width: i64) -> Result<u32> {
  match u32::try_from(width) {
    Ok(width) if width >= 1 => Ok(width),
    _ => Err(Error::InvalidWidth(width)),
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn int_bits() {
    assert_eq!(estimate_int_bits(-9.9654, true), 5);
    assert_eq!(estimate_int_bits(562.4, true), 11);
    assert_eq!(estimate_int_bits(562.4, false), 10);
    assert_eq!(estimate_int_bits(0., true), 2);
    assert_eq!(estimate_int_bits(0., false), 1);
    assert_eq!(estimate_int_bits(1., false), 1);
    assert_eq!(estimate_int_bits(0.75, true), 1);
    assert_eq!(estimate_int_bits(0.3, true), 0);
  }

  #[test]
  fn widths() {
    assert_eq!(default_width(5), 32);
    assert_eq!(default_width(16), 32);
    assert_eq!(default_width(20), 36);
    assert_eq!(default_width(-40), 32);
    assert_eq!(default_width(i32::MAX), i64::from(i32::MAX) + 16);
  }

  #[test]
  fn check() {
    assert_eq!(check_width(1), Ok(1));
    assert_eq!(check_width(0), Err(Error::InvalidWidth(0)));
    assert_eq!(check_width(-3), Err(Error::InvalidWidth(-3)));
    assert!(check_width(i64::MAX).is_err());

    assert_eq!(check_int_bits(-7), Ok(-7));
    assert_eq!(check_int_bits(i64::from(i32::MIN)), Ok(i32::MIN));
    assert_eq!(check_int_bits(i64::from(i32::MAX) + 1), Err(Error::InvalidIntBits(1 << 31)));
  }

  #[test]
  fn builder() {
    let format = Format::AUTO.width(12).scaling(Scaling::External);
    assert_eq!(format, Format { width: Some(12), int_bits: None, scaling: Scaling::External });
    assert_eq!(Format::new(8, 3).int_bits(2), Format::new(8, 2));
    assert_eq!(Format::default(), Format::AUTO);
  }
}
