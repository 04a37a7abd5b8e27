//! Exact conversions between raw payloads, [`Rational`]s and floats.
//!
//! Every place where a fixed-point payload meets a non-integer quantity (quantizing a float,
//! rescaling to a different number of fractional bits, reading the value back out) goes through
//! here, so that the only rounding that ever happens is the one we ask for explicitly.

use crate::{Error, Result};

use malachite::{Integer, rational::Rational};
use malachite::base::num::arithmetic::traits::PowerOf2;
use malachite::base::num::conversion::traits::RoundingFrom;
use malachite::base::rounding_modes::RoundingMode;

/// The exact value of `raw × 2^-frac_bits`.
pub(crate) fn scaled(raw: &Integer, frac_bits: i64) -> Rational {
  Rational::from(raw.clone()) * Rational::power_of_2(-frac_bits)
}

/// Drop the fractional part of `x`, rounding toward zero.
pub(crate) fn truncate(x: Rational) -> Integer {
  Integer::rounding_from(x, RoundingMode::Down).0
}

/// Multiply `raw` by `2^shift`. A negative `shift` loses bits, which are truncated toward zero
/// (not floored: `-5 × 2^-1` is `-2`, not `-3`).
pub(crate) fn rescale(raw: &Integer, shift: i64) -> Integer {
  if shift >= 0 {
    raw.clone() << shift as u64
  } else {
    truncate(scaled(raw, -shift))
  }
}

/// Quantize a float onto a grid of `frac_bits` fractional bits, i.e. `trunc(value × 2^frac_bits)`.
///
/// The multiplication is exact, so the only loss is the final truncation.
pub(crate) fn quantize(value: f64, frac_bits: i64) -> Result<Integer> {
  let exact = Rational::try_from(value)
    .map_err(|_| Error::Unsupported(format!("the non-finite float {value}")))?;
  Ok(truncate(exact * Rational::power_of_2(frac_bits)))
}

/// Nearest `f64` to `x`.
pub(crate) fn to_f64(x: Rational) -> f64 {
  f64::rounding_from(x, RoundingMode::Nearest).0
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn rescale_up() {
    assert_eq!(rescale(&Integer::from(3), 4), Integer::from(48));
    assert_eq!(rescale(&Integer::from(-3), 1), Integer::from(-6));
    assert_eq!(rescale(&Integer::from(-3), 0), Integer::from(-3));
  }

  #[test]
  fn rescale_down_truncates_toward_zero() {
    assert_eq!(rescale(&Integer::from(5), -1), Integer::from(2));
    assert_eq!(rescale(&Integer::from(-5), -1), Integer::from(-2));
    assert_eq!(rescale(&Integer::from(-8), -2), Integer::from(-2));
    assert_eq!(rescale(&Integer::from(-1), -10), Integer::from(0));
  }

  #[test]
  fn quantize_floats() {
    assert_eq!(quantize(1.5, 2).unwrap(), Integer::from(6));
    assert_eq!(quantize(-1.75, 1).unwrap(), Integer::from(-3));
    assert_eq!(quantize(0.3, 0).unwrap(), Integer::from(0));
    assert_eq!(quantize(-0.3, 0).unwrap(), Integer::from(0));
    assert_eq!(quantize(96.0, -4).unwrap(), Integer::from(6));
    assert!(quantize(f64::NAN, 8).is_err());
    assert!(quantize(f64::INFINITY, 8).is_err());
  }

  #[test]
  fn to_float() {
    assert_eq!(to_f64(scaled(&Integer::from(-5), 2)), -1.25);
    assert_eq!(to_f64(scaled(&Integer::from(3), -3)), 24.0);
    assert_eq!(to_f64(scaled(&Integer::from(0), 40)), 0.0);
  }
}
