use super::*;

use crate::{Error, Result};

use malachite::base::num::arithmetic::traits::PowerOf2;
use malachite::base::num::logic::traits::BitAccess;

/// Encode `raw` as a two's complement string of exactly `width` bits, msb first.
///
/// A non-negative `raw` is just its binary digits, zero-padded on the left. A negative one is
/// the bitwise complement of the digits of `|raw| - 1`, which is the same as reading bits
/// `width-1 ..= 0` of `raw` in (infinitely sign-extended) two's complement, which is what
/// [`BitAccess::get_bit`] gives us.
///
/// ```ignore
/// assert_eq!(encode(&Integer::from(-5), 4), "1011")
/// ```
pub(crate) fn encode(raw: &Integer, width: u32) -> String {
  (0 .. width).rev()
    .map(|i| if raw.get_bit(u64::from(i)) {'1'} else {'0'})
    .collect()
}

/// Decode a string of `0`s and `1`s, msb first. If `signed`, a leading `1` makes the result
/// negative (the unsigned reading minus `2^len`, which is the same as complementing, reading,
/// negating, and subtracting 1); otherwise the string is read as a plain unsigned number.
pub(crate) fn decode(bits: &str, signed: bool) -> Result<Integer> {
  let mut raw = Integer::from(0);
  for c in bits.chars() {
    let bit = match c {
      '0' => 0,
      '1' => 1,
      _ => return Err(Error::InvalidDigit(c)),
    };
    raw = (raw << 1u32) + Integer::from(bit);
  }
  if signed && bits.starts_with('1') {
    raw -= Integer::power_of_2(bits.len() as u64);
  }
  Ok(raw)
}

impl<const SIGNED: bool> Fixed<SIGNED> {
  /// The payload as a two's complement bit string of exactly [`Self::width`] characters.
  ///
  /// ```
  /// # use ap_fixed::{ApFixed, ApUfixed};
  /// assert_eq!(ApFixed::from_raw(-5, 6, 6).unwrap().bin(), "111011");
  /// assert_eq!(ApUfixed::from_raw(5, 6, 6).unwrap().bin(), "000101");
  /// ```
  pub fn bin(&self) -> String {
    encode(&self.raw, self.width)
  }

  /// Overwrite the payload from a bit string, which must be exactly [`Self::width`] characters.
  pub fn set_bin(&mut self, bits: &str) -> Result<()> {
    if bits.len() != self.width as usize {
      return Err(Error::LengthMismatch { expected: self.width, found: bits.len() })
    }
    let raw = decode(bits, SIGNED)?;
    self.set_raw(raw)
  }

  pub(crate) fn decode(bits: &str, format: Format) -> Result<Self> {
    let int_bits = format.int_bits.ok_or(Error::MissingIntBits("binary string"))?;
    let width = format.width.map_or(bits.len() as i64, i64::from);
    if bits.len() as i64 != width {
      return Err(Error::LengthMismatch { expected: width as u32, found: bits.len() })
    }
    let raw = decode(bits, SIGNED)?;
    Self::assemble(raw, width, int_bits, format.scaling)
  }
}
