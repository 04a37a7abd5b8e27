use super::*;

use super::format::{check_int_bits, check_width};
use crate::Result;

impl<const SIGNED: bool> Fixed<SIGNED> {
  /// Remove `bits` bits from the binary word: from the right (the lsbs) if `lsb`, otherwise from
  /// the left (the msbs). Removing lsbs keeps the integer bits, so the value is floored onto a
  /// coarser grid; removing msbs takes that many integer bits with it, and the remaining pattern
  /// is re-read, which may change the value if the removed bits were not redundant copies of the
  /// sign.
  ///
  /// Fails if nothing would be left.
  ///
  /// ```
  /// # use ap_fixed::ApFixed;
  /// let a = ApFixed::from_bin("110110", 3).unwrap();  // -1.25
  /// assert_eq!(a.truncate(2, true).unwrap().bin(), "1101");
  /// assert_eq!(a.truncate(2, false).unwrap().bin(), "0110");
  /// ```
  pub fn truncate(&self, bits: u32, lsb: bool) -> Result<Self> {
    let width = check_width(i64::from(self.width) - i64::from(bits))?;
    let word = self.bin();
    let (kept, int_bits) = if lsb {
      (&word[.. width as usize], self.int_bits)
    } else {
      (&word[bits as usize ..], check_int_bits(i64::from(self.int_bits) - i64::from(bits))?)
    };
    log::trace!("truncate {bits} {} bits of {}[{}]", if lsb {"lsb"} else {"msb"}, self.width, self.int_bits);
    Self::new(kept, Format::new(width, int_bits).scaling(self.scaling))
  }

  /// Grow the word by `bits` bits without changing the value: zeros on the right if `lsb` (more
  /// fractional bits), or copies of the sign on the left otherwise (more integer bits).
  pub fn pad(&self, bits: u32, lsb: bool) -> Result<Self> {
    let width = check_width(i64::from(self.width) + i64::from(bits))?;
    let (raw, int_bits) = if lsb {
      (self.raw.clone() << u64::from(bits), self.int_bits)
    } else {
      (self.raw.clone(), check_int_bits(i64::from(self.int_bits) + i64::from(bits))?)
    };
    Self::assemble(raw, width.into(), int_bits, self.scaling)
  }

  /// Drop `bits` msbs, like [`Self::truncate`], but instead of wrapping around clamp the value to
  /// the largest (or smallest, if negative) one the narrower format can hold.
  ///
  /// ```
  /// # use ap_fixed::ApFixed;
  /// let a = ApFixed::from_bin("01101", 3).unwrap();  // 3.25
  /// let b = a.saturate(2).unwrap();
  /// assert_eq!((b.bin().as_str(), b.int_bits()), ("011", 1)); // 0.75, the largest value left
  /// ```
  pub fn saturate(&self, bits: u32) -> Result<Self> {
    let width = check_width(i64::from(self.width) - i64::from(bits))?;
    let int_bits = check_int_bits(i64::from(self.int_bits) - i64::from(bits))?;
    let (max, min) = (Self::max_raw_for(width), Self::min_raw_for(width));
    let raw = if self.raw > max {
      max
    } else if self.raw < min {
      min
    } else {
      self.raw.clone()
    };
    if raw != self.raw {
      log::debug!("saturate {}[{}] → {width}[{int_bits}] clamped raw {} to {raw}", self.width, self.int_bits, self.raw);
    }
    Self::assemble(raw, width.into(), int_bits, self.scaling)
  }
}
