use super::*;

use crate::fixed::format::check_int_bits;

impl<const SIGNED: bool> Fixed<SIGNED> {
  /// Multiplication kernel. Integer and fractional bits add up, so the raw product is exact on
  /// the default result format and is never rescaled; a pinned format only changes how that
  /// product is read.
  pub(crate) fn mul_kernel(&self, rhs: Operand, width: Option<u32>, int_bits: Option<i32>) -> Result<Self> {
    let rhs = Self::coerce(rhs, width, int_bits)?;
    let int_bits = match int_bits {
      Some(int_bits) => int_bits,
      None => check_int_bits(i64::from(self.int_bits) + i64::from(rhs.int_bits))?,
    };
    let width = width.map_or(i64::from(int_bits) + self.frac_bits() + rhs.frac_bits(), i64::from);

    log::trace!("mul on {}[{}] → {width}[{int_bits}]", self.width, self.int_bits);
    Self::assemble(&self.raw * &rhs.raw, width, int_bits, self.scaling)
  }

  /// `self × rhs`, with integer and fractional bits of the operands adding up.
  ///
  /// ```
  /// # use ap_fixed::{ApFixed, Format};
  /// # fn main() -> ap_fixed::Result<()> {
  /// let a = ApFixed::new(-3.5, Format::new(4, 3))?;
  /// let b = ApFixed::new(13., Format::new(5, 5))?;
  /// let c = a.try_mul(&b)?;
  /// assert_eq!((c.width(), c.int_bits(), c.value()), (9, 8, -45.5));
  /// # Ok(()) }
  /// ```
  pub fn try_mul(&self, rhs: impl Into<Operand>) -> Result<Self> {
    self.mul_kernel(rhs.into(), None, None)
  }

  /// `self × rhs` on exactly `width` bits, with `int_bits` integer bits (or the usual growth, if
  /// `None`). The raw payload is still the exact integer product, so the result only keeps the
  /// product's value if `width - int_bits` equals the sum of the operands' fractional bits; it
  /// fails if the product does not fit `width`. If `rhs` is not already a value, it is built with
  /// those same parameters.
  pub fn bounded_mul(&self, rhs: impl Into<Operand>, width: u32, int_bits: Option<i32>) -> Result<Self> {
    self.mul_kernel(rhs.into(), Some(width), int_bits)
  }
}
