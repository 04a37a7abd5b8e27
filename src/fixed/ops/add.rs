use super::*;

use crate::fixed::format::check_int_bits;
use crate::rational::rescale;

impl<const SIGNED: bool> Fixed<SIGNED> {
  /// The kernel for both addition and subtraction.
  ///
  /// The result grows by one integer bit (the carry) and keeps the finer of the two fractional
  /// grids, unless `width` / `int_bits` pin it. Under [`Scaling::Internal`] both payloads are
  /// moved onto the result's grid first (truncating toward zero if the grid is coarser than an
  /// operand's); under [`Scaling::External`] they are combined as they are.
  pub(crate) fn add_kernel(
    &self,
    rhs: Operand,
    width: Option<u32>,
    int_bits: Option<i32>,
    subtract: bool,
  ) -> Result<Self> {
    let rhs = Self::coerce(rhs, width, int_bits)?;
    let int_bits = match int_bits {
      Some(int_bits) => int_bits,
      None => check_int_bits(i64::from(self.int_bits.max(rhs.int_bits)) + 1)?,
    };
    let (width, frac_bits) = match width {
      Some(width) => (i64::from(width), i64::from(width) - i64::from(int_bits)),
      None => {
        let frac_bits = self.frac_bits().max(rhs.frac_bits());
        (i64::from(int_bits) + frac_bits, frac_bits)
      },
    };

    let (lhs_raw, rhs_raw) = match self.scaling {
      Scaling::Internal => (
        rescale(&self.raw, frac_bits - self.frac_bits()),
        rescale(&rhs.raw, frac_bits - rhs.frac_bits()),
      ),
      Scaling::External => (self.raw.clone(), rhs.raw),
    };
    let raw = if subtract {lhs_raw - rhs_raw} else {lhs_raw + rhs_raw};

    log::trace!(
      "{} on {}[{}] → {width}[{int_bits}]",
      if subtract {"sub"} else {"add"}, self.width, self.int_bits,
    );
    Self::assemble(raw, width, int_bits, self.scaling)
  }

  /// `self + rhs`, with the result one integer bit wider than the widest operand and as many
  /// fractional bits as the finest.
  ///
  /// ```
  /// # use ap_fixed::{ApFixed, Format};
  /// # fn main() -> ap_fixed::Result<()> {
  /// let a = ApFixed::new(1.5, Format::new(4, 2))?;    // Q = 2
  /// let b = ApFixed::new(-0.125, Format::new(6, 3))?; // Q = 3
  /// let c = a.try_add(&b)?;
  /// assert_eq!((c.width(), c.int_bits(), c.value()), (7, 4, 1.375));
  /// # Ok(()) }
  /// ```
  pub fn try_add(&self, rhs: impl Into<Operand>) -> Result<Self> {
    self.add_kernel(rhs.into(), None, None, false)
  }

  /// `self - rhs`, with the same growth rules as [`Self::try_add`].
  pub fn try_sub(&self, rhs: impl Into<Operand>) -> Result<Self> {
    self.add_kernel(rhs.into(), None, None, true)
  }

  /// `self + rhs` on exactly `width` bits, with `int_bits` integer bits (or the usual growth,
  /// if `None`). If `rhs` is not already a value, it is built with those same parameters.
  pub fn bounded_add(&self, rhs: impl Into<Operand>, width: u32, int_bits: Option<i32>) -> Result<Self> {
    self.add_kernel(rhs.into(), Some(width), int_bits, false)
  }

  /// `self - rhs` on exactly `width` bits; see [`Self::bounded_add`].
  pub fn bounded_sub(&self, rhs: impl Into<Operand>, width: u32, int_bits: Option<i32>) -> Result<Self> {
    self.add_kernel(rhs.into(), Some(width), int_bits, true)
  }
}
