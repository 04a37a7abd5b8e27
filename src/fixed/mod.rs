//! This module and its submodules contain the scalar fixed-point type, [`Fixed`].
//!
//! A value is an arbitrary-precision integer payload (`raw`) together with the bookkeeping that
//! says how to read it: a total width `W`, a number of integer bits `I` above the binary point,
//! and therefore `Q = W - I` fractional bits below it. The represented quantity is
//! `raw × 2^-Q`.
//!
//! Some notation used in the comments:
//!
//!   - **Leftmost bits/msb**: most-significant bits.
//!   - **Rightmost bits/lsb**: least-significant bits.
//!   - **W, I, Q**: width, integer bits, fractional ("quotient") bits.

use malachite::Integer;

/// A fixed-point number, signed if `SIGNED`, of arbitrary width.
///
/// The payload always lies in `[min_raw, max_raw]` for the width and signedness; every
/// constructor and setter checks this and fails rather than wrapping or clamping (clamping only
/// happens in [`Fixed::saturate`]).
///
/// Examples:
///
/// ```
/// # use ap_fixed::{ApFixed, ApUfixed, Format};
/// # fn main() -> ap_fixed::Result<()> {
/// let a = ApFixed::new(-1.25, Format::new(4, 2))?;  // 0b1011: 2 integer bits, 2 fractional
/// assert_eq!(a.bin(), "1011");
/// let b = ApUfixed::new(3, Format::new(4, 4))?;      // raw payload 3, no fractional bits
/// assert_eq!(b.value(), 3.);
/// # Ok(()) }
/// ```
#[derive(Clone)]
pub struct Fixed<const SIGNED: bool> {
  raw: Integer,
  width: u32,
  int_bits: i32,
  scaling: Scaling,
}

/// A signedness-erased view of a value, as used for the right-hand side of operators (which may
/// be of either signedness).
#[derive(Clone, Debug)]
pub(crate) struct Parts {
  pub(crate) raw: Integer,
  pub(crate) width: u32,
  pub(crate) int_bits: i32,
}

impl Parts {
  pub(crate) fn frac_bits(&self) -> i64 {
    i64::from(self.width) - i64::from(self.int_bits)
  }
}

/// Width and scale bookkeeping, bounds, accessors, setters
mod basics;

/// [`Format`] and [`Scaling`], plus the width estimators used when building from a float
mod format;

/// Constructing values from any [`Operand`]
mod source;

/// Two's complement encoding to and from binary strings
mod encode;

/// Arithmetic operators
pub(crate) mod ops;

/// Comparisons
mod cmp;

/// Truncation, padding, saturation
mod bits;

/// Debug and Display
mod fmt;


pub use format::{Format, Scaling};
pub use source::Operand;
