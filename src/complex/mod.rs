//! This module and its submodules contain the complex fixed-point type, [`FixedComplex`]: a pair
//! of [`Fixed`] values, real and imaginary, that always share the same format.
//!
//! Keeping the two parts in step is the whole job of this module. Every value is built through a
//! single path that first builds each part on its own, then moves both onto the union of their
//! formats (the larger integer bit count, and the larger fractional bit count). Parts that came
//! from a float are quantized again on the union format; parts that were already fixed-point are
//! padded, which never changes their value.

use crate::fixed::{Fixed, Format, Operand};

/// A complex fixed-point number, with signed parts if `SIGNED`.
///
/// ```
/// # use ap_fixed::{ApComplex, Format};
/// # fn main() -> ap_fixed::Result<()> {
/// let z = ApComplex::from_parts(1.5, -0.25, Format::new(8, 4))?;
/// assert_eq!(z.real().bin(), "00011000");
/// assert_eq!(z.imag().bin(), "11111100");
/// assert_eq!(z.to_string(), "(1.5-0.25j) 8[S4]");
/// # Ok(()) }
/// ```
#[derive(Clone)]
pub struct FixedComplex<const SIGNED: bool> {
  re: Fixed<SIGNED>,
  im: Fixed<SIGNED>,
}

/// Accessors, synchronisation of the two parts
mod basics;

/// Constructing values from any [`ComplexOperand`]
mod source;

/// Arithmetic operators, comparison, magnitude
mod ops;

/// Componentwise truncation, padding, saturation
mod bits;

/// Debug and Display
mod fmt;

pub use source::ComplexOperand;
