use super::*;

use malachite::Integer;
use num::complex::{Complex32, Complex64};

use crate::{Error, Result};

/// Anything a [`FixedComplex`] can be built from, and therefore anything that can appear on the
/// right-hand side of its operators.
#[derive(Clone, Debug)]
pub enum ComplexOperand {
  /// A complex quantity to approximate.
  Complex(Complex64),
  /// One or two scalar sources: the real part and (optionally) the imaginary part.
  Components(Vec<Operand>),
  /// A real source; the imaginary part is zero.
  Real(Operand),
  /// A signed complex value; its payloads are copied verbatim.
  Signed(FixedComplex<true>),
  /// An unsigned complex value; its payloads are copied verbatim.
  Unsigned(FixedComplex<false>),
}

impl From<Complex64> for ComplexOperand {
  fn from(value: Complex64) -> Self { ComplexOperand::Complex(value) }
}

impl From<Complex32> for ComplexOperand {
  fn from(value: Complex32) -> Self {
    ComplexOperand::Complex(Complex64::new(value.re.into(), value.im.into()))
  }
}

impl<A: Into<Operand>, B: Into<Operand>> From<(A, B)> for ComplexOperand {
  fn from((re, im): (A, B)) -> Self { ComplexOperand::Components(vec![re.into(), im.into()]) }
}

impl From<Vec<Operand>> for ComplexOperand {
  fn from(value: Vec<Operand>) -> Self { ComplexOperand::Components(value) }
}

impl From<Operand> for ComplexOperand {
  fn from(value: Operand) -> Self { ComplexOperand::Real(value) }
}

macro_rules! from_real {
  ($($t:ty),*) => {$(
    impl From<$t> for ComplexOperand {
      fn from(value: $t) -> Self { ComplexOperand::Real(value.into()) }
    }
  )*}
}

from_real!{
  f32, f64,
  i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize,
  Integer, &Integer, &str, String
}

impl<const SIGNED: bool> From<Fixed<SIGNED>> for ComplexOperand {
  fn from(value: Fixed<SIGNED>) -> Self { ComplexOperand::Real(value.into()) }
}

impl<const SIGNED: bool> From<&Fixed<SIGNED>> for ComplexOperand {
  fn from(value: &Fixed<SIGNED>) -> Self { ComplexOperand::Real(value.into()) }
}

impl<const SIGNED: bool> From<FixedComplex<SIGNED>> for ComplexOperand {
  fn from(value: FixedComplex<SIGNED>) -> Self {
    if SIGNED {
      ComplexOperand::Signed(value.retag())
    } else {
      ComplexOperand::Unsigned(value.retag())
    }
  }
}

impl<const SIGNED: bool> From<&FixedComplex<SIGNED>> for ComplexOperand {
  fn from(value: &FixedComplex<SIGNED>) -> Self {
    value.clone().into()
  }
}

fn float(source: &Operand) -> Option<f64> {
  match source {
    Operand::Float(value) => Some(*value),
    _ => None,
  }
}

impl<const SIGNED: bool> FixedComplex<SIGNED> {
  /// Build a value from `source`, in the given `format`.
  ///
  /// Each part is first built as a [`Fixed`] with [`Fixed::new`]'s rules, then both are moved
  /// onto the union of their formats. A part that came from a float is quantized again on the
  /// union format; any other part keeps its exact value. If there is no imaginary part, it is a
  /// zero in the real part's format.
  ///
  /// ```
  /// # use ap_fixed::{ApComplex, Format, Operand};
  /// # use num::complex::Complex64;
  /// # fn main() -> ap_fixed::Result<()> {
  /// let z = ApComplex::new(Complex64::new(-9.9654, 0.3), Format::AUTO)?;
  /// // 5 integer bits for the real part, 32 fractional bits for the imaginary one
  /// assert_eq!((z.int_bits(), z.frac_bits()), (5, 32));
  /// let w = ApComplex::new(2.5, Format::new(8, 4))?;
  /// assert_eq!(w.imag().value(), 0.);
  /// assert!(ApComplex::new(Vec::<Operand>::new(), Format::AUTO).is_err());
  /// # Ok(()) }
  /// ```
  pub fn new(source: impl Into<ComplexOperand>, format: Format) -> Result<Self> {
    match source.into() {
      ComplexOperand::Complex(z) => Self::build(Operand::Float(z.re), Some(Operand::Float(z.im)), format),
      ComplexOperand::Components(parts) => {
        let count = parts.len();
        let mut parts = parts.into_iter();
        match (parts.next(), parts.next(), parts.next()) {
          (Some(re), im, None) => Self::build(re, im, format),
          _ => Err(Error::ComponentCount(count)),
        }
      },
      ComplexOperand::Real(re) => Self::build(re, None, format),
      ComplexOperand::Signed(z) => Self::build(Operand::Signed(z.re), Some(Operand::Signed(z.im)), format),
      ComplexOperand::Unsigned(z) => Self::build(Operand::Unsigned(z.re), Some(Operand::Unsigned(z.im)), format),
    }
  }

  /// Build a value from separate real and imaginary sources.
  pub fn from_parts(re: impl Into<Operand>, im: impl Into<Operand>, format: Format) -> Result<Self> {
    Self::build(re.into(), Some(im.into()), format)
  }

  fn build(re: Operand, im: Option<Operand>, format: Format) -> Result<Self> {
    let re_float = float(&re);
    let re = Fixed::new(re, format)?;
    let Some(im) = im else {
      let im = Fixed::zero(re.width(), re.int_bits(), re.scaling());
      return Ok(Self { re, im })
    };
    let im_float = float(&im);
    let Self { re, im } = Self::synced(re, Fixed::new(im, format)?)?;

    let union = Format::new(re.width(), re.int_bits()).scaling(format.scaling);
    let requantize = |part: Fixed<SIGNED>, source: Option<f64>| match source {
      Some(value) => Fixed::new(value, union),
      None => Ok(part),
    };
    Ok(Self { re: requantize(re, re_float)?, im: requantize(im, im_float)? })
  }
}
