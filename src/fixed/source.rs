use super::*;

use super::format::{default_width, estimate_int_bits};
use crate::{Error, Result, rational};

/// Anything a [`Fixed`] can be built from, and therefore anything that can appear on the
/// right-hand side of its operators.
///
/// Usually you don't name this type: every constructor and operator takes `impl Into<Operand>`,
/// and there are conversions from floats, primitive ints, [`Integer`], binary strings, and
/// [`Fixed`] values of either signedness.
#[derive(Clone, Debug)]
pub enum Operand {
  /// A quantity to approximate.
  Float(f64),
  /// A raw payload, to be stored as-is.
  Raw(Integer),
  /// A two's complement bit pattern, msb first.
  Bin(String),
  /// A signed value; its payload is copied verbatim.
  Signed(Fixed<true>),
  /// An unsigned value; its payload is copied verbatim.
  Unsigned(Fixed<false>),
}

macro_rules! from_float {
  ($($t:ty),*) => {$(
    impl From<$t> for Operand {
      fn from(value: $t) -> Self { Operand::Float(f64::from(value)) }
    }
  )*}
}

macro_rules! from_int {
  ($($t:ty),*) => {$(
    impl From<$t> for Operand {
      fn from(value: $t) -> Self { Operand::Raw(Integer::from(value)) }
    }
  )*}
}

from_float!{f32, f64}
from_int!{i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize}

impl From<Integer> for Operand {
  fn from(value: Integer) -> Self { Operand::Raw(value) }
}

impl From<&Integer> for Operand {
  fn from(value: &Integer) -> Self { Operand::Raw(value.clone()) }
}

impl From<&str> for Operand {
  fn from(value: &str) -> Self { Operand::Bin(value.to_owned()) }
}

impl From<String> for Operand {
  fn from(value: String) -> Self { Operand::Bin(value) }
}

impl<const SIGNED: bool> From<Fixed<SIGNED>> for Operand {
  fn from(value: Fixed<SIGNED>) -> Self {
    if SIGNED {
      Operand::Signed(value.retag())
    } else {
      Operand::Unsigned(value.retag())
    }
  }
}

impl<const SIGNED: bool> From<&Fixed<SIGNED>> for Operand {
  fn from(value: &Fixed<SIGNED>) -> Self {
    value.clone().into()
  }
}

impl<const SIGNED: bool> Fixed<SIGNED> {
  /// Build a value from `source`, in the given `format`.
  ///
  /// Missing parts of the format are filled in depending on the source:
  ///
  ///   - **Float**: `int_bits` is estimated as the bits needed for the integer part (plus sign);
  ///     `width` defaults to `max(32, int_bits + 16)`. The payload is `value × 2^Q`, truncated
  ///     toward zero.
  ///   - **Binary string**: `int_bits` is mandatory; `width` defaults to the length of the
  ///     string, and must match it if given.
  ///   - **Raw integer**: `int_bits` is mandatory; `width` defaults to `max(32, int_bits + 16)`.
  ///   - **Fixed value**: missing parameters are copied from the source, as is the raw payload
  ///     (a reinterpretation, not a rescaling, if the format differs).
  ///
  /// In every case the payload must fit the resulting width, or this fails.
  pub fn new(source: impl Into<Operand>, format: Format) -> Result<Self> {
    match source.into() {
      Operand::Float(value) => Self::quantize(value, format),
      Operand::Bin(bits) => Self::decode(&bits, format),
      Operand::Raw(raw) => {
        let int_bits = format.int_bits.ok_or(Error::MissingIntBits("raw integer"))?;
        let width = format.width.map_or(default_width(int_bits), i64::from);
        Self::assemble(raw, width, int_bits, format.scaling)
      },
      Operand::Signed(value) => Self::copy(value.into_parts(), format),
      Operand::Unsigned(value) => Self::copy(value.into_parts(), format),
    }
  }

  /// Approximate `value` with automatically chosen widths.
  pub fn from_f64(value: f64) -> Result<Self> {
    Self::quantize(value, Format::AUTO)
  }

  /// Store `raw` as-is, on `width` bits with `int_bits` above the binary point.
  pub fn from_raw(raw: impl Into<Integer>, width: u32, int_bits: i32) -> Result<Self> {
    Self::assemble(raw.into(), width.into(), int_bits, Scaling::Internal)
  }

  /// Decode a two's complement bit pattern, as wide as the string.
  pub fn from_bin(bits: &str, int_bits: i32) -> Result<Self> {
    Self::decode(bits, Format::AUTO.int_bits(int_bits))
  }

  /// Reinterpret the same payload and format with another signedness. Fails if the payload does
  /// not fit, e.g. a negative value as unsigned.
  pub fn reinterpret<const TO: bool>(&self) -> Result<Fixed<TO>> {
    Fixed::<TO>::new(self, Format::AUTO.scaling(self.scaling))
  }

  fn quantize(value: f64, format: Format) -> Result<Self> {
    if !value.is_finite() {
      return Err(Error::Unsupported(format!("the non-finite float {value}")))
    }
    let int_bits = format.int_bits.unwrap_or_else(|| estimate_int_bits(value, SIGNED));
    let width = format.width.map_or(default_width(int_bits), i64::from);
    let raw = rational::quantize(value, width - i64::from(int_bits))?;
    Self::assemble(raw, width, int_bits, format.scaling)
  }

  fn copy(parts: Parts, format: Format) -> Result<Self> {
    let width = format.width.unwrap_or(parts.width);
    let int_bits = format.int_bits.unwrap_or(parts.int_bits);
    Self::assemble(parts.raw, width.into(), int_bits, format.scaling)
  }

  /// Turn the right-hand side of an operator into something we can do arithmetic with. Values
  /// are used as they are (whatever their signedness); anything else is built as a `Self` with
  /// the widths the operator was asked for, if any.
  pub(crate) fn coerce(rhs: Operand, width: Option<u32>, int_bits: Option<i32>) -> Result<Parts> {
    match rhs {
      Operand::Signed(value) => Ok(value.into_parts()),
      Operand::Unsigned(value) => Ok(value.into_parts()),
      other => Ok(Self::new(other, Format::pinned(width, int_bits))?.into_parts()),
    }
  }
}
