use super::*;

use core::fmt::{Debug, Display};

impl<const SIGNED: bool> Debug for Fixed<SIGNED> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    let mut s = f.debug_struct(if SIGNED {"ApFixed"} else {"ApUfixed"});
    s.field("raw", &self.raw)
      .field("bin", &format_args!("0b{}", self.bin()))
      .field("width", &self.width)
      .field("int_bits", &self.int_bits);
    if self.scaling == Scaling::External {
      s.field("scaling", &self.scaling);
    }
    s.finish()
  }
}

/// The value, then the format as `W[SI]` (signed) or `W[UI]` (unsigned): `-1.25 4[S2]`.
impl<const SIGNED: bool> Display for Fixed<SIGNED> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    write!(f, "{} {}[{}{}]", self.value(), self.width, if SIGNED {'S'} else {'U'}, self.int_bits)
  }
}
