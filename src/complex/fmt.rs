use super::*;

use core::fmt::{Debug, Display};

impl<const SIGNED: bool> Debug for FixedComplex<SIGNED> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_struct(if SIGNED {"ApComplex"} else {"ApUcomplex"})
      .field("raw", &format_args!("({}, {})", self.re.raw(), self.im.raw()))
      .field("width", &self.width())
      .field("int_bits", &self.int_bits())
      .finish()
  }
}

/// The value as `(re±imj)`, then the format of the parts as in [`Fixed`]'s `Display`.
impl<const SIGNED: bool> Display for FixedComplex<SIGNED> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    write!(
      f, "({}{:+}j) {}[{}{}]",
      self.re.value(), self.im.value(), self.width(), if SIGNED {'S'} else {'U'}, self.int_bits(),
    )
  }
}
