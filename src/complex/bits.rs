use super::*;

use crate::Result;

impl<const SIGNED: bool> FixedComplex<SIGNED> {
  /// [`Fixed::truncate`] on both parts.
  pub fn truncate(&self, bits: u32, lsb: bool) -> Result<Self> {
    Self::synced(self.re.truncate(bits, lsb)?, self.im.truncate(bits, lsb)?)
  }

  /// [`Fixed::pad`] on both parts.
  pub fn pad(&self, bits: u32, lsb: bool) -> Result<Self> {
    Self::synced(self.re.pad(bits, lsb)?, self.im.pad(bits, lsb)?)
  }

  /// [`Fixed::saturate`] on both parts. Each part is clamped on its own, so the magnitude of the
  /// result is not bounded: a value clamped in both parts ends up at a corner of the square.
  pub fn saturate(&self, bits: u32) -> Result<Self> {
    Self::synced(self.re.saturate(bits)?, self.im.saturate(bits)?)
  }
}
