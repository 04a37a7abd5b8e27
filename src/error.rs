use malachite::Integer;
use thiserror::Error;

/// The broad family an [`Error`] belongs to.
///
/// Callers that want to recover (e.g. retry with a wider format) usually only care about the
/// kind, not the exact variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
  /// A raw payload does not fit the declared width and signedness.
  RangeViolation,
  /// Lengths, widths or mandatory parameters are inconsistent.
  ShapeViolation,
  /// The source value cannot be turned into a fixed-point value at all.
  UnsupportedSource,
  /// The operation is not available for this variant (e.g. negating an unsigned value).
  CapabilityViolation,
}

/// Everything that can go wrong when building or combining fixed-point values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
  #[error("a{} of {width} bits cannot hold the raw value {raw}", article(.signed))]
  OutOfRange {
    raw: Integer,
    width: u32,
    signed: bool,
  },
  #[error("binary word length must be {expected}, got {found}")]
  LengthMismatch {
    expected: u32,
    found: usize,
  },
  #[error("invalid binary digit {0:?}")]
  InvalidDigit(char),
  #[error("`int_bits` must be provided when building from a {0}")]
  MissingIntBits(&'static str),
  #[error("a fixed-point value needs at least one bit, got a width of {0}")]
  InvalidWidth(i64),
  #[error("{0} integer bits is out of range")]
  InvalidIntBits(i64),
  #[error("a complex value has 1 or 2 components, got {0}")]
  ComponentCount(usize),
  #[error("cannot build a fixed-point value from {0}")]
  Unsupported(String),
  #[error("{0} values cannot be negated")]
  NotNegatable(&'static str),
}

impl Error {
  /// The taxonomy bucket of this error.
  pub fn kind(&self) -> ErrorKind {
    match self {
      Self::OutOfRange { .. } => ErrorKind::RangeViolation,
      Self::LengthMismatch { .. }
      | Self::InvalidDigit(_)
      | Self::MissingIntBits(_)
      | Self::InvalidWidth(_)
      | Self::InvalidIntBits(_)
      | Self::ComponentCount(_) => ErrorKind::ShapeViolation,
      Self::Unsupported(_) => ErrorKind::UnsupportedSource,
      Self::NotNegatable(_) => ErrorKind::CapabilityViolation,
    }
  }
}

fn article(signed: &bool) -> &'static str {
  if *signed {" signed"} else {"n unsigned"}
}

pub type Result<T, E = Error> = core::result::Result<T, E>;
