//! This crate provides a bit-accurate software model of arbitrary-precision fixed-point
//! arithmetic, for both real and complex numbers.
//!
//! # Introduction
//!
//! Hardware datapaths (FPGA and ASIC designs, DSP pipelines, HLS kernels) rarely compute in
//! floating point. Instead they carry integers of some chosen width, and a convention on where
//! the binary point sits. Getting the widths right is half of the design work: too narrow and
//! values overflow or lose precision, too wide and the silicon is wasted.
//!
//! This crate lets you simulate such a datapath in software, bit for bit. A value is an
//! arbitrary-precision integer payload together with a total width and a number of integer bits;
//! every operation follows explicit rules for how widths grow, and every rounding is a
//! truncation you can see. Nothing ever wraps around silently: a payload that does not fit its
//! width is an error.
//!
//! # Usage
//!
//! ```
//! use ap_fixed::{ApFixed, ApUfixed, ApComplex, Format};
//! # fn main() -> ap_fixed::Result<()> {
//!
//! // Build values from floats (quantized toward zero), raw payloads, or binary strings.
//! let a = ApFixed::from_f64(-9.9654)?;                     // 32 bits, 5 of them integer
//! let b = ApFixed::new(156.21, Format::AUTO.int_bits(12))?; // 32 bits, 12 of them integer
//! let c = ApUfixed::from_bin("1011", 2)?;                   // 2.75
//! let d = ApFixed::from_raw(-3, 8, 4)?;                     // -3 / 16
//!
//! // Arithmetic never loses bits unless you ask for it: widths grow as needed.
//! let p = a.try_mul(&b)?;
//! assert_eq!((p.width(), p.int_bits()), (64, 17));
//! let s = c.try_add(&d)?;  // mixed signedness: the result takes the left operand's
//! assert_eq!(s.value(), 2.5625);
//! let t = (&a - &a)?;       // same type: operators work too, and also return a Result
//! assert_eq!(t.value(), 0.);
//!
//! // Or pin the result format, and truncate, pad, or saturate explicitly.
//! let q = a.bounded_add(&b, 16, Some(9))?;
//! assert_eq!(q.bin().len(), 16);
//! assert_eq!(ApFixed::from_raw(100, 8, 8)?.saturate(2)?.value(), 31.);
//!
//! // Complex values keep both parts in the same format.
//! let z = ApComplex::from_parts(1.5, -2., Format::new(8, 4))?;
//! assert_eq!(z.magnitude()?.value(), 6.25);
//! # Ok(()) }
//! ```
//!
//! # Errors
//!
//! Every fallible operation returns a [`Result`]; the operator traits (`+`, `-`, `*`, unary
//! `-`) do too, so their results need a `?`. See [`ErrorKind`] for the broad families of
//! errors.
//!
//! # Logging
//!
//! Operations log through the [`log`] facade: arithmetic results at `trace` level, and clamping
//! by [`Fixed::saturate`] at `debug` level. The crate never installs a logger.

mod error;
mod rational;
mod fixed;
mod complex;

pub use error::{Error, ErrorKind, Result};
pub use fixed::{Fixed, Format, Operand, Scaling};
pub use complex::{ComplexOperand, FixedComplex};

/// Signed fixed-point value.
pub type ApFixed = Fixed<true>;

/// Unsigned fixed-point value.
pub type ApUfixed = Fixed<false>;

/// Complex fixed-point value with signed parts.
pub type ApComplex = FixedComplex<true>;

/// Complex fixed-point value with unsigned parts.
pub type ApUcomplex = FixedComplex<false>;

/// Number of cases for each proptest. Arbitrary-precision arithmetic is slow in debug builds.
#[cfg(test)]
const PROPTEST_CASES: u32 = if cfg!(debug_assertions) {0x400} else {0x4000};
