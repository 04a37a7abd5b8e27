use super::*;

use core::ops::{Add, Mul, Neg, Sub};

use crate::Result;
use crate::fixed::ops::mk_ops;

/// The right-hand side of an operator, split into parts: either a real scalar (touching only
/// what a real number touches) or a pair of parts of either signedness.
enum Side {
  Real(Operand),
  Pair(Operand, Operand),
}

impl<const SIGNED: bool> FixedComplex<SIGNED> {
  /// Values are used as they are; anything else complex is built as a `Self` in `format`.
  fn split(rhs: ComplexOperand, format: Format) -> Result<Side> {
    Ok(match rhs {
      ComplexOperand::Real(x) => Side::Real(x),
      ComplexOperand::Signed(z) => Side::Pair(z.re.into(), z.im.into()),
      ComplexOperand::Unsigned(z) => Side::Pair(z.re.into(), z.im.into()),
      other => {
        let z = Self::new(other, format)?;
        Side::Pair(z.re.into(), z.im.into())
      },
    })
  }

  fn add_kernel(
    &self,
    rhs: ComplexOperand,
    width: Option<u32>,
    int_bits: Option<i32>,
    subtract: bool,
  ) -> Result<Self> {
    let (re, im) = match Self::split(rhs, Format::pinned(width, int_bits))? {
      Side::Real(x) => {
        let re = self.re.add_kernel(x, width, int_bits, subtract)?;
        // A bounded result bounds both parts, even the one a real operand leaves alone.
        let im = match width {
          Some(_) => self.im.add_kernel(Operand::Float(0.), width, Some(re.int_bits()), false)?,
          None => self.im.clone(),
        };
        (re, im)
      },
      Side::Pair(re, im) => (
        self.re.add_kernel(re, width, int_bits, subtract)?,
        self.im.add_kernel(im, width, int_bits, subtract)?,
      ),
    };
    Self::synced(re, im)
  }

  /// `self + rhs`. A real `rhs` is added to the real part only.
  ///
  /// ```
  /// # use ap_fixed::{ApComplex, Format};
  /// # use num::complex::Complex64;
  /// # fn main() -> ap_fixed::Result<()> {
  /// let z = ApComplex::from_parts(1.5, -2., Format::new(8, 4))?;
  /// assert_eq!(z.try_add(0.25)?.value(), Complex64::new(1.75, -2.));
  /// assert_eq!(z.try_add(&z)?.value(), Complex64::new(3., -4.));
  /// # Ok(()) }
  /// ```
  pub fn try_add(&self, rhs: impl Into<ComplexOperand>) -> Result<Self> {
    self.add_kernel(rhs.into(), None, None, false)
  }

  /// `self - rhs`. A real `rhs` is subtracted from the real part only.
  pub fn try_sub(&self, rhs: impl Into<ComplexOperand>) -> Result<Self> {
    self.add_kernel(rhs.into(), None, None, true)
  }

  /// `self + rhs` with both parts on exactly `width` bits, as in [`Fixed::bounded_add`].
  pub fn bounded_add(&self, rhs: impl Into<ComplexOperand>, width: u32, int_bits: Option<i32>) -> Result<Self> {
    self.add_kernel(rhs.into(), Some(width), int_bits, false)
  }

  /// `self × rhs`. A real `rhs` scales both parts; a complex one gives
  /// `(re₁re₂ − im₁im₂) + (re₁im₂ + im₁re₂)i`, with each product and sum growing as in
  /// [`Fixed::try_mul`] and [`Fixed::try_add`].
  pub fn try_mul(&self, rhs: impl Into<ComplexOperand>) -> Result<Self> {
    let (re, im) = match Self::split(rhs.into(), Format::AUTO)? {
      Side::Real(x) => (self.re.try_mul(x.clone())?, self.im.try_mul(x)?),
      Side::Pair(re, im) => {
        let (a, b) = (&self.re, &self.im);
        (
          a.try_mul(re.clone())?.try_sub(b.try_mul(im.clone())?)?,
          a.try_mul(im)?.try_add(b.try_mul(re)?)?,
        )
      },
    };
    log::trace!("complex mul → {}[{}]", re.width(), re.int_bits());
    Self::synced(re, im)
  }

  /// `-self`, both parts one bit wider. Unsigned values cannot be negated.
  pub fn try_neg(&self) -> Result<Self> {
    Self::synced(self.re.try_neg()?, self.im.try_neg()?)
  }

  /// Whether both parts compare equal (see [`Fixed::is_eq`]). A real `rhs` has a zero imaginary
  /// part.
  pub fn is_eq(&self, rhs: impl Into<ComplexOperand>) -> Result<bool> {
    let (re, im) = match Self::split(rhs.into(), Format::AUTO)? {
      Side::Real(x) => (x, Operand::Float(0.)),
      Side::Pair(re, im) => (re, im),
    };
    Ok(self.re.is_eq(re)? && self.im.is_eq(im)?)
  }

  /// The squared magnitude `re² + im²`, as an unsigned value. The sum is computed exactly, then
  /// read as unsigned and stripped of its msb (the sign bit of a signed sum, always zero since
  /// the sum is non-negative).
  ///
  /// This is **not** the Euclidean norm (there is no square root); see [`Self::norm`] for that.
  ///
  /// ```
  /// # use ap_fixed::{ApComplex, Format};
  /// # fn main() -> ap_fixed::Result<()> {
  /// let z = ApComplex::from_parts(3., -4., Format::new(4, 4))?;
  /// let m = z.magnitude()?;
  /// assert_eq!((m.value(), m.width(), m.int_bits()), (25., 8, 8));
  /// # Ok(()) }
  /// ```
  pub fn magnitude(&self) -> Result<Fixed<false>> {
    let squares = self.re.try_mul(&self.re)?.try_add(self.im.try_mul(&self.im)?)?;
    squares.reinterpret::<false>()?.truncate(1, false)
  }
}

impl<const S: bool, const T: bool> PartialEq<FixedComplex<T>> for FixedComplex<S> {
  fn eq(&self, other: &FixedComplex<T>) -> bool {
    self.re == other.re && self.im == other.im
  }
}

impl<const SIGNED: bool> Eq for FixedComplex<SIGNED> {}

mk_ops!{FixedComplex, Add, add, try_add}
mk_ops!{FixedComplex, Sub, sub, try_sub}
mk_ops!{FixedComplex, Mul, mul, try_mul}

impl<const SIGNED: bool> Neg for FixedComplex<SIGNED> {
  type Output = Result<FixedComplex<SIGNED>>;

  #[inline]
  fn neg(self) -> Self::Output { self.try_neg() }
}

impl<const SIGNED: bool> Neg for &FixedComplex<SIGNED> {
  type Output = Result<FixedComplex<SIGNED>>;

  #[inline]
  fn neg(self) -> Self::Output { self.try_neg() }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{ApComplex, ApFixed, ApUcomplex, ErrorKind};
  use malachite::rational::Rational;
  use num::complex::Complex64;
  use test_log::test;

  #[test]
  fn add_real() {
    let z = ApComplex::from_parts(1.5, -2., Format::new(8, 4)).unwrap();
    assert_eq!(z.try_add(0.25).unwrap().value(), Complex64::new(1.75, -2.));
    let q = ApFixed::new(0.25, Format::new(4, 2)).unwrap();
    let w = z.try_add(&q).unwrap();
    assert_eq!(w.value(), Complex64::new(1.75, -2.));
    // The real part grew; the imaginary part was padded to match.
    assert_eq!((w.width(), w.int_bits()), (9, 5));
    assert_eq!((w.imag().width(), w.imag().int_bits()), (9, 5));

    let x = ApFixed::from_raw(3, 4, 4).unwrap();
    assert_eq!(z.try_sub(&x).unwrap().value(), Complex64::new(-1.5, -2.));
  }

  #[test]
  fn add_complex() {
    let z = ApComplex::from_parts(1.5, -2., Format::new(8, 4)).unwrap();
    let w = ApComplex::from_parts(-0.125, 0.5, Format::new(6, 2)).unwrap();
    let sum = z.try_add(&w).unwrap();
    assert_eq!(sum.value(), Complex64::new(1.375, -1.5));
    assert_eq!((sum.width(), sum.int_bits()), (9, 5));
    assert_eq!((&z - &w).unwrap().value(), Complex64::new(1.625, -2.5));
    assert_eq!(z.try_add(Complex64::new(1., 1.)).unwrap().value(), Complex64::new(2.5, -1.));
    assert_eq!(z.try_add((1f64, 1f64)).unwrap().value(), Complex64::new(2.5, -1.));
  }

  #[test]
  fn unsigned_sub_goes_negative() {
    let z = ApUcomplex::from_parts(1., 2., Format::new(8, 4)).unwrap();
    let w = ApUcomplex::from_parts(0.5, 3., Format::new(8, 4)).unwrap();
    assert_eq!(z.try_sub(&w).unwrap_err().kind(), ErrorKind::RangeViolation);
    assert_eq!(w.try_sub(&z).unwrap_err().kind(), ErrorKind::RangeViolation);
    assert_eq!(z.try_sub(0.5).unwrap().value(), Complex64::new(0.5, 2.));
  }

  #[test]
  fn bounded_add() {
    let z = ApComplex::from_parts(1.5, -2., Format::new(8, 4)).unwrap();
    let w = z.bounded_add(0.25, 6, Some(4)).unwrap();
    assert_eq!((w.width(), w.int_bits()), (6, 4));
    assert_eq!(w.value(), Complex64::new(1.75, -2.));
    let w = z.bounded_add(&z, 8, None).unwrap();
    assert_eq!((w.width(), w.int_bits(), w.value()), (8, 5, Complex64::new(3., -4.)));
    assert_eq!(z.bounded_add(&z, 4, Some(2)).unwrap_err().kind(), ErrorKind::RangeViolation);
  }

  #[test]
  fn mul() {
    let z = ApComplex::from_parts(1.5, -2., Format::new(8, 4)).unwrap();
    let w = ApComplex::from_parts(0.5, 3., Format::new(6, 3)).unwrap();
    let p = z.try_mul(&w).unwrap();
    assert_eq!(p.value(), Complex64::new(6.75, 3.5));
    // Each product has 4 + 3 integer bits, plus one for the sum.
    assert_eq!((p.width(), p.int_bits()), (15, 8));

    assert_eq!(z.try_mul(2.).unwrap().value(), Complex64::new(3., -4.));
    assert_eq!((&z * &z).unwrap().value(), Complex64::new(1.5 * 1.5 - 4., -6.));
  }

  #[test]
  fn mul_is_exact() {
    let cases = || {
      ApFixed::cases_exhaustive(4, 2).step_by(3)
        .flat_map(|re| ApFixed::cases_exhaustive(4, 2).step_by(5).map(move |im| (re.clone(), im)))
    };
    for (a, b) in cases() {
      for (c, d) in cases() {
        let z = ApComplex::new((&a, &b), Format::AUTO).unwrap();
        let w = ApComplex::new((&c, &d), Format::AUTO).unwrap();
        let p = z.try_mul(&w).unwrap();
        let (a, b, c, d) = (a.to_rational(), b.to_rational(), c.to_rational(), d.to_rational());
        let re: Rational = &a * &c - &b * &d;
        let im: Rational = a * d + b * c;
        assert_eq!((p.real().to_rational(), p.imag().to_rational()), (re, im));
      }
    }
  }

  #[test]
  fn neg() {
    let z = ApComplex::from_parts(-8., 7.5, Format::new(5, 4)).unwrap();
    let w = z.try_neg().unwrap();
    assert_eq!(w.value(), Complex64::new(8., -7.5));
    assert_eq!((w.width(), w.int_bits()), (6, 5));
    assert_eq!((-(-&z).unwrap()).unwrap(), z);

    let u = ApUcomplex::from_parts(0., 0., Format::new(4, 4)).unwrap();
    assert_eq!(u.try_neg().unwrap_err().kind(), ErrorKind::CapabilityViolation);
  }

  #[test]
  fn eq() {
    let z = ApComplex::from_parts(1.5, -2., Format::new(8, 4)).unwrap();
    let w = ApComplex::from_parts(1.5, -2., Format::new(16, 6)).unwrap();
    assert!(z.is_eq(&w).unwrap());
    assert_eq!(z, w);
    assert!(!z.is_eq(1.5).unwrap());
    assert!(z.is_eq(Complex64::new(1.5, -2.)).unwrap());
    let x = ApComplex::new(1.5, Format::new(8, 4)).unwrap();
    assert!(x.is_eq(1.5).unwrap());
    assert_ne!(z, x);
  }

  #[test]
  fn magnitude() {
    let z = ApComplex::from_parts(-1.5, 0.5, Format::new(4, 2)).unwrap();
    let m = z.magnitude().unwrap();
    assert_eq!(m.value(), 2.5);
    assert_eq!((m.width(), m.int_bits(), m.frac_bits()), (8, 4, 4));
    assert!(!m.is_signed());

    // The most negative parts give the largest magnitude, which still fits.
    let z = ApComplex::from_parts(-2., -2., Format::new(4, 2)).unwrap();
    assert_eq!(z.magnitude().unwrap().value(), 8.);
  }
}
