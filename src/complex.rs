// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Double-precision complex arithmetic.
//!
//! The named functions (`add`, `sub`, `mul`, `div`, `neg`, `conjugate`,
//! `mag_sq`, and the scalar variants) are the contract; the operator
//! impls at the bottom of the file are sugar over them.  Nothing here
//! guards against division by zero: a zero divisor produces infinities
//! or NaNs exactly as IEEE-754 says it should.

use num;
use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use std::str::FromStr;

/// A complex number.  Two doubles, no identity beyond them.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Complex {
    /// The real component.
    pub re: f64,
    /// The imaginary component.
    pub im: f64,
}

/// Component-wise sum.
#[inline]
pub fn add(a: Complex, b: Complex) -> Complex {
    Complex::new(a.re + b.re, a.im + b.im)
}

/// Component-wise difference.
#[inline]
pub fn sub(a: Complex, b: Complex) -> Complex {
    Complex::new(a.re - b.re, a.im - b.im)
}

/// The complex product.
#[inline]
pub fn mul(a: Complex, b: Complex) -> Complex {
    Complex::new(a.re * b.re - a.im * b.im, a.re * b.im + a.im * b.re)
}

/// The complex quotient, computed as `a * conj(b) / |b|^2`.  A zero
/// `b` yields non-finite components.
#[inline]
pub fn div(a: Complex, b: Complex) -> Complex {
    unscale(mul(a, conjugate(b)), mag_sq(b))
}

/// Negates both components.
#[inline]
pub fn neg(a: Complex) -> Complex {
    Complex::new(-a.re, -a.im)
}

/// Negates the imaginary component.
#[inline]
pub fn conjugate(a: Complex) -> Complex {
    Complex::new(a.re, -a.im)
}

/// The squared magnitude, `re^2 + im^2`.  This is what the escape test
/// compares against, so that the hot loop never takes a square root.
#[inline]
pub fn mag_sq(a: Complex) -> f64 {
    a.re * a.re + a.im * a.im
}

/// Multiplies both components by a real scalar.
#[inline]
pub fn scale(a: Complex, s: f64) -> Complex {
    Complex::new(a.re * s, a.im * s)
}

/// Divides both components by a real scalar.
#[inline]
pub fn unscale(a: Complex, s: f64) -> Complex {
    Complex::new(a.re / s, a.im / s)
}

/// Divides a real scalar by a complex number, as `s * (1 / a)`.
#[inline]
pub fn recip_scale(s: f64, a: Complex) -> Complex {
    scale(div(Complex::new(1.0, 0.0), a), s)
}

impl Complex {
    /// Constructor.
    pub fn new(re: f64, im: f64) -> Complex {
        Complex { re, im }
    }

    /// See [`conjugate`](fn.conjugate.html).
    pub fn conjugate(self) -> Complex {
        conjugate(self)
    }

    /// See [`mag_sq`](fn.mag_sq.html).
    pub fn mag_sq(self) -> f64 {
        mag_sq(self)
    }

    /// True if neither component is infinite or NaN.
    pub fn is_finite(self) -> bool {
        self.re.is_finite() && self.im.is_finite()
    }

    /// Component-wise equality within an absolute tolerance.
    pub fn approx_eq(self, other: Complex, tolerance: f64) -> bool {
        (self.re - other.re).abs() <= tolerance && (self.im - other.im).abs() <= tolerance
    }
}

impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.re, self.im)
    }
}

/// Parses `"re,im"`, the form the command line takes the seed in.
impl FromStr for Complex {
    type Err = String;

    fn from_str(s: &str) -> Result<Complex, String> {
        let index = s
            .find(',')
            .ok_or_else(|| format!("expected RE,IM but got '{}'", s))?;
        match (
            f64::from_str(s[..index].trim()),
            f64::from_str(s[index + 1..].trim()),
        ) {
            (Ok(re), Ok(im)) => Ok(Complex::new(re, im)),
            _ => Err(format!("could not parse '{}' as a complex number", s)),
        }
    }
}

impl From<num::Complex<f64>> for Complex {
    fn from(z: num::Complex<f64>) -> Complex {
        Complex::new(z.re, z.im)
    }
}

impl From<Complex> for num::Complex<f64> {
    fn from(z: Complex) -> num::Complex<f64> {
        num::Complex::new(z.re, z.im)
    }
}

impl Add for Complex {
    type Output = Complex;
    fn add(self, rhs: Complex) -> Complex {
        add(self, rhs)
    }
}

impl Sub for Complex {
    type Output = Complex;
    fn sub(self, rhs: Complex) -> Complex {
        sub(self, rhs)
    }
}

impl Mul for Complex {
    type Output = Complex;
    fn mul(self, rhs: Complex) -> Complex {
        mul(self, rhs)
    }
}

impl Div for Complex {
    type Output = Complex;
    fn div(self, rhs: Complex) -> Complex {
        div(self, rhs)
    }
}

impl Neg for Complex {
    type Output = Complex;
    fn neg(self) -> Complex {
        neg(self)
    }
}

impl Mul<f64> for Complex {
    type Output = Complex;
    fn mul(self, rhs: f64) -> Complex {
        scale(self, rhs)
    }
}

impl Mul<Complex> for f64 {
    type Output = Complex;
    fn mul(self, rhs: Complex) -> Complex {
        scale(rhs, self)
    }
}

impl Div<f64> for Complex {
    type Output = Complex;
    fn div(self, rhs: f64) -> Complex {
        unscale(self, rhs)
    }
}

impl Div<Complex> for f64 {
    type Output = Complex;
    fn div(self, rhs: Complex) -> Complex {
        recip_scale(self, rhs)
    }
}

impl AddAssign for Complex {
    fn add_assign(&mut self, rhs: Complex) {
        *self = add(*self, rhs);
    }
}

impl SubAssign for Complex {
    fn sub_assign(&mut self, rhs: Complex) {
        *self = sub(*self, rhs);
    }
}

impl MulAssign for Complex {
    fn mul_assign(&mut self, rhs: Complex) {
        *self = mul(*self, rhs);
    }
}

impl DivAssign for Complex {
    fn div_assign(&mut self, rhs: Complex) {
        *self = div(*self, rhs);
    }
}
