//! The coefficient field.
//!
//! Coefficients are fixed-precision floating values. Arithmetic is plain
//! IEEE arithmetic; no rounding control or exact rationals are attempted.

use num_traits::{One, Zero};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub, SubAssign};
use std::str::FromStr;
use thiserror::Error;

use crate::traits::{Field, Ring};

/// Errors raised while building a scalar.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ScalarError {
    /// The input could not be interpreted as a floating value.
    #[error("conversion of {input:?} to a scalar failed")]
    ConversionFailure {
        /// The rejected input, verbatim.
        input: String,
    },
}

/// A single floating coefficient.
///
/// Equality and ordering follow numeric order, so `-0.0 == 0.0`. NaN
/// values are placed by the IEEE total order, which keeps sorting total.
#[derive(Clone, Copy, Default)]
pub struct Scalar(f64);

impl Scalar {
    /// The additive identity.
    pub const ZERO: Self = Self(0.0);
    /// The multiplicative identity.
    pub const ONE: Self = Self(1.0);

    /// Wraps a floating value.
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// Returns the wrapped value.
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Returns the absolute value.
    #[must_use]
    pub fn abs(self) -> Self {
        Self(self.0.abs())
    }

    /// Returns the reciprocal, or `None` for zero.
    #[must_use]
    pub fn recip(self) -> Option<Self> {
        if self.0 == 0.0 {
            None
        } else {
            Some(Self(self.0.recip()))
        }
    }

    /// Returns true if this is exactly zero (either sign).
    #[must_use]
    pub fn is_zero(self) -> bool {
        self.0 == 0.0
    }

    /// Returns true if this is exactly one.
    #[must_use]
    pub fn is_one(self) -> bool {
        self.0 == 1.0
    }

    /// Returns true for finite values.
    #[must_use]
    pub fn is_finite(self) -> bool {
        self.0.is_finite()
    }
}

impl PartialEq for Scalar {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Scalar {}

impl PartialOrd for Scalar {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Scalar {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0
            .partial_cmp(&other.0)
            .unwrap_or_else(|| self.0.total_cmp(&other.0))
    }
}

impl fmt::Debug for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Debug formatting keeps the fractional part of integral values: 2.0, not 2.
        write!(f, "{:?}", self.0)
    }
}

impl FromStr for Scalar {
    type Err = ScalarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<f64>()
            .map(Self)
            .map_err(|_| ScalarError::ConversionFailure {
                input: s.to_owned(),
            })
    }
}

impl TryFrom<&str> for Scalar {
    type Error = ScalarError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl From<i32> for Scalar {
    fn from(value: i32) -> Self {
        Self(f64::from(value))
    }
}

impl From<u32> for Scalar {
    fn from(value: u32) -> Self {
        Self(f64::from(value))
    }
}

impl From<Scalar> for f64 {
    fn from(value: Scalar) -> Self {
        value.0
    }
}

impl Add for Scalar {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Scalar {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl Mul for Scalar {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self(self.0 * rhs.0)
    }
}

impl Div for Scalar {
    type Output = Self;

    fn div(self, rhs: Self) -> Self {
        Self(self.0 / rhs.0)
    }
}

impl Neg for Scalar {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl AddAssign for Scalar {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl SubAssign for Scalar {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl MulAssign for Scalar {
    fn mul_assign(&mut self, rhs: Self) {
        self.0 *= rhs.0;
    }
}

impl Zero for Scalar {
    fn zero() -> Self {
        Self::ZERO
    }

    fn is_zero(&self) -> bool {
        self.0 == 0.0
    }
}

impl One for Scalar {
    fn one() -> Self {
        Self::ONE
    }
}

impl Ring for Scalar {
    fn zero() -> Self {
        Self::ZERO
    }

    fn one() -> Self {
        Self::ONE
    }

    fn is_zero(&self) -> bool {
        self.0 == 0.0
    }

    fn is_one(&self) -> bool {
        self.0 == 1.0
    }

    fn pow(&self, n: u32) -> Self {
        match i32::try_from(n) {
            Ok(n) => Self(self.0.powi(n)),
            Err(_) => Self(self.0.powf(f64::from(n))),
        }
    }
}

impl Field for Scalar {
    fn inv(&self) -> Option<Self> {
        self.recip()
    }

    // Direct division rounds once; multiplying by the inverse rounds twice.
    fn try_div(&self, other: &Self) -> Option<Self> {
        if Ring::is_zero(other) {
            None
        } else {
            Some(Self(self.0 / other.0))
        }
    }
}
