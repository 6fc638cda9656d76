//! Exact rational arithmetic over arbitrary-precision integers
//!
//! A [`Fraction`] is always in canonical lowest terms: the denominator is positive and
//! coprime with the numerator. The fields are private, so every value handed out by
//! this module holds that invariant. Operations return new values and never mutate
//! their operands.

use std::fmt;
use std::ops::{Add, Mul};

use num_bigint::{BigInt, Sign};
use num_integer::Integer;
use num_traits::{One, Signed, Zero};

use crate::error::{Error, Result};

/// An exact rational number `numerator / denominator`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Fraction {
    numer: BigInt,
    denom: BigInt,
}

impl Fraction {
    /// Builds the canonical fraction equal to `numer / denom`
    ///
    /// The sign is moved onto the numerator and both parts are divided by their gcd.
    /// A zero numerator always yields `0/1`.
    ///
    /// # Errors
    /// Returns [`Error::ZeroDenominator`] if `denom` is zero
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lagrange_secret::fraction::Fraction;
    /// use num_bigint::BigInt;
    ///
    /// let f = Fraction::reduce(BigInt::from(6), BigInt::from(-4)).unwrap();
    /// assert_eq!(f.numer(), &BigInt::from(-3));
    /// assert_eq!(f.denom(), &BigInt::from(2));
    ///
    /// assert!(Fraction::reduce(BigInt::from(1), BigInt::from(0)).is_err());
    /// ```
    pub fn reduce(numer: BigInt, denom: BigInt) -> Result<Self> {
        if denom.is_zero() {
            return Err(Error::ZeroDenominator);
        }
        Ok(Self::normalize(numer, denom))
    }

    /// The integer `value / 1`
    #[must_use]
    pub fn from_integer(value: impl Into<BigInt>) -> Self {
        Self {
            numer: value.into(),
            denom: BigInt::one(),
        }
    }

    #[must_use]
    pub fn numer(&self) -> &BigInt {
        &self.numer
    }

    #[must_use]
    pub fn denom(&self) -> &BigInt {
        &self.denom
    }

    /// Splits the fraction into `(numerator, denominator)`
    #[must_use]
    pub fn into_parts(self) -> (BigInt, BigInt) {
        (self.numer, self.denom)
    }

    /// Returns the exact integer value, or `None` if the fraction is not integral
    #[must_use]
    pub fn to_integer(&self) -> Option<BigInt> {
        let (quotient, remainder) = self.numer.div_rem(&self.denom);
        remainder.is_zero().then_some(quotient)
    }

    /// Divides by `rhs`
    ///
    /// # Errors
    /// Returns [`Error::DivideByZero`] if `rhs` is zero
    pub fn checked_div(&self, rhs: &Self) -> Result<Self> {
        if rhs.numer.is_zero() {
            return Err(Error::DivideByZero);
        }
        Ok(Self::normalize(
            &self.numer * &rhs.denom,
            &self.denom * &rhs.numer,
        ))
    }

    // Caller guarantees denom != 0.
    fn normalize(numer: BigInt, denom: BigInt) -> Self {
        let (numer, denom) = if denom.sign() == Sign::Minus {
            (-numer, -denom)
        } else {
            (numer, denom)
        };

        // gcd(0, d) = d, which turns any 0/d into 0/1
        let g = numer.abs().gcd(&denom);
        Self {
            numer: numer / &g,
            denom: denom / g,
        }
    }
}

impl Add<&Fraction> for &Fraction {
    type Output = Fraction;

    fn add(self, rhs: &Fraction) -> Fraction {
        Fraction::normalize(
            &self.numer * &rhs.denom + &rhs.numer * &self.denom,
            &self.denom * &rhs.denom,
        )
    }
}

impl Add for Fraction {
    type Output = Fraction;

    fn add(self, rhs: Fraction) -> Fraction {
        &self + &rhs
    }
}

impl Mul<&Fraction> for &Fraction {
    type Output = Fraction;

    fn mul(self, rhs: &Fraction) -> Fraction {
        Fraction::normalize(&self.numer * &rhs.numer, &self.denom * &rhs.denom)
    }
}

impl Mul for Fraction {
    type Output = Fraction;

    fn mul(self, rhs: Fraction) -> Fraction {
        &self * &rhs
    }
}

impl Zero for Fraction {
    fn zero() -> Self {
        Self::from_integer(BigInt::zero())
    }

    fn is_zero(&self) -> bool {
        self.numer.is_zero()
    }
}

impl One for Fraction {
    fn one() -> Self {
        Self::from_integer(BigInt::one())
    }
}

impl From<BigInt> for Fraction {
    fn from(value: BigInt) -> Self {
        Self::from_integer(value)
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.denom.is_one() {
            write!(f, "{}", self.numer)
        } else {
            write!(f, "{}/{}", self.numer, self.denom)
        }
    }
}
