//! Exact rational numbers.
//!
//! A `Rational` is a numerator/denominator pair of [`BigInteger`]s. The
//! denominator is kept positive at all times, but common factors are only
//! removed on demand: arithmetic never reduces, rendering (`Display`,
//! [`Rational::as_decimal`], `to_f64`) works on a reduced copy, and
//! [`Rational::reduce`] reduces in place. Chained arithmetic therefore pays
//! for one gcd at the end instead of one per step.

use num_traits::{One, ToPrimitive, Zero};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::{Product, Sum};
use std::ops::Neg;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::BigInteger;

/// Fractional digits rendered before parsing a rational as `f64`.
pub const FLOAT_DECIMAL_DIGITS: usize = 200;

/// Computes the greatest common divisor of two integers.
///
/// Euclid's algorithm: `gcd(a, 0) = |a|`, otherwise `gcd(b, a mod b)`.
#[must_use]
pub fn gcd(a: &BigInteger, b: &BigInteger) -> BigInteger {
    a.gcd(b)
}

/// An exact rational number with a positive denominator.
///
/// Equality and ordering compare by cross-multiplication, so `2/4 == 1/2`
/// holds whether or not either side has been reduced.
#[derive(Clone)]
pub struct Rational {
    numerator: BigInteger,
    denominator: BigInteger,
}

impl Rational {
    /// Creates a new rational from numerator and denominator.
    ///
    /// The fraction is not reduced. A negative denominator moves its sign
    /// to the numerator.
    ///
    /// # Panics
    ///
    /// Panics if the denominator is zero.
    #[must_use]
    pub fn new(numerator: BigInteger, denominator: BigInteger) -> Self {
        assert!(!denominator.is_zero(), "denominator cannot be zero");
        Self::from_parts(numerator, denominator)
    }

    /// Creates a new rational, reporting a zero denominator.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DivisionByZero`] if the denominator is zero.
    pub fn try_new(numerator: BigInteger, denominator: BigInteger) -> Result<Self> {
        if denominator.is_zero() {
            return Err(Error::DivisionByZero);
        }
        Ok(Self::from_parts(numerator, denominator))
    }

    /// Creates a rational from i64 numerator and denominator.
    ///
    /// # Panics
    ///
    /// Panics if the denominator is zero.
    #[must_use]
    pub fn from_i64(numerator: i64, denominator: i64) -> Self {
        Self::new(BigInteger::new(numerator), BigInteger::new(denominator))
    }

    /// Creates a rational from an integer (denominator = 1).
    #[must_use]
    pub fn from_integer(n: BigInteger) -> Self {
        Self {
            numerator: n,
            denominator: BigInteger::one(),
        }
    }

    fn from_parts(numerator: BigInteger, denominator: BigInteger) -> Self {
        if denominator.is_negative() {
            Self {
                numerator: -numerator,
                denominator: -denominator,
            }
        } else {
            Self {
                numerator,
                denominator,
            }
        }
    }

    /// Returns the numerator as stored, possibly unreduced.
    #[must_use]
    pub fn numerator(&self) -> &BigInteger {
        &self.numerator
    }

    /// Returns the denominator as stored, possibly unreduced. Always positive.
    #[must_use]
    pub fn denominator(&self) -> &BigInteger {
        &self.denominator
    }

    /// Consumes the rational and returns its reduced numerator and denominator.
    #[must_use]
    pub fn into_parts(mut self) -> (BigInteger, BigInteger) {
        self.reduce();
        (self.numerator, self.denominator)
    }

    /// Divides numerator and denominator by their gcd.
    pub fn reduce(&mut self) {
        let divisor = gcd(&self.numerator, &self.denominator);
        tracing::trace!(divisor_limbs = divisor.limbs().len(), "reducing rational");

        if !divisor.is_zero() && !divisor.is_one() {
            self.numerator /= &divisor;
            self.denominator /= &divisor;
        }
        debug_assert!(!self.denominator.is_negative());
    }

    /// Returns a reduced copy.
    #[must_use]
    pub fn reduced(&self) -> Self {
        let mut copy = self.clone();
        copy.reduce();
        copy
    }

    /// Returns true if this rational is an integer.
    #[must_use]
    pub fn is_integer(&self) -> bool {
        (&self.numerator % &self.denominator).is_zero()
    }

    /// Returns the integer part, truncated toward zero.
    #[must_use]
    pub fn trunc(&self) -> BigInteger {
        &self.numerator / &self.denominator
    }

    /// Returns the absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self {
            numerator: self.numerator.abs(),
            denominator: self.denominator.clone(),
        }
    }

    /// Returns the sign: -1, 0, or 1.
    #[must_use]
    pub fn signum(&self) -> i8 {
        self.numerator.signum()
    }

    /// Returns true if negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.numerator.is_negative()
    }

    /// Returns the reciprocal (1/x).
    ///
    /// # Panics
    ///
    /// Panics if the rational is zero.
    #[must_use]
    pub fn recip(&self) -> Self {
        assert!(!self.is_zero(), "cannot take reciprocal of zero");
        Self::from_parts(self.denominator.clone(), self.numerator.clone())
    }

    /// Computes self^exp for non-negative exp.
    #[must_use]
    pub fn pow(&self, exp: u32) -> Self {
        Self {
            numerator: self.numerator.pow(exp),
            denominator: self.denominator.pow(exp),
        }
    }

    /// Division that reports a zero divisor.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DivisionByZero`] if `rhs` is zero.
    pub fn checked_div(&self, rhs: &Self) -> Result<Self> {
        if rhs.is_zero() {
            return Err(Error::DivisionByZero);
        }
        Ok(self.div_ref(rhs))
    }

    /// Renders the value as a decimal with exactly `precision` fractional digits.
    ///
    /// Digits past `precision` are truncated, not rounded. A `precision` of
    /// zero renders only the integer part, without a decimal point. Values in
    /// `(-1, 0)` keep their sign, so `-1/4` renders as `-0` at precision zero.
    #[must_use]
    pub fn as_decimal(&self, precision: usize) -> String {
        let reduced = self.reduced();
        let (integer_part, fractional) = reduced.numerator.div_rem(&reduced.denominator);

        let mut out = String::new();
        if reduced.numerator.is_negative() && integer_part.is_zero() {
            out.push('-');
        }
        out.push_str(&integer_part.to_string());

        if precision > 0 {
            let digits = (fractional.abs() * BigInteger::pow10(precision)) / &reduced.denominator;
            out.push('.');
            out.push_str(&format!("{:0>precision$}", digits.to_string()));
        }

        out
    }

    fn add_ref(&self, rhs: &Self) -> Self {
        Self {
            numerator: &self.numerator * &rhs.denominator + &self.denominator * &rhs.numerator,
            denominator: &self.denominator * &rhs.denominator,
        }
    }

    fn sub_ref(&self, rhs: &Self) -> Self {
        Self {
            numerator: &self.numerator * &rhs.denominator - &self.denominator * &rhs.numerator,
            denominator: &self.denominator * &rhs.denominator,
        }
    }

    fn mul_ref(&self, rhs: &Self) -> Self {
        Self {
            numerator: &self.numerator * &rhs.numerator,
            denominator: &self.denominator * &rhs.denominator,
        }
    }

    fn div_ref(&self, rhs: &Self) -> Self {
        assert!(!rhs.is_zero(), "attempt to divide by zero");
        Self::from_parts(
            &self.numerator * &rhs.denominator,
            &self.denominator * &rhs.numerator,
        )
    }
}

impl Default for Rational {
    fn default() -> Self {
        Self::zero()
    }
}

impl Zero for Rational {
    fn zero() -> Self {
        Self::from_integer(BigInteger::zero())
    }

    fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }
}

impl One for Rational {
    fn one() -> Self {
        Self::from_integer(BigInteger::one())
    }

    fn is_one(&self) -> bool {
        self.numerator == self.denominator
    }
}

impl ToPrimitive for Rational {
    fn to_i64(&self) -> Option<i64> {
        self.trunc().to_i64()
    }

    fn to_u64(&self) -> Option<u64> {
        ToPrimitive::to_u64(&self.trunc())
    }

    /// Approximates by parsing [`FLOAT_DECIMAL_DIGITS`] decimal digits.
    fn to_f64(&self) -> Option<f64> {
        self.as_decimal(FLOAT_DECIMAL_DIGITS).parse().ok()
    }
}

impl PartialEq for Rational {
    fn eq(&self, other: &Self) -> bool {
        &self.numerator * &other.denominator == &other.numerator * &self.denominator
    }
}

impl Eq for Rational {}

impl Ord for Rational {
    fn cmp(&self, other: &Self) -> Ordering {
        // Both denominators are positive, so cross-multiplying keeps the order.
        (&self.numerator * &other.denominator).cmp(&(&other.numerator * &self.denominator))
    }
}

impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Hash for Rational {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let reduced = self.reduced();
        reduced.numerator.hash(state);
        reduced.denominator.hash(state);
    }
}

impl fmt::Debug for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rational({}/{})", self.numerator, self.denominator)
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reduced = self.reduced();
        if reduced.denominator.is_one() {
            write!(f, "{}", reduced.numerator)
        } else {
            write!(f, "{}/{}", reduced.numerator, reduced.denominator)
        }
    }
}

impl FromStr for Rational {
    type Err = Error;

    /// Parses `n` or `n/d`. The result is not reduced.
    fn from_str(s: &str) -> Result<Self> {
        match s.split_once('/') {
            Some((numerator, denominator)) => {
                Self::try_new(numerator.parse()?, denominator.parse()?)
            }
            None => Ok(Self::from_integer(s.parse()?)),
        }
    }
}

// Arithmetic operations
forward_binop!(Rational, Add, add, AddAssign, add_assign, add_ref);
forward_binop!(Rational, Sub, sub, SubAssign, sub_assign, sub_ref);
forward_binop!(Rational, Mul, mul, MulAssign, mul_assign, mul_ref);
forward_binop!(Rational, Div, div, DivAssign, div_assign, div_ref);

impl Neg for Rational {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self {
            numerator: -self.numerator,
            denominator: self.denominator,
        }
    }
}

impl Neg for &Rational {
    type Output = Rational;

    fn neg(self) -> Self::Output {
        -self.clone()
    }
}

impl Sum for Rational {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, x| acc + x)
    }
}

impl<'a> Sum<&'a Rational> for Rational {
    fn sum<I: Iterator<Item = &'a Rational>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, x| acc + x)
    }
}

impl Product for Rational {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::one(), |acc, x| acc * x)
    }
}

impl<'a> Product<&'a Rational> for Rational {
    fn product<I: Iterator<Item = &'a Rational>>(iter: I) -> Self {
        iter.fold(Self::one(), |acc, x| acc * x)
    }
}

impl From<BigInteger> for Rational {
    fn from(n: BigInteger) -> Self {
        Self::from_integer(n)
    }
}

impl From<i64> for Rational {
    fn from(n: i64) -> Self {
        Self::from_integer(BigInteger::new(n))
    }
}

impl From<i32> for Rational {
    fn from(n: i32) -> Self {
        Self::from_integer(BigInteger::from(n))
    }
}
