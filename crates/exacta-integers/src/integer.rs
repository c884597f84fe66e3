//! Arbitrary precision integers.
//!
//! `BigInteger` is a sign-magnitude integer over base-10^9 limbs. Every
//! public operation leaves its result normalized: no most-significant zero
//! limbs, and zero is always non-negative.

use num_traits::{Num, One, Signed, ToPrimitive, Zero};
use std::cmp::Ordering;
use std::fmt::{self, Write as _};
use std::iter::{Product, Sum};
use std::ops::{AddAssign, Neg, SubAssign};
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::magnitude;

/// Base of one limb.
pub const RADIX: u32 = 1_000_000_000;

/// Decimal digits held by one limb.
pub const DIGITS_PER_LIMB: usize = 9;

/// An arbitrary precision signed integer.
///
/// Stored as a sign flag and a little-endian sequence of limbs in
/// `[0, RADIX)`. The representation is canonical, so structural equality
/// is numeric equality.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct BigInteger {
    positive: bool,
    limbs: Vec<u32>,
}

impl BigInteger {
    /// Creates a new integer from an i64.
    #[must_use]
    pub fn new(value: i64) -> Self {
        Self::from_u64_parts(value >= 0, value.unsigned_abs())
    }

    #[allow(clippy::cast_possible_truncation)]
    fn from_u64_parts(positive: bool, mut magnitude: u64) -> Self {
        let mut limbs = Vec::with_capacity(3);
        loop {
            limbs.push((magnitude % u64::from(RADIX)) as u32);
            magnitude /= u64::from(RADIX);
            if magnitude == 0 {
                break;
            }
        }
        Self::from_magnitude(positive, limbs)
    }

    /// Builds a normalized integer from a sign and raw limbs.
    fn from_magnitude(positive: bool, limbs: Vec<u32>) -> Self {
        let mut value = Self { positive, limbs };
        value.normalize();
        value
    }

    fn normalize(&mut self) {
        magnitude::trim(&mut self.limbs);
        if magnitude::is_zero(&self.limbs) {
            self.positive = true;
        }
    }

    /// Parses a decimal literal: an optional `-` followed by ASCII digits.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidLiteral`] if the text is empty, is a lone `-`,
    /// or contains anything other than digits after the sign.
    pub fn parse(text: &str) -> Result<Self> {
        let (positive, digits) = match text.strip_prefix('-') {
            Some(rest) => (false, rest),
            None => (true, text),
        };

        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            tracing::debug!(literal = text, "rejected integer literal");
            return Err(Error::InvalidLiteral(text.to_owned()));
        }

        let limbs = digits
            .as_bytes()
            .rchunks(DIGITS_PER_LIMB)
            .map(|chunk| {
                chunk
                    .iter()
                    .fold(0u32, |acc, &b| acc * 10 + u32::from(b - b'0'))
            })
            .collect();

        Ok(Self::from_magnitude(positive, limbs))
    }

    /// Returns the limbs, least significant first.
    #[must_use]
    pub fn limbs(&self) -> &[u32] {
        &self.limbs
    }

    /// Returns the absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self {
            positive: true,
            limbs: self.limbs.clone(),
        }
    }

    /// Returns the sign: -1, 0, or 1.
    #[must_use]
    pub fn signum(&self) -> i8 {
        if self.is_zero() {
            0
        } else if self.positive {
            1
        } else {
            -1
        }
    }

    /// Returns true if this integer is negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        !self.positive
    }

    /// Returns true if this integer is strictly positive.
    #[must_use]
    pub fn is_positive(&self) -> bool {
        self.positive && !self.is_zero()
    }

    /// Computes the greatest common divisor with Euclid's algorithm.
    ///
    /// The result is non-negative; `gcd(0, 0)` is zero.
    #[must_use]
    pub fn gcd(&self, other: &Self) -> Self {
        let mut a = self.abs();
        let mut b = other.abs();

        while !b.is_zero() {
            let r = &a % &b;
            a = b;
            b = r;
        }

        a
    }

    /// Computes self^exp by repeated squaring.
    #[must_use]
    pub fn pow(&self, mut exp: u32) -> Self {
        let mut base = self.clone();
        let mut result = Self::one();

        while exp > 0 {
            if exp & 1 == 1 {
                result = &result * &base;
            }
            exp >>= 1;
            if exp > 0 {
                base = &base * &base;
            }
        }

        result
    }

    /// Returns `10^exp`, built limb-wise.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn pow10(exp: usize) -> Self {
        let mut limbs = vec![0u32; exp / DIGITS_PER_LIMB + 1];
        let top = limbs.len() - 1;
        limbs[top] = 10u32.pow((exp % DIGITS_PER_LIMB) as u32);
        Self::from_magnitude(true, limbs)
    }

    /// Attempts to convert to an i64.
    ///
    /// Returns `None` if the value doesn't fit in an i64.
    #[must_use]
    pub fn to_i64(&self) -> Option<i64> {
        self.to_i128().and_then(|value| i64::try_from(value).ok())
    }

    /// Attempts to convert to an i128 by folding limbs from the top.
    #[must_use]
    pub fn to_i128(&self) -> Option<i128> {
        self.limbs.iter().rev().try_fold(0i128, |acc, &limb| {
            let shifted = acc.checked_mul(i128::from(RADIX))?;
            if self.positive {
                shifted.checked_add(i128::from(limb))
            } else {
                shifted.checked_sub(i128::from(limb))
            }
        })
    }

    /// Adds one in place and returns the updated value.
    pub fn increment(&mut self) -> &mut Self {
        *self += 1_i64;
        self
    }

    /// Subtracts one in place and returns the updated value.
    pub fn decrement(&mut self) -> &mut Self {
        *self -= 1_i64;
        self
    }

    /// Adds one in place and returns the value from before the update.
    pub fn post_increment(&mut self) -> Self {
        let previous = self.clone();
        *self += 1_i64;
        previous
    }

    /// Subtracts one in place and returns the value from before the update.
    pub fn post_decrement(&mut self) -> Self {
        let previous = self.clone();
        *self -= 1_i64;
        previous
    }

    /// Computes quotient and remainder of truncating division.
    ///
    /// The quotient rounds toward zero and the remainder takes the sign of
    /// `self`, so `q * rhs + r == self`.
    ///
    /// # Panics
    ///
    /// Panics if `rhs` is zero.
    #[must_use]
    pub fn div_rem(&self, rhs: &Self) -> (Self, Self) {
        assert!(!rhs.is_zero(), "attempt to divide by zero");
        let (quotient, remainder) = magnitude::div_rem(&self.limbs, &rhs.limbs);
        (
            Self::from_magnitude(self.positive == rhs.positive, quotient),
            Self::from_magnitude(self.positive, remainder),
        )
    }

    /// Computes quotient and remainder, or reports a zero divisor.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DivisionByZero`] if `rhs` is zero.
    pub fn checked_div_rem(&self, rhs: &Self) -> Result<(Self, Self)> {
        if rhs.is_zero() {
            return Err(Error::DivisionByZero);
        }
        Ok(self.div_rem(rhs))
    }

    /// Truncating division that reports a zero divisor.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DivisionByZero`] if `rhs` is zero.
    pub fn checked_div(&self, rhs: &Self) -> Result<Self> {
        self.checked_div_rem(rhs).map(|(quotient, _)| quotient)
    }

    /// Truncating remainder that reports a zero divisor.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DivisionByZero`] if `rhs` is zero.
    pub fn checked_rem(&self, rhs: &Self) -> Result<Self> {
        self.checked_div_rem(rhs).map(|(_, remainder)| remainder)
    }

    fn add_ref(&self, rhs: &Self) -> Self {
        if self.positive == rhs.positive {
            return Self::from_magnitude(self.positive, magnitude::add(&self.limbs, &rhs.limbs));
        }

        match magnitude::cmp(&self.limbs, &rhs.limbs) {
            Ordering::Equal => Self::zero(),
            Ordering::Greater => {
                Self::from_magnitude(self.positive, magnitude::sub(&self.limbs, &rhs.limbs))
            }
            Ordering::Less => {
                Self::from_magnitude(rhs.positive, magnitude::sub(&rhs.limbs, &self.limbs))
            }
        }
    }

    fn sub_ref(&self, rhs: &Self) -> Self {
        // a - (-b) = a + b and (-a) - b = -(a + b)
        if self.positive != rhs.positive {
            return Self::from_magnitude(self.positive, magnitude::add(&self.limbs, &rhs.limbs));
        }

        match magnitude::cmp(&self.limbs, &rhs.limbs) {
            Ordering::Equal => Self::zero(),
            Ordering::Greater => {
                Self::from_magnitude(self.positive, magnitude::sub(&self.limbs, &rhs.limbs))
            }
            Ordering::Less => {
                Self::from_magnitude(!self.positive, magnitude::sub(&rhs.limbs, &self.limbs))
            }
        }
    }

    fn mul_ref(&self, rhs: &Self) -> Self {
        Self::from_magnitude(
            self.positive == rhs.positive,
            magnitude::mul(&self.limbs, &rhs.limbs),
        )
    }

    fn div_ref(&self, rhs: &Self) -> Self {
        self.div_rem(rhs).0
    }

    fn rem_ref(&self, rhs: &Self) -> Self {
        self.div_rem(rhs).1
    }
}

impl Default for BigInteger {
    fn default() -> Self {
        Self::zero()
    }
}

impl Zero for BigInteger {
    fn zero() -> Self {
        Self {
            positive: true,
            limbs: vec![0],
        }
    }

    fn is_zero(&self) -> bool {
        magnitude::is_zero(&self.limbs)
    }
}

impl One for BigInteger {
    fn one() -> Self {
        Self {
            positive: true,
            limbs: vec![1],
        }
    }

    fn is_one(&self) -> bool {
        self.positive && self.limbs == [1]
    }
}

impl Num for BigInteger {
    type FromStrRadixErr = Error;

    fn from_str_radix(text: &str, radix: u32) -> Result<Self> {
        if radix != 10 {
            return Err(Error::UnsupportedRadix(radix));
        }
        Self::parse(text)
    }
}

impl Signed for BigInteger {
    fn abs(&self) -> Self {
        BigInteger::abs(self)
    }

    fn abs_sub(&self, other: &Self) -> Self {
        if self <= other {
            Self::zero()
        } else {
            self - other
        }
    }

    fn signum(&self) -> Self {
        Self::new(i64::from(BigInteger::signum(self)))
    }

    fn is_positive(&self) -> bool {
        BigInteger::is_positive(self)
    }

    fn is_negative(&self) -> bool {
        BigInteger::is_negative(self)
    }
}

impl ToPrimitive for BigInteger {
    fn to_i64(&self) -> Option<i64> {
        BigInteger::to_i64(self)
    }

    fn to_i128(&self) -> Option<i128> {
        BigInteger::to_i128(self)
    }

    fn to_u64(&self) -> Option<u64> {
        self.to_i128().and_then(|value| u64::try_from(value).ok())
    }

    /// Parses the decimal rendering; values beyond `f64` range become infinite.
    fn to_f64(&self) -> Option<f64> {
        self.to_string().parse().ok()
    }
}

impl Ord for BigInteger {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.positive, other.positive) {
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (true, true) => magnitude::cmp(&self.limbs, &other.limbs),
            (false, false) => magnitude::cmp(&other.limbs, &self.limbs),
        }
    }
}

impl PartialOrd for BigInteger {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Debug for BigInteger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BigInteger({self})")
    }
}

impl fmt::Display for BigInteger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut digits = String::with_capacity(self.limbs.len() * DIGITS_PER_LIMB);
        let mut limbs = self.limbs.iter().rev();
        if let Some(top) = limbs.next() {
            write!(digits, "{top}")?;
        }
        for limb in limbs {
            write!(digits, "{limb:09}")?;
        }
        f.pad_integral(self.positive, "", &digits)
    }
}

impl FromStr for BigInteger {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

// Arithmetic operations
forward_binop!(BigInteger, Add, add, AddAssign, add_assign, add_ref);
forward_binop!(BigInteger, Sub, sub, SubAssign, sub_assign, sub_ref);
forward_binop!(BigInteger, Mul, mul, MulAssign, mul_assign, mul_ref);
forward_binop!(BigInteger, Div, div, DivAssign, div_assign, div_ref);
forward_binop!(BigInteger, Rem, rem, RemAssign, rem_assign, rem_ref);

impl AddAssign<i64> for BigInteger {
    fn add_assign(&mut self, rhs: i64) {
        *self = self.add_ref(&Self::new(rhs));
    }
}

impl SubAssign<i64> for BigInteger {
    fn sub_assign(&mut self, rhs: i64) {
        *self = self.sub_ref(&Self::new(rhs));
    }
}

impl Neg for BigInteger {
    type Output = Self;

    fn neg(mut self) -> Self::Output {
        self.positive = !self.positive;
        self.normalize();
        self
    }
}

impl Neg for &BigInteger {
    type Output = BigInteger;

    fn neg(self) -> Self::Output {
        -self.clone()
    }
}

impl Sum for BigInteger {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, x| acc + x)
    }
}

impl<'a> Sum<&'a BigInteger> for BigInteger {
    fn sum<I: Iterator<Item = &'a BigInteger>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, x| acc + x)
    }
}

impl Product for BigInteger {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::one(), |acc, x| acc * x)
    }
}

impl<'a> Product<&'a BigInteger> for BigInteger {
    fn product<I: Iterator<Item = &'a BigInteger>>(iter: I) -> Self {
        iter.fold(Self::one(), |acc, x| acc * x)
    }
}

impl From<i64> for BigInteger {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl From<i32> for BigInteger {
    fn from(value: i32) -> Self {
        Self::new(i64::from(value))
    }
}

impl From<u64> for BigInteger {
    fn from(value: u64) -> Self {
        Self::from_u64_parts(true, value)
    }
}

impl From<u32> for BigInteger {
    fn from(value: u32) -> Self {
        Self::from_u64_parts(true, u64::from(value))
    }
}

impl TryFrom<&BigInteger> for i64 {
    type Error = Error;

    fn try_from(value: &BigInteger) -> Result<Self> {
        value.to_i64().ok_or(Error::Overflow)
    }
}
