//! # exacta-integers
//!
//! Arbitrary precision integer and rational arithmetic for exacta.
//!
//! This crate provides:
//! - Arbitrary precision integers (`BigInteger`) stored as base-10^9 limbs
//! - Exact rationals (`Rational`) with on-demand reduction
//! - Whitespace-delimited token reading for both (`io`)
//!
//! ## Performance Notes
//!
//! - Multiplication and division are schoolbook algorithms
//! - Division finds each quotient limb by binary search over `[0, 10^9)`
//! - Rationals are only reduced before rendering, not after every operation

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

/// Implements a binary operator and its assigning form for every
/// owned/borrowed operand combination, forwarding to `$ty::$inner(&self, &rhs)`.
macro_rules! forward_binop {
    ($ty:ident, $imp:ident, $method:ident, $assign_imp:ident, $assign_method:ident, $inner:ident) => {
        impl std::ops::$imp<&$ty> for &$ty {
            type Output = $ty;

            fn $method(self, rhs: &$ty) -> $ty {
                self.$inner(rhs)
            }
        }

        impl std::ops::$imp<$ty> for &$ty {
            type Output = $ty;

            fn $method(self, rhs: $ty) -> $ty {
                self.$inner(&rhs)
            }
        }

        impl std::ops::$imp<&$ty> for $ty {
            type Output = $ty;

            fn $method(self, rhs: &$ty) -> $ty {
                self.$inner(rhs)
            }
        }

        impl std::ops::$imp<$ty> for $ty {
            type Output = $ty;

            fn $method(self, rhs: $ty) -> $ty {
                self.$inner(&rhs)
            }
        }

        impl std::ops::$assign_imp<&$ty> for $ty {
            fn $assign_method(&mut self, rhs: &$ty) {
                *self = self.$inner(rhs);
            }
        }

        impl std::ops::$assign_imp<$ty> for $ty {
            fn $assign_method(&mut self, rhs: $ty) {
                *self = self.$inner(&rhs);
            }
        }
    };
}

pub mod error;
pub mod integer;
pub mod io;
mod magnitude;
pub mod rational;

#[cfg(test)]
mod proptests;

pub use error::{Error, Result};
pub use integer::BigInteger;
pub use io::read_token;
pub use rational::{gcd, Rational};
