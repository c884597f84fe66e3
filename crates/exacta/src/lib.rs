//! # exacta
//!
//! Exact arithmetic beyond machine-word range.
//!
//! ## Features
//!
//! - **Arbitrary Precision Integers**: sign-magnitude, base-10^9 limbs
//! - **Exact Rationals**: fractions reduced on demand, never rounded
//! - **Decimal Expansion**: any number of fractional digits
//! - **Stream Input**: whitespace-delimited tokens from any `BufRead`
//!
//! ## Quick Start
//!
//! ```rust
//! use exacta::prelude::*;
//!
//! let a: BigInteger = "999999999999999".parse()?;
//! assert_eq!((&a * &a).to_string(), "999999999999998000000000000001");
//!
//! let sum = Rational::from_i64(1, 3) + Rational::from_i64(1, 6);
//! assert_eq!(sum.to_string(), "1/2");
//! assert_eq!(Rational::from_i64(1, 3).as_decimal(5), "0.33333");
//! # Ok::<(), exacta::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use exacta_integers as integers;
pub use exacta_integers::{Error, Result};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use exacta_integers::{gcd, read_token, BigInteger, Rational};
    pub use num_traits::{One, Signed, ToPrimitive, Zero};
}
