//! Error type shared by the integer and rational types.

use thiserror::Error;

/// Errors reported by fallible constructors, conversions and checked arithmetic.
#[derive(Debug, Error)]
pub enum Error {
    /// The text is not a decimal literal.
    #[error("invalid numeric literal: {0:?}")]
    InvalidLiteral(String),

    /// Only base-10 text is supported.
    #[error("unsupported radix {0}, only base 10 is supported")]
    UnsupportedRadix(u32),

    /// Division, remainder or a fraction with a zero divisor.
    #[error("division by zero")]
    DivisionByZero,

    /// The value does not fit the requested native type.
    #[error("value out of range for the target type")]
    Overflow,

    /// Reading a token from the underlying stream failed.
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias defaulting to [`Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;
