//! Error taxonomy for secret reconstruction
//!
//! Every failure is terminal: nothing in this crate retries or substitutes a
//! fallback value.

use num_bigint::BigInt;
use thiserror::Error;

/// Errors produced by the decoder, the fraction arithmetic and the interpolator
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A character is not a digit of the stated base
    #[error("invalid digit '{digit}' for base {base}")]
    InvalidDigit { digit: char, base: u32 },

    /// Base outside 2..=36
    #[error("unsupported base {0} (must be 2-36)")]
    InvalidBase(String),

    /// A fraction was constructed with a zero denominator
    #[error("zero denominator")]
    ZeroDenominator,

    /// Division by a fraction equal to zero
    #[error("division by zero in fraction")]
    DivideByZero,

    /// Two selected points share an x-coordinate
    #[error("duplicate x-coordinate {0} among selected points")]
    DuplicateX(BigInt),

    /// Missing or wrong-typed fields in the input record
    #[error("malformed input: {0}")]
    MalformedInput(String),
}

impl Error {
    pub(crate) fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedInput(msg.into())
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
