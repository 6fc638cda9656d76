//! Arbitrary-base digit decoding
//!
//! Share values arrive as digit strings in any base from 2 to 36. This module turns
//! them into arbitrary-precision non-negative integers without any intermediate
//! machine-word arithmetic, so values of any length decode exactly.
//!
//! # Examples
//!
//! ```rust
//! use lagrange_secret::codec::decode;
//! use lagrange_secret::domain::Base;
//! use num_bigint::BigUint;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! assert_eq!(decode("ff", Base::new(16)?)?, BigUint::from(255u32));
//! assert_eq!(decode("Z", Base::new(36)?)?, BigUint::from(35u32));
//!
//! // '2' is not a binary digit
//! assert!(decode("102", Base::new(2)?).is_err());
//! # Ok(())
//! # }
//! ```

use num_bigint::BigUint;
use num_traits::Zero;

use crate::domain::Base;
use crate::error::{Error, Result};

/// Decodes a big-endian digit string in the given base
///
/// Surrounding whitespace is ignored and letters are case-insensitive (`a`/`A` = 10
/// up to `z`/`Z` = 35). An empty string decodes to zero. Signs are not accepted.
///
/// # Errors
/// Returns [`Error::InvalidDigit`] for any character that is not a digit of `base`
pub fn decode(digits: &str, base: Base) -> Result<BigUint> {
    let radix = *base;

    digits.trim().chars().try_fold(BigUint::zero(), |acc, ch| {
        let digit = digit_value(ch, radix)?;
        Ok(acc * radix + digit)
    })
}

/// Maps one digit character to its value, rejecting values >= `radix`
fn digit_value(ch: char, radix: u32) -> Result<u32> {
    ch.to_digit(Base::MAX)
        .filter(|&value| value < radix)
        .ok_or(Error::InvalidDigit {
            digit: ch,
            base: radix,
        })
}
