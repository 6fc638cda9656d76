//! Base newtype for share values

use crate::error::{Error, Result};

/// Numeric base of a share value (2..=36)
///
/// Invariant: 2 <= base <= 36 (enforced at construction), so the decoder never has
/// to validate it again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Base(u32);

impl Base {
    /// Smallest supported base
    pub const MIN: u32 = 2;
    /// Largest supported base (digits `0-9` then `a-z`)
    pub const MAX: u32 = 36;

    /// Creates a new base, returning an error if it is outside 2..=36
    ///
    /// # Errors
    /// Returns [`Error::InvalidBase`] if the value is out of range
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lagrange_secret::domain::Base;
    ///
    /// let hex = Base::new(16).unwrap();
    /// assert_eq!(*hex, 16);
    ///
    /// assert!(Base::new(1).is_err());
    /// assert!(Base::new(37).is_err());
    /// ```
    pub fn new(value: u32) -> Result<Self> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(Error::InvalidBase(value.to_string()));
        }
        Ok(Self(value))
    }

    /// Parses a base from decimal text such as `"16"`
    ///
    /// # Errors
    /// Returns [`Error::InvalidBase`] if the text is not a number in 2..=36
    pub fn parse(text: &str) -> Result<Self> {
        let trimmed = text.trim();
        let value: u32 = trimmed
            .parse()
            .map_err(|_| Error::InvalidBase(trimmed.to_string()))?;
        Self::new(value)
    }
}

impl std::ops::Deref for Base {
    type Target = u32;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
