//! Threshold newtype for secret reconstruction

use crate::error::{Error, Result};

/// Number of shares required to reconstruct the secret
///
/// Invariant: threshold >= 1 (enforced at construction). The threshold equals the
/// degree of the secret polynomial plus one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Threshold(usize);

impl Threshold {
    /// Creates a new threshold, returning an error if value is 0
    ///
    /// # Errors
    /// Returns [`Error::MalformedInput`] if the threshold is zero
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lagrange_secret::domain::Threshold;
    ///
    /// let threshold = Threshold::new(3).unwrap();
    /// assert_eq!(*threshold, 3);
    ///
    /// assert!(Threshold::new(0).is_err());
    /// ```
    pub fn new(value: usize) -> Result<Self> {
        if value == 0 {
            return Err(Error::malformed("threshold k must be at least 1"));
        }
        Ok(Self(value))
    }
}

impl std::ops::Deref for Threshold {
    type Target = usize;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
