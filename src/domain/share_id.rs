//! `ShareId` newtype for share identifiers

use std::cmp::Ordering;
use std::str::FromStr;

use num_bigint::BigInt;

use crate::error::{Error, Result};

/// Identifier of a share record, which doubles as the share's x-coordinate
///
/// Identifiers compare numerically, so `"9"` sorts before `"10"`. The original label
/// is kept for diagnostics and to look the record up again.
#[derive(Debug, Clone)]
pub struct ShareId {
    label: String,
    x: BigInt,
}

impl ShareId {
    /// Parses a share identifier from its decimal label
    ///
    /// # Errors
    /// Returns [`Error::MalformedInput`] if the label is not a decimal integer
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lagrange_secret::domain::ShareId;
    ///
    /// let nine = ShareId::parse("9").unwrap();
    /// let ten = ShareId::parse("10").unwrap();
    /// assert!(nine < ten);
    ///
    /// assert!(ShareId::parse("first").is_err());
    /// ```
    pub fn parse(label: &str) -> Result<Self> {
        let not_integer =
            || Error::malformed(format!("share identifier '{label}' is not an integer"));

        // BigInt's parser also takes `+` and `_` separators; identifiers may not.
        let text = label.trim();
        let digits = text.strip_prefix('-').unwrap_or(text);
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(not_integer());
        }
        let x = BigInt::from_str(text).map_err(|_| not_integer())?;
        Ok(Self {
            label: label.to_string(),
            x,
        })
    }

    /// The identifier as it appeared in the input
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The x-coordinate this share is evaluated at
    #[must_use]
    pub fn x(&self) -> &BigInt {
        &self.x
    }
}

impl PartialEq for ShareId {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for ShareId {}

impl PartialOrd for ShareId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ShareId {
    // Ties on x (e.g. "1" and "01") fall back to the label so sorting stays total.
    fn cmp(&self, other: &Self) -> Ordering {
        self.x
            .cmp(&other.x)
            .then_with(|| self.label.cmp(&other.label))
    }
}

impl std::fmt::Display for ShareId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.label)
    }
}
