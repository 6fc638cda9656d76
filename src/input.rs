//! Input document schema and point selection
//!
//! The input is a JSON object with a `keys` header and one record per share:
//!
//! ```json
//! {
//!     "keys": { "n": 4, "k": 3 },
//!     "1": { "base": "10", "value": "4" },
//!     "2": { "base": "2", "value": "111" },
//!     "3": { "base": "10", "value": "12" },
//!     "6": { "base": "4", "value": "213" }
//! }
//! ```
//!
//! Everything is validated here, before any value reaches the interpolator. Only the
//! `k` numerically smallest identifiers are selected, and only those records are
//! decoded.

use std::collections::BTreeMap;

use num_bigint::BigInt;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::codec;
use crate::domain::{Base, Point, ShareId, Threshold};
use crate::error::{Error, Result};

/// The `keys` header of an input document
#[derive(Debug, Clone, Deserialize)]
pub struct Keys {
    /// Declared total number of shares (informational only, any JSON type)
    #[serde(default)]
    pub n: Option<Value>,
    /// Threshold: number of shares required to reconstruct
    pub k: usize,
}

#[derive(Debug, Deserialize)]
struct Document {
    keys: Keys,
    #[serde(flatten)]
    shares: BTreeMap<String, Value>,
}

/// A single share record `{ "base": ..., "value": ... }`
#[derive(Debug, Clone, Deserialize)]
pub struct ShareRecord {
    pub base: BaseField,
    pub value: String,
}

/// Share base as it appears in JSON: `"16"` or `16`
///
/// Negative and fractional numbers are captured too, so they fail as an invalid base
/// rather than as an unrecognised record.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum BaseField {
    Number(u64),
    Signed(i64),
    Float(f64),
    Text(String),
}

impl BaseField {
    /// Validates the base against 2..=36
    ///
    /// # Errors
    /// Returns [`Error::InvalidBase`] if the base is non-numeric or out of range
    pub fn to_base(&self) -> Result<Base> {
        match self {
            Self::Number(n) => u32::try_from(*n)
                .map_err(|_| Error::InvalidBase(n.to_string()))
                .and_then(Base::new),
            Self::Signed(n) => Err(Error::InvalidBase(n.to_string())),
            // 16.0 is still base 16
            Self::Float(f) if f.fract() == 0.0 && (2.0..=36.0).contains(f) => {
                Base::new(*f as u32)
            }
            Self::Float(f) => Err(Error::InvalidBase(f.to_string())),
            Self::Text(text) => Base::parse(text),
        }
    }
}

/// Reads `keys.n` as a share count, accepting `4` or `"4"`
fn declared_total(n: &Value) -> Option<u64> {
    match n {
        Value::Number(num) => num.as_u64(),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}

impl ShareRecord {
    /// Decodes this record into a point at `id`'s x-coordinate
    ///
    /// # Errors
    /// Returns an error if the base is invalid, the value is blank, or the value
    /// contains a digit outside the base
    pub fn to_point(&self, id: &ShareId) -> Result<Point> {
        let base = self.base.to_base()?;
        if self.value.trim().is_empty() {
            return Err(Error::malformed(format!("share '{id}' has an empty value")));
        }
        let y = codec::decode(&self.value, base)?;
        debug!(share = %id, base = *base, y = %y, "decoded share");
        Ok(Point::new(id.x().clone(), BigInt::from(y)))
    }
}

/// A parsed reconstruction request: the threshold plus all share records, ordered by
/// numeric identifier
#[derive(Debug, Clone)]
pub struct InterpolationRequest {
    threshold: Threshold,
    declared_total: Option<u64>,
    records: Vec<(ShareId, Value)>,
}

impl InterpolationRequest {
    /// Parses a request from a JSON document
    ///
    /// Share records themselves are not validated yet; see [`Self::select`].
    ///
    /// # Errors
    /// Returns [`Error::MalformedInput`] if the document is not valid JSON, `keys.k` is
    /// missing, not a non-negative integer, or zero, or a share identifier is not an
    /// integer
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lagrange_secret::input::InterpolationRequest;
    ///
    /// let json = r#"{
    ///     "keys": { "n": 2, "k": 2 },
    ///     "1": { "base": "10", "value": "9" },
    ///     "2": { "base": 16, "value": "b" }
    /// }"#;
    /// let request = InterpolationRequest::from_json(json).unwrap();
    /// assert_eq!(*request.threshold(), 2);
    /// assert_eq!(request.len(), 2);
    ///
    /// assert!(InterpolationRequest::from_json(r#"{ "1": {} }"#).is_err());
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        let document: Document = serde_json::from_str(json)
            .map_err(|e| Error::malformed(format!("invalid input document: {e}")))?;

        let threshold = Threshold::new(document.keys.k)?;

        let mut records = document
            .shares
            .into_iter()
            .map(|(label, record)| ShareId::parse(&label).map(|id| (id, record)))
            .collect::<Result<Vec<_>>>()?;
        records.sort_by(|(a, _), (b, _)| a.cmp(b));

        let declared = document.keys.n.as_ref().and_then(|raw| {
            let total = declared_total(raw);
            if total.is_none() {
                warn!(n = %raw, "keys.n is not a share count, ignoring it");
            }
            total
        });
        if let Some(n) = declared {
            if usize::try_from(n).ok() != Some(records.len()) {
                warn!(
                    declared = n,
                    found = records.len(),
                    "keys.n does not match the number of share records"
                );
            }
        }

        Ok(Self {
            threshold,
            declared_total: declared,
            records,
        })
    }

    #[must_use]
    pub fn threshold(&self) -> Threshold {
        self.threshold
    }

    /// The `keys.n` value, if the document declared a usable one
    #[must_use]
    pub fn declared_total(&self) -> Option<u64> {
        self.declared_total
    }

    /// Number of share records in the document
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Share identifiers in numeric order
    pub fn share_ids(&self) -> impl Iterator<Item = &ShareId> {
        self.records.iter().map(|(id, _)| id)
    }

    /// Selects the `k` numerically smallest shares and decodes them into points
    ///
    /// Records beyond the first `k` are never inspected, so a malformed record there
    /// does not cause an error.
    ///
    /// # Errors
    /// - [`Error::MalformedInput`] if there are fewer than `k` records, or a selected
    ///   record is missing `base`/`value` or has an empty value
    /// - [`Error::InvalidBase`] / [`Error::InvalidDigit`] from decoding
    pub fn select(&self) -> Result<Vec<Point>> {
        let k = *self.threshold;
        if self.records.len() < k {
            return Err(Error::malformed(format!(
                "not enough points (have {}, need {k})",
                self.records.len()
            )));
        }

        self.records[..k]
            .iter()
            .map(|(id, raw)| {
                let record = ShareRecord::deserialize(raw)
                    .map_err(|e| Error::malformed(format!("bad entry for share '{id}': {e}")))?;
                record.to_point(id)
            })
            .collect()
    }
}
