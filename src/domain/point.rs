//! A single share as a point on the secret polynomial

use num_bigint::BigInt;

/// An (x, y) point on the secret polynomial
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Point {
    x: BigInt,
    y: BigInt,
}

impl Point {
    #[must_use]
    pub fn new(x: impl Into<BigInt>, y: impl Into<BigInt>) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
        }
    }

    #[must_use]
    pub fn x(&self) -> &BigInt {
        &self.x
    }

    #[must_use]
    pub fn y(&self) -> &BigInt {
        &self.y
    }
}
